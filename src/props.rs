//! Purpose: Load `key=value` property resources from an explicit base directory.
//! Exports: `Resources`.
//! Role: Resource lookup parameterized by the caller's loading context.
//! Invariants: Resource names resolve under the base; no caller inspection.
//! Invariants: Key order is irrelevant; duplicate keys keep the last value.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{Error, ErrorKind};

/// An explicit loading context: resources are named files under `base`.
#[derive(Clone, Debug)]
pub struct Resources {
    base: PathBuf,
}

impl Resources {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Loads the named resource and returns the value for `key`.
    ///
    /// `Ok(None)` means the resource exists but has no such key.
    pub fn read_property(&self, name: &str, key: &str) -> Result<Option<String>, Error> {
        let mut properties = self.load(name)?;
        Ok(properties.remove(key))
    }

    /// Loads the named resource as a key→value map.
    ///
    /// Fails with `NotFound` when the resource is absent and `Malformed`
    /// when a non-blank line carries no `=` or `:` separator.
    pub fn load(&self, name: &str) -> Result<BTreeMap<String, String>, Error> {
        let path = self.base.join(name);
        let text = std::fs::read_to_string(&path).map_err(|err| {
            let kind = if err.kind() == std::io::ErrorKind::NotFound {
                ErrorKind::NotFound
            } else {
                ErrorKind::Io
            };
            Error::new(kind)
                .with_message("could not load resource")
                .with_path(&path)
                .with_source(err)
        })?;
        parse_properties(&text).map_err(|err| err.with_path(&path))
    }
}

fn parse_properties(text: &str) -> Result<BTreeMap<String, String>, Error> {
    let mut properties = BTreeMap::new();
    for (number, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        let Some(split) = separator_position(line) else {
            return Err(Error::new(ErrorKind::Malformed)
                .with_message(format!("line {} has no separator", number + 1)));
        };
        let key = line[..split].trim();
        let value = line[split + 1..].trim();
        if key.is_empty() {
            return Err(Error::new(ErrorKind::Malformed)
                .with_message(format!("line {} has an empty key", number + 1)));
        }
        properties.insert(key.to_string(), value.to_string());
    }
    Ok(properties)
}

// First `=` or `:` not preceded by a backslash escape.
fn separator_position(line: &str) -> Option<usize> {
    let mut escaped = false;
    for (index, ch) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '=' | ':' => return Some(index),
            _ => {}
        }
    }
    None
}
