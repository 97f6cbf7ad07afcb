//! Purpose: Create/read/delete file helpers with fixed validation rules.
//! Exports: `create_and_write`, `read_text`, `delete_folder`.
//! Role: Thin, synchronous wrappers over std::fs with kind-coded failures.
//! Invariants: Handles are scoped to one call and released on every exit path.
//! Invariants: No rollback; a mid-operation failure leaves partial state.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::Path;

use crate::error::{Error, ErrorKind};

const READ_CHUNK: usize = 512;

/// Creates `path` as a new file and writes `content` to it in full.
///
/// Fails with `AlreadyExists` when the file cannot be newly created, in
/// particular when something already sits at `path`; the existing content
/// is left untouched.
pub fn create_and_write(path: impl AsRef<Path>, content: &str) -> Result<(), Error> {
    let path = path.as_ref();
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|err| {
            Error::new(ErrorKind::AlreadyExists)
                .with_message("could not create new file")
                .with_path(path)
                .with_source(err)
        })?;
    if !path.exists() {
        return Err(Error::new(ErrorKind::Io)
            .with_message("file missing after create")
            .with_path(path));
    }
    file.write_all(content.as_bytes())
        .map_err(|err| io_error(err, path))?;
    file.flush().map_err(|err| io_error(err, path))?;
    Ok(())
}

/// Reads a `.txt` file into a `String`.
///
/// Fails with `InvalidInput` when the path lacks the `.txt` extension or
/// does not exist, and with `Malformed` when the bytes are not UTF-8.
pub fn read_text(path: impl AsRef<Path>) -> Result<String, Error> {
    let path = path.as_ref();
    let is_txt = path.extension().and_then(|ext| ext.to_str()) == Some("txt");
    if !is_txt || !path.exists() {
        return Err(Error::new(ErrorKind::InvalidInput)
            .with_message("expected an existing .txt file")
            .with_path(path));
    }
    let mut reader = File::open(path).map_err(|err| io_error(err, path))?;
    let mut chunk = [0u8; READ_CHUNK];
    let mut raw = Vec::new();
    // Each pass appends the chunk filled by the previous read before
    // issuing the next one; the zero-length read at end-of-stream ends it.
    let mut filled = 0usize;
    loop {
        raw.extend_from_slice(&chunk[..filled]);
        filled = reader.read(&mut chunk).map_err(|err| io_error(err, path))?;
        if filled == 0 {
            break;
        }
    }
    String::from_utf8(raw).map_err(|err| {
        Error::new(ErrorKind::Malformed)
            .with_message("file is not valid UTF-8")
            .with_path(path)
            .with_source(err)
    })
}

/// Recursively deletes `path` and everything under it.
///
/// Fails with `NotFound` when the target does not exist. The first failure
/// encountered propagates; already-deleted entries stay deleted.
pub fn delete_folder(path: impl AsRef<Path>) -> Result<(), Error> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::new(ErrorKind::NotFound)
            .with_message("delete target does not exist")
            .with_path(path));
    }
    if !path.is_dir() {
        return fs::remove_file(path).map_err(|err| io_error(err, path));
    }
    for entry in fs::read_dir(path).map_err(|err| io_error(err, path))? {
        let entry = entry.map_err(|err| io_error(err, path))?;
        let entry_path = entry.path();
        let file_type = entry
            .file_type()
            .map_err(|err| io_error(err, &entry_path))?;
        if file_type.is_dir() {
            delete_folder(&entry_path)?;
        } else {
            fs::remove_file(&entry_path).map_err(|err| io_error(err, &entry_path))?;
        }
    }
    fs::remove_dir(path).map_err(|err| io_error(err, path))
}

fn io_error(err: io::Error, path: &Path) -> Error {
    Error::new(ErrorKind::Io).with_path(path).with_source(err)
}
