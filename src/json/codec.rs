//! Purpose: Typed (de)serialization with fixed pretty/null/comment policies.
//! Exports: `CodecConfig`, `JsonCodec`.
//! Role: Pre-configured serde_json wrapper shared by callsites.
//! Invariants: Blank input decodes to `Ok(None)`, never an error.
//! Invariants: Failures are logged and returned; they are never swallowed.
//! Invariants: Null object members are omitted; empty strings and
//! collections are kept.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Error, ErrorKind};
use crate::json::comments;

/// Immutable codec configuration, constructed once and passed explicitly.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CodecConfig {
    /// Indent serialized output.
    pub pretty: bool,
    /// Drop object members whose value is JSON null, at every depth.
    pub omit_nulls: bool,
    /// Tolerate `//` and `/* */` comments in input text.
    pub allow_comments: bool,
}

impl CodecConfig {
    pub fn new() -> Self {
        Self {
            pretty: true,
            omit_nulls: true,
            allow_comments: true,
        }
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct JsonCodec {
    config: CodecConfig,
}

impl JsonCodec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> CodecConfig {
        self.config
    }

    /// Serializes `value` under the configured policies.
    ///
    /// Decimal values render in plain notation (no scientific form) and
    /// unknown-depth null members are dropped when `omit_nulls` is set.
    pub fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, Error> {
        let tree = serde_json::to_value(value).map_err(|err| self.encode_error::<T>(err))?;
        let tree = if self.config.omit_nulls {
            prune_nulls(tree)
        } else {
            tree
        };
        let rendered = if self.config.pretty {
            serde_json::to_string_pretty(&tree)
        } else {
            serde_json::to_string(&tree)
        };
        rendered.map_err(|err| self.encode_error::<T>(err))
    }

    /// Parses `text` and binds it to `T`.
    ///
    /// Returns `Ok(None)` for blank input, `Err(Malformed)` when the text
    /// does not parse or does not bind. Unknown fields are ignored.
    pub fn decode<T: DeserializeOwned>(&self, text: &str) -> Result<Option<T>, Error> {
        if text.trim().is_empty() {
            return Ok(None);
        }
        let effective = if self.config.allow_comments {
            comments::strip(text)
        } else {
            text.to_string()
        };
        match serde_json::from_str(&effective) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                tracing::warn!(input = %text, error = %err, "decode failed");
                Err(Error::new(ErrorKind::Malformed)
                    .with_message(format!("could not decode {}", std::any::type_name::<T>()))
                    .with_source(err))
            }
        }
    }

    /// Parses `text` into the generic structural representation.
    pub fn decode_tree(&self, text: &str) -> Result<Option<Value>, Error> {
        self.decode(text)
    }

    /// Binds a JSON array to `Vec<T>`.
    pub fn decode_list<T: DeserializeOwned>(&self, text: &str) -> Result<Option<Vec<T>>, Error> {
        self.decode(text)
    }

    /// Binds a JSON array to `HashSet<T>`.
    pub fn decode_set<T>(&self, text: &str) -> Result<Option<HashSet<T>>, Error>
    where
        T: DeserializeOwned + Eq + Hash,
    {
        self.decode(text)
    }

    /// Binds a JSON object to `HashMap<K, V>`.
    pub fn decode_map<K, V>(&self, text: &str) -> Result<Option<HashMap<K, V>>, Error>
    where
        K: DeserializeOwned + Eq + Hash,
        V: DeserializeOwned,
    {
        self.decode(text)
    }

    fn encode_error<T: ?Sized>(&self, err: serde_json::Error) -> Error {
        tracing::warn!(
            value_type = std::any::type_name::<T>(),
            error = %err,
            "encode failed"
        );
        Error::new(ErrorKind::Internal)
            .with_message(format!("could not encode {}", std::any::type_name::<T>()))
            .with_source(err)
    }
}

// Null members are dropped from objects only; array elements stay as-is.
fn prune_nulls(value: Value) -> Value {
    match value {
        Value::Object(members) => Value::Object(
            members
                .into_iter()
                .filter(|(_, member)| !member.is_null())
                .map(|(name, member)| (name, prune_nulls(member)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(prune_nulls).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::{CodecConfig, JsonCodec};
    use crate::error::ErrorKind;
    use serde::{Deserialize, Serialize};
    use serde_json::{Number, Value, json};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Invoice {
        name: String,
        amount: Number,
        #[serde(default)]
        memo: Option<String>,
    }

    fn codec() -> JsonCodec {
        JsonCodec::new(CodecConfig::new())
    }

    #[test]
    fn blank_input_decodes_to_none() {
        assert_eq!(codec().decode::<Value>("").expect("blank"), None);
        assert_eq!(codec().decode::<Value>("   \n\t").expect("blank"), None);
    }

    #[test]
    fn decimal_round_trips_exactly_in_plain_notation() {
        let literal = "123456789.12345678901";
        let text = format!(r#"{{"name":"a","amount":{literal}}}"#);
        let invoice: Invoice = codec().decode(&text).expect("decode").expect("value");
        let rendered = codec().encode(&invoice).expect("encode");
        let amount_line = rendered
            .lines()
            .find(|line| line.contains("amount"))
            .expect("amount line");
        assert!(amount_line.contains(literal));
        assert!(!amount_line.contains('e') && !amount_line.contains('E'));
        // memo was None, so the intermediate text must not mention it.
        assert!(!rendered.contains("memo"));
        let back: Invoice = codec().decode(&rendered).expect("decode").expect("value");
        assert_eq!(back, invoice);
    }

    #[test]
    fn null_members_are_omitted_but_empty_values_kept() {
        let tree = json!({
            "name": "",
            "tags": [],
            "memo": null,
            "nested": {"inner": null, "kept": 0}
        });
        let rendered = codec().encode(&tree).expect("encode");
        assert!(!rendered.contains("memo"));
        assert!(!rendered.contains("inner"));
        assert!(rendered.contains("\"name\""));
        assert!(rendered.contains("\"tags\""));
        assert!(rendered.contains("\"kept\""));
    }

    #[test]
    fn output_is_pretty_by_default_and_compact_on_request() {
        let tree = json!({"a": 1, "b": 2});
        assert!(codec().encode(&tree).expect("pretty").contains('\n'));

        let compact = JsonCodec::new(CodecConfig {
            pretty: false,
            ..CodecConfig::new()
        });
        assert!(!compact.encode(&tree).expect("compact").contains('\n'));
    }

    #[test]
    fn comments_and_unknown_fields_are_tolerated() {
        let text = r#"{
            // inline note
            "name": "a", /* block note */
            "amount": 1,
            "surprise": true
        }"#;
        let invoice: Invoice = codec().decode(text).expect("decode").expect("value");
        assert_eq!(invoice.name, "a");
    }

    #[test]
    fn comments_rejected_when_disabled() {
        let strict = JsonCodec::new(CodecConfig {
            allow_comments: false,
            ..CodecConfig::new()
        });
        let err = strict.decode::<Value>("// note\n{}").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Malformed);
    }

    #[test]
    fn malformed_input_is_an_error_not_none() {
        let err = codec().decode::<Value>("{\"a\":").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Malformed);
    }

    #[test]
    fn fieldless_type_encodes_to_empty_object() {
        #[derive(Serialize)]
        struct Empty {}
        assert_eq!(codec().encode(&Empty {}).expect("encode"), "{}");
    }

    #[test]
    fn collection_wrappers_bind_requested_shapes() {
        let codec = codec();

        let list = codec
            .decode_list::<u32>("[3, 1, 2]")
            .expect("list")
            .expect("value");
        assert_eq!(list, vec![3, 1, 2]);

        let set = codec
            .decode_set::<String>(r#"["a", "b", "a"]"#)
            .expect("set")
            .expect("value");
        assert_eq!(set.len(), 2);

        let map = codec
            .decode_map::<String, Vec<u32>>(r#"{"evens": [2, 4], "odds": [1]}"#)
            .expect("map")
            .expect("value");
        assert_eq!(map.get("evens"), Some(&vec![2, 4]));
    }

    #[test]
    fn decode_tree_yields_navigable_value() {
        let tree = codec()
            .decode_tree(r#"{"outer": {"inner": 7}}"#)
            .expect("tree")
            .expect("value");
        assert_eq!(tree["outer"]["inner"], json!(7));
    }
}
