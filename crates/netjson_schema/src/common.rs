use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::sync::OnceLock;

use jsonschema::JSONSchema;
use netjson_contract::Violation;
use serde::{Deserialize, Serialize};

/// A file shipped alongside the configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contents: Option<String>,
}

/// JSON Schema compiled on first use.
pub(crate) struct EmbeddedSchema {
    name: &'static str,
    text: &'static str,
    compiled: OnceLock<Result<JSONSchema, String>>,
}

impl EmbeddedSchema {
    pub(crate) const fn new(name: &'static str, text: &'static str) -> Self {
        Self { name, text, compiled: OnceLock::new() }
    }

    pub(crate) fn text(&self) -> &'static str {
        self.text
    }

    fn compiled(&self) -> &Result<JSONSchema, String> {
        self.compiled.get_or_init(|| {
            let value: serde_json::Value =
                serde_json::from_str(self.text).map_err(|e| format!("parse schema {}: {}", self.name, e))?;
            JSONSchema::compile(&value).map_err(|e| format!("compile schema {}: {}", self.name, e))
        })
    }

    /// Encodes `msg` and collects every schema violation of the result.
    pub(crate) fn check<T: Serialize>(&self, msg: &T) -> Vec<Violation> {
        let instance = match serde_json::to_value(msg) {
            Ok(v) => v,
            Err(e) => return vec![Violation::new("", format!("encode for validation: {}", e))],
        };
        let schema = match self.compiled() {
            Ok(s) => s,
            Err(e) => return vec![Violation::new("", e.clone())],
        };
        let violations = match schema.validate(&instance) {
            Ok(()) => Vec::new(),
            Err(errors) => errors.map(|e| Violation::new(e.instance_path.to_string(), e.to_string())).collect(),
        };
        tracing::debug!(schema = self.name, violations = violations.len(), "json schema evaluated");
        violations
    }
}

/// Flags every repeat of a value, pointing at the repeat and naming the first index.
pub(crate) fn check_unique<'a>(
    values: impl IntoIterator<Item = Option<&'a str>>,
    pointer: impl Fn(usize) -> String,
    what: &str,
    violations: &mut Vec<Violation>,
) {
    let mut seen: BTreeMap<&str, usize> = BTreeMap::new();
    for (i, value) in values.into_iter().enumerate() {
        let Some(value) = value else { continue };
        match seen.entry(value) {
            Entry::Occupied(first) => violations.push(Violation::new(
                pointer(i),
                format!("duplicate {} {:?} (first declared at index {})", what, value, first.get()),
            )),
            Entry::Vacant(slot) => {
                slot.insert(i);
            }
        }
    }
}
