//! The exported JSON document.

use serde::Serialize;
use serde_json::{Map, Value};

/// Level document keys.
pub mod keys {
    pub const WIDTH: &str = "width";
    pub const HEIGHT: &str = "height";
    pub const MAP: &str = "map";
    pub const TILES_LOGIC: &str = "tiles_logic";
    pub const ENTRANCE: &str = "entrance";
    pub const MULTIEXIT: &str = "multiexit";
    pub const CUSTOM_TILES: &str = "customTiles";
    pub const TILES: &str = "tiles";
    pub const DECO_NAME: &str = "decoName";
    pub const DECO_DESC: &str = "decoDesc";
    pub const MOBS: &str = "mobs";
    pub const WATER: &str = "water";
}

/// Ordered JSON object built by one export call.
///
/// Keys keep their first insertion position; inserting an existing key
/// replaces the value in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct OutputDocument(Map<String, Value>);

impl OutputDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &str, value: impl Into<Value>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// Pretty-printed JSON text with a trailing newline.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        let mut text = serde_json::to_string_pretty(&self.0)?;
        text.push('\n');
        Ok(text)
    }
}

impl From<OutputDocument> for Value {
    fn from(document: OutputDocument) -> Self {
        document.into_value()
    }
}
