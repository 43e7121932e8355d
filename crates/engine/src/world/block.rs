use serde::Serialize;
use serde_json::Value;

/// Opaque block identifier. The engine stores these without interpreting them.
///
/// Documents use integers or strings, but any JSON value is carried through
/// unchanged. The only operation the engine needs is equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BlockId(pub Value);

impl BlockId {
    pub fn new(value: impl Into<Value>) -> Self {
        Self(value.into())
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for BlockId {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
