//! The JSON document a block map lives in.
//!
//! Only the `blocks` field is ever read or replaced. Every other top-level
//! field is carried through verbatim, in its original position.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{BlockMapError, Result};
use crate::world::BlockMap;

/// Name of the top-level field holding the block collection.
pub const BLOCKS_FIELD: &str = "blocks";

/// A parsed map document. The root is always a JSON object.
///
/// Serializes as the root object itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BlockDocument {
    root: Map<String, Value>,
}

impl BlockDocument {
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            _ => Err(BlockMapError::NotAnObject),
        }
    }

    /// Parse the block collection.
    pub fn blocks(&self) -> Result<BlockMap> {
        self.blocks_counted().map(|(map, _)| map)
    }

    /// Parse the block collection, also returning how many keys merged into
    /// a position an earlier key already held.
    pub fn blocks_counted(&self) -> Result<(BlockMap, usize)> {
        let raw = self
            .root
            .get(BLOCKS_FIELD)
            .ok_or_else(|| BlockMapError::MissingField {
                field: BLOCKS_FIELD.into(),
            })?;
        let Value::Object(raw) = raw else {
            return Err(BlockMapError::FieldType {
                field: BLOCKS_FIELD.into(),
            });
        };
        BlockMap::from_json_map_counted(raw)
    }

    /// A copy of this document with the block collection replaced.
    ///
    /// An existing `blocks` field keeps its position; a missing one is
    /// appended.
    pub fn with_blocks(&self, blocks: &BlockMap) -> Self {
        let mut root = self.root.clone();
        root.insert(BLOCKS_FIELD.into(), Value::Object(blocks.to_json_map()));
        Self { root }
    }

    /// Top-level field names in document order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.root.keys().map(String::as_str)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.root.get(field)
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.root)
    }
}
