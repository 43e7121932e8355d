pub mod block;
pub mod position;

use block::BlockId;
use indexmap::IndexMap;
use indexmap::map::Iter;
use position::BlockPos;
use serde_json::{Map, Value};

/// A sparse block map: coordinate to block id.
///
/// Iteration follows insertion order, which is what collision resolution is
/// defined against. Writing to an occupied position replaces the value but
/// keeps the position's original slot in the order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockMap {
    blocks: IndexMap<BlockPos, BlockId>,
}

impl BlockMap {
    pub fn new() -> Self {
        Self {
            blocks: IndexMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            blocks: IndexMap::with_capacity(capacity),
        }
    }

    /// Read the block at a position, if any.
    pub fn get(&self, pos: &BlockPos) -> Option<&BlockId> {
        self.blocks.get(pos)
    }

    /// Write a block. Returns the value it replaced, if the position was
    /// already occupied.
    pub fn insert(&mut self, pos: BlockPos, block: BlockId) -> Option<BlockId> {
        self.blocks.insert(pos, block)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Entries in storage order.
    pub fn iter(&self) -> Iter<'_, BlockPos, BlockId> {
        self.blocks.iter()
    }

    pub fn positions(&self) -> impl Iterator<Item = &BlockPos> {
        self.blocks.keys()
    }

    /// Build from the raw `"<x>,<y>,<z>" -> id` object of a document.
    ///
    /// Fails on the first key that is not a coordinate.
    pub fn from_json_map(raw: &Map<String, Value>) -> crate::Result<Self> {
        Self::from_json_map_counted(raw).map(|(map, _)| map)
    }

    /// [`BlockMap::from_json_map`], also returning how many keys landed on a
    /// position an earlier key already held (`"1,0,0"` then `"+1,0,0"`).
    /// Those follow the usual rule: the later value wins, the first slot stays.
    pub fn from_json_map_counted(raw: &Map<String, Value>) -> crate::Result<(Self, usize)> {
        let mut map = Self::with_capacity(raw.len());
        let mut merged = 0;
        for (key, value) in raw {
            let pos: BlockPos = key.parse()?;
            if map.insert(pos, BlockId::from(value.clone())).is_some() {
                tracing::debug!("Key {:?} merged into existing position {}", key, pos);
                merged += 1;
            }
        }
        if merged > 0 {
            tracing::debug!(
                keys = raw.len(),
                positions = map.len(),
                merged,
                "Document keys merged while parsing"
            );
        }
        Ok((map, merged))
    }

    /// The raw document form, keys in storage order.
    pub fn to_json_map(&self) -> Map<String, Value> {
        self.blocks
            .iter()
            .map(|(pos, block)| (pos.to_string(), block.as_value().clone()))
            .collect()
    }
}

impl FromIterator<(BlockPos, BlockId)> for BlockMap {
    /// Later entries overwrite earlier ones at the same position.
    fn from_iter<I: IntoIterator<Item = (BlockPos, BlockId)>>(iter: I) -> Self {
        Self {
            blocks: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a BlockMap {
    type Item = (&'a BlockPos, &'a BlockId);
    type IntoIter = Iter<'a, BlockPos, BlockId>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
