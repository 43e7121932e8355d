use thiserror::Error;

use crate::world::position::BlockPos;

/// Everything that can stop a block map from being read or transformed.
///
/// All variants are fatal for the whole operation; no partial map is ever
/// produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlockMapError {
    /// A key in the block collection is not three comma-separated integers.
    #[error("malformed coordinate key {key:?}: expected \"<x>,<y>,<z>\"")]
    MalformedCoordinate { key: String },

    /// A key is well formed but one of its integers does not fit in `i64`.
    #[error(
        "coordinate key {key:?} is outside the supported range ({min}..={max})",
        min = i64::MIN,
        max = i64::MAX
    )]
    CoordinateOutOfRange { key: String },

    /// The document has no block collection.
    #[error("document is missing the {field:?} field")]
    MissingField { field: String },

    /// The block collection exists but is not a JSON object.
    #[error("document field {field:?} is not an object")]
    FieldType { field: String },

    /// The document root is not a JSON object.
    #[error("document root is not an object")]
    NotAnObject,

    /// A transform moved a block outside the representable coordinate range.
    #[error("coordinate ({pos}) cannot be transformed without overflowing")]
    CoordinateOverflow { pos: BlockPos },
}

pub type Result<T, E = BlockMapError> = std::result::Result<T, E>;
