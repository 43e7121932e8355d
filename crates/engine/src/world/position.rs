use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

use crate::error::BlockMapError;

/// Absolute block position in a block map.
///
/// Serialized in documents as the key `"<x>,<y>,<z>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockPos {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl BlockPos {
    pub const ORIGIN: BlockPos = BlockPos::new(0, 0, 0);

    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    /// Offset by `(dx, dy, dz)`. `None` if any axis leaves the `i64` range.
    pub const fn checked_offset(&self, dx: i64, dy: i64, dz: i64) -> Option<BlockPos> {
        let Some(x) = self.x.checked_add(dx) else {
            return None;
        };
        let Some(y) = self.y.checked_add(dy) else {
            return None;
        };
        let Some(z) = self.z.checked_add(dz) else {
            return None;
        };
        Some(Self::new(x, y, z))
    }

    /// Point reflection through the Y axis: `(-x, y, -z)`.
    pub const fn checked_mirror_xz(&self) -> Option<BlockPos> {
        let Some(x) = self.x.checked_neg() else {
            return None;
        };
        let Some(z) = self.z.checked_neg() else {
            return None;
        };
        Some(Self::new(x, self.y, z))
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.z)
    }
}

/// Parses the document key form. Exactly three comma-separated decimal
/// integers; whitespace anywhere is rejected. Integers that are valid but do
/// not fit in `i64` are reported as out of range, not malformed.
impl FromStr for BlockPos {
    type Err = BlockMapError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        let malformed = || BlockMapError::MalformedCoordinate {
            key: key.to_string(),
        };

        let mut parts = key.split(',');
        let mut axis = || -> Result<i64, BlockMapError> {
            let part = parts.next().ok_or_else(malformed)?;
            part.parse::<i64>().map_err(|e| match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    BlockMapError::CoordinateOutOfRange {
                        key: key.to_string(),
                    }
                }
                _ => malformed(),
            })
        };
        let (x, y, z) = (axis()?, axis()?, axis()?);

        if parts.next().is_some() {
            return Err(malformed());
        }
        Ok(Self::new(x, y, z))
    }
}
