//! The three stock transforms used on keep maps.

use super::{Placement, Transform};
use crate::error::{BlockMapError, Result};
use crate::world::position::BlockPos;

/// Shift every block by a fixed offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translate {
    pub dx: i64,
    pub dy: i64,
    pub dz: i64,
}

impl Translate {
    pub const fn new(dx: i64, dy: i64, dz: i64) -> Self {
        Self { dx, dy, dz }
    }

    /// The offset that undoes this one. `None` if an axis is `i64::MIN`.
    pub const fn inverse(&self) -> Option<Self> {
        let (Some(dx), Some(dy), Some(dz)) = (
            self.dx.checked_neg(),
            self.dy.checked_neg(),
            self.dz.checked_neg(),
        ) else {
            return None;
        };
        Some(Self::new(dx, dy, dz))
    }
}

impl Default for Translate {
    /// One block along +X.
    fn default() -> Self {
        Self::new(1, 0, 0)
    }
}

impl Transform for Translate {
    fn name(&self) -> &'static str {
        "translate"
    }

    fn place(&self, pos: BlockPos) -> Result<Placement> {
        pos.checked_offset(self.dx, self.dy, self.dz)
            .map(Placement::One)
            .ok_or(BlockMapError::CoordinateOverflow { pos })
    }
}

/// Push the two halves of a map apart along Z.
///
/// `z >= 0` moves by `+gap`, `z < 0` by `-gap`, so every block keeps the
/// sign of its Z (zero counts as non-negative).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitShift {
    pub gap: i64,
}

impl SplitShift {
    pub const DEFAULT_GAP: i64 = 15;

    pub const fn new(gap: i64) -> Self {
        Self { gap }
    }
}

impl Default for SplitShift {
    fn default() -> Self {
        Self::new(Self::DEFAULT_GAP)
    }
}

impl Transform for SplitShift {
    fn name(&self) -> &'static str {
        "extend"
    }

    fn place(&self, pos: BlockPos) -> Result<Placement> {
        let dz = if pos.z >= 0 {
            Some(self.gap)
        } else {
            self.gap.checked_neg()
        };
        dz.and_then(|dz| pos.checked_offset(0, 0, dz))
            .map(Placement::One)
            .ok_or(BlockMapError::CoordinateOverflow { pos })
    }
}

/// Rebuild a symmetric map from its positive-Z half.
///
/// Blocks with `z <= -cutoff` are dropped. Everything else is kept in place,
/// and blocks with `z >= cutoff` are also copied to `(-x, y, -z)`, written
/// right after the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MirrorCutoff {
    pub cutoff: i64,
}

impl MirrorCutoff {
    pub const DEFAULT_CUTOFF: i64 = 10;

    pub const fn new(cutoff: i64) -> Self {
        Self { cutoff }
    }
}

impl Default for MirrorCutoff {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CUTOFF)
    }
}

impl Transform for MirrorCutoff {
    fn name(&self) -> &'static str {
        "mirror"
    }

    fn place(&self, pos: BlockPos) -> Result<Placement> {
        // saturating: a cutoff of i64::MIN has no positive counterpart
        if pos.z <= self.cutoff.saturating_neg() {
            return Ok(Placement::Drop);
        }
        if pos.z < self.cutoff {
            return Ok(Placement::One(pos));
        }
        let mirrored = pos
            .checked_mirror_xz()
            .ok_or(BlockMapError::CoordinateOverflow { pos })?;
        Ok(Placement::Two(pos, mirrored))
    }
}
