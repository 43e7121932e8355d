//! The block map transformer.
//!
//! A [`Transform`] maps one input position to zero, one or two output
//! positions. [`transform`] runs it over a whole map in storage order and
//! merges the results: when two writes land on the same position the later
//! one wins, silently.

pub mod policies;

pub use policies::{MirrorCutoff, SplitShift, Translate};

use crate::error::Result;
use crate::world::BlockMap;
use crate::world::position::BlockPos;

/// Where one input block ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The block is removed.
    Drop,
    /// The block is written once.
    One(BlockPos),
    /// The block is written twice, first then second.
    Two(BlockPos, BlockPos),
}

impl Placement {
    /// Output positions in write order.
    pub fn positions(self) -> impl Iterator<Item = BlockPos> {
        let pair = match self {
            Placement::Drop => [None, None],
            Placement::One(a) => [Some(a), None],
            Placement::Two(a, b) => [Some(a), Some(b)],
        };
        pair.into_iter().flatten()
    }
}

/// A pure, deterministic coordinate mapping.
///
/// Implementations must not depend on anything but `pos` and their own
/// parameters; the transformer may call `place` in any context.
pub trait Transform {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    fn place(&self, pos: BlockPos) -> Result<Placement>;
}

impl<T: Transform + ?Sized> Transform for &T {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn place(&self, pos: BlockPos) -> Result<Placement> {
        (**self).place(pos)
    }
}

impl<T: Transform + ?Sized> Transform for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn place(&self, pos: BlockPos) -> Result<Placement> {
        (**self).place(pos)
    }
}

/// Adapts a plain function `BlockPos -> Option<BlockPos>` (where `None`
/// drops the block) into a [`Transform`].
pub struct MapFn<F>(pub F);

impl<F> Transform for MapFn<F>
where
    F: Fn(BlockPos) -> Option<BlockPos>,
{
    fn name(&self) -> &'static str {
        "map"
    }

    fn place(&self, pos: BlockPos) -> Result<Placement> {
        Ok(match (self.0)(pos) {
            Some(out) => Placement::One(out),
            None => Placement::Drop,
        })
    }
}

/// Counters from one transformer run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformReport {
    /// Entries in the input map.
    pub input_len: usize,
    /// Writes performed into the output map.
    pub written: usize,
    /// Input entries that produced no write.
    pub dropped: usize,
    /// Writes that replaced an earlier write.
    pub overwritten: usize,
    /// Entries in the output map.
    pub output_len: usize,
}

/// Apply `f` to every position of `input`, producing a new map.
///
/// Inputs are visited in storage order; each input's placements are written
/// in order. Last write wins on collision. Fails on the first position `f`
/// rejects, without returning a partial map.
pub fn transform(input: &BlockMap, f: &impl Transform) -> Result<BlockMap> {
    transform_with_report(input, f).map(|(map, _)| map)
}

/// [`transform`], also returning counters for the run.
pub fn transform_with_report(
    input: &BlockMap,
    f: &impl Transform,
) -> Result<(BlockMap, TransformReport)> {
    let mut out = BlockMap::with_capacity(input.len());
    let mut report = TransformReport {
        input_len: input.len(),
        ..TransformReport::default()
    };

    for (pos, block) in input {
        let placement = f.place(*pos)?;
        if placement == Placement::Drop {
            report.dropped += 1;
            continue;
        }
        for target in placement.positions() {
            report.written += 1;
            if out.insert(target, block.clone()).is_some() {
                report.overwritten += 1;
            }
        }
    }

    report.output_len = out.len();
    tracing::debug!(
        transform = f.name(),
        input = report.input_len,
        output = report.output_len,
        dropped = report.dropped,
        overwritten = report.overwritten,
        "Transform complete"
    );
    Ok((out, report))
}
