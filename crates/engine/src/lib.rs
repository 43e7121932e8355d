//! Coordinate transforms over sparse block maps.
//!
//! A block map is a JSON object of `"<x>,<y>,<z>"` keys to opaque block ids,
//! stored under the `blocks` field of a larger document. This crate parses it
//! into a [`world::BlockMap`], runs a [`transform::Transform`] over every
//! position, and writes the result back into the document. It does no I/O.
//!
//! ```
//! use blockmap_engine::transform::{transform, Translate};
//! use blockmap_engine::world::BlockMap;
//! use blockmap_engine::world::block::BlockId;
//! use blockmap_engine::world::position::BlockPos;
//!
//! let map: BlockMap = [(BlockPos::ORIGIN, BlockId::new(1))].into_iter().collect();
//! let moved = transform(&map, &Translate::new(1, 0, 0)).unwrap();
//! assert_eq!(moved.get(&BlockPos::new(1, 0, 0)), Some(&BlockId::new(1)));
//! ```

pub mod document;
pub mod error;
pub mod transform;
pub mod world;

pub use error::{BlockMapError, Result};
