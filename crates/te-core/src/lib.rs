//! te-core: Map cell model for Thief Escape
//!
//! This crate contains the state-consistency rules for a single map cell
//! and the level grid that owns them. It has no I/O dependencies.

pub mod dungeon;

mod consts;
mod error;

pub use consts::*;
pub use error::{Attribute, CellError};
