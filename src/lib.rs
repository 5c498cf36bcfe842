//! Bidirectional, filterable cursors over composite trees of items and
//! groups.
//!
//! A [`Collection`] binds a root sequence of [`Node`]s and a
//! [`Predicate`], and hands out [`Cursor`]s which walk the matching items
//! depth-first, in either direction, resuming from where they stopped.

mod collection;
mod cursor;
mod error;
pub(crate) mod frame;
mod iter;
mod node;
mod plant;
mod predicate;
mod tag;

pub use collection::Collection;
pub use cursor::{Cursor, TreeCursor};
pub use error::{Boundary, Error, Result};
pub use frame::Stats;
pub use iter::Items;
pub use node::{Group, Node};
pub use plant::{Named, Plant, Seasonal};
pub use predicate::{
    Fallible, MatchAll, Name, NameFilter, Predicate, Season, SeasonFilter, TagAccessor, TagFilter,
};
pub use tag::{Tag, TagRegistry};
