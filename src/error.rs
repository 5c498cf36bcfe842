use std::fmt;

use thiserror::Error;

/// Which side of the sequence a cursor with no current item is parked on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// Parked one before the first matching item.
    BeforeFirst,
    /// Parked one past the last matching item.
    PastEnd,
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Boundary::BeforeFirst => f.write_str("before the first item"),
            Boundary::PastEnd => f.write_str("past the last item"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("no current item: cursor is parked {boundary}")]
    NoCurrentItem { boundary: Boundary },
    #[error("item has no {attribute} tag")]
    MissingAttribute { attribute: &'static str },
    #[error("predicate failed: {0}")]
    Predicate(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("cursor was poisoned by an earlier failure and must be discarded")]
    Poisoned,
}

pub type Result<T> = std::result::Result<T, Error>;
