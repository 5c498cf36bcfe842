use std::iter::FusedIterator;

use crate::cursor::Cursor;
use crate::error::Result;
use crate::frame::Direction;
use crate::predicate::Predicate;

/// [`Iterator`] draining a [`Cursor`] in one direction.
///
/// Yields the cursor's current item first (if it has one), then steps.
/// A cursor parked on the boundary it is moving away from is re-entered,
/// so an unprimed cursor yields every match. Stops after the first error.
pub struct Items<'a, T, P> {
    cursor: Cursor<'a, T, P>,
    direction: Direction,
    pending: bool,
    failed: bool,
}

impl<'a, T, P: Predicate<T>> Items<'a, T, P> {
    pub(crate) fn new(cursor: Cursor<'a, T, P>, direction: Direction) -> Self {
        Items {
            cursor,
            direction,
            pending: true,
            failed: false,
        }
    }

    /// Gives the cursor back, positioned on the last yielded item or on
    /// the boundary the iterator ran into.
    pub fn into_cursor(self) -> Cursor<'a, T, P> {
        self.cursor
    }
}

impl<'a, T, P: Predicate<T>> Iterator for Items<'a, T, P> {
    type Item = Result<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        if self.pending {
            self.pending = false;
            if let Some(item) = self.cursor.item() {
                return Some(Ok(item));
            }
        }

        match self.cursor.step(self.direction) {
            Ok(Some(item)) => Some(Ok(item)),
            Ok(None) => None,
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

impl<'a, T, P: Predicate<T>> FusedIterator for Items<'a, T, P> {}
