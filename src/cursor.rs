use bitflags::bitflags;
use log::debug;

use crate::error::{Boundary, Error, Result};
use crate::frame::{Direction, FrameStack, Stats};
use crate::iter::Items;
use crate::node::Node;
use crate::predicate::{MatchAll, Predicate};

bitflags! {
    struct Flags: u8 {
        const PAST_END = 0b0000_0001;
        const POISONED = 0b0000_0010;
    }
}

// Re-entering from a boundary restores the path saved when the boundary
// was reached instead of rescanning from the root.
const RESTORE_ON_REENTRY: bool = !cfg!(feature = "rescan");

/// Resumable, bidirectional depth-first cursor over the items of a
/// composite tree.
///
/// Only items accepted by `P` are surfaced. Groups, including empty ones,
/// are never surfaced. Forward order is depth-first, left to right;
/// backward order is its exact reverse.
///
/// With no current item the cursor is parked on one of two boundaries
/// (see [`Boundary`]). Stepping further out of a boundary is a no-op,
/// stepping back in lands on the nearest matching item.
///
/// If the predicate fails the error is returned and the cursor is
/// poisoned: every later call returns [`Error::Poisoned`].
pub struct Cursor<'a, T, P = MatchAll> {
    root: &'a [Node<T>],
    predicate: P,
    stack: FrameStack<'a, T>,
    current: Option<&'a T>,
    flags: Flags,
}

/// Cursor visiting every item.
pub type TreeCursor<'a, T> = Cursor<'a, T, MatchAll>;

impl<'a, T, P: Predicate<T>> Cursor<'a, T, P> {
    /// Creates a cursor parked before the first item. Call
    /// [`Cursor::first`] (or [`Cursor::next`]) to prime it.
    pub fn new(root: &'a [Node<T>], predicate: P) -> Self {
        Cursor {
            root,
            predicate,
            stack: FrameStack::new(),
            current: None,
            flags: Flags::empty(),
        }
    }

    /// Creates a cursor parked past the last item, so that
    /// [`Cursor::back`] lands on the last matching item.
    pub fn at_end(root: &'a [Node<T>], predicate: P) -> Self {
        let mut cursor = Cursor::new(root, predicate);
        cursor.flags.insert(Flags::PAST_END);
        cursor
    }

    /// Moves to the first matching item.
    pub fn first(&mut self) -> Result<Option<&'a T>> {
        self.check_poisoned()?;
        self.stack.reset(self.root, Direction::Forward);
        let item = self.scan(Direction::Forward)?;
        debug!("cursor primed at first item, found={}", item.is_some());
        Ok(item)
    }

    /// Moves to the last matching item.
    pub fn last(&mut self) -> Result<Option<&'a T>> {
        self.check_poisoned()?;
        self.stack.reset(self.root, Direction::Backward);
        let item = self.scan(Direction::Backward)?;
        debug!("cursor primed at last item, found={}", item.is_some());
        Ok(item)
    }

    /// Moves to the next matching item.
    ///
    /// No-op past the last item. From before the first item this lands on
    /// the first matching item.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<Option<&'a T>> {
        self.step(Direction::Forward)
    }

    /// Moves to the previous matching item.
    ///
    /// No-op before the first item. From past the last item this lands on
    /// the last matching item.
    pub fn back(&mut self) -> Result<Option<&'a T>> {
        self.step(Direction::Backward)
    }

    #[inline(always)]
    pub fn is_done(&self) -> bool {
        self.current.is_none()
    }

    /// Whether the cursor is parked past the last item. Only meaningful
    /// while [`Cursor::is_done`].
    #[inline(always)]
    pub fn past_end(&self) -> bool {
        self.flags.contains(Flags::PAST_END)
    }

    #[inline]
    pub fn boundary(&self) -> Option<Boundary> {
        match self.current {
            Some(_) => None,
            None => Some(self.parked_on()),
        }
    }

    /// The current item. Fails if the cursor is parked on a boundary or
    /// poisoned.
    pub fn current_item(&self) -> Result<&'a T> {
        self.check_poisoned()?;
        match self.current {
            Some(item) => Ok(item),
            None => Err(Error::NoCurrentItem {
                boundary: self.parked_on(),
            }),
        }
    }

    /// The current item, if any.
    #[inline(always)]
    pub fn item(&self) -> Option<&'a T> {
        self.current
    }

    #[inline(always)]
    pub fn is_poisoned(&self) -> bool {
        self.flags.contains(Flags::POISONED)
    }

    /// Number of frames between the root level and the current item.
    #[inline(always)]
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    #[inline(always)]
    pub fn stats(&self) -> Stats {
        self.stack.stats()
    }

    #[inline(always)]
    pub fn root(&self) -> &'a [Node<T>] {
        self.root
    }

    #[inline(always)]
    pub fn predicate(&self) -> &P {
        &self.predicate
    }

    /// Forward [`Iterator`] yielding the current item (if any) and every
    /// following match.
    pub fn into_items(self) -> Items<'a, T, P> {
        Items::new(self, Direction::Forward)
    }

    /// Backward [`Iterator`] yielding the current item (if any) and every
    /// preceding match.
    pub fn into_rev_items(self) -> Items<'a, T, P> {
        Items::new(self, Direction::Backward)
    }

    pub(crate) fn step(&mut self, direction: Direction) -> Result<Option<&'a T>> {
        self.check_poisoned()?;
        if self.current.is_none() {
            return self.reenter(direction);
        }

        if RESTORE_ON_REENTRY {
            self.stack.arm_checkpoint();
        }
        self.stack.step_or_pop(direction);
        self.scan(direction)
    }

    fn reenter(&mut self, direction: Direction) -> Result<Option<&'a T>> {
        match (direction, self.past_end()) {
            // Already beyond the end in the direction of travel.
            (Direction::Forward, true) | (Direction::Backward, false) => return Ok(None),
            _ => {}
        }

        if RESTORE_ON_REENTRY && self.stack.restore_checkpoint() {
            if let Some(item) = self.stack.candidate().and_then(Node::as_item) {
                self.land(item);
                return Ok(Some(item));
            }
        }

        self.stack.reset(self.root, direction);
        self.scan(direction)
    }

    /// Runs [`Cursor::seek`] and moves the cursor to its outcome.
    fn scan(&mut self, direction: Direction) -> Result<Option<&'a T>> {
        match self.seek(direction) {
            Ok(Some(item)) => {
                self.stack.disarm_checkpoint();
                self.land(item);
                Ok(Some(item))
            }
            Ok(None) => {
                self.park(direction);
                Ok(None)
            }
            Err(err) => {
                debug!("cursor poisoned: {}", err);
                self.current = None;
                self.flags.insert(Flags::POISONED);
                Err(err)
            }
        }
    }

    /// Walks from the current candidate in `direction` until a matching
    /// item is under the top frame or the stack is empty.
    fn seek(&mut self, direction: Direction) -> Result<Option<&'a T>> {
        while let Some(node) = self.stack.candidate() {
            match node {
                Node::Group(group) => {
                    if !self.stack.descend_into(group.children(), direction) {
                        self.stack.step_or_pop(direction);
                    }
                }
                Node::Item(item) => {
                    if self.predicate.matches(item)? {
                        return Ok(Some(item));
                    }
                    self.stack.step_or_pop(direction);
                }
            }
        }
        Ok(None)
    }

    #[inline(always)]
    fn land(&mut self, item: &'a T) {
        self.current = Some(item);
        self.flags.remove(Flags::PAST_END);
    }

    #[inline]
    fn park(&mut self, direction: Direction) {
        self.current = None;
        self.flags.set(Flags::PAST_END, direction == Direction::Forward);
        debug!("cursor parked {}", self.parked_on());
    }

    #[inline(always)]
    fn parked_on(&self) -> Boundary {
        if self.past_end() {
            Boundary::PastEnd
        } else {
            Boundary::BeforeFirst
        }
    }

    #[inline(always)]
    fn check_poisoned(&self) -> Result<()> {
        if self.is_poisoned() {
            return Err(Error::Poisoned);
        }
        Ok(())
    }
}

impl<'a, T, P> std::fmt::Debug for Cursor<'a, T, P>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("current", &self.current)
            .field("past_end", &self.flags.contains(Flags::PAST_END))
            .field("poisoned", &self.flags.contains(Flags::POISONED))
            .field("depth", &self.stack.depth())
            .finish()
    }
}
