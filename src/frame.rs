use log::trace;

use crate::node::Node;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Direction {
    Forward,
    Backward,
}

/// Position within one level of the tree.
///
/// While a frame is on the stack `position` always indexes an existing
/// child, so the candidate of a level is read directly and stepping never
/// needs a sentinel one before the start.
pub(crate) struct Frame<'a, T> {
    children: &'a [Node<T>],
    position: usize,
}

impl<'a, T> Frame<'a, T> {
    /// Frame at the first (forward) or last (backward) child. `children`
    /// must not be empty.
    #[inline(always)]
    fn new(children: &'a [Node<T>], direction: Direction) -> Self {
        debug_assert!(!children.is_empty());
        let position = match direction {
            Direction::Forward => 0,
            Direction::Backward => children.len() - 1,
        };
        Frame { children, position }
    }

    #[inline(always)]
    pub(crate) fn node(&self) -> &'a Node<T> {
        &self.children[self.position]
    }

    /// Moves one child in `direction`. Returns `false` and leaves the
    /// position untouched if the level is exhausted.
    #[inline(always)]
    fn step(&mut self, direction: Direction) -> bool {
        match direction {
            Direction::Forward if self.position + 1 < self.children.len() => {
                self.position += 1;
                true
            }
            Direction::Backward if self.position > 0 => {
                self.position -= 1;
                true
            }
            _ => false,
        }
    }
}

impl<'a, T> Clone for Frame<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for Frame<'a, T> {}

impl<'a, T> std::fmt::Debug for Frame<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frame")
            .field("position", &self.position)
            .field("len", &self.children.len())
            .finish()
    }
}

/// Frame stack work counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    /// Frames pushed, including the root frame and restored frames.
    pub pushes: usize,
    /// Frames popped because their level was exhausted.
    pub pops: usize,
    /// Single-position moves within a level.
    pub steps: usize,
    /// Saved paths restored when re-entering from a boundary.
    pub restores: usize,
}

/// Copy of the root-to-item path taken lazily while stepping away from an
/// item.
///
/// Frames `[..intact]` of the stack have not been modified since the
/// checkpoint was armed. `saved` holds the original copies of the frames
/// above them, top first. A frame is copied the first time a step touches
/// it, so `saved` never holds more than one frame per pop plus one.
struct Checkpoint<'a, T> {
    intact: usize,
    saved: Vec<Frame<'a, T>>,
}

impl<'a, T> Checkpoint<'a, T> {
    fn new() -> Self {
        Checkpoint {
            intact: 0,
            saved: Vec::new(),
        }
    }

    #[inline(always)]
    fn arm(&mut self, depth: usize) {
        self.intact = depth;
        self.saved.clear();
    }

    #[inline(always)]
    fn disarm(&mut self) {
        self.intact = 0;
        self.saved.clear();
    }

    /// Called before the top frame (at `depth`) is modified or popped.
    #[inline(always)]
    fn touch(&mut self, depth: usize, top: &Frame<'a, T>) {
        if depth > 0 && depth == self.intact {
            self.saved.push(*top);
            self.intact -= 1;
        }
    }

    #[inline(always)]
    fn is_restorable(&self) -> bool {
        !self.saved.is_empty()
    }
}

/// Explicit stack of frames describing the path from the root level to
/// the current candidate.
pub(crate) struct FrameStack<'a, T> {
    frames: Vec<Frame<'a, T>>,
    checkpoint: Checkpoint<'a, T>,
    stats: Stats,
}

impl<'a, T> FrameStack<'a, T> {
    pub(crate) fn new() -> Self {
        FrameStack {
            frames: Vec::new(),
            checkpoint: Checkpoint::new(),
            stats: Stats::default(),
        }
    }

    /// Replaces the stack with a single frame over `root`, at its start or
    /// end. An empty root leaves the stack empty.
    pub(crate) fn reset(&mut self, root: &'a [Node<T>], direction: Direction) {
        self.frames.clear();
        self.checkpoint.disarm();
        self.push(root, direction);
    }

    /// Pushes a frame over a group's children. Empty groups push nothing
    /// and return `false`.
    #[inline]
    pub(crate) fn descend_into(&mut self, children: &'a [Node<T>], direction: Direction) -> bool {
        self.push(children, direction)
    }

    /// Moves the top frame one position in `direction`, popping exhausted
    /// levels and moving their parents instead. Returns `false` once the
    /// stack is empty.
    pub(crate) fn step_or_pop(&mut self, direction: Direction) -> bool {
        while let Some(top) = self.frames.last() {
            self.checkpoint.touch(self.frames.len(), top);
            let depth = self.frames.len();
            if self.frames[depth - 1].step(direction) {
                self.stats.steps += 1;
                return true;
            }
            self.frames.pop();
            self.stats.pops += 1;
            trace!("popped exhausted frame, depth={}", depth - 1);
        }
        false
    }

    /// Node under the top frame.
    #[inline(always)]
    pub(crate) fn candidate(&self) -> Option<&'a Node<T>> {
        self.frames.last().map(Frame::node)
    }

    #[inline(always)]
    pub(crate) fn depth(&self) -> usize {
        self.frames.len()
    }

    #[inline(always)]
    pub(crate) fn stats(&self) -> Stats {
        self.stats
    }

    /// Starts recording the current path before stepping away from it.
    #[inline(always)]
    pub(crate) fn arm_checkpoint(&mut self) {
        self.checkpoint.arm(self.frames.len());
    }

    #[inline(always)]
    pub(crate) fn disarm_checkpoint(&mut self) {
        self.checkpoint.disarm();
    }

    /// Puts back the path recorded by the last armed checkpoint. Returns
    /// `false` if there is nothing to restore.
    pub(crate) fn restore_checkpoint(&mut self) -> bool {
        if !self.checkpoint.is_restorable() {
            return false;
        }
        self.frames.truncate(self.checkpoint.intact);
        let restored = self.checkpoint.saved.len();
        self.frames.extend(self.checkpoint.saved.drain(..).rev());
        self.checkpoint.intact = 0;
        self.stats.pushes += restored;
        self.stats.restores += 1;
        trace!("restored {} frames, depth={}", restored, self.frames.len());
        true
    }

    #[inline]
    fn push(&mut self, children: &'a [Node<T>], direction: Direction) -> bool {
        if children.is_empty() {
            return false;
        }
        self.frames.push(Frame::new(children, direction));
        self.stats.pushes += 1;
        trace!("pushed frame, depth={}", self.frames.len());
        true
    }

    #[cfg(test)]
    pub(crate) fn positions(&self) -> Vec<usize> {
        self.frames.iter().map(|f| f.position).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Vec<Node<u32>> {
        vec![
            Node::item(0),
            Node::group([Node::item(1), Node::group([Node::item(2)])]),
            Node::item(3),
        ]
    }

    #[test]
    fn test_reset() {
        let root = tree();
        let mut stack = FrameStack::new();

        stack.reset(&root, Direction::Forward);
        assert_eq!(stack.positions(), vec![0]);
        assert_eq!(stack.candidate(), Some(&Node::item(0)));

        stack.reset(&root, Direction::Backward);
        assert_eq!(stack.positions(), vec![2]);
        assert_eq!(stack.candidate(), Some(&Node::item(3)));

        let empty: Vec<Node<u32>> = vec![];
        stack.reset(&empty, Direction::Forward);
        assert_eq!(stack.depth(), 0);
        assert_eq!(stack.candidate(), None);
    }

    #[test]
    fn test_descend_into() {
        let root = tree();
        let mut stack = FrameStack::new();
        stack.reset(&root, Direction::Forward);
        stack.step_or_pop(Direction::Forward);

        let group = stack.candidate().unwrap().children();
        assert!(stack.descend_into(group, Direction::Backward));
        assert_eq!(stack.positions(), vec![1, 1]);
        assert_eq!(stack.depth(), 2);

        assert!(!stack.descend_into(&[], Direction::Forward));
        assert_eq!(stack.depth(), 2);
    }

    #[test]
    fn test_step_or_pop() {
        let root = tree();
        let mut stack = FrameStack::new();
        stack.reset(&root, Direction::Forward);
        assert!(stack.step_or_pop(Direction::Forward));

        let group = stack.candidate().unwrap().children();
        stack.descend_into(group, Direction::Forward);
        assert!(stack.step_or_pop(Direction::Forward));
        assert_eq!(stack.positions(), vec![1, 1]);

        // Exhausts the nested level and moves the root frame instead.
        assert!(stack.step_or_pop(Direction::Forward));
        assert_eq!(stack.positions(), vec![2]);
        assert_eq!(stack.candidate(), Some(&Node::item(3)));

        assert!(!stack.step_or_pop(Direction::Forward));
        assert_eq!(stack.depth(), 0);

        let stats = stack.stats();
        assert_eq!(stats.pushes, 2);
        assert_eq!(stats.pops, 2);
        assert_eq!(stats.steps, 3);
    }

    #[test]
    fn test_step_backward_pops_at_start() {
        let root = tree();
        let mut stack = FrameStack::new();
        stack.reset(&root, Direction::Forward);
        assert!(!stack.step_or_pop(Direction::Backward));
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn test_checkpoint_restore() {
        let root = tree();
        let mut stack = FrameStack::new();
        stack.reset(&root, Direction::Forward);
        stack.step_or_pop(Direction::Forward);
        let group = stack.candidate().unwrap().children();
        stack.descend_into(group, Direction::Forward);
        assert_eq!(stack.positions(), vec![1, 0]);

        stack.arm_checkpoint();
        while stack.step_or_pop(Direction::Forward) {}
        assert_eq!(stack.depth(), 0);

        assert!(stack.restore_checkpoint());
        assert_eq!(stack.positions(), vec![1, 0]);
        assert_eq!(stack.candidate(), Some(&Node::item(1)));
        assert_eq!(stack.stats().restores, 1);

        // Consumed by the restore.
        assert!(!stack.restore_checkpoint());
    }

    #[test]
    fn test_checkpoint_partial_touch() {
        let root = tree();
        let mut stack = FrameStack::new();
        stack.reset(&root, Direction::Forward);
        stack.step_or_pop(Direction::Forward);
        let group = stack.candidate().unwrap().children();
        stack.descend_into(group, Direction::Forward);

        stack.arm_checkpoint();
        // Only the top frame is touched, the root frame stays intact.
        stack.step_or_pop(Direction::Forward);
        let nested = stack.candidate().unwrap().children();
        stack.descend_into(nested, Direction::Forward);
        assert_eq!(stack.positions(), vec![1, 1, 0]);

        assert!(stack.restore_checkpoint());
        assert_eq!(stack.positions(), vec![1, 0]);
    }

    #[test]
    fn test_disarmed_checkpoint() {
        let root = tree();
        let mut stack = FrameStack::new();
        stack.reset(&root, Direction::Forward);
        stack.arm_checkpoint();
        stack.step_or_pop(Direction::Forward);
        stack.disarm_checkpoint();
        assert!(!stack.restore_checkpoint());
    }
}
