/// Element of a composite tree: a leaf item or a group of child nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum Node<T> {
    Item(T),
    Group(Group<T>),
}

impl<T> Node<T> {
    #[inline(always)]
    pub fn item(value: T) -> Self {
        Node::Item(value)
    }

    pub fn group<I: IntoIterator<Item = Node<T>>>(children: I) -> Self {
        Node::Group(children.into_iter().collect())
    }

    #[inline(always)]
    pub fn empty_group() -> Self {
        Node::Group(Group::new())
    }

    #[inline(always)]
    pub fn is_item(&self) -> bool {
        matches!(self, Node::Item(_))
    }

    #[inline(always)]
    pub fn as_item(&self) -> Option<&T> {
        match self {
            Node::Item(item) => Some(item),
            Node::Group(_) => None,
        }
    }

    #[inline(always)]
    pub fn as_group(&self) -> Option<&Group<T>> {
        match self {
            Node::Item(_) => None,
            Node::Group(group) => Some(group),
        }
    }

    #[inline(always)]
    pub fn as_group_mut(&mut self) -> Option<&mut Group<T>> {
        match self {
            Node::Item(_) => None,
            Node::Group(group) => Some(group),
        }
    }

    /// Children of a group; items have none.
    #[inline(always)]
    pub fn children(&self) -> &[Node<T>] {
        match self {
            Node::Item(_) => &[],
            Node::Group(group) => group.children(),
        }
    }

    /// Number of items in this subtree.
    pub fn item_count(&self) -> usize {
        match self {
            Node::Item(_) => 1,
            Node::Group(group) => group.item_count(),
        }
    }
}

/// Ordered sequence of child nodes. Insertion order is traversal order.
#[derive(Debug, Clone, PartialEq)]
pub struct Group<T> {
    children: Vec<Node<T>>,
}

impl<T> Group<T> {
    pub fn new() -> Self {
        Group {
            children: Vec::new(),
        }
    }

    pub fn with_children(children: Vec<Node<T>>) -> Self {
        Group { children }
    }

    #[inline(always)]
    pub fn children(&self) -> &[Node<T>] {
        &self.children
    }

    #[inline(always)]
    pub fn children_mut(&mut self) -> &mut Vec<Node<T>> {
        &mut self.children
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    #[inline]
    pub fn push(&mut self, node: Node<T>) {
        self.children.push(node);
    }

    #[inline]
    pub fn insert(&mut self, idx: usize, node: Node<T>) {
        assert!(idx <= self.len(), "Insert index must be <= length");
        self.children.insert(idx, node);
    }

    #[inline]
    pub fn remove(&mut self, idx: usize) -> Node<T> {
        assert!(idx < self.len(), "Remove index must be < length");
        self.children.remove(idx)
    }

    /// Number of items in this subtree.
    pub fn item_count(&self) -> usize {
        // Iterative so that deep trees cannot overflow the call stack.
        let mut count = 0;
        let mut stack: Vec<&[Node<T>]> = vec![&self.children];
        while let Some(level) = stack.pop() {
            for node in level {
                match node {
                    Node::Item(_) => count += 1,
                    Node::Group(group) => stack.push(group.children()),
                }
            }
        }
        count
    }
}

impl<T> Default for Group<T> {
    fn default() -> Self {
        Group::new()
    }
}

impl<T> FromIterator<Node<T>> for Group<T> {
    fn from_iter<I: IntoIterator<Item = Node<T>>>(iter: I) -> Self {
        Group {
            children: iter.into_iter().collect(),
        }
    }
}

impl<T> From<Vec<Node<T>>> for Group<T> {
    fn from(children: Vec<Node<T>>) -> Self {
        Group::with_children(children)
    }
}
