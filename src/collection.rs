use crate::cursor::Cursor;
use crate::error::Result;
use crate::iter::Items;
use crate::node::Node;
use crate::plant::{Named, Seasonal};
use crate::predicate::{MatchAll, NameFilter, Predicate, SeasonFilter};
use crate::tag::{Tag, TagRegistry};

/// Binds a root sequence and a predicate, and hands out independent
/// cursors over it.
#[derive(Debug, Clone)]
pub struct Collection<'a, T, P = MatchAll> {
    root: &'a [Node<T>],
    predicate: P,
}

impl<'a, T> Collection<'a, T, MatchAll> {
    /// Collection of every item under `root`.
    pub fn new(root: &'a [Node<T>]) -> Self {
        Collection {
            root,
            predicate: MatchAll,
        }
    }
}

impl<'a, T, P> Collection<'a, T, P> {
    pub fn filtered(root: &'a [Node<T>], predicate: P) -> Self {
        Collection { root, predicate }
    }

    #[inline(always)]
    pub fn root(&self) -> &'a [Node<T>] {
        self.root
    }

    #[inline(always)]
    pub fn predicate(&self) -> &P {
        &self.predicate
    }
}

impl<'a, T: Seasonal> Collection<'a, T, SeasonFilter> {
    /// Items tagged with the season `season`, resolved through `registry`.
    pub fn by_season(root: &'a [Node<T>], registry: &TagRegistry, season: &str) -> Self {
        Collection::with_season_tag(root, registry.resolve(season))
    }

    pub fn with_season_tag(root: &'a [Node<T>], season: Tag) -> Self {
        Collection::filtered(root, SeasonFilter::new(season))
    }
}

impl<'a, T: Named> Collection<'a, T, NameFilter> {
    /// Items named `name`, resolved through `registry`.
    pub fn by_name(root: &'a [Node<T>], registry: &TagRegistry, name: &str) -> Self {
        Collection::with_name_tag(root, registry.resolve(name))
    }

    pub fn with_name_tag(root: &'a [Node<T>], name: Tag) -> Self {
        Collection::filtered(root, NameFilter::new(name))
    }
}

impl<'a, T, P: Predicate<T> + Clone> Collection<'a, T, P> {
    /// New cursor positioned on the first matching item.
    pub fn create_iterator(&self) -> Result<Cursor<'a, T, P>> {
        let mut cursor = Cursor::new(self.root, self.predicate.clone());
        cursor.first()?;
        Ok(cursor)
    }

    /// New cursor positioned on the last matching item.
    pub fn create_reverse_iterator(&self) -> Result<Cursor<'a, T, P>> {
        let mut cursor = Cursor::new(self.root, self.predicate.clone());
        cursor.last()?;
        Ok(cursor)
    }

    /// Matching items in forward order.
    pub fn items(&self) -> Items<'a, T, P> {
        Cursor::new(self.root, self.predicate.clone()).into_items()
    }

    /// Matching items in backward order.
    pub fn rev_items(&self) -> Items<'a, T, P> {
        Cursor::at_end(self.root, self.predicate.clone()).into_rev_items()
    }

    /// Number of matching items.
    pub fn count(&self) -> Result<usize> {
        self.items().try_fold(0, |count, item| item.map(|_| count + 1))
    }
}
