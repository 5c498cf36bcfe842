use std::marker::PhantomData;

use crate::error::{Error, Result};
use crate::plant::{Named, Seasonal};
use crate::tag::Tag;

/// Decides whether a cursor surfaces an item.
///
/// Evaluated once per candidate item. An `Err` aborts the step and poisons
/// the cursor.
pub trait Predicate<T> {
    fn matches(&self, item: &T) -> Result<bool>;
}

/// Accepts every item.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchAll;

impl<T> Predicate<T> for MatchAll {
    #[inline(always)]
    fn matches(&self, _item: &T) -> Result<bool> {
        Ok(true)
    }
}

impl<T, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    #[inline(always)]
    fn matches(&self, item: &T) -> Result<bool> {
        Ok(self(item))
    }
}

/// Wraps a closure which can fail. Its error is returned as
/// [`Error::Predicate`].
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F>(pub F);

impl<T, F, E> Predicate<T> for Fallible<F>
where
    F: Fn(&T) -> std::result::Result<bool, E>,
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    fn matches(&self, item: &T) -> Result<bool> {
        (self.0)(item).map_err(|e| Error::Predicate(e.into()))
    }
}

/// Reads the tag a [`TagFilter`] compares against.
pub trait TagAccessor<T> {
    /// Attribute name used in error messages.
    const ATTRIBUTE: &'static str;

    fn tag(item: &T) -> Option<&Tag>;
}

#[derive(Debug, Clone, Copy)]
pub struct Season;

impl<T: Seasonal> TagAccessor<T> for Season {
    const ATTRIBUTE: &'static str = "season";

    #[inline(always)]
    fn tag(item: &T) -> Option<&Tag> {
        item.season_tag()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Name;

impl<T: Named> TagAccessor<T> for Name {
    const ATTRIBUTE: &'static str = "name";

    #[inline(always)]
    fn tag(item: &T) -> Option<&Tag> {
        item.name_tag()
    }
}

/// Matches items whose `A` tag is the same instance as `tag`.
#[derive(Debug)]
pub struct TagFilter<A> {
    tag: Tag,
    _marker: PhantomData<A>,
}

impl<A> TagFilter<A> {
    pub fn new(tag: Tag) -> Self {
        TagFilter {
            tag,
            _marker: PhantomData,
        }
    }

    #[inline(always)]
    pub fn tag(&self) -> &Tag {
        &self.tag
    }
}

impl<A> Clone for TagFilter<A> {
    fn clone(&self) -> Self {
        TagFilter::new(self.tag.clone())
    }
}

impl<T, A: TagAccessor<T>> Predicate<T> for TagFilter<A> {
    #[inline]
    fn matches(&self, item: &T) -> Result<bool> {
        match A::tag(item) {
            Some(tag) => Ok(tag.same(&self.tag)),
            None => Err(Error::MissingAttribute {
                attribute: A::ATTRIBUTE,
            }),
        }
    }
}

pub type SeasonFilter = TagFilter<Season>;
pub type NameFilter = TagFilter<Name>;
