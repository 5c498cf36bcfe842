use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::rc::Rc;

/// Interned attribute value (a season, a plant name, ...).
///
/// Two tags are equal only if they are the same instance, so comparing
/// tags is a pointer comparison. Tags handed out by one [`TagRegistry`]
/// for the same raw value are always the same instance.
#[derive(Clone)]
pub struct Tag {
    inner: Rc<str>,
}

impl Tag {
    /// Creates a tag that is not known to any registry. It compares
    /// unequal to every other tag, including registry tags with the same
    /// text.
    pub fn detached(value: &str) -> Self {
        Tag {
            inner: Rc::from(value),
        }
    }

    #[inline(always)]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    #[inline(always)]
    pub fn same(&self, other: &Tag) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for Tag {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}

impl Eq for Tag {}

impl Hash for Tag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (Rc::as_ptr(&self.inner) as *const u8 as usize).hash(state)
    }
}

impl Deref for Tag {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hands out one canonical [`Tag`] per raw value.
#[derive(Debug, Default)]
pub struct TagRegistry {
    tags: HashMap<Box<str>, Tag>,
}

impl TagRegistry {
    pub fn new() -> Self {
        TagRegistry {
            tags: HashMap::new(),
        }
    }

    /// Returns the canonical tag for `value`, creating it on first use.
    pub fn intern(&mut self, value: &str) -> Tag {
        if let Some(tag) = self.tags.get(value) {
            return tag.clone();
        }
        let tag = Tag::detached(value);
        self.tags.insert(value.into(), tag.clone());
        tag
    }

    /// Returns the canonical tag for `value` if one was interned.
    #[inline]
    pub fn get(&self, value: &str) -> Option<Tag> {
        self.tags.get(value).cloned()
    }

    /// Like [`TagRegistry::get`], but falls back to a detached tag which
    /// matches nothing this registry has handed out.
    pub fn resolve(&self, value: &str) -> Tag {
        match self.get(value) {
            Some(tag) => tag,
            None => Tag::detached(value),
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
