use crate::tag::Tag;

/// Items which carry a name tag.
pub trait Named {
    fn name_tag(&self) -> Option<&Tag>;
}

/// Items which carry a season tag.
pub trait Seasonal {
    fn season_tag(&self) -> Option<&Tag>;
}

/// Inventory item. The season is optional because season tagging is done
/// by a separate decoration step.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Plant {
    name: Tag,
    season: Option<Tag>,
}

impl Plant {
    pub fn new(name: Tag) -> Self {
        Plant { name, season: None }
    }

    pub fn with_season(mut self, season: Tag) -> Self {
        self.season = Some(season);
        self
    }

    #[inline(always)]
    pub fn name(&self) -> &Tag {
        &self.name
    }

    #[inline(always)]
    pub fn season(&self) -> Option<&Tag> {
        self.season.as_ref()
    }

    pub fn set_season(&mut self, season: Option<Tag>) {
        self.season = season;
    }
}

impl Named for Plant {
    #[inline(always)]
    fn name_tag(&self) -> Option<&Tag> {
        Some(&self.name)
    }
}

impl Seasonal for Plant {
    #[inline(always)]
    fn season_tag(&self) -> Option<&Tag> {
        self.season.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::TagRegistry;

    #[test]
    fn test_accessors() {
        let mut registry = TagRegistry::new();
        let rose = Plant::new(registry.intern("Rose"));
        assert_eq!(rose.season_tag(), None);
        assert_eq!(rose.name_tag(), Some(&registry.intern("Rose")));

        let rose = rose.with_season(registry.intern("Spring"));
        assert_eq!(rose.season(), Some(&registry.intern("Spring")));

        let mut tulip = Plant::new(registry.intern("Tulip"));
        tulip.set_season(Some(registry.intern("Autumn")));
        assert_eq!(tulip.season_tag().map(Tag::as_str), Some("Autumn"));
    }
}
