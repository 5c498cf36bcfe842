use composite_iter::{Boundary, Collection, Node, Plant, TagRegistry};
use pretty_assertions::assert_eq;

fn plant(registry: &mut TagRegistry, name: &str, season: &str) -> Node<Plant> {
    Node::item(Plant::new(registry.intern(name)).with_season(registry.intern(season)))
}

/// Group[Spring, Group[Summer, Spring], Autumn]
fn seasons(registry: &mut TagRegistry) -> Vec<Node<Plant>> {
    vec![Node::group([
        plant(registry, "Daffodil", "Spring"),
        Node::group([
            plant(registry, "Sunflower", "Summer"),
            plant(registry, "Tulip", "Spring"),
        ]),
        plant(registry, "Aster", "Autumn"),
    ])]
}

fn names<'a>(collection_items: impl Iterator<Item = composite_iter::Result<&'a Plant>>) -> Vec<String> {
    collection_items
        .map(|p| p.unwrap().name().to_string())
        .collect()
}

#[test]
fn unfiltered_traversal_both_ways() {
    let mut registry = TagRegistry::new();
    let root = seasons(&mut registry);
    let collection = Collection::new(&root);

    let mut cursor = collection.create_iterator().unwrap();
    let mut forward = vec![];
    while !cursor.is_done() {
        forward.push(cursor.current_item().unwrap().name().to_string());
        cursor.next().unwrap();
    }
    assert_eq!(forward, vec!["Daffodil", "Sunflower", "Tulip", "Aster"]);

    let mut backward = vec![];
    while let Some(p) = cursor.back().unwrap() {
        backward.push(p.name().to_string());
    }
    assert_eq!(backward, vec!["Aster", "Tulip", "Sunflower", "Daffodil"]);
}

#[test]
fn spring_filter_skips_other_seasons() {
    let mut registry = TagRegistry::new();
    let root = seasons(&mut registry);
    let collection = Collection::by_season(&root, &registry, "Spring");

    assert_eq!(names(collection.items()), vec!["Daffodil", "Tulip"]);
    assert_eq!(names(collection.rev_items()), vec!["Tulip", "Daffodil"]);
}

#[test]
fn leading_empty_group_yields_no_pause() {
    let mut registry = TagRegistry::new();
    let root = vec![Node::group([
        Node::empty_group(),
        Node::group([plant(&mut registry, "A", "Spring")]),
    ])];
    let collection = Collection::new(&root);

    let mut cursor = collection.create_iterator().unwrap();
    assert_eq!(cursor.current_item().unwrap().name().as_str(), "A");
    assert_eq!(cursor.next().unwrap(), None);
    assert_eq!(cursor.boundary(), Some(Boundary::PastEnd));
}

#[test]
fn back_from_first_item_parks_before_first() {
    let mut registry = TagRegistry::new();
    let root = seasons(&mut registry);
    let mut cursor = Collection::new(&root).create_iterator().unwrap();

    assert_eq!(cursor.back().unwrap(), None);
    assert!(cursor.is_done());
    assert!(!cursor.past_end());
}

#[test]
fn name_filter_without_matches() {
    let mut registry = TagRegistry::new();
    let root = seasons(&mut registry);
    let collection = Collection::by_name(&root, &registry, "Rose");

    let mut cursor = collection.create_iterator().unwrap();
    assert!(cursor.is_done());
    assert_eq!(cursor.back().unwrap(), None);
    assert!(cursor.is_done());
    assert!(!cursor.past_end());
}

#[test]
fn tags_compare_by_identity() {
    let mut registry = TagRegistry::new();
    let root = seasons(&mut registry);

    // Interning after the tree was built still hands out the same instance.
    let spring = registry.intern("Spring");
    let collection = Collection::with_season_tag(&root, spring);
    assert_eq!(collection.count().unwrap(), 2);

    let mut other = TagRegistry::new();
    let foreign = other.intern("Spring");
    let collection = Collection::with_season_tag(&root, foreign);
    assert_eq!(collection.count().unwrap(), 0);
}
