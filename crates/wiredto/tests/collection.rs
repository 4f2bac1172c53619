use wiredto::{map, prelude::*};

#[derive(Clone, Debug, Default, Dto, PartialEq)]
struct Point {
    x: i64,
    y: i64,
}

fn raw_point(x: i64, y: i64) -> Value {
    Value::Map(map! { "x" => x, "y" => y })
}

#[test]
fn mixed_construction_preserves_order_and_length() {
    let typed = Point { x: 9, y: 9 };

    let collection = DtoCollection::from_items(vec![
        CollectionItem::raw(map! { "x" => 1i64, "y" => 2i64 }),
        CollectionItem::item(typed.clone()),
        CollectionItem::raw(map! { "x" => 3i64, "y" => 4i64 }),
    ]);

    assert_eq!(collection.len(), 3);
    assert_eq!(collection.get(0), Some(&Point { x: 1, y: 2 }));
    assert_eq!(collection.get(1), Some(&typed));
    assert_eq!(collection.get(2), Some(&Point { x: 3, y: 4 }));
}

#[test]
fn already_typed_elements_are_reused_unchanged() {
    let original = Point { x: 5, y: -5 };
    let collection = DtoCollection::from_items(vec![CollectionItem::item(original.clone())]);

    assert_eq!(collection.get(0), Some(&original));
}

#[test]
fn deref_exposes_the_sequence_surface() {
    let collection = DtoCollection::from_vec(vec![Point { x: 1, y: 1 }, Point { x: 2, y: 2 }]);

    // Deref to Vec<T> gives iteration, indexing, membership
    assert_eq!(collection[1], Point { x: 2, y: 2 });
    assert!(collection.contains(&Point { x: 1, y: 1 }));

    let xs: Vec<i64> = collection.iter().map(|point| point.x).collect();
    assert_eq!(xs, vec![1, 2]);
}

#[test]
fn owned_iteration_consumes_in_order() {
    let collection: DtoCollection<Point> = DtoCollection::from_raw(&wiredto::list![
        map! { "x" => 1i64, "y" => 0i64 },
        map! { "x" => 2i64, "y" => 0i64 },
    ]);

    let xs: Vec<i64> = collection.into_iter().map(|point| point.x).collect();
    assert_eq!(xs, vec![1, 2]);
}

#[test]
fn round_trips_through_raw_form() {
    let raw = wiredto::list![raw_point(1, 2), raw_point(3, 4)];

    let collection = DtoCollection::<Point>::from_raw(&raw);
    assert_eq!(collection.to_raw(), raw);
}
