use hl_core::aggregate::{union_boxes, union_boxes_with_policy, PagePolicy};
use hl_core::types::BoundingBox;

fn bx(x: f64, y: f64, width: f64, height: f64, page: Option<i64>) -> BoundingBox {
    BoundingBox { x, y, width, height, page }
}

#[test]
fn union_of_empty_input_is_none() {
    assert_eq!(union_boxes(&[]), None);
}

#[test]
fn union_of_single_box_is_identity() {
    let b = bx(10.0, 20.0, 100.0, 20.0, Some(1));
    assert_eq!(union_boxes(&[b]), Some(b));
}

#[test]
fn union_of_two_boxes_is_smallest_covering_rectangle() {
    let a = bx(10.0, 10.0, 20.0, 10.0, Some(1));
    let b = bx(40.0, 30.0, 10.0, 10.0, Some(1));
    let u = union_boxes(&[a, b]).expect("union");
    assert_eq!((u.x, u.y), (10.0, 10.0));
    assert_eq!((u.width, u.height), (40.0, 30.0));
    // covers both inputs exactly to their far edges
    assert_eq!(u.right(), b.right());
    assert_eq!(u.bottom(), b.bottom());
}

#[test]
fn non_finite_boxes_are_filtered_before_union() {
    let good = bx(5.0, 5.0, 10.0, 10.0, Some(2));
    let bad = bx(f64::NAN, 5.0, 10.0, 10.0, Some(2));
    assert_eq!(union_boxes(&[bad, good]), Some(good));
    assert_eq!(union_boxes(&[bad]), None);
}

#[test]
fn majority_page_wins() {
    let boxes = [
        bx(0.0, 0.0, 1.0, 1.0, Some(2)),
        bx(2.0, 0.0, 1.0, 1.0, Some(1)),
        bx(4.0, 0.0, 1.0, 1.0, Some(2)),
    ];
    let u = union_boxes(&boxes).expect("union");
    assert_eq!(u.page, Some(2));
}

#[test]
fn page_count_ties_resolve_to_smallest_page() {
    let boxes = [
        bx(0.0, 0.0, 1.0, 1.0, Some(3)),
        bx(2.0, 0.0, 1.0, 1.0, Some(1)),
    ];
    let u = union_boxes(&boxes).expect("union");
    assert_eq!(u.page, Some(1));
}

#[test]
fn union_without_pages_carries_no_page() {
    let boxes = [bx(0.0, 0.0, 1.0, 1.0, None), bx(2.0, 0.0, 1.0, 1.0, None)];
    assert_eq!(union_boxes(&boxes).and_then(|u| u.page), None);
}

#[test]
fn first_box_policy_uses_first_paged_box() {
    let boxes = [
        bx(0.0, 0.0, 1.0, 1.0, None),
        bx(2.0, 0.0, 1.0, 1.0, Some(3)),
        bx(4.0, 0.0, 1.0, 1.0, Some(1)),
        bx(6.0, 0.0, 1.0, 1.0, Some(1)),
    ];
    let u = union_boxes_with_policy(&boxes, PagePolicy::FirstBox).expect("union");
    assert_eq!(u.page, Some(3));

    let majority = union_boxes_with_policy(&boxes, PagePolicy::Majority).expect("union");
    assert_eq!(majority.page, Some(1));
}
