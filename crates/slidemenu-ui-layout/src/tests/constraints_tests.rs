use super::*;

#[test]
fn tight_constraints_are_exact_on_both_axes() {
    let constraints = Constraints::tight(480.0, 800.0);
    assert!(constraints.is_exact(Axis::Horizontal));
    assert!(constraints.is_exact(Axis::Vertical));
    assert_eq!(constraints.first_inexact_axis(), None);
}

#[test]
fn loose_width_is_reported_before_height() {
    let constraints = Constraints::loose(480.0, 800.0);
    assert_eq!(constraints.first_inexact_axis(), Some(Axis::Horizontal));

    let only_height = Constraints::loose(480.0, 800.0).tighten_width(480.0);
    assert_eq!(only_height.first_inexact_axis(), Some(Axis::Vertical));
}

#[test]
fn unbounded_tight_pair_is_not_exact() {
    let constraints = Constraints::tight(f32::INFINITY, 800.0);
    assert!(!constraints.is_exact(Axis::Horizontal));
}

#[test]
fn constrain_clamps_into_range() {
    let constraints = Constraints::loose(100.0, 50.0);
    assert_eq!(constraints.constrain(150.0, -3.0), (100.0, 0.0));
}
