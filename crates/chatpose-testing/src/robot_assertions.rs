//! Assertion helpers for interaction tests.

use chatpose_ui_graphics::Rect;

/// Assert that a value is within `tolerance` of `expected`.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that a rectangle is approximately equal to another.
pub fn assert_rect_approx_eq(actual: Rect, expected: Rect, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
    assert_approx_eq(
        actual.width,
        expected.width,
        tolerance,
        &format!("{} - width", msg),
    );
    assert_approx_eq(
        actual.height,
        expected.height,
        tolerance,
        &format!("{} - height", msg),
    );
}

/// Assert that `inner` lies inside `outer`.
pub fn assert_rect_within(inner: Rect, outer: Rect, msg: &str) {
    assert!(
        outer.contains_rect(&inner, 0.01),
        "{}: {:?} escapes {:?}",
        msg,
        inner,
        outer
    );
}

/// Assert how many items match `predicate`.
pub fn assert_count_matching<T: std::fmt::Debug>(
    items: &[T],
    expected: usize,
    predicate: impl Fn(&T) -> bool,
    msg: &str,
) {
    let actual = items.iter().filter(|item| predicate(item)).count();
    assert_eq!(
        actual, expected,
        "{}: expected {} matching items, found {} in {:?}",
        msg, expected, actual, items
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approx_eq_accepts_values_within_tolerance() {
        assert_approx_eq(10.05, 10.0, 0.1, "close");
    }

    #[test]
    #[should_panic(expected = "far")]
    fn approx_eq_rejects_values_outside_tolerance() {
        assert_approx_eq(11.0, 10.0, 0.1, "far");
    }

    #[test]
    fn rect_within_checks_every_edge() {
        assert_rect_within(
            Rect::new(10.0, 10.0, 20.0, 20.0),
            Rect::new(0.0, 0.0, 100.0, 100.0),
            "inside",
        );
    }

    #[test]
    fn count_matching_filters() {
        assert_count_matching(&[1, 2, 3, 4], 2, |n| n % 2 == 0, "evens");
    }
}
