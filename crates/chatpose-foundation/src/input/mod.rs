pub mod types;

pub use types::{PointerEventKind, PointerId, PointerSample};

#[cfg(test)]
mod tests {
    use super::*;
    use chatpose_ui_graphics::Point;

    #[test]
    fn consumption_is_shared_between_copies() {
        let sample = PointerSample::moved(Point::new(4.0, 2.0), 10);
        let seen_by_scroll = sample.clone();
        assert!(!seen_by_scroll.is_consumed());
        sample.consume();
        assert!(seen_by_scroll.is_consumed());
    }

    #[test]
    fn pressed_flag_follows_kind() {
        let at = Point::ZERO;
        assert!(PointerSample::down(at, 0).is_pressed());
        assert!(PointerSample::moved(at, 0).is_pressed());
        assert!(!PointerSample::up(at, 0).is_pressed());
        assert!(!PointerSample::cancel(at, 0).is_pressed());
    }
}
