use chatpose_ui_graphics::Point;
use std::cell::Cell;
use std::rc::Rc;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// One pointer reading, in the conversation container's coordinate space.
///
/// Samples carry a shared consumed flag so the gesture layer can claim a
/// sample (an active swipe) and the scrollable container, which sees the same
/// sample afterwards, can leave it alone. Copies made with `clone` share the
/// flag.
#[derive(Clone, Debug)]
pub struct PointerSample {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
    /// Monotonic timestamp from the input source.
    pub uptime_nanos: u64,
    consumed: Rc<Cell<bool>>,
}

impl PointerSample {
    pub fn new(kind: PointerEventKind, position: Point, uptime_nanos: u64) -> Self {
        Self {
            id: 0,
            kind,
            position,
            uptime_nanos,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    pub fn down(position: Point, uptime_nanos: u64) -> Self {
        Self::new(PointerEventKind::Down, position, uptime_nanos)
    }

    pub fn moved(position: Point, uptime_nanos: u64) -> Self {
        Self::new(PointerEventKind::Move, position, uptime_nanos)
    }

    pub fn up(position: Point, uptime_nanos: u64) -> Self {
        Self::new(PointerEventKind::Up, position, uptime_nanos)
    }

    pub fn cancel(position: Point, uptime_nanos: u64) -> Self {
        Self::new(PointerEventKind::Cancel, position, uptime_nanos)
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }

    /// Whether the pointer is still pressed after this sample.
    pub fn is_pressed(&self) -> bool {
        matches!(self.kind, PointerEventKind::Down | PointerEventKind::Move)
    }

    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}
