use dragload_ui_graphics::Point;
use smallvec::SmallVec;
use std::cell::Cell;
use std::rc::Rc;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
}

/// Pointer or touch event with consumption tracking.
///
/// A handler consumes an event to stop the platform's native handling, e.g.
/// the overscroll bounce a browser performs when a list is already at its top.
/// Touch platforms report every active contact in `touches`; only the first
/// one is consulted.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
    pub touches: SmallVec<[Point; 2]>,
    /// Shared via Rc<Cell> so consumption is visible across copies.
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    /// Mouse-style event with a single position and no touch list.
    pub fn new(kind: PointerEventKind, position: Point) -> Self {
        Self {
            id: 0,
            kind,
            position,
            touches: SmallVec::new(),
            consumed: Rc::new(Cell::new(false)),
        }
    }

    /// Touch event carrying the list of active contacts.
    ///
    /// `position` is taken from the first contact. A touch-end usually
    /// arrives with an empty list.
    pub fn touch(kind: PointerEventKind, touches: impl IntoIterator<Item = Point>) -> Self {
        let touches: SmallVec<[Point; 2]> = touches.into_iter().collect();
        let position = touches.first().copied().unwrap_or(Point::ZERO);
        Self {
            id: 0,
            kind,
            position,
            touches,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }

    /// Vertical position of the first contact, or of the event itself when
    /// there is no touch list.
    pub fn primary_y(&self) -> f32 {
        self.touches
            .first()
            .map(|touch| touch.y)
            .unwrap_or(self.position.y)
    }

    /// Mark this event as consumed, suppressing native scroll handling.
    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}
