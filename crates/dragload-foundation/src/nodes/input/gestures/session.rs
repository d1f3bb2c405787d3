//! State of a single touch sequence.

/// Whether the drag has touched the top of the scroll region yet.
///
/// Set at most once per session; later boundary crossings within the same
/// session do not move the latch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BoundaryState {
    NotReached,
    /// Raw displacement observed when the top was first reached.
    ReachedAt(f32),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub(crate) start_y: f32,
    pub(crate) current_y: f32,
    pub(crate) raw_displacement: f32,
    pub(crate) scroll_offset_at_start: f32,
    pub(crate) active: bool,
    pub(crate) boundary: BoundaryState,
    pub(crate) release_candidate: Option<f32>,
}

impl DragSession {
    pub const fn idle() -> Self {
        Self {
            start_y: 0.0,
            current_y: 0.0,
            raw_displacement: 0.0,
            scroll_offset_at_start: 0.0,
            active: false,
            boundary: BoundaryState::NotReached,
            release_candidate: None,
        }
    }

    pub const fn begin(pointer_y: f32, scroll_offset: f32) -> Self {
        Self {
            start_y: pointer_y,
            current_y: pointer_y,
            raw_displacement: 0.0,
            scroll_offset_at_start: scroll_offset,
            active: true,
            boundary: BoundaryState::NotReached,
            release_candidate: None,
        }
    }

    pub fn start_y(&self) -> f32 {
        self.start_y
    }

    pub fn current_y(&self) -> f32 {
        self.current_y
    }

    /// `current_y - start_y`; positive means the finger moved down.
    pub fn raw_displacement(&self) -> f32 {
        self.raw_displacement
    }

    pub fn scroll_offset_at_start(&self) -> f32 {
        self.scroll_offset_at_start
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn boundary(&self) -> BoundaryState {
        self.boundary
    }

    /// Pull distance recorded by the latest latched move, read on release.
    pub fn release_candidate(&self) -> Option<f32> {
        self.release_candidate
    }

    pub(crate) fn track(&mut self, pointer_y: f32) {
        self.current_y = pointer_y;
        self.raw_displacement = pointer_y - self.start_y;
    }

    /// Latches the current displacement if the boundary was not reached yet.
    /// Returns true when this call set the latch.
    pub(crate) fn latch_boundary(&mut self) -> bool {
        match self.boundary {
            BoundaryState::NotReached => {
                self.boundary = BoundaryState::ReachedAt(self.raw_displacement);
                true
            }
            BoundaryState::ReachedAt(_) => false,
        }
    }

    pub fn is_latched(&self) -> bool {
        matches!(self.boundary, BoundaryState::ReachedAt(_))
    }

    /// Distance pulled since the boundary was reached; `None` before that.
    pub fn adjusted_displacement(&self) -> Option<f32> {
        match self.boundary {
            BoundaryState::ReachedAt(offset) => Some(self.raw_displacement - offset),
            BoundaryState::NotReached => None,
        }
    }
}

impl Default for DragSession {
    fn default() -> Self {
        Self::idle()
    }
}
