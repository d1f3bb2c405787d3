pub mod pull_refresh;
pub mod session;

pub use pull_refresh::{PullToRefresh, ReleaseOutcome};
pub use session::{BoundaryState, DragSession};
