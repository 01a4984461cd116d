//! DotSpark core: the deterministic thought-cloud layout engine behind the
//! React client's dot views.
//!
//! The crate consumes the backend's thoughts-listing JSON, assigns every
//! thought a stable, collision-free position in a padded grid, and hands the
//! positioned list back to the renderer. Positions are cached per mounted
//! view so a refetch never makes dots jump.

pub mod layout;
pub mod model;
pub mod output;
pub mod store;
pub mod wasm;

pub use layout::{
    allocate, compute_grid_plan, filter_recent, layout_cloud, CachedPlacement, GridConfig,
    GridPlan, OccupiedCells, PositionCache, Viewport, RECENT_WINDOW_DAYS,
};
pub use model::{
    parse_feed, parse_notifications, FeedError, Notification, NotificationKind, ThoughtFeed,
    ThoughtItem,
};
pub use output::{CloudOutput, ErrorInfo, PositionedThought};
pub use store::{Signal, SignalHub};
pub use wasm::CloudSession;
