//! Output types for React frontend consumption.
//!
//! These structs are serialized to JSON and sent to the React frontend,
//! which renders each dot at its percentage coordinates.

use serde::Serialize;

use crate::layout::{CachedPlacement, GridPlan};
use crate::model::ThoughtItem;

/// A thought merged with its resolved placement, ready to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionedThought {
    #[serde(flatten)]
    pub thought: ThoughtItem,
    /// Horizontal center, percent of the container.
    pub x: f64,
    /// Vertical center, percent of the container.
    pub y: f64,
    /// Dot diameter in px.
    pub size: f64,
    /// Tilt in degrees. Always 0 in the current product; the field stays so
    /// the renderer contract doesn't change if tilt comes back.
    pub rotation: f64,
}

impl PositionedThought {
    pub fn new(thought: ThoughtItem, placement: CachedPlacement) -> Self {
        Self {
            thought,
            x: placement.x,
            y: placement.y,
            size: placement.size,
            rotation: placement.rotation,
        }
    }
}

/// Error information surfaced to the frontend instead of a thrown exception.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorInfo {
    pub message: String,
}

/// The combined layout result sent to React.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CloudOutput {
    pub dots: Vec<PositionedThought>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<GridPlan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

impl CloudOutput {
    /// An empty output carrying only an error message.
    pub fn from_error(message: String) -> Self {
        Self {
            dots: vec![],
            plan: None,
            error: Some(ErrorInfo { message }),
        }
    }
}
