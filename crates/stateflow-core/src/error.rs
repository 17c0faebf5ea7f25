use crate::LayoutDirection;

#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    /// Label and divider arithmetic assume left-to-right placement.
    #[error("state flow requires the default left-to-right direction, got {0:?}")]
    UnsupportedDirection(LayoutDirection),
    #[error("{type_name} does not implement Node")]
    NotANode { type_name: String },
    #[error("state flow is not attached")]
    NotAttached,
    #[error("state flow has not been measured")]
    NotMeasured,
    #[error("base layout failed: {0}")]
    Layout(String),
}

pub type Result<T, E = FlowError> = std::result::Result<T, E>;
