use slidemenu_ui_layout::Axis;

/// Misuse and configuration failures of the sliding menu.
///
/// None of these are transient; retrying the same call fails the same way.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum SlidingError {
    /// Menu width fraction outside `[0, 1]` (or NaN). The previous value is kept.
    #[error("menu width must be between 0 and 1, got {0}")]
    InvalidMenuWidth(f32),
    /// A sliding surface holds exactly one child.
    #[error("cannot add another child to this sliding surface")]
    ChildAlreadyAttached,
    /// The parent handed down a flexible constraint.
    #[error("sliding surface can only be measured with an exact {axis}")]
    InexactConstraints { axis: Axis },
}
