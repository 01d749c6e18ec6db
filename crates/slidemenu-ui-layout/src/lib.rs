//! Layout contracts for slidemenu
//!
//! The host view tree owns real measurement; this crate only describes what a
//! slidemenu container asks of it and what it hands back to children.

mod axis;
mod child;
mod constraints;

pub use axis::*;
pub use child::*;
pub use constraints::*;

pub mod prelude {
    pub use crate::axis::Axis;
    pub use crate::child::LayoutChild;
    pub use crate::constraints::Constraints;
}
