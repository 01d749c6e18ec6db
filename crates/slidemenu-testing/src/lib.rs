//! Testing utilities and harness for slidemenu

pub mod panels;
pub mod recorder;
pub mod robot;

pub use panels::*;
pub use recorder::*;
pub use robot::*;

pub mod prelude {
    pub use crate::panels::{MemoryPanelManager, RecordingTarget};
    pub use crate::recorder::StateRecorder;
    pub use crate::robot::{laid_out_surface, GestureRobot, FRAME_MS};
}
