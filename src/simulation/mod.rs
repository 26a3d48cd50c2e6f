pub mod events;
pub mod scheduler;
pub mod tick;

pub use events::{GameEvent, Outcome};
pub use scheduler::{ScheduledTask, Scheduler, TaskKind};
pub use tick::{run_frame, FrameInput};
