//! Domain model for the stripboard scheduling engine.
//!
//! - [`scene`]: the canonical per-scene shoot record and its status
//!   lifecycle.
//! - [`day`]: shooting days and their ordered schedule blocks.

pub mod day;
pub mod scene;

pub use day::{default_schedule_blocks, BlockKind, ScheduleBlock, ShootingDay, SlotContent};
pub use scene::{Scene, SceneMetadata};
