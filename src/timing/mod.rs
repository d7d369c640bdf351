//! Time and deferred work.
//!
//! Two pieces keep the engine deterministic under test:
//!
//! - [`Clock`]: injectable time source. [`SystemClock`] for real play,
//!   [`ManualClock`] for harnesses that fast-forward time.
//! - [`TimerQueue`]: the flip-back and celebration tasks waiting to fire,
//!   each tagged with the [`Generation`](crate::core::Generation) that
//!   scheduled it.

pub mod clock;
pub mod timers;

pub use clock::{Clock, ManualClock, SystemClock};
pub use timers::{ScheduledTask, TimerQueue, TimerTask};
