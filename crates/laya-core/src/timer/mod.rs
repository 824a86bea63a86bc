//! One-shot cosmetic timers with scoped ownership.
//!
//! No internal threads: the caller ticks the pool with a wall-clock value
//! and applies whatever came due. Every timer is owned by the screen that
//! scheduled it and is cancelled when that screen exits, on every exit path.

mod pool;

pub use pool::{OneShot, TimerId, TimerPool};
