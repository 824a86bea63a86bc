use serde::{Deserialize, Serialize};

use crate::screen::Screen;

/// Handle for a scheduled one-shot timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerId(pub u64);

/// A pending one-shot timer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneShot<A> {
    pub id: TimerId,
    /// Screen whose exit cancels this timer.
    pub owner: Screen,
    /// Absolute wall-clock deadline in milliseconds.
    pub fire_at_ms: u64,
    pub action: A,
}

/// Pool of pending one-shot timers.
///
/// Operates on wall-clock values supplied by the caller -- no internal
/// thread. A timer leaves the pool exactly once: either it comes due in
/// `tick()` or it is cancelled with its owner; a cancelled timer can never
/// fire afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimerPool<A> {
    next_id: u64,
    pending: Vec<OneShot<A>>,
}

impl<A> TimerPool<A> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            pending: Vec::new(),
        }
    }

    /// Register a one-shot timer owned by `owner`, due `delay_ms` after
    /// `now_ms`.
    pub fn schedule(&mut self, owner: Screen, now_ms: u64, delay_ms: u64, action: A) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(OneShot {
            id,
            owner,
            fire_at_ms: now_ms.saturating_add(delay_ms),
            action,
        });
        tracing::debug!(id = id.0, owner = %owner, delay_ms, "timer scheduled");
        id
    }

    /// Remove and return every timer due at `now_ms`, earliest deadline
    /// first. Ties fire in scheduling order.
    pub fn tick(&mut self, now_ms: u64) -> Vec<OneShot<A>> {
        let mut due: Vec<OneShot<A>> = Vec::new();
        let mut keep: Vec<OneShot<A>> = Vec::with_capacity(self.pending.len());
        for timer in self.pending.drain(..) {
            if timer.fire_at_ms <= now_ms {
                due.push(timer);
            } else {
                keep.push(timer);
            }
        }
        self.pending = keep;
        due.sort_by_key(|t| (t.fire_at_ms, t.id.0));
        for timer in &due {
            tracing::debug!(id = timer.id.0, owner = %timer.owner, "timer fired");
        }
        due
    }

    /// Cancel every timer owned by `owner`. Returns how many were dropped.
    pub fn cancel_owned_by(&mut self, owner: Screen) -> usize {
        let before = self.pending.len();
        self.pending.retain(|t| t.owner != owner);
        let cancelled = before - self.pending.len();
        if cancelled > 0 {
            tracing::debug!(owner = %owner, cancelled, "timers cancelled");
        }
        cancelled
    }

    /// Earliest pending deadline, if any. Lets a driver jump its synthetic
    /// clock straight to the next interesting instant.
    pub fn next_fire_at(&self) -> Option<u64> {
        self.pending.iter().map(|t| t.fire_at_ms).min()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
