use std::fmt;

use chrono::Utc;

use crate::model::{IdStrategy, TaskId};

/// Source of fresh task ids, injected into a [`TaskStore`](super::task_store::TaskStore)
pub trait IdGenerator: fmt::Debug {
    fn next_id(&mut self) -> TaskId;
}

/// Wall-clock ids (milliseconds since the epoch).
///
/// Two adds within the same millisecond would collide on the raw clock, so an
/// id is never allowed to fall at or below the previous one: a stalled or
/// backwards clock yields `last + 1`.
pub struct ClockIds {
    last: u64,
    now: fn() -> u64,
}

impl ClockIds {
    pub fn new() -> Self {
        Self::with_clock(now_millis)
    }

    pub fn with_clock(now: fn() -> u64) -> Self {
        ClockIds { last: 0, now }
    }
}

impl Default for ClockIds {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ClockIds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClockIds").field("last", &self.last).finish()
    }
}

impl IdGenerator for ClockIds {
    fn next_id(&mut self) -> TaskId {
        let now = (self.now)();
        let id = if now > self.last { now } else { self.last + 1 };
        self.last = id;
        TaskId(id)
    }
}

fn now_millis() -> u64 {
    Utc::now().timestamp_millis().max(0) as u64
}

/// Monotonic counter starting at 1
#[derive(Debug, Default)]
pub struct SequentialIds {
    last: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> TaskId {
        self.last += 1;
        TaskId(self.last)
    }
}

/// Build the generator selected in configuration
pub fn generator_for(strategy: IdStrategy) -> Box<dyn IdGenerator> {
    match strategy {
        IdStrategy::Clock => Box::new(ClockIds::new()),
        IdStrategy::Sequential => Box::new(SequentialIds::new()),
    }
}
