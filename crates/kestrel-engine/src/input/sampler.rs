use std::collections::VecDeque;

use super::snapshot::DeviceSnapshot;

/// Platform boundary: reports the instantaneous device state.
///
/// `read` is called exactly once per tick and must not block.
pub trait DeviceSource {
    fn read(&mut self) -> DeviceSnapshot;
}

impl<F> DeviceSource for F
where
    F: FnMut() -> DeviceSnapshot,
{
    fn read(&mut self) -> DeviceSnapshot {
        self()
    }
}

/// Holds the current/previous snapshot pair for one input context.
///
/// The previous snapshot of tick `t` is always the current snapshot of tick
/// `t - 1`; nothing older is retained.
#[derive(Debug)]
pub struct DeviceSampler<S> {
    source: S,
    previous: DeviceSnapshot,
    current: DeviceSnapshot,
}

impl<S: DeviceSource> DeviceSampler<S> {
    /// Both snapshots start neutral, so keys already held at startup are
    /// reported as `Pressed` on the first tick.
    pub fn new(source: S) -> Self {
        Self {
            source,
            previous: DeviceSnapshot::neutral(),
            current: DeviceSnapshot::neutral(),
        }
    }

    /// Reads the source once and advances the pair.
    pub fn sample(&mut self) -> DeviceSnapshot {
        self.previous = self.current;
        self.current = self.source.read();
        self.current
    }

    /// Advances the pair with a neutral current snapshot instead of reading
    /// the source. The cursor position is carried over so a reset does not
    /// read as cursor movement.
    pub fn reset(&mut self) {
        self.previous = self.current;
        self.current = self.current.released();
    }

    #[inline]
    pub fn current(&self) -> &DeviceSnapshot {
        &self.current
    }

    #[inline]
    pub fn previous(&self) -> &DeviceSnapshot {
        &self.previous
    }

    #[inline]
    pub fn source(&self) -> &S {
        &self.source
    }

    #[inline]
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Consumes the sampler and returns the source.
    pub fn into_source(self) -> S {
        self.source
    }
}

/// Replays a fixed sequence of snapshots, one per read.
///
/// Once the queue is exhausted the last snapshot repeats, which models a
/// device whose state stopped changing.
#[derive(Debug, Default, Clone)]
pub struct ScriptedSource {
    queue: VecDeque<DeviceSnapshot>,
    last: DeviceSnapshot,
}

impl ScriptedSource {
    pub fn new(snapshots: impl IntoIterator<Item = DeviceSnapshot>) -> Self {
        Self {
            queue: snapshots.into_iter().collect(),
            last: DeviceSnapshot::neutral(),
        }
    }

    /// Appends a snapshot to the end of the script.
    pub fn push(&mut self, snapshot: DeviceSnapshot) {
        self.queue.push_back(snapshot);
    }

    /// Snapshots not yet read.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl DeviceSource for ScriptedSource {
    fn read(&mut self) -> DeviceSnapshot {
        if let Some(next) = self.queue.pop_front() {
            self.last = next;
        }
        self.last
    }
}
