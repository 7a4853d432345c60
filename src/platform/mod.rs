//! Platform abstraction layer
//!
//! The frame driver only needs two things from its host: "call me on the next
//! display refresh" and "never mind". The browser backs this with
//! `requestAnimationFrame`; tests and the headless runner use
//! [`ManualScheduler`] and feed timestamps themselves.

/// Opaque id of a pending frame request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Host capability for scheduling frame callbacks
pub trait Scheduler {
    /// Ask for one callback on the next refresh
    fn request_frame(&mut self) -> FrameHandle;
    /// Drop a request that has not fired yet
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Deterministic scheduler: requests are queued until the owner fires them
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: i32,
    pending: Vec<FrameHandle>,
    /// Total requests ever made
    pub requested: u32,
    /// Total cancellations ever made
    pub cancelled: u32,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of requests waiting to fire
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Remove the oldest pending request, as a refresh would
    pub fn fire(&mut self) -> Option<FrameHandle> {
        if self.pending.is_empty() {
            None
        } else {
            Some(self.pending.remove(0))
        }
    }
}

impl Scheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        self.requested += 1;
        let handle = FrameHandle(self.next_id);
        self.pending.push(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.cancelled += 1;
        self.pending.retain(|h| *h != handle);
    }
}
