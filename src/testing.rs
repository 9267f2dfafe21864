//! Test doubles that record calls instead of drawing, sleeping or writing.

use crate::clipboard::Clipboard;
use crate::notification::Notification;
use crate::notifier::DisplaySurface;
use crate::notifier::ToastId;
use crate::timer::TimerId;
use crate::timer::TimerService;
use crate::window::WindowControl;
use anyhow::bail;
use anyhow::Result;
use std::time::Duration;

#[derive(Default)]
pub struct RecordingSurface {
    pub appended: Vec<(ToastId, Notification)>,
    pub exits: Vec<(ToastId, Duration)>,
    pub removals: Vec<(ToastId, Duration)>,
    pub removed: Vec<ToastId>,
    pub fail_append: bool,
    pub fail_schedule: bool,
}

impl DisplaySurface for RecordingSurface {
    fn append(&mut self, notification: Notification) -> Result<ToastId> {
        if self.fail_append {
            bail!("surface unavailable");
        }
        let id = ToastId(self.appended.len() as u64);
        self.appended.push((id, notification));
        Ok(id)
    }

    fn exit_after(&mut self, id: ToastId, delay: Duration) -> Result<()> {
        if self.fail_schedule {
            bail!("cannot schedule");
        }
        self.exits.push((id, delay));
        Ok(())
    }

    fn remove_after(&mut self, id: ToastId, delay: Duration) -> Result<()> {
        if self.fail_schedule {
            bail!("cannot schedule");
        }
        self.removals.push((id, delay));
        Ok(())
    }

    fn remove(&mut self, id: ToastId) {
        self.removed.push(id);
    }
}

/// `(id, interval, repeating)` for every scheduled timer.
#[derive(Default)]
pub struct FakeTimers {
    pub scheduled: Vec<(TimerId, Duration, bool)>,
    pub cancelled: Vec<TimerId>,
}

impl FakeTimers {
    fn push(&mut self, interval: Duration, repeating: bool) -> TimerId {
        let id = TimerId(self.scheduled.len() as u64);
        self.scheduled.push((id, interval, repeating));
        id
    }
}

impl TimerService for FakeTimers {
    fn schedule_repeating(&mut self, interval: Duration) -> TimerId {
        self.push(interval, true)
    }

    fn schedule_once(&mut self, delay: Duration) -> TimerId {
        self.push(delay, false)
    }

    fn cancel(&mut self, id: TimerId) {
        self.cancelled.push(id);
    }
}

#[derive(Default)]
pub struct RecordingWindow {
    pub close_requests: usize,
}

impl WindowControl for RecordingWindow {
    fn request_close(&mut self) {
        self.close_requests += 1;
    }
}

#[derive(Default)]
pub struct MemoryClipboard {
    pub fail: bool,
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, _text: &str) -> Result<()> {
        if self.fail {
            bail!("clipboard unavailable");
        }
        Ok(())
    }
}
