use crate::notification::Notification;
use crate::notification::NotificationLevel;
use anyhow::Result;
use log::debug;
use std::time::Duration;

/// How long a toast stays on screen before its exit transition starts.
pub const DISPLAY_DURATION: Duration = Duration::from_millis(3000);
pub const EXIT_DURATION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(pub u64);

/// Somewhere transient elements can be shown and later taken away.
pub trait DisplaySurface {
    fn append(&mut self, notification: Notification) -> Result<ToastId>;
    fn exit_after(&mut self, id: ToastId, delay: Duration) -> Result<()>;
    fn remove_after(&mut self, id: ToastId, delay: Duration) -> Result<()>;
    /// Unknown ids are ignored.
    fn remove(&mut self, id: ToastId);
}

#[derive(Debug, Clone, Copy)]
pub struct Notifier {
    pub display: Duration,
    pub exit: Duration,
}

impl Default for Notifier {
    fn default() -> Self {
        Self {
            display: DISPLAY_DURATION,
            exit: EXIT_DURATION,
        }
    }
}

impl Notifier {
    /// Show a toast and schedule its removal. Never fails: a missing or
    /// broken surface turns the call into a no-op.
    pub fn notify(
        &self,
        surface: Option<&mut dyn DisplaySurface>,
        message: impl Into<String>,
        level: NotificationLevel,
    ) {
        let Some(surface) = surface else {
            debug!("no display surface, dropping {} notification", level);
            return;
        };

        let notification = match level {
            NotificationLevel::Info => Notification::info(message),
            NotificationLevel::Success => Notification::success(message),
            NotificationLevel::Error => Notification::error(message),
        };
        let id = match surface.append(notification) {
            Ok(id) => id,
            Err(err) => {
                debug!("could not show notification: {}", err);
                return;
            }
        };

        if let Err(err) = self.schedule(surface, id) {
            debug!("could not schedule removal of toast {}: {}", id.0, err);
            surface.remove(id);
        }
    }

    fn schedule(&self, surface: &mut dyn DisplaySurface, id: ToastId) -> Result<()> {
        surface.exit_after(id, self.display)?;
        surface.remove_after(id, self.display + self.exit)?;
        Ok(())
    }
}
