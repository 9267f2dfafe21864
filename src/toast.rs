use crate::notification::Notification;
use crate::notifier::DisplaySurface;
use crate::notifier::ToastId;
use crate::notifier::EXIT_DURATION;
use anyhow::anyhow;
use anyhow::Result;
use std::time::Duration;
use tokio::time::Instant;

pub const ENTER_DURATION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Entering,
    Visible,
    Leaving,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: ToastId,
    pub notification: Notification,
    shown_at: Instant,
    exit_at: Option<Instant>,
    remove_at: Option<Instant>,
}

impl Toast {
    pub fn phase(&self, now: Instant) -> ToastPhase {
        if self.exit_at.is_some_and(|at| now >= at) {
            return ToastPhase::Leaving;
        }
        if now.duration_since(self.shown_at) < ENTER_DURATION {
            return ToastPhase::Entering;
        }
        ToastPhase::Visible
    }

    /// How far the toast has slid into view: 0.0 is off screen, 1.0 fully in.
    pub fn progress(&self, now: Instant) -> f32 {
        match self.phase(now) {
            ToastPhase::Visible => 1.0,
            ToastPhase::Entering => ratio(now.duration_since(self.shown_at), ENTER_DURATION),
            ToastPhase::Leaving => {
                let exit_at = self.exit_at.unwrap_or(now);
                let length = self
                    .remove_at
                    .map(|at| at.saturating_duration_since(exit_at))
                    .unwrap_or(EXIT_DURATION);
                1.0 - ratio(now.duration_since(exit_at), length)
            }
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        self.remove_at.is_some_and(|at| now >= at)
    }
}

fn ratio(elapsed: Duration, total: Duration) -> f32 {
    if total.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
}

/// Toast overlay drawn in the top right corner of the terminal.
pub struct ToastStack {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl Default for ToastStack {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastStack {
    pub fn new() -> Self {
        Self {
            toasts: Vec::new(),
            next_id: 0,
        }
    }

    /// Oldest first.
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Drop every toast whose removal time has passed. Returns true when
    /// something was removed.
    pub fn prune(&mut self, now: Instant) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| !toast.is_expired(now));
        before != self.toasts.len()
    }

    fn find_mut(&mut self, id: ToastId) -> Result<&mut Toast> {
        self.toasts
            .iter_mut()
            .find(|toast| toast.id == id)
            .ok_or_else(|| anyhow!("toast {} is not on screen", id.0))
    }
}

impl DisplaySurface for ToastStack {
    fn append(&mut self, notification: Notification) -> Result<ToastId> {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            notification,
            shown_at: Instant::now(),
            exit_at: None,
            remove_at: None,
        });
        Ok(id)
    }

    fn exit_after(&mut self, id: ToastId, delay: Duration) -> Result<()> {
        self.find_mut(id)?.exit_at = Some(Instant::now() + delay);
        Ok(())
    }

    fn remove_after(&mut self, id: ToastId, delay: Duration) -> Result<()> {
        self.find_mut(id)?.remove_at = Some(Instant::now() + delay);
        Ok(())
    }

    fn remove(&mut self, id: ToastId) {
        self.toasts.retain(|toast| toast.id != id);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::notification::NotificationLevel;
    use crate::notifier::Notifier;
    use pretty_assertions::assert_eq;
    use tokio::time::advance;

    fn messages(stack: &ToastStack) -> Vec<&str> {
        stack
            .toasts()
            .iter()
            .map(|toast| toast.notification.message.as_str())
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_toast_lifecycle() {
        let mut stack = ToastStack::default();
        Notifier::default().notify(
            Some(&mut stack),
            "Copiado al portapapeles",
            NotificationLevel::Success,
        );
        let toast = stack.toasts()[0].clone();
        assert_eq!(NotificationLevel::Success, toast.notification.level);
        assert_eq!(ToastPhase::Entering, toast.phase(Instant::now()));

        advance(Duration::from_millis(300)).await;
        assert_eq!(ToastPhase::Visible, toast.phase(Instant::now()));

        advance(Duration::from_millis(2699)).await;
        assert!(!stack.prune(Instant::now()));
        assert_eq!(ToastPhase::Visible, stack.toasts()[0].phase(Instant::now()));

        advance(Duration::from_millis(1)).await;
        assert_eq!(ToastPhase::Leaving, stack.toasts()[0].phase(Instant::now()));
        assert!(!stack.prune(Instant::now()));

        advance(Duration::from_millis(299)).await;
        assert!(!stack.prune(Instant::now()));
        assert_eq!(1, stack.len());

        advance(Duration::from_millis(1)).await;
        assert!(stack.prune(Instant::now()));
        assert!(stack.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_toasts_expire_independently() {
        let mut stack = ToastStack::default();
        let notifier = Notifier::default();

        notifier.notify(Some(&mut stack), "first", NotificationLevel::Info);
        advance(Duration::from_millis(1000)).await;
        notifier.notify(Some(&mut stack), "second", NotificationLevel::Error);
        advance(Duration::from_millis(1000)).await;
        notifier.notify(Some(&mut stack), "third", NotificationLevel::Info);
        assert_eq!(vec!["first", "second", "third"], messages(&stack));

        advance(Duration::from_millis(1300)).await;
        stack.prune(Instant::now());
        assert_eq!(vec!["second", "third"], messages(&stack));

        advance(Duration::from_millis(1000)).await;
        stack.prune(Instant::now());
        assert_eq!(vec!["third"], messages(&stack));

        advance(Duration::from_millis(1000)).await;
        stack.prune(Instant::now());
        assert!(stack.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_progress() {
        let mut stack = ToastStack::default();
        Notifier::default().notify(Some(&mut stack), "x", NotificationLevel::Info);
        let toast = stack.toasts()[0].clone();

        assert_eq!(0.0, toast.progress(Instant::now()));
        advance(Duration::from_millis(150)).await;
        assert!((toast.progress(Instant::now()) - 0.5).abs() < 0.01);
        advance(Duration::from_millis(1000)).await;
        assert_eq!(1.0, toast.progress(Instant::now()));
        advance(Duration::from_millis(2000)).await;
        assert!((toast.progress(Instant::now()) - 0.5).abs() < 0.01);
    }

    #[tokio::test(start_paused = true)]
    async fn test_many_toasts_are_all_shown_and_expire_in_turn() {
        let mut stack = ToastStack::new();
        let notifier = Notifier::default();
        for i in 0..12 {
            notifier.notify(Some(&mut stack), format!("m{}", i), NotificationLevel::Info);
            advance(Duration::from_millis(100)).await;
        }
        assert_eq!(12, stack.len());

        // the first toast was shown 1200ms ago and goes at 3300ms
        advance(Duration::from_millis(2100)).await;
        assert!(stack.prune(Instant::now()));
        assert_eq!(11, stack.len());
        assert_eq!("m1", stack.toasts()[0].notification.message);

        for remaining in (0..11).rev() {
            advance(Duration::from_millis(100)).await;
            assert!(stack.prune(Instant::now()));
            assert_eq!(remaining, stack.len());
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_scheduling_unknown_toast_fails() {
        let mut stack = ToastStack::default();
        let id = stack.append(Notification::info("x")).unwrap();
        stack.remove(id);
        stack.remove(id);

        assert!(stack.exit_after(id, Duration::from_millis(1)).is_err());
        assert!(stack.remove_after(id, Duration::from_millis(1)).is_err());
        assert!(stack.is_empty());
    }
}
