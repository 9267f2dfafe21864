use crate::event::input::AppEvent;
use crate::event::input::EventSender;
use std::collections::HashMap;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::interval_at;
use tokio::time::Instant;
use tokio::time::MissedTickBehavior;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);

pub trait TimerService {
    fn schedule_repeating(&mut self, interval: Duration) -> TimerId;
    fn schedule_once(&mut self, delay: Duration) -> TimerId;
    /// Cancelling an unknown or already cancelled timer does nothing.
    fn cancel(&mut self, id: TimerId);
}

/// Timers backed by tokio tasks. Every expiry is posted to the event loop as
/// `AppEvent::Timer(id)`.
pub struct TokioTimers {
    sender: EventSender,
    tasks: HashMap<TimerId, JoinHandle<()>>,
    next_id: u64,
}

impl TokioTimers {
    pub fn new(sender: EventSender) -> Self {
        Self {
            sender,
            tasks: HashMap::new(),
            next_id: 0,
        }
    }

    pub fn active(&self) -> usize {
        self.tasks
            .values()
            .filter(|task| !task.is_finished())
            .count()
    }

    fn register(&mut self, task: JoinHandle<()>, id: TimerId) -> TimerId {
        self.tasks.retain(|_, task| !task.is_finished());
        self.tasks.insert(id, task);
        id
    }

    fn next_id(&mut self) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        id
    }
}

impl TimerService for TokioTimers {
    fn schedule_repeating(&mut self, interval: Duration) -> TimerId {
        let id = self.next_id();
        let sender = self.sender.clone();
        let period = interval.max(Duration::from_millis(1));

        let task = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if sender.send(AppEvent::Timer(id)).await.is_err() {
                    return;
                }
            }
        });

        self.register(task, id)
    }

    fn schedule_once(&mut self, delay: Duration) -> TimerId {
        let id = self.next_id();
        let sender = self.sender.clone();

        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // receiver gone means the app is shutting down
            let _ = sender.send(AppEvent::Timer(id)).await;
        });

        self.register(task, id)
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(task) = self.tasks.remove(&id) {
            task.abort();
        }
    }
}

impl Drop for TokioTimers {
    fn drop(&mut self) {
        for task in self.tasks.values() {
            task.abort();
        }
    }
}
