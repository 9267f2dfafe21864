use crate::messages::Messages;
use crate::timer::TimerId;
use crate::timer::TimerService;
use crate::window::WindowControl;
use log::debug;
use log::info;
use std::fmt::Display;
use std::time::Duration;

pub const TICK_INTERVAL: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownState {
    Running(u32),
    Closing,
}

impl Display for CountdownState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CountdownState::Running(seconds) => write!(f, "{}s", seconds),
            CountdownState::Closing => f.write_str("closing"),
        }
    }
}

/// Counts down once a second and asks the window to close at zero.
///
/// The countdown is the only owner of its repeating timer: it schedules it in
/// `start` and cancels it when entering `Closing`, after which it never ticks
/// again.
pub struct Countdown {
    state: CountdownState,
    timer: Option<TimerId>,
    messages: &'static Messages,
}

impl Countdown {
    pub fn new(seconds: u32, messages: &'static Messages) -> Self {
        Self {
            state: CountdownState::Running(seconds),
            timer: None,
            messages,
        }
    }

    pub fn state(&self) -> CountdownState {
        self.state
    }

    /// Text the countdown label starts with.
    pub fn label(&self) -> Option<String> {
        match self.state {
            CountdownState::Running(seconds) => Some(self.messages.countdown(seconds)),
            CountdownState::Closing => None,
        }
    }

    pub fn start(&mut self, timers: &mut dyn TimerService, window: &mut dyn WindowControl) {
        if self.timer.is_some() {
            return;
        }
        match self.state {
            CountdownState::Running(0) => {
                self.state = CountdownState::Closing;
                close_window(window);
            }
            CountdownState::Running(_) => {
                self.timer = Some(timers.schedule_repeating(TICK_INTERVAL));
            }
            CountdownState::Closing => (),
        }
    }

    pub fn tick(
        &mut self,
        id: TimerId,
        timers: &mut dyn TimerService,
        label: Option<&mut String>,
        window: &mut dyn WindowControl,
    ) -> CountdownState {
        if self.timer != Some(id) {
            return self.state;
        }

        match self.state {
            CountdownState::Running(seconds) if seconds > 1 => {
                self.state = CountdownState::Running(seconds - 1);
                match label {
                    Some(label) => *label = self.messages.countdown(seconds - 1),
                    None => debug!("no countdown label to update"),
                }
            }
            CountdownState::Running(_) => {
                self.state = CountdownState::Closing;
                if let Some(timer) = self.timer.take() {
                    timers.cancel(timer);
                }
                close_window(window);
            }
            CountdownState::Closing => (),
        }

        self.state
    }

    /// Manual trigger. Runs the same close procedure as reaching zero.
    pub fn close_now(&self, window: &mut dyn WindowControl) {
        close_window(window);
    }
}

fn close_window(window: &mut dyn WindowControl) {
    info!("requesting window close");
    window.request_close();
}
