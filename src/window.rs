use crate::event::input::AppEvent;
use crate::event::input::EventSender;
use clap::ValueEnum;
use log::debug;
use std::fmt::Display;

/// Whether the application honours requests to close its window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ClosePolicy {
    /// Exit as soon as a close is requested.
    #[default]
    Exit,
    /// Refuse close requests and leave the screen up.
    Hold,
}

impl Display for ClosePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ClosePolicy::Exit => "exit",
            ClosePolicy::Hold => "hold",
        })
    }
}

pub trait WindowControl {
    /// Fire and forget. The host may ignore the request.
    fn request_close(&mut self);
}

pub struct TerminalWindow {
    sender: EventSender,
}

impl TerminalWindow {
    pub fn new(sender: EventSender) -> Self {
        Self { sender }
    }
}

impl WindowControl for TerminalWindow {
    fn request_close(&mut self) {
        if let Err(err) = self.sender.try_send(AppEvent::CloseRequested) {
            debug!("close request dropped: {}", err);
        }
    }
}
