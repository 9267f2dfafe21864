use crate::app::CurrentView;
use crate::timer::TimerId;
use crossterm::event::{self, poll, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::error;
use std::{thread, time::Duration};
use tokio::{sync::mpsc::Sender, task::JoinHandle, time::interval};

#[derive(Debug)]
pub enum AppEvent {
    Input(KeyEvent),
    /// Redraw and expire toasts.
    Tick,
    Quit,
    Timer(TimerId),
    CloseRequested,
    CloseWindow,
    CopyToClipboard,
    RotateTheme,
    ChangeView(CurrentView),
}

pub type EventSender = Sender<AppEvent>;

pub fn start(event_sender: EventSender) {
    thread::spawn(move || loop {
        let ready = match poll(Duration::from_millis(1000)) {
            Ok(ready) => ready,
            Err(err) => {
                error!("could not poll terminal events: {}", err);
                return;
            }
        };
        if !ready {
            continue;
        }

        // handle global keys
        if let Ok(Event::Key(key)) = event::read() {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let action: Option<AppEvent> = match key.modifiers {
                KeyModifiers::CONTROL => match key.code {
                    KeyCode::Char('c') => Some(AppEvent::Quit),
                    _ => None,
                },
                _ => None,
            };

            let event = action.unwrap_or(AppEvent::Input(key));
            if event_sender.blocking_send(event).is_err() {
                return;
            }
        }
    });
}

/// Post a `Tick` every `period` so animations keep moving without input.
pub fn start_ticker(event_sender: EventSender, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(period);
        loop {
            ticker.tick().await;
            if event_sender.send(AppEvent::Tick).await.is_err() {
                return;
            }
        }
    })
}
