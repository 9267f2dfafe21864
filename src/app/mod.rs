use std::{fmt::Display, io, time::Duration};

use crossterm::event::KeyEvent;
use log::{error, info};
use ratatui::{prelude::CrosstermBackend, Terminal};
use tokio::{
    sync::mpsc::{Receiver, Sender},
    time::Instant,
};

use crate::{
    clipboard::{Clipboard, Osc52Clipboard},
    config::Config,
    countdown::Countdown,
    event::input::{self, AppEvent},
    messages::Messages,
    notification::NotificationLevel,
    notifier::{DisplaySurface, Notifier},
    theme::{Scheme, Theme},
    timer::{TimerId, TimerService, TokioTimers},
    toast::ToastStack,
    ui::render,
    view::{help::HelpView, success::SuccessView, View},
    window::{ClosePolicy, TerminalWindow, WindowControl},
};

/// Delay before telling the user a refused close has to be done by hand.
pub const CLOSE_CHECK_DELAY: Duration = Duration::from_millis(1000);
pub const FRAME_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentView {
    Success,
    Help,
}

impl Display for CurrentView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

pub struct App {
    pub config: Config,
    pub messages: &'static Messages,
    pub theme: Theme,
    pub view_current: CurrentView,
    pub countdown: Countdown,
    pub countdown_label: Option<String>,
    pub toasts: Option<ToastStack>,
    pub message: String,
    notifier: Notifier,
    timers: Box<dyn TimerService>,
    window: Box<dyn WindowControl>,
    clipboard: Box<dyn Clipboard>,
    close_check: Option<TimerId>,
    receiver: Receiver<AppEvent>,
    sender: Sender<AppEvent>,
    quit: bool,
}

impl App {
    pub fn new(config: Config, receiver: Receiver<AppEvent>, sender: Sender<AppEvent>) -> App {
        let timers = Box::new(TokioTimers::new(sender.clone()));
        let window = Box::new(TerminalWindow::new(sender.clone()));
        let clipboard = Box::new(Osc52Clipboard::stdout());
        Self::with_capabilities(config, receiver, sender, timers, window, clipboard)
    }

    pub fn with_capabilities(
        config: Config,
        receiver: Receiver<AppEvent>,
        sender: Sender<AppEvent>,
        timers: Box<dyn TimerService>,
        window: Box<dyn WindowControl>,
        clipboard: Box<dyn Clipboard>,
    ) -> App {
        let messages = config.language.messages();
        let countdown = Countdown::new(config.seconds, messages);
        let countdown_label = match config.show_label {
            true => countdown.label(),
            false => None,
        };

        App {
            messages,
            theme: config.theme.resolve(),
            view_current: CurrentView::Success,
            countdown,
            countdown_label,
            toasts: config.toasts.then(ToastStack::default),
            message: config.message(),
            notifier: Notifier::default(),
            timers,
            window,
            clipboard,
            close_check: None,
            receiver,
            sender,
            quit: false,
            config,
        }
    }

    pub fn scheme(&self) -> Scheme {
        self.theme.scheme()
    }

    pub fn is_quitting(&self) -> bool {
        self.quit
    }

    pub fn start(&mut self) {
        info!("page view: success");
        self.countdown
            .start(self.timers.as_mut(), self.window.as_mut());
    }

    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<(), anyhow::Error> {
        self.start();
        let ticker = input::start_ticker(self.sender.clone(), FRAME_INTERVAL);

        terminal.draw(|frame| render(self, frame))?;

        let result = loop {
            let Some(event) = self.receiver.recv().await else {
                break Ok(());
            };

            self.handle_event(event);

            if self.quit {
                break Ok(());
            }

            if let Err(err) = terminal.autoresize() {
                break Err(err.into());
            }
            if let Err(err) = terminal.draw(|frame| render(self, frame)) {
                break Err(err.into());
            }
        };

        ticker.abort();
        result
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Quit => self.quit = true,
            AppEvent::Tick => {
                if let Some(toasts) = self.toasts.as_mut() {
                    toasts.prune(Instant::now());
                }
            }
            AppEvent::Timer(id) => self.handle_timer(id),
            AppEvent::CloseRequested => self.handle_close_request(),
            AppEvent::CloseWindow => self.countdown.close_now(self.window.as_mut()),
            AppEvent::CopyToClipboard => self.copy_to_clipboard(),
            AppEvent::RotateTheme => self.theme = self.theme.next(),
            AppEvent::ChangeView(view) => self.view_current = view,
            AppEvent::Input(key) => {
                if let Some(next) = self.handle_input(key) {
                    self.handle_event(next);
                }
            }
        }
    }

    fn handle_input(&self, key: KeyEvent) -> Option<AppEvent> {
        match self.view_current {
            CurrentView::Success => SuccessView::handle(self, AppEvent::Input(key)),
            CurrentView::Help => HelpView::handle(self, AppEvent::Input(key)),
        }
    }

    fn handle_timer(&mut self, id: TimerId) {
        if self.close_check == Some(id) {
            self.close_check = None;
            if !self.quit {
                self.notify(self.messages.close_manually, NotificationLevel::Info);
            }
            return;
        }

        self.countdown.tick(
            id,
            self.timers.as_mut(),
            self.countdown_label.as_mut(),
            self.window.as_mut(),
        );
    }

    fn handle_close_request(&mut self) {
        self.notify(self.messages.closing, NotificationLevel::Info);

        match self.config.close_policy {
            ClosePolicy::Exit => self.quit = true,
            ClosePolicy::Hold => {
                info!("close refused by policy");
                if self.close_check.is_none() {
                    self.close_check = Some(self.timers.schedule_once(CLOSE_CHECK_DELAY));
                }
            }
        }
    }

    fn copy_to_clipboard(&mut self) {
        let text = self.config.copy_text();
        match self.clipboard.set_text(&text) {
            Ok(()) => self.notify(self.messages.copied, NotificationLevel::Success),
            Err(err) => {
                error!("could not copy to clipboard: {}", err);
                self.notify(self.messages.copy_failed, NotificationLevel::Error);
            }
        }
    }

    fn notify(&mut self, message: &str, level: NotificationLevel) {
        let surface = self
            .toasts
            .as_mut()
            .map(|toasts| toasts as &mut dyn DisplaySurface);
        self.notifier.notify(surface, message, level);
    }
}
