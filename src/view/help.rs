use super::View;
use crate::app::{App, CurrentView};
use crate::event::input::AppEvent;
use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub struct HelpView {}

impl View for HelpView {
    fn handle(_app: &App, event: AppEvent) -> Option<AppEvent> {
        match event {
            AppEvent::Input(_) => Some(AppEvent::ChangeView(CurrentView::Success)),
            _ => None,
        }
    }

    fn draw(app: &App, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(help()).style(app.scheme().body), area);
    }
}

fn help() -> String {
"
Help - press any key to return.

Key mappings:

[enter] close the window (also [space] and [x])
[c]     copy the message to the clipboard
[t]     rotate the theme
[?]     show this help
[q]     quit without waiting

The window closes by itself when the countdown reaches zero.
If closing is not allowed (--close-policy hold) the screen stays
up and you can close it yourself.
".to_string()
}
