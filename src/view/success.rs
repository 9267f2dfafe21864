use super::centered_rect_absolute;
use super::View;
use crate::app::{App, CurrentView};
use crate::event::input::AppEvent;
use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub struct SuccessView {}

impl View for SuccessView {
    fn handle(_app: &App, event: AppEvent) -> Option<AppEvent> {
        let AppEvent::Input(key) = event else {
            return None;
        };
        match key.code {
            // the close button is the only focusable element
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('x') => Some(AppEvent::CloseWindow),
            KeyCode::Char('c') => Some(AppEvent::CopyToClipboard),
            KeyCode::Char('t') => Some(AppEvent::RotateTheme),
            KeyCode::Char('?') => Some(AppEvent::ChangeView(CurrentView::Help)),
            KeyCode::Char('q') => Some(AppEvent::Quit),
            _ => None,
        }
    }

    fn draw(app: &App, frame: &mut Frame, area: Rect) {
        let scheme = app.scheme();
        let card = centered_rect_absolute(64, 12, area);
        let block = Block::default()
            .borders(Borders::all())
            .title(format!(" ✔ {} ", app.messages.title))
            .title_style(scheme.title)
            .style(scheme.border);
        let inner = block.inner(card);
        frame.render_widget(block, card);

        let rows = Layout::default()
            .margin(1)
            .constraints([
                Constraint::Min(2),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(inner);

        frame.render_widget(
            Paragraph::new(app.message.as_str())
                .style(scheme.body)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            rows[0],
        );

        if let Some(label) = &app.countdown_label {
            frame.render_widget(
                Paragraph::new(label.as_str())
                    .style(scheme.label)
                    .alignment(Alignment::Center),
                rows[1],
            );
        }

        frame.render_widget(
            Paragraph::new(Line::from(vec![Span::styled(
                format!(" {} ", app.messages.close_button),
                scheme.button,
            )]))
            .alignment(Alignment::Center),
            rows[3],
        );

        frame.render_widget(
            Paragraph::new(app.messages.key_hints)
                .style(scheme.hint)
                .alignment(Alignment::Center),
            rows[4],
        );
    }
}
