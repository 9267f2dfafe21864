use super::help::HelpView;
use super::success::SuccessView;
use super::toast;
use super::View;
use crate::app::App;
use crate::app::CurrentView;
use crate::event::input::AppEvent;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tokio::time::Instant;

pub struct LayoutView {}

impl View for LayoutView {
    fn handle(_app: &App, _event: AppEvent) -> Option<AppEvent> {
        None
    }

    fn draw(app: &App, f: &mut Frame, area: Rect) {
        let constraints = vec![Constraint::Length(1), Constraint::Min(4)];

        let rows = Layout::default()
            .margin(0)
            .constraints(constraints)
            .split(area);

        f.render_widget(status_widget(app), rows[0]);

        match app.view_current {
            CurrentView::Success => SuccessView::draw(app, f, rows[1]),
            CurrentView::Help => HelpView::draw(app, f, rows[1]),
        }

        if let Some(toasts) = &app.toasts {
            toast::draw(toasts, &app.scheme(), f, rows[1], Instant::now());
        }
    }
}

fn status_widget(app: &App) -> Paragraph<'static> {
    let scheme = app.scheme();
    Paragraph::new(vec![Line::from(vec![
        Span::styled(
            " ✔ verified ".to_string(),
            scheme.status.add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" ⏱ {} ", app.countdown.state()),
            scheme.status_mode,
        ),
        Span::styled(
            format!(
                " close: {}  theme: {}  lang: {} ",
                app.config.close_policy, app.theme, app.config.language
            ),
            Style::default().add_modifier(Modifier::DIM),
        ),
    ])])
}
