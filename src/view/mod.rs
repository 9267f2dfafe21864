pub mod help;
pub mod layout;
pub mod success;
pub mod toast;

use crate::app::App;
use crate::event::input::AppEvent;
use ratatui::layout::Rect;
use ratatui::Frame;

pub trait View {
    fn handle(app: &App, event: AppEvent) -> Option<AppEvent>;
    fn draw(app: &App, f: &mut Frame, area: Rect);
}

/// A `width` x `height` rectangle centred in `area`, shrunk to fit.
pub fn centered_rect_absolute(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
