use ratatui::Frame;

use crate::app::App;
use crate::view::layout::LayoutView;
use crate::view::View;

pub fn render(app: &App, frame: &mut Frame) {
    LayoutView::draw(app, frame, frame.area());
}
