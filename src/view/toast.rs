use crate::theme::Scheme;
use crate::toast::ToastStack;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use tokio::time::Instant;

const TOAST_HEIGHT: u16 = 3;
const MARGIN: u16 = 1;
const MAX_WIDTH: u16 = 48;

/// Draw toasts top-right, oldest first, sliding in from the right edge.
pub fn draw(stack: &ToastStack, scheme: &Scheme, frame: &mut Frame, area: Rect, now: Instant) {
    for (row, toast) in stack.toasts().iter().enumerate() {
        let y = area.y + MARGIN + row as u16 * TOAST_HEIGHT;
        if y + TOAST_HEIGHT > area.bottom() {
            break;
        }

        let width = (toast.notification.message.chars().count() as u16 + 4)
            .min(MAX_WIDTH)
            .min(area.width.saturating_sub(MARGIN));
        let Some(rect) = slide(area, y, width, toast.progress(now)) else {
            continue;
        };

        let style = scheme.toast(toast.notification.level);
        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(toast.notification.message.as_str())
                .style(style)
                .block(Block::default().borders(Borders::all()).style(style)),
            rect,
        );
    }
}

/// Part of a toast of `width` that is on screen at `progress`, clipped to
/// `area`. `None` while it is entirely off screen.
fn slide(area: Rect, y: u16, width: u16, progress: f32) -> Option<Rect> {
    let hidden = ((1.0 - progress) * width as f32).round() as u16;
    let visible = width.saturating_sub(hidden);
    if visible == 0 {
        return None;
    }
    let x = area.right().saturating_sub(MARGIN + visible);
    Some(Rect::new(x, y, visible, TOAST_HEIGHT))
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_slide() {
        let area = Rect::new(0, 0, 80, 24);

        assert_eq!(Some(Rect::new(59, 1, 20, 3)), slide(area, 1, 20, 1.0));
        assert_eq!(Some(Rect::new(69, 1, 10, 3)), slide(area, 1, 20, 0.5));
        assert_eq!(None, slide(area, 1, 20, 0.0));
    }
}
