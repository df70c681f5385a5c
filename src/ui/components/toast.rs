use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Widget, Wrap};

use crate::ui::theme::Theme;

/// One-line error banner drawn over the bottom of the screen.
pub struct ErrorToast<'a> {
    message: &'a str,
    theme: &'a Theme,
}

impl<'a> ErrorToast<'a> {
    pub fn new(message: &'a str, theme: &'a Theme) -> Self {
        Self { message, theme }
    }

    /// Area along the bottom edge of `screen`, above the footer row.
    pub fn area(screen: Rect) -> Rect {
        let width = screen.width.saturating_sub(4).min(70);
        let height = 3.min(screen.height);
        let x = screen.x + (screen.width.saturating_sub(width)) / 2;
        let y = screen.bottom().saturating_sub(height + 1).max(screen.y);
        Rect::new(x, y, width, height)
    }
}

impl Widget for ErrorToast<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        Clear.render(area, buf);
        Paragraph::new(Line::from(Span::styled(
            self.message,
            Style::default()
                .fg(colors.error())
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::bordered()
                .border_style(Style::default().fg(colors.error()))
                .style(Style::default().bg(colors.bg())),
        )
        .render(area, buf);
    }
}
