use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Widget, Wrap};
use rust_i18n::t;

use crate::quiz::report::{FinalReport, ResultTier};
use crate::ui::theme::Theme;

pub struct ResultModal<'a> {
    pub report: &'a FinalReport,
    pub theme: &'a Theme,
}

impl<'a> ResultModal<'a> {
    pub fn new(report: &'a FinalReport, theme: &'a Theme) -> Self {
        Self { report, theme }
    }
}

impl Widget for ResultModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let tier = self.report.tier();

        Clear.render(area, buf);
        let block = Block::bordered()
            .title(t!("result.title").to_string())
            .title_alignment(Alignment::Center)
            .border_style(Style::default().fg(colors.accent()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Min(2),
                Constraint::Length(1),
            ])
            .split(inner);

        Paragraph::new(Line::from(Span::styled(
            tier.emoji(),
            Style::default().fg(colors.fg()),
        )))
        .alignment(Alignment::Center)
        .render(layout[1], buf);

        let pct_color = match tier {
            ResultTier::Perfect | ResultTier::Great => colors.success(),
            ResultTier::Good => colors.warning(),
            ResultTier::KeepTrying => colors.error(),
        };
        Paragraph::new(Line::from(Span::styled(
            format!("{}%", self.report.percentage),
            Style::default().fg(pct_color).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .render(layout[2], buf);

        Paragraph::new(Line::from(Span::styled(
            t!(
                "result.score_line",
                score = self.report.score,
                total = self.report.total
            )
            .to_string(),
            Style::default().fg(colors.fg()),
        )))
        .alignment(Alignment::Center)
        .render(layout[3], buf);

        Paragraph::new(Line::from(Span::styled(
            t!(tier.message_key()).to_string(),
            Style::default()
                .fg(colors.accent())
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(layout[4], buf);

        Paragraph::new(Line::from(Span::styled(
            t!("result.footer").to_string(),
            Style::default().fg(colors.text_muted()),
        )))
        .alignment(Alignment::Center)
        .render(layout[5], buf);
    }
}
