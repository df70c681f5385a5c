use std::time::Instant;

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::ui::quiz_view::{OptionState, QuizView};
use crate::ui::theme::Theme;

/// The prompt above four numbered option rows.
pub struct QuestionCard<'a> {
    view: &'a QuizView,
    now: Instant,
    theme: &'a Theme,
}

impl<'a> QuestionCard<'a> {
    pub fn new(view: &'a QuizView, now: Instant, theme: &'a Theme) -> Self {
        Self { view, now, theme }
    }

    fn option_style(&self, state: OptionState) -> Style {
        let colors = &self.theme.colors;
        match state {
            OptionState::Idle => Style::default().fg(colors.fg()),
            OptionState::Highlighted => Style::default()
                .fg(colors.option_selected())
                .add_modifier(Modifier::BOLD),
            OptionState::ChosenCorrect | OptionState::RevealedCorrect => Style::default()
                .fg(colors.answer_correct())
                .bg(colors.answer_correct_bg())
                .add_modifier(Modifier::BOLD),
            OptionState::ChosenWrong => Style::default()
                .fg(colors.answer_incorrect())
                .bg(colors.answer_incorrect_bg())
                .add_modifier(Modifier::BOLD),
            OptionState::Dimmed => Style::default().fg(colors.text_muted()),
        }
    }
}

impl Widget for QuestionCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(4),
                Constraint::Length(self.view.options.len() as u16 * 3),
            ])
            .split(area);

        let prompt_block = Block::bordered()
            .border_style(Style::default().fg(colors.accent()))
            .style(Style::default().bg(colors.bg()));
        Paragraph::new(Line::from(Span::styled(
            self.view.prompt.as_str(),
            Style::default().fg(colors.fg()).add_modifier(Modifier::BOLD),
        )))
        .wrap(Wrap { trim: true })
        .block(prompt_block)
        .render(layout[0], buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                self.view
                    .options
                    .iter()
                    .map(|_| Constraint::Length(3))
                    .collect::<Vec<_>>(),
            )
            .split(layout[1]);

        for (i, option) in self.view.options.iter().enumerate() {
            let state = self.view.option_state(i, self.now);
            let style = self.option_style(state);
            let marker = match state {
                OptionState::ChosenCorrect | OptionState::RevealedCorrect => " \u{2713}",
                OptionState::ChosenWrong => " \u{2717}",
                OptionState::Highlighted => " <",
                _ => "",
            };
            let border = if state == OptionState::Idle || state == OptionState::Dimmed {
                colors.border()
            } else {
                style.fg.unwrap_or(colors.border())
            };
            Paragraph::new(Line::from(Span::styled(
                format!(" [{}] {option}{marker}", i + 1),
                style,
            )))
            .block(Block::bordered().border_style(Style::default().fg(border)))
            .render(rows[i], buf);
        }
    }
}
