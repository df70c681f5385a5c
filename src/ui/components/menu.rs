use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};
use rust_i18n::t;

use crate::quiz::difficulty::DifficultyKey;
use crate::quiz::question::QuestionBank;
use crate::ui::theme::Theme;

pub struct MenuItem {
    pub key: String,
    pub label: String,
    pub description: String,
}

/// A titled list of keyed entries with one selected row.
pub struct Menu<'a> {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<MenuItem>,
    pub selected: usize,
    pub theme: &'a Theme,
}

impl<'a> Menu<'a> {
    pub fn home(theme: &'a Theme, difficulty: DifficultyKey) -> Self {
        Self {
            title: "quizr".to_string(),
            subtitle: t!("home.subtitle").to_string(),
            items: vec![
                MenuItem {
                    key: "1".to_string(),
                    label: t!("home.start").to_string(),
                    description: t!(
                        "home.start_desc",
                        difficulty = difficulty_label(difficulty)
                    )
                    .to_string(),
                },
                MenuItem {
                    key: "2".to_string(),
                    label: t!("home.difficulty").to_string(),
                    description: t!("home.difficulty_desc").to_string(),
                },
                MenuItem {
                    key: "q".to_string(),
                    label: t!("home.quit").to_string(),
                    description: t!("home.quit_desc").to_string(),
                },
            ],
            selected: 0,
            theme,
        }
    }

    /// Difficulty picker with `current` preselected. Question counts are shown
    /// when a bank is loaded.
    pub fn difficulty(
        theme: &'a Theme,
        current: DifficultyKey,
        bank: Option<&QuestionBank>,
    ) -> Self {
        let items = DifficultyKey::ALL
            .iter()
            .enumerate()
            .map(|(i, &d)| {
                let mut description = difficulty_description(d);
                if let Some(bank) = bank {
                    description = format!(
                        "{description} ({})",
                        t!("difficulty.questions", count = bank.count(d))
                    );
                }
                MenuItem {
                    key: (i + 1).to_string(),
                    label: difficulty_label(d),
                    description,
                }
            })
            .collect();
        let selected = DifficultyKey::ALL
            .iter()
            .position(|&d| d == current)
            .unwrap_or(0);

        Self {
            title: t!("difficulty.title").to_string(),
            subtitle: String::new(),
            items,
            selected,
            theme,
        }
    }

    pub fn next(&mut self) {
        self.selected = (self.selected + 1) % self.items.len();
    }

    pub fn prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        } else {
            self.selected = self.items.len() - 1;
        }
    }
}

pub fn difficulty_label(difficulty: DifficultyKey) -> String {
    match difficulty {
        DifficultyKey::Easy => t!("difficulty.easy"),
        DifficultyKey::Intermediate => t!("difficulty.intermediate"),
        DifficultyKey::Hard => t!("difficulty.hard"),
    }
    .to_string()
}

fn difficulty_description(difficulty: DifficultyKey) -> String {
    match difficulty {
        DifficultyKey::Easy => t!("difficulty.easy_desc"),
        DifficultyKey::Intermediate => t!("difficulty.intermediate_desc"),
        DifficultyKey::Hard => t!("difficulty.hard_desc"),
    }
    .to_string()
}

impl Widget for &Menu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        let title_lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                self.title.as_str(),
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.subtitle.as_str(),
                Style::default().fg(colors.fg()),
            )),
        ];
        Paragraph::new(title_lines)
            .alignment(Alignment::Center)
            .render(layout[0], buf);

        let menu_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                self.items
                    .iter()
                    .map(|_| Constraint::Length(3))
                    .collect::<Vec<_>>(),
            )
            .split(layout[2]);

        for (i, item) in self.items.iter().enumerate() {
            if i >= menu_layout.len() {
                break;
            }
            let is_selected = i == self.selected;
            let indicator = if is_selected { ">" } else { " " };
            let label_text = format!(" {indicator} [{}] {}", item.key, item.label);
            let desc_text = format!("     {}", item.description);

            let label_style = if is_selected {
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.fg())
            };

            Paragraph::new(vec![
                Line::from(Span::styled(label_text, label_style)),
                Line::from(Span::styled(
                    desc_text,
                    Style::default().fg(colors.text_muted()),
                )),
            ])
            .render(menu_layout[i], buf);
        }
    }
}
