use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use rust_i18n::t;

use crate::app::{App, AppScreen};
use crate::quiz::controller::QuizController;
use crate::quiz::session::Phase;
use crate::ui::components::celebration::CelebrationWidget;
use crate::ui::components::menu::difficulty_label;
use crate::ui::components::progress_bar::ProgressBar;
use crate::ui::components::question_card::QuestionCard;
use crate::ui::components::result_modal::ResultModal;
use crate::ui::components::toast::ErrorToast;
use crate::ui::layout::{QuizLayout, centered_rect};
use crate::ui::quiz_view::QuizView;

pub fn render(frame: &mut Frame, app: &App, now: Instant) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    match app.screen {
        AppScreen::Home => render_home(frame, app),
        AppScreen::DifficultySelect => render_difficulty(frame, app),
        AppScreen::Quiz => render_quiz(frame, app, now),
        AppScreen::Result => render_result(frame, app, now),
    }

    if let Some(ref toast) = app.toast {
        frame.render_widget(
            ErrorToast::new(&toast.message, app.theme),
            ErrorToast::area(area),
        );
    }
}

fn render_home(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " quizr ",
            Style::default()
                .fg(colors.header_fg())
                .bg(colors.header_bg())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", difficulty_label(app.difficulty)),
            Style::default().fg(colors.text_muted()).bg(colors.header_bg()),
        ),
    ]))
    .style(Style::default().bg(colors.header_bg()));
    frame.render_widget(header, layout[0]);

    let menu_area = centered_rect(50, 70, layout[1]);
    frame.render_widget(&app.menu, menu_area);

    let footer_key = if app.bank.is_some() {
        "home.footer"
    } else {
        "home.footer_retry"
    };
    let footer = Paragraph::new(Line::from(Span::styled(
        t!(footer_key).to_string(),
        Style::default().fg(colors.text_muted()),
    )));
    frame.render_widget(footer, layout[2]);
}

fn render_difficulty(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let menu_area = centered_rect(50, 70, layout[0]);
    frame.render_widget(&app.difficulty_menu, menu_area);

    let footer = Paragraph::new(Line::from(Span::styled(
        t!("difficulty.footer").to_string(),
        Style::default().fg(colors.text_muted()),
    )));
    frame.render_widget(footer, layout[1]);
}

fn render_quiz(frame: &mut Frame, app: &App, now: Instant) {
    let Some(ref quiz) = app.quiz else {
        return;
    };
    let area = frame.area();
    let colors = &app.theme.colors;
    let view = quiz.presenter();
    let layout = QuizLayout::new(area);

    let state = quiz.state();
    let current = (state.current_index() + 1).min(state.total());
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            t!(
                "quiz.header",
                current = current,
                total = state.total(),
                difficulty = difficulty_label(quiz.difficulty())
            )
            .to_string(),
            Style::default()
                .fg(colors.header_fg())
                .bg(colors.header_bg())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                " {} ",
                t!("quiz.score", score = view.score, total = view.total)
            ),
            Style::default().fg(colors.accent()).bg(colors.header_bg()),
        ),
    ]))
    .style(Style::default().bg(colors.header_bg()));
    frame.render_widget(header, layout.header);

    frame.render_widget(QuestionCard::new(view, now, app.theme), layout.card);

    let progress = ProgressBar::new(&t!("quiz.progress"), view.progress, app.theme).detail(
        t!("quiz.score", score = view.score, total = view.total).to_string(),
    );
    frame.render_widget(progress, layout.progress);

    let footer = Paragraph::new(Line::from(Span::styled(
        footer_hint(quiz, now),
        Style::default().fg(colors.text_muted()),
    )));
    frame.render_widget(footer, layout.footer);
}

fn footer_hint(quiz: &QuizController<QuizView>, now: Instant) -> String {
    let view = quiz.presenter();
    let key = match quiz.state().phase() {
        Phase::AwaitingAnswer => "quiz.answer_hint",
        Phase::AnswerLocked if !view.next_ready(now) => "quiz.wait_hint",
        Phase::AnswerLocked if quiz.state().current_index() + 1 >= quiz.state().total() => {
            "quiz.finish_hint"
        }
        Phase::AnswerLocked => "quiz.next_hint",
        Phase::Finished => "quiz.wait_hint",
    };
    let mut hint = t!(key).to_string();
    if let Some(outcome) = view.outcome {
        let verdict = if outcome.is_correct {
            t!("quiz.correct")
        } else {
            t!("quiz.incorrect")
        };
        hint = format!(" {verdict} {hint}");
    }
    hint
}

fn render_result(frame: &mut Frame, app: &App, now: Instant) {
    render_quiz(frame, app, now);

    let Some(summary) = app
        .quiz
        .as_ref()
        .and_then(|q| q.presenter().summary.as_ref())
    else {
        return;
    };
    let area = frame.area();
    let modal_area = centered_rect(50, 50, area);
    frame.render_widget(ResultModal::new(&summary.report, app.theme), modal_area);

    if let Some(ref celebration) = summary.celebration {
        frame.render_widget(CelebrationWidget::new(celebration, now, app.theme), area);
    }
}
