use tracing::{debug, info};

use crate::quiz::difficulty::DifficultyKey;
use crate::quiz::error::QuizError;
use crate::quiz::question::QuestionBank;
use crate::quiz::report::FinalReport;
use crate::quiz::session::{AnswerOutcome, SessionState};

/// Receives fire-and-forget updates after each committed session transition.
pub trait Presenter {
    fn render_question(&mut self, prompt: &str, options: &[String]);
    fn mark_outcome(&mut self, chosen: usize, correct: usize, is_correct: bool);
    fn update_progress(&mut self, fraction: f64);
    fn update_score(&mut self, score: usize, total: usize);
    fn show_summary(&mut self, score: usize, total: usize, percentage: u8);
}

/// Drives a [`SessionState`] and mirrors every change into a [`Presenter`].
///
/// A transition that fails leaves both the session and the presenter untouched.
pub struct QuizController<P: Presenter> {
    difficulty: DifficultyKey,
    state: SessionState,
    presenter: P,
}

impl<P: Presenter> QuizController<P> {
    pub fn start(
        bank: &QuestionBank,
        difficulty: DifficultyKey,
        presenter: P,
    ) -> Result<Self, QuizError> {
        let state = SessionState::new(bank, difficulty)?;
        info!(%difficulty, questions = state.total(), "quiz session started");
        let mut controller = Self {
            difficulty,
            state,
            presenter,
        };
        controller.present_current();
        Ok(controller)
    }

    pub fn difficulty(&self) -> DifficultyKey {
        self.difficulty
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn answer(&mut self, chosen: usize) -> Result<AnswerOutcome, QuizError> {
        let outcome = self.state.submit_answer(chosen)?;
        debug!(
            question = self.state.current_index() + 1,
            chosen,
            correct = outcome.correct_index,
            "answer submitted"
        );
        self.presenter
            .mark_outcome(chosen, outcome.correct_index, outcome.is_correct);
        self.presenter.update_progress(self.state.progress_fraction());
        self.presenter
            .update_score(self.state.score(), self.state.total());
        Ok(outcome)
    }

    /// Move past the answered question. Returns the report once the last
    /// question has been passed.
    pub fn next(&mut self) -> Result<Option<FinalReport>, QuizError> {
        self.state.advance()?;
        if self.state.is_finished() {
            let report = self.state.final_report()?;
            info!(
                difficulty = %self.difficulty,
                score = report.score,
                total = report.total,
                percentage = report.percentage,
                "quiz finished"
            );
            self.presenter.update_progress(1.0);
            self.presenter
                .show_summary(report.score, report.total, report.percentage);
            Ok(Some(report))
        } else {
            self.present_current();
            Ok(None)
        }
    }

    pub fn restart(&mut self) {
        self.state = self.state.restart();
        info!(difficulty = %self.difficulty, "quiz restarted");
        self.present_current();
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }

    fn present_current(&mut self) {
        if let Some(question) = self.state.current_question() {
            self.presenter
                .render_question(&question.prompt, &question.options);
        }
        self.presenter.update_progress(self.state.progress_fraction());
        self.presenter
            .update_score(self.state.score(), self.state.total());
    }
}
