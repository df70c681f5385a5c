use std::time::Instant;

use rand::rngs::SmallRng;
use tracing::debug;

use crate::config::Timings;
use crate::quiz::controller::Presenter;
use crate::quiz::report::FinalReport;
use crate::ui::components::celebration::Celebration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub chosen: usize,
    pub correct: usize,
    pub is_correct: bool,
    pub at: Instant,
}

#[derive(Clone, Debug)]
pub struct Summary {
    pub report: FinalReport,
    pub at: Instant,
    pub celebration: Option<Celebration>,
}

/// How a single option row should be drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    Idle,
    Highlighted,
    ChosenCorrect,
    ChosenWrong,
    RevealedCorrect,
    Dimmed,
}

/// Terminal presentation of a running quiz.
///
/// Every presenter call records what to draw plus when it happened; the
/// timed reveals are derived from those instants at render time.
pub struct QuizView {
    pub timings: Timings,
    pub prompt: String,
    pub options: Vec<String>,
    pub highlighted: usize,
    pub outcome: Option<Outcome>,
    pub progress: f64,
    pub score: usize,
    pub total: usize,
    pub summary: Option<Summary>,
    rng: SmallRng,
}

impl QuizView {
    pub fn new(timings: Timings, rng: SmallRng) -> Self {
        Self {
            timings,
            prompt: String::new(),
            options: Vec::new(),
            highlighted: 0,
            outcome: None,
            progress: 0.0,
            score: 0,
            total: 0,
            summary: None,
            rng,
        }
    }

    pub fn move_highlight_down(&mut self) {
        if self.outcome.is_none() && !self.options.is_empty() {
            self.highlighted = (self.highlighted + 1) % self.options.len();
        }
    }

    pub fn move_highlight_up(&mut self) {
        if self.outcome.is_none() && !self.options.is_empty() {
            self.highlighted = self
                .highlighted
                .checked_sub(1)
                .unwrap_or(self.options.len() - 1);
        }
    }

    /// A wrong pick shows the right answer only after a short pause.
    pub fn correct_revealed(&self, now: Instant) -> bool {
        self.outcome.is_some_and(|o| {
            o.is_correct || now.saturating_duration_since(o.at) >= self.timings.reveal_correct
        })
    }

    /// Whether the "next" prompt is visible and may be acted on.
    pub fn next_ready(&self, now: Instant) -> bool {
        self.outcome
            .is_some_and(|o| now.saturating_duration_since(o.at) >= self.timings.reveal_next)
    }

    pub fn summary_visible(&self, now: Instant) -> bool {
        self.summary
            .as_ref()
            .is_some_and(|s| now.saturating_duration_since(s.at) >= self.timings.summary_delay)
    }

    pub fn option_state(&self, index: usize, now: Instant) -> OptionState {
        match self.outcome {
            None if index == self.highlighted => OptionState::Highlighted,
            None => OptionState::Idle,
            Some(o) if index == o.chosen && o.is_correct => OptionState::ChosenCorrect,
            Some(o) if index == o.chosen => OptionState::ChosenWrong,
            Some(o) if index == o.correct && self.correct_revealed(now) => {
                OptionState::RevealedCorrect
            }
            Some(_) => OptionState::Dimmed,
        }
    }
}

impl Presenter for QuizView {
    fn render_question(&mut self, prompt: &str, options: &[String]) {
        self.prompt = prompt.to_string();
        self.options = options.to_vec();
        self.highlighted = 0;
        self.outcome = None;
        self.summary = None;
    }

    fn mark_outcome(&mut self, chosen: usize, correct: usize, is_correct: bool) {
        self.outcome = Some(Outcome {
            chosen,
            correct,
            is_correct,
            at: Instant::now(),
        });
    }

    fn update_progress(&mut self, fraction: f64) {
        self.progress = fraction.clamp(0.0, 1.0);
    }

    fn update_score(&mut self, score: usize, total: usize) {
        self.score = score;
        self.total = total;
    }

    fn show_summary(&mut self, score: usize, total: usize, percentage: u8) {
        let now = Instant::now();
        // The burst plays as the result modal appears.
        let burst_at = now + self.timings.summary_delay;
        let celebration = (percentage >= self.timings.celebration_threshold)
            .then(|| Celebration::burst(&mut self.rng, burst_at));
        debug!(percentage, celebrate = celebration.is_some(), "summary scheduled");
        self.summary = Some(Summary {
            report: FinalReport {
                score,
                total,
                percentage,
            },
            at: now,
            celebration,
        });
    }
}
