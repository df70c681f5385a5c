use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rust_i18n::t;
use tracing::{error, warn};

use crate::config::Config;
use crate::quiz::controller::QuizController;
use crate::quiz::difficulty::DifficultyKey;
use crate::quiz::question::QuestionBank;
use crate::quiz::session::Phase;
use crate::store::json_store::JsonStore;
use crate::store::question_bank::QuestionSource;
use crate::ui::components::menu::Menu;
use crate::ui::quiz_view::QuizView;
use crate::ui::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppScreen {
    Home,
    DifficultySelect,
    Quiz,
    Result,
}

pub struct Toast {
    pub message: String,
    pub shown_at: Instant,
    pub duration: Duration,
}

impl Toast {
    pub fn expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.duration
    }
}

pub struct App {
    pub screen: AppScreen,
    pub config: Config,
    pub theme: &'static Theme,
    pub menu: Menu<'static>,
    pub difficulty_menu: Menu<'static>,
    pub difficulty: DifficultyKey,
    pub bank: Option<QuestionBank>,
    pub source: QuestionSource,
    pub quiz: Option<QuizController<QuizView>>,
    pub store: Option<JsonStore>,
    pub toast: Option<Toast>,
    pub should_quit: bool,
    rng: SmallRng,
}

impl App {
    pub fn new(config: Config) -> Self {
        let store = match JsonStore::new() {
            Ok(store) => Some(store),
            Err(err) => {
                warn!(error = %err, "data directory unavailable, selection will not persist");
                None
            }
        };
        Self::with_store(config, store)
    }

    pub fn with_store(config: Config, store: Option<JsonStore>) -> Self {
        let loaded_theme = Theme::load(&config.theme).unwrap_or_else(|| {
            warn!(
                theme = %config.theme,
                available = ?Theme::available_themes(),
                "unknown theme, using default"
            );
            Theme::default()
        });
        let theme: &'static Theme = Box::leak(Box::new(loaded_theme));

        let difficulty = store
            .as_ref()
            .map(JsonStore::selected_difficulty)
            .unwrap_or_default();
        let source = QuestionSource::resolve(
            config.questions_url.as_deref(),
            config.questions_path.as_deref(),
        );

        let mut app = Self {
            screen: AppScreen::Home,
            config,
            theme,
            menu: Menu::home(theme, difficulty),
            difficulty_menu: Menu::difficulty(theme, difficulty, None),
            difficulty,
            bank: None,
            source,
            quiz: None,
            store,
            toast: None,
            should_quit: false,
            rng: SmallRng::from_entropy(),
        };
        app.reload_questions();
        app
    }

    /// Load the question bank from the configured source. Returns whether a
    /// bank is available afterwards.
    pub fn reload_questions(&mut self) -> bool {
        match self.source.load() {
            Ok(bank) => {
                self.bank = Some(bank);
                self.toast = None;
                true
            }
            Err(err) => {
                error!(source = %self.source, error = %err, "failed to load questions");
                self.show_error(t!("error.load").to_string());
                false
            }
        }
    }

    pub fn go_home(&mut self) {
        self.quiz = None;
        self.menu = Menu::home(self.theme, self.difficulty);
        self.screen = AppScreen::Home;
    }

    pub fn go_to_difficulty_select(&mut self) {
        self.difficulty_menu = Menu::difficulty(self.theme, self.difficulty, self.bank.as_ref());
        self.screen = AppScreen::DifficultySelect;
    }

    /// Persist `difficulty` as the selection, then start a quiz with it.
    pub fn choose_difficulty(&mut self, difficulty: DifficultyKey) {
        self.difficulty = difficulty;
        if let Some(ref store) = self.store
            && let Err(err) = store.set_selected_difficulty(difficulty)
        {
            warn!(error = %err, "failed to save difficulty selection");
        }
        self.start_quiz_with(difficulty);
    }

    /// Start with the difficulty the home screen shows. It is seeded from the
    /// store and follows every later start.
    pub fn start_quiz(&mut self) {
        self.start_quiz_with(self.difficulty);
    }

    pub fn start_quiz_with(&mut self, difficulty: DifficultyKey) {
        if self.bank.is_none() && !self.reload_questions() {
            return;
        }
        let Some(ref bank) = self.bank else {
            return;
        };

        let view = QuizView::new(
            self.config.timings(),
            SmallRng::seed_from_u64(self.rng.gen_range(0..u64::MAX)),
        );
        match QuizController::start(bank, difficulty, view) {
            Ok(controller) => {
                self.difficulty = difficulty;
                self.quiz = Some(controller);
                self.screen = AppScreen::Quiz;
            }
            Err(err) => {
                error!(%difficulty, error = %err, "failed to start quiz");
                self.show_error(t!("error.start").to_string());
            }
        }
    }

    pub fn phase(&self) -> Option<Phase> {
        self.quiz.as_ref().map(|q| q.state().phase())
    }

    /// Submit the zero-based option `chosen`. Ignored unless a question is
    /// waiting for an answer.
    pub fn answer(&mut self, chosen: usize) {
        if self.phase() != Some(Phase::AwaitingAnswer) {
            return;
        }
        if let Some(ref mut quiz) = self.quiz
            && let Err(err) = quiz.answer(chosen)
        {
            warn!(chosen, error = %err, "answer rejected");
        }
    }

    pub fn move_highlight(&mut self, down: bool) {
        if let Some(ref mut quiz) = self.quiz {
            let view = quiz.presenter_mut();
            if down {
                view.move_highlight_down();
            } else {
                view.move_highlight_up();
            }
        }
    }

    /// Enter on the quiz screen: answer with the highlighted option, or move
    /// on once the answer has been shown.
    pub fn confirm(&mut self, now: Instant) {
        match self.phase() {
            Some(Phase::AwaitingAnswer) => {
                if let Some(highlighted) = self.quiz.as_ref().map(|q| q.presenter().highlighted) {
                    self.answer(highlighted);
                }
            }
            Some(Phase::AnswerLocked) => self.next_question(now),
            _ => {}
        }
    }

    pub fn next_question(&mut self, now: Instant) {
        let Some(ref mut quiz) = self.quiz else {
            return;
        };
        if quiz.state().phase() != Phase::AnswerLocked || !quiz.presenter().next_ready(now) {
            return;
        }
        if let Err(err) = quiz.next() {
            warn!(error = %err, "advance rejected");
        }
    }

    pub fn restart_quiz(&mut self) {
        if let Some(ref mut quiz) = self.quiz {
            quiz.restart();
            self.screen = AppScreen::Quiz;
        }
    }

    pub fn on_tick(&mut self, now: Instant) {
        if self.toast.as_ref().is_some_and(|t| t.expired(now)) {
            self.toast = None;
        }
        if self.screen == AppScreen::Quiz
            && self
                .quiz
                .as_ref()
                .is_some_and(|q| q.presenter().summary_visible(now))
        {
            self.screen = AppScreen::Result;
        }
    }

    pub fn show_error(&mut self, message: String) {
        self.toast = Some(Toast {
            message,
            shown_at: Instant::now(),
            duration: self.config.error_display(),
        });
    }
}
