pub mod controller;
pub mod difficulty;
pub mod error;
pub mod question;
pub mod report;
pub mod session;

pub use controller::{Presenter, QuizController};
pub use difficulty::DifficultyKey;
pub use error::{LoadError, QuizError};
pub use question::{QuestionBank, QuestionRecord};
pub use report::FinalReport;
pub use session::{AnswerOutcome, Phase, SessionState};
