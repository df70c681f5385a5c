use std::fmt;
use std::sync::Arc;

use crate::quiz::difficulty::DifficultyKey;
use crate::quiz::error::QuizError;
use crate::quiz::question::{QuestionBank, QuestionRecord};
use crate::quiz::report::FinalReport;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    AwaitingAnswer,
    AnswerLocked,
    Finished,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::AwaitingAnswer => "awaiting an answer",
            Phase::AnswerLocked => "the answer is locked",
            Phase::Finished => "the quiz is finished",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub is_correct: bool,
    pub correct_index: usize,
}

/// Progress through one difficulty's question list.
///
/// `current_index` only moves forward through [`SessionState::advance`], and
/// at most one answer is scored per question.
#[derive(Clone, Debug)]
pub struct SessionState {
    questions: Arc<[QuestionRecord]>,
    current_index: usize,
    score: usize,
    answer_locked: bool,
}

impl SessionState {
    pub fn new(bank: &QuestionBank, difficulty: DifficultyKey) -> Result<Self, QuizError> {
        match bank.questions(difficulty) {
            Some(questions) if !questions.is_empty() => Ok(Self::over(Arc::clone(questions))),
            _ => Err(QuizError::Configuration(difficulty)),
        }
    }

    fn over(questions: Arc<[QuestionRecord]>) -> Self {
        Self {
            questions,
            current_index: 0,
            score: 0,
            answer_locked: false,
        }
    }

    pub fn questions(&self) -> &Arc<[QuestionRecord]> {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn is_answer_locked(&self) -> bool {
        self.answer_locked
    }

    pub fn phase(&self) -> Phase {
        if self.is_finished() {
            Phase::Finished
        } else if self.answer_locked {
            Phase::AnswerLocked
        } else {
            Phase::AwaitingAnswer
        }
    }

    pub fn current_question(&self) -> Option<&QuestionRecord> {
        self.questions.get(self.current_index)
    }

    pub fn is_finished(&self) -> bool {
        self.current_index >= self.questions.len()
    }

    pub fn submit_answer(&mut self, chosen: usize) -> Result<AnswerOutcome, QuizError> {
        let phase = self.phase();
        if phase != Phase::AwaitingAnswer {
            return Err(QuizError::invalid_state("submit_answer", phase));
        }
        let question = &self.questions[self.current_index];
        if chosen >= question.options.len() {
            return Err(QuizError::OptionOutOfRange {
                chosen,
                len: question.options.len(),
            });
        }

        let outcome = AnswerOutcome {
            is_correct: chosen == question.correct_index,
            correct_index: question.correct_index,
        };
        self.answer_locked = true;
        if outcome.is_correct {
            self.score += 1;
        }
        Ok(outcome)
    }

    pub fn advance(&mut self) -> Result<(), QuizError> {
        let phase = self.phase();
        if phase != Phase::AnswerLocked {
            return Err(QuizError::invalid_state("advance", phase));
        }
        self.current_index += 1;
        self.answer_locked = false;
        Ok(())
    }

    /// Fraction of the quiz completed, counting a locked answer immediately so
    /// the bar fills before the next question appears.
    pub fn progress_fraction(&self) -> f64 {
        let total = self.questions.len();
        if total == 0 {
            return 0.0;
        }
        let done = (self.current_index + usize::from(self.answer_locked)).min(total);
        done as f64 / total as f64
    }

    pub fn final_report(&self) -> Result<FinalReport, QuizError> {
        if !self.is_finished() {
            return Err(QuizError::invalid_state("final_report", self.phase()));
        }
        Ok(FinalReport::new(self.score, self.questions.len()))
    }

    pub fn restart(&self) -> SessionState {
        Self::over(Arc::clone(&self.questions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(correct: usize) -> QuestionRecord {
        QuestionRecord::new("Which one?", ["a", "b", "c", "d"], correct)
    }

    fn bank_with(n: usize) -> QuestionBank {
        let questions = (0..n).map(|i| question(i % 4)).collect();
        QuestionBank::new().with_set(DifficultyKey::Easy, questions)
    }

    fn session(n: usize) -> SessionState {
        SessionState::new(&bank_with(n), DifficultyKey::Easy).unwrap()
    }

    #[test]
    fn test_new_session_is_not_finished() {
        for d in DifficultyKey::ALL {
            let bank = QuestionBank::new().with_set(d, vec![question(0)]);
            let state = SessionState::new(&bank, d).unwrap();
            assert!(!state.is_finished());
            assert_eq!(state.current_index(), 0);
            assert_eq!(state.score(), 0);
            assert!(!state.is_answer_locked());
            assert_eq!(state.phase(), Phase::AwaitingAnswer);
        }
    }

    #[test]
    fn test_missing_difficulty_is_configuration_error() {
        let bank = bank_with(3);
        let err = SessionState::new(&bank, DifficultyKey::Hard).unwrap_err();
        assert!(matches!(err, QuizError::Configuration(DifficultyKey::Hard)));
    }

    #[test]
    fn test_empty_difficulty_is_configuration_error() {
        let bank = QuestionBank::new().with_set(DifficultyKey::Intermediate, Vec::new());
        let err = SessionState::new(&bank, DifficultyKey::Intermediate).unwrap_err();
        assert!(matches!(
            err,
            QuizError::Configuration(DifficultyKey::Intermediate)
        ));
    }

    #[test]
    fn test_current_question_none_past_end() {
        let mut state = session(1);
        assert!(state.current_question().is_some());
        state.submit_answer(0).unwrap();
        state.advance().unwrap();
        assert!(state.current_question().is_none());
        assert_eq!(state.phase(), Phase::Finished);
    }

    #[test]
    fn test_score_never_exceeds_submissions() {
        let mut state = session(6);
        let mut submissions = 0;
        while !state.is_finished() {
            let correct = state.current_question().unwrap().correct_index;
            let chosen = if submissions % 2 == 0 {
                correct
            } else {
                (correct + 1) % 4
            };
            state.submit_answer(chosen).unwrap();
            submissions += 1;
            assert!(state.score() <= submissions);
            assert!(state.score() <= state.total());
            state.advance().unwrap();
        }
        assert_eq!(submissions, 6);
        assert_eq!(state.score(), 3);
    }

    #[test]
    fn test_double_submit_is_invalid_state() {
        let mut state = session(2);
        state.submit_answer(0).unwrap();
        let err = state.submit_answer(0).unwrap_err();
        assert!(matches!(
            err,
            QuizError::InvalidState {
                operation: "submit_answer",
                phase: Phase::AnswerLocked
            }
        ));
        assert_eq!(state.score(), 1);
    }

    #[test]
    fn test_advance_without_answer_is_invalid_state() {
        let mut state = session(2);
        let err = state.advance().unwrap_err();
        assert!(matches!(
            err,
            QuizError::InvalidState {
                operation: "advance",
                phase: Phase::AwaitingAnswer
            }
        ));
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn test_out_of_range_choice_is_rejected_not_clamped() {
        let mut state = session(2);
        let err = state.submit_answer(7).unwrap_err();
        assert!(matches!(
            err,
            QuizError::OptionOutOfRange { chosen: 7, len: 4 }
        ));
        // Rejection leaves the question open.
        assert!(!state.is_answer_locked());
        assert_eq!(state.score(), 0);
        assert!(state.submit_answer(3).is_ok());
    }

    #[test]
    fn test_submit_after_finish_is_invalid_state() {
        let mut state = session(1);
        state.submit_answer(0).unwrap();
        state.advance().unwrap();
        let err = state.submit_answer(0).unwrap_err();
        assert!(matches!(
            err,
            QuizError::InvalidState {
                phase: Phase::Finished,
                ..
            }
        ));
        assert!(state.advance().is_err());
    }

    #[test]
    fn test_outcome_reports_correct_index_on_both_paths() {
        let mut state = session(2);
        let hit = state.submit_answer(0).unwrap();
        assert_eq!(
            hit,
            AnswerOutcome {
                is_correct: true,
                correct_index: 0
            }
        );
        state.advance().unwrap();
        let miss = state.submit_answer(3).unwrap();
        assert_eq!(
            miss,
            AnswerOutcome {
                is_correct: false,
                correct_index: 1
            }
        );
    }

    #[test]
    fn test_single_question_boundary() {
        let mut state = session(1);
        state.submit_answer(0).unwrap();
        state.advance().unwrap();
        assert!(state.is_finished());
        let report = state.final_report().unwrap();
        assert_eq!(report, FinalReport::new(1, 1));
        assert_eq!(report.percentage, 100);
    }

    #[test]
    fn test_four_questions_half_right() {
        let mut state = session(4);
        // Correct answers are 0, 1, 2, 3 in order.
        for choice in [0, 0, 2, 0] {
            state.submit_answer(choice).unwrap();
            state.advance().unwrap();
        }
        let report = state.final_report().unwrap();
        assert_eq!(report.score, 2);
        assert_eq!(report.total, 4);
        assert_eq!(report.percentage, 50);
    }

    #[test]
    fn test_final_report_before_finish_is_invalid_state() {
        let mut state = session(2);
        assert!(matches!(
            state.final_report().unwrap_err(),
            QuizError::InvalidState { .. }
        ));
        state.submit_answer(0).unwrap();
        state.advance().unwrap();
        state.submit_answer(0).unwrap();
        // Locked on the last question is still not finished.
        assert!(state.final_report().is_err());
    }

    #[test]
    fn test_progress_counts_locked_answer() {
        let mut state = session(4);
        assert_eq!(state.progress_fraction(), 0.0);
        state.submit_answer(1).unwrap();
        assert_eq!(state.progress_fraction(), 0.25);
        state.advance().unwrap();
        assert_eq!(state.progress_fraction(), 0.25);
        for _ in 0..3 {
            state.submit_answer(0).unwrap();
            state.advance().unwrap();
        }
        assert_eq!(state.progress_fraction(), 1.0);
    }

    #[test]
    fn test_restart_resets_counters_and_shares_questions() {
        let mut state = session(3);
        state.submit_answer(0).unwrap();
        state.advance().unwrap();
        state.submit_answer(1).unwrap();

        let fresh = state.restart();
        assert_eq!(fresh.current_index(), 0);
        assert_eq!(fresh.score(), 0);
        assert!(!fresh.is_answer_locked());
        assert!(Arc::ptr_eq(fresh.questions(), state.questions()));
        assert_eq!(&fresh.questions()[..], &state.questions()[..]);
    }

    #[test]
    fn test_sessions_share_bank_allocation() {
        let bank = bank_with(2);
        let a = SessionState::new(&bank, DifficultyKey::Easy).unwrap();
        let b = SessionState::new(&bank, DifficultyKey::Easy).unwrap();
        assert!(Arc::ptr_eq(a.questions(), b.questions()));
    }
}
