//! Session-scoped quiz attempt state machine.
//!
//! Pure and deterministic: wall-clock time is driven by the caller through
//! [`QuizSession::tick`] (one tick per second). Each question enforces a
//! mandatory reading dwell before the answer can be confirmed, and the
//! feedback screen enforces a second dwell before advancing — an
//! anti-guessing measure, not a throttle.
//!
//! Abandoning a session loses everything; attempts are all-or-nothing and the
//! single progress write on finish belongs to the caller.

use crate::models::domain::Question;

/// Seconds the student must sit on a question before confirming.
pub const READ_DWELL_TICKS: u8 = 5;
/// Seconds the feedback (correctness + justification) stays gated.
pub const FEEDBACK_DWELL_TICKS: u8 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Answering { dwell_left: u8, selected: Option<usize> },
    Feedback { dwell_left: u8, correct: bool },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// Constructed with no questions: no start action is offered and the
    /// lesson is never auto-completed.
    Unavailable,
    NotStarted,
    InProgress { current: usize, correct: usize, phase: Phase },
    Finished { score_percent: i32 },
}

#[derive(Clone, Debug)]
pub struct QuizSession {
    questions: Vec<Question>,
    state: SessionState,
}

impl QuizSession {
    pub fn new(questions: Vec<Question>) -> Self {
        let state = if questions.is_empty() {
            SessionState::Unavailable
        } else {
            SessionState::NotStarted
        };
        Self { questions, state }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            SessionState::InProgress { current, .. } => self.questions.get(current),
            _ => None,
        }
    }

    /// Explicit start action. Exam sessions require it; regular lesson
    /// quizzes just call it immediately. Returns whether the transition
    /// happened.
    pub fn start(&mut self) -> bool {
        match self.state {
            SessionState::NotStarted => {
                self.state = SessionState::InProgress {
                    current: 0,
                    correct: 0,
                    phase: Phase::Answering {
                        dwell_left: READ_DWELL_TICKS,
                        selected: None,
                    },
                };
                true
            }
            _ => false,
        }
    }

    /// Advances the active dwell timer by one second.
    pub fn tick(&mut self) {
        if let SessionState::InProgress { phase, .. } = &mut self.state {
            match phase {
                Phase::Answering { dwell_left, .. } | Phase::Feedback { dwell_left, .. } => {
                    *dwell_left = dwell_left.saturating_sub(1);
                }
            }
        }
    }

    /// Changes the pending selection. Allowed at any time while answering,
    /// including during the dwell; only confirmation is gated.
    pub fn select(&mut self, option: usize) -> bool {
        let question_len = match self.state {
            SessionState::InProgress { current, .. } => {
                self.questions.get(current).map(|q| q.options.len())
            }
            _ => None,
        };
        match (&mut self.state, question_len) {
            (
                SessionState::InProgress {
                    phase: Phase::Answering { selected, .. },
                    ..
                },
                Some(len),
            ) if option < len => {
                *selected = Some(option);
                true
            }
            _ => false,
        }
    }

    pub fn can_confirm(&self) -> bool {
        matches!(
            self.state,
            SessionState::InProgress {
                phase: Phase::Answering {
                    dwell_left: 0,
                    selected: Some(_)
                },
                ..
            }
        )
    }

    /// Locks in the selection, updates the running score and enters the
    /// feedback sub-state. Disabled until the reading dwell has elapsed and a
    /// selection exists.
    pub fn confirm(&mut self) -> bool {
        if !self.can_confirm() {
            return false;
        }
        if let SessionState::InProgress {
            current,
            correct,
            phase:
                Phase::Answering {
                    selected: Some(selected),
                    ..
                },
        } = self.state
        {
            let is_correct = self
                .questions
                .get(current)
                .map(|q| q.correct_answer == selected)
                .unwrap_or(false);
            self.state = SessionState::InProgress {
                current,
                correct: correct + usize::from(is_correct),
                phase: Phase::Feedback {
                    dwell_left: FEEDBACK_DWELL_TICKS,
                    correct: is_correct,
                },
            };
            return true;
        }
        false
    }

    pub fn can_advance(&self) -> bool {
        matches!(
            self.state,
            SessionState::InProgress {
                phase: Phase::Feedback { dwell_left: 0, .. },
                ..
            }
        )
    }

    /// Moves to the next question, or finishes the session after the last
    /// one. The final score is a 0–100 percentage, rounded.
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        if let SessionState::InProgress {
            current, correct, ..
        } = self.state
        {
            if current + 1 < self.questions.len() {
                self.state = SessionState::InProgress {
                    current: current + 1,
                    correct,
                    phase: Phase::Answering {
                        dwell_left: READ_DWELL_TICKS,
                        selected: None,
                    },
                };
            } else {
                let total = self.questions.len();
                let score_percent =
                    ((correct as f64 / total as f64) * 100.0).round() as i32;
                self.state = SessionState::Finished { score_percent };
            }
            return true;
        }
        false
    }
}
