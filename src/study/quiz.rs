//! Multiple-choice quiz engine
//!
//! Drives a fixed-question mock exam: the learner tentatively selects a
//! choice, commits it by advancing, and can navigate backward without losing
//! committed answers. Every mutator has a matching guard predicate so the
//! rendering layer can disable exactly the actions the engine would refuse;
//! the mutators silently refuse anyway, so illegal calls are harmless no-ops
//! rather than errors.

/// A single multiple-choice question
#[derive(Debug, Clone)]
pub struct Question {
    /// Subject area shown as a badge (e.g. "Civics")
    pub subject: &'static str,
    /// The question text
    pub prompt: &'static str,
    /// Ordered answer choices (always at least two)
    pub choices: &'static [&'static str],
    /// Index of the correct choice
    pub correct_index: usize,
}

/// Final score for a completed quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizScore {
    /// Number of correctly answered questions
    pub correct: usize,
    /// Total number of questions
    pub total: usize,
    /// Percentage correct, rounded half-up to the nearest integer
    pub percentage: u32,
}

/// Outcome of one question, for the results screen
#[derive(Debug, Clone, Copy)]
pub struct QuestionResult {
    /// Subject of the question
    pub subject: &'static str,
    /// The committed answer, if any
    pub answered: Option<usize>,
    /// Whether the committed answer was correct
    pub is_correct: bool,
}

/// The quiz state machine
///
/// `answers[i]` is set exactly when question `i` has been advanced past at
/// least once; navigating backward never clears it. Once the last question is
/// advanced past the engine is completed and read-only.
#[derive(Debug, Clone)]
pub struct QuizEngine {
    questions: Vec<Question>,
    current_index: usize,
    /// Tentative, uncommitted selection for the displayed question
    selected: Option<usize>,
    /// Committed answers, one slot per question
    answers: Vec<Option<usize>>,
    completed: bool,
}

impl QuizEngine {
    /// Create an engine over a fixed question set
    ///
    /// The question list must be non-empty; fixtures guarantee this.
    pub fn new(questions: Vec<Question>) -> Self {
        let answers = vec![None; questions.len()];
        Self {
            questions,
            current_index: 0,
            selected: None,
            answers,
            completed: false,
        }
    }

    /// The currently displayed question
    pub fn current_question(&self) -> &Question {
        &self.questions[self.current_index]
    }

    /// Zero-based index of the displayed question
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Total number of questions
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// The tentative selection for the displayed question
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Whether the quiz has been finished
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Whether the displayed question is the last one
    pub fn on_last_question(&self) -> bool {
        self.current_index + 1 == self.questions.len()
    }

    /// Whether `choice` may be tentatively selected right now
    pub fn can_select(&self, choice: usize) -> bool {
        !self.completed && choice < self.current_question().choices.len()
    }

    /// Tentatively select a choice for the displayed question, overwriting
    /// any prior tentative selection. Refused once completed or when the
    /// index is out of range.
    pub fn select_answer(&mut self, choice: usize) {
        if self.can_select(choice) {
            self.selected = Some(choice);
        }
    }

    /// Whether advancing is legal: a tentative selection exists and the quiz
    /// is not finished
    pub fn can_advance(&self) -> bool {
        !self.completed && self.selected.is_some()
    }

    /// Commit the tentative selection and move to the next question
    ///
    /// On the last question this finishes the quiz instead. Advancing with no
    /// tentative selection is refused outright; a null answer is never
    /// recorded. When moving onto a previously visited question the tentative
    /// selection is restored from its committed answer.
    pub fn advance(&mut self) {
        if !self.can_advance() {
            return;
        }

        self.answers[self.current_index] = self.selected;

        if self.on_last_question() {
            self.completed = true;
        } else {
            self.current_index += 1;
            self.selected = self.answers[self.current_index];
        }
    }

    /// Whether retreating is legal: not on the first question and the quiz
    /// is not finished
    pub fn can_retreat(&self) -> bool {
        !self.completed && self.current_index > 0
    }

    /// Move back to the previous question, restoring its committed answer as
    /// the tentative selection
    pub fn retreat(&mut self) {
        if !self.can_retreat() {
            return;
        }
        self.current_index -= 1;
        self.selected = self.answers[self.current_index];
    }

    /// Final score; `None` until the quiz is completed
    pub fn score(&self) -> Option<QuizScore> {
        if !self.completed {
            return None;
        }

        let correct = self
            .answers
            .iter()
            .zip(&self.questions)
            .filter(|(answer, question)| **answer == Some(question.correct_index))
            .count();
        let total = self.questions.len();
        let percentage = (correct as f64 / total as f64 * 100.0).round() as u32;

        Some(QuizScore {
            correct,
            total,
            percentage,
        })
    }

    /// Per-question outcomes for the results screen
    pub fn results(&self) -> Vec<QuestionResult> {
        self.questions
            .iter()
            .zip(&self.answers)
            .map(|(question, answer)| QuestionResult {
                subject: question.subject,
                answered: *answer,
                is_correct: *answer == Some(question.correct_index),
            })
            .collect()
    }

    #[cfg(test)]
    fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Three questions with correct indices [0, 1, 1], two choices each
    fn engine() -> QuizEngine {
        QuizEngine::new(vec![
            Question {
                subject: "A",
                prompt: "first",
                choices: &["right", "wrong"],
                correct_index: 0,
            },
            Question {
                subject: "B",
                prompt: "second",
                choices: &["wrong", "right"],
                correct_index: 1,
            },
            Question {
                subject: "C",
                prompt: "third",
                choices: &["wrong", "right"],
                correct_index: 1,
            },
        ])
    }

    #[test]
    fn test_initial_state() {
        let quiz = engine();
        assert_eq!(quiz.current_index(), 0);
        assert_eq!(quiz.selected(), None);
        assert!(!quiz.is_completed());
        assert!(quiz.answers().iter().all(Option::is_none));
        assert_eq!(quiz.answers().len(), quiz.question_count());
    }

    #[test]
    fn test_advance_without_selection_is_refused() {
        let mut quiz = engine();
        assert!(!quiz.can_advance());
        quiz.advance();
        assert_eq!(quiz.current_index(), 0);
        assert!(quiz.answers().iter().all(Option::is_none));
    }

    #[test]
    fn test_select_out_of_range_is_refused() {
        let mut quiz = engine();
        quiz.select_answer(5);
        assert_eq!(quiz.selected(), None);
        quiz.select_answer(1);
        assert_eq!(quiz.selected(), Some(1));
    }

    #[test]
    fn test_retreat_from_first_question_is_refused() {
        let mut quiz = engine();
        assert!(!quiz.can_retreat());
        quiz.retreat();
        assert_eq!(quiz.current_index(), 0);
    }

    #[test]
    fn test_answers_set_only_when_advanced_past() {
        let mut quiz = engine();
        quiz.select_answer(0);
        // Selecting alone does not commit
        assert!(quiz.answers()[0].is_none());
        quiz.advance();
        assert_eq!(quiz.answers()[0], Some(0));
        assert!(quiz.answers()[1].is_none());
        assert_eq!(quiz.current_index(), 1);
        assert_eq!(quiz.selected(), None);
    }

    #[test]
    fn test_scoring_two_of_three() {
        let mut quiz = engine();
        // Submitted answers [0, 1, 0] against correct [0, 1, 1]
        for choice in [0, 1, 0] {
            quiz.select_answer(choice);
            quiz.advance();
        }
        assert!(quiz.is_completed());
        let score = quiz.score().unwrap();
        assert_eq!(score.correct, 2);
        assert_eq!(score.total, 3);
        assert_eq!(score.percentage, 67);
    }

    #[test]
    fn test_score_unavailable_before_completion() {
        let mut quiz = engine();
        assert!(quiz.score().is_none());
        quiz.select_answer(0);
        quiz.advance();
        assert!(quiz.score().is_none());
    }

    #[test]
    fn test_completed_engine_is_read_only() {
        let mut quiz = engine();
        for _ in 0..3 {
            quiz.select_answer(0);
            quiz.advance();
        }
        assert!(quiz.is_completed());
        assert!(!quiz.can_select(0));
        assert!(!quiz.can_advance());
        assert!(!quiz.can_retreat());
        quiz.retreat();
        assert_eq!(quiz.current_index(), 2);
    }

    #[test]
    fn test_retreat_restores_committed_answer() {
        let mut quiz = engine();
        quiz.select_answer(1);
        quiz.advance();
        quiz.retreat();
        assert_eq!(quiz.current_index(), 0);
        assert_eq!(quiz.selected(), Some(1));
    }

    #[test]
    fn test_round_trip_restores_choice_zero() {
        // A committed answer of choice 0 must survive navigation; the engine
        // restores the exact committed value, not a cleared selection.
        let mut quiz = engine();
        quiz.select_answer(0);
        quiz.advance();
        quiz.select_answer(1);
        quiz.advance();
        quiz.retreat();
        assert_eq!(quiz.selected(), Some(1));
        quiz.retreat();
        assert_eq!(quiz.selected(), Some(0));
    }

    #[test]
    fn test_navigation_is_side_effect_free_on_other_slots() {
        let mut quiz = engine();
        quiz.select_answer(0);
        quiz.advance();
        quiz.select_answer(1);
        quiz.advance();
        let snapshot = quiz.answers().to_vec();

        // Retreat and immediately re-advance with the restored selection
        quiz.retreat();
        quiz.advance();
        assert_eq!(quiz.answers(), snapshot.as_slice());
        assert_eq!(quiz.current_index(), 2);
    }

    #[test]
    fn test_at_most_visited_slots_are_set() {
        let mut quiz = engine();
        quiz.select_answer(0);
        quiz.advance();
        let set = quiz.answers().iter().filter(|a| a.is_some()).count();
        assert!(set <= quiz.current_index() + 1);
    }

    #[test]
    fn test_reselect_overwrites_tentative_only() {
        let mut quiz = engine();
        quiz.select_answer(0);
        quiz.select_answer(1);
        assert_eq!(quiz.selected(), Some(1));
        assert!(quiz.answers()[0].is_none());
    }

    #[test]
    fn test_results_breakdown() {
        let mut quiz = engine();
        for choice in [0, 0, 1] {
            quiz.select_answer(choice);
            quiz.advance();
        }
        let results = quiz.results();
        assert_eq!(results.len(), 3);
        assert!(results[0].is_correct);
        assert!(!results[1].is_correct);
        assert!(results[2].is_correct);
        assert_eq!(results[1].answered, Some(0));
    }
}
