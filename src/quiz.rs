//! # Defense quiz logic
//!
//! Arithmetic-question generation and round bookkeeping for the "defend
//! Earth" minigame. Everything here is plain state and arithmetic: timers
//! tick only when the host feeds elapsed time in, and question rendering is
//! limited to the prompt string.

use rand::Rng;

use crate::constants::Second;

/// Seconds granted per question.
pub const DEFAULT_TIME_PER_QUESTION: Second = 30.;

/// Questions to clear in one round.
pub const DEFAULT_QUESTION_COUNT: usize = 7;

/// One arithmetic question with its exact integer answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    pub answer: i64,
}

/// Generate a random question drawn uniformly from the five forms: large
/// addition, large subtraction, multiplication, exact division, and a
/// two-step `(a + b) × c`. Division operands are constructed from the
/// quotient so the answer is always an integer.
pub fn generate_question<R: Rng + ?Sized>(rng: &mut R) -> Question {
    match rng.random_range(0..5) {
        0 => {
            let x: i64 = rng.random_range(100..1000);
            let y: i64 = rng.random_range(100..1000);
            Question {
                prompt: format!("{x} + {y}"),
                answer: x + y,
            }
        }
        1 => {
            let x: i64 = rng.random_range(200..1100);
            let y: i64 = rng.random_range(1..200);
            Question {
                prompt: format!("{x} - {y}"),
                answer: x - y,
            }
        }
        2 => {
            let x: i64 = rng.random_range(10..50);
            let y: i64 = rng.random_range(10..40);
            Question {
                prompt: format!("{x} × {y}"),
                answer: x * y,
            }
        }
        3 => {
            let divisor: i64 = rng.random_range(2..21);
            let quotient: i64 = rng.random_range(5..35);
            let dividend = divisor * quotient;
            Question {
                prompt: format!("{dividend} / {divisor}"),
                answer: quotient,
            }
        }
        _ => {
            let a: i64 = rng.random_range(10..50);
            let b: i64 = rng.random_range(10..50);
            let c: i64 = rng.random_range(2..12);
            Question {
                prompt: format!("({a} + {b}) × {c}"),
                answer: (a + b) * c,
            }
        }
    }
}

/// Result of submitting an answer or letting the clock run out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizOutcome {
    Correct,
    Wrong,
    TimedOut,
    /// The round is already over; the submission was ignored.
    RoundComplete,
}

/// State of one quiz round.
///
/// The host owns the wall clock: it calls [`QuizRound::tick`] with elapsed
/// seconds and [`QuizRound::submit`] with the player's parsed answer, and
/// reacts to the returned [`QuizOutcome`].
#[derive(Debug, Clone)]
pub struct QuizRound {
    current: Question,
    time_per_question: Second,
    time_left: Second,
    questions_total: usize,
    answered: usize,
}

impl QuizRound {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_settings(rng, DEFAULT_TIME_PER_QUESTION, DEFAULT_QUESTION_COUNT)
    }

    pub fn with_settings<R: Rng + ?Sized>(
        rng: &mut R,
        time_per_question: Second,
        questions_total: usize,
    ) -> Self {
        QuizRound {
            current: generate_question(rng),
            time_per_question,
            time_left: time_per_question,
            questions_total,
            answered: 0,
        }
    }

    pub fn current_question(&self) -> &Question {
        &self.current
    }

    pub fn time_left(&self) -> Second {
        self.time_left
    }

    pub fn answered(&self) -> usize {
        self.answered
    }

    pub fn is_complete(&self) -> bool {
        self.answered >= self.questions_total
    }

    /// Advance the question clock by `dt` seconds. When the clock reaches
    /// zero the current question is forfeited and replaced by a fresh one.
    pub fn tick<R: Rng + ?Sized>(&mut self, dt: Second, rng: &mut R) -> Option<QuizOutcome> {
        if self.is_complete() {
            return None;
        }
        self.time_left -= dt;
        if self.time_left <= 0. {
            self.next_question(rng);
            return Some(QuizOutcome::TimedOut);
        }
        None
    }

    /// Check the player's answer. A correct answer advances the round and
    /// draws the next question; a wrong one leaves the question in place.
    pub fn submit<R: Rng + ?Sized>(&mut self, answer: i64, rng: &mut R) -> QuizOutcome {
        if self.is_complete() {
            return QuizOutcome::RoundComplete;
        }
        if answer == self.current.answer {
            self.answered += 1;
            if !self.is_complete() {
                self.next_question(rng);
            }
            QuizOutcome::Correct
        } else {
            QuizOutcome::Wrong
        }
    }

    fn next_question<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.current = generate_question(rng);
        self.time_left = self.time_per_question;
    }
}

#[cfg(test)]
mod quiz_test {

    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_answers_are_consistent_with_prompts() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let q = generate_question(&mut rng);
            if let Some((dividend, divisor)) = q.prompt.split_once(" / ") {
                let dividend: i64 = dividend.parse().unwrap();
                let divisor: i64 = divisor.parse().unwrap();
                assert_eq!(dividend % divisor, 0, "{}", q.prompt);
                assert_eq!(q.answer, dividend / divisor);
            }
            assert!(q.answer > 0, "{} = {}", q.prompt, q.answer);
        }
    }

    #[test]
    fn test_all_five_forms_appear() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut saw_add = false;
        let mut saw_sub = false;
        let mut saw_mul = false;
        let mut saw_div = false;
        let mut saw_multi_step = false;
        for _ in 0..200 {
            let q = generate_question(&mut rng);
            if q.prompt.starts_with('(') {
                saw_multi_step = true;
            } else if q.prompt.contains('+') {
                saw_add = true;
            } else if q.prompt.contains('-') {
                saw_sub = true;
            } else if q.prompt.contains('×') {
                saw_mul = true;
            } else if q.prompt.contains('/') {
                saw_div = true;
            }
        }
        assert!(saw_add && saw_sub && saw_mul && saw_div && saw_multi_step);
    }

    #[test]
    fn test_round_progression() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut round = QuizRound::with_settings(&mut rng, 30., 2);

        let wrong = round.current_question().answer + 1;
        assert_eq!(round.submit(wrong, &mut rng), QuizOutcome::Wrong);
        assert_eq!(round.answered(), 0);

        let right = round.current_question().answer;
        assert_eq!(round.submit(right, &mut rng), QuizOutcome::Correct);
        assert_eq!(round.answered(), 1);
        assert!(!round.is_complete());

        let right = round.current_question().answer;
        assert_eq!(round.submit(right, &mut rng), QuizOutcome::Correct);
        assert!(round.is_complete());
        assert_eq!(round.submit(0, &mut rng), QuizOutcome::RoundComplete);
    }

    #[test]
    fn test_timeout_replaces_question_and_resets_clock() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut round = QuizRound::with_settings(&mut rng, 10., 3);

        assert_eq!(round.tick(4., &mut rng), None);
        assert_eq!(round.time_left(), 6.);
        assert_eq!(round.tick(6., &mut rng), Some(QuizOutcome::TimedOut));
        assert_eq!(round.time_left(), 10.);
        assert_eq!(round.answered(), 0);
    }

    #[test]
    fn test_tick_is_inert_once_complete() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut round = QuizRound::with_settings(&mut rng, 10., 1);
        let right = round.current_question().answer;
        round.submit(right, &mut rng);
        assert!(round.is_complete());
        assert_eq!(round.tick(100., &mut rng), None);
    }
}
