use quiz_core::model::{Category, RunSummary, ScoreTier};
use services::{GuessFeedback, GuessOutcome, QuizPhase, QuizSession};

use crate::views::ViewError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeTone {
    Success,
    Error,
    Warning,
}

impl NoticeTone {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            NoticeTone::Success => "notice notice--success",
            NoticeTone::Error => "notice notice--error",
            NoticeTone::Warning => "notice notice--warning",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoticeVm {
    pub message: String,
    pub tone: NoticeTone,
}

impl From<GuessFeedback> for NoticeVm {
    fn from(feedback: GuessFeedback) -> Self {
        match feedback {
            GuessFeedback::Correct => Self {
                message: "Correct! Your guess is right.".to_string(),
                tone: NoticeTone::Success,
            },
            GuessFeedback::Incorrect { correct } => Self {
                message: format!("Wrong! The correct class was {}.", correct.display_name()),
                tone: NoticeTone::Error,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryVm {
    pub message: String,
    pub tone: NoticeTone,
    /// Perfect runs get the celebration styling.
    pub celebrate: bool,
}

impl SummaryVm {
    #[must_use]
    pub fn css_class(&self) -> &'static str {
        if self.celebrate {
            "quiz-summary quiz-summary--celebrate"
        } else {
            "quiz-summary"
        }
    }
}

impl From<&RunSummary> for SummaryVm {
    fn from(summary: &RunSummary) -> Self {
        let percentage = summary.percentage();
        match summary.tier() {
            ScoreTier::Perfect => Self {
                message: "Amazing! You scored 100%! 🎉".to_string(),
                tone: NoticeTone::Success,
                celebrate: true,
            },
            ScoreTier::Pass => Self {
                message: format!("Congratulations! You scored {percentage:.0}%! 🎉"),
                tone: NoticeTone::Success,
                celebrate: false,
            },
            ScoreTier::NeedsPractice => Self {
                message: format!("Good effort! You scored {percentage:.0}%. Keep practicing!"),
                tone: NoticeTone::Warning,
                celebrate: false,
            },
        }
    }
}

/// Messages shown under the quiz after the last action.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuizNotices {
    pub feedback: Option<NoticeVm>,
    pub summary: Option<SummaryVm>,
    pub error: Option<ViewError>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizStatusVm {
    pub phase: QuizPhase,
    pub status_line: Option<String>,
    pub image_src: Option<String>,
    pub can_guess: bool,
}

#[must_use]
pub fn map_quiz_status(session: &QuizSession) -> QuizStatusVm {
    let phase = session.phase();
    let status_line = (phase != QuizPhase::Idle).then(|| {
        format!(
            "Score: {} | Attempts: {}/{}",
            session.score(),
            session.attempts(),
            session.target_rounds()
        )
    });

    QuizStatusVm {
        phase,
        status_line,
        image_src: session
            .current_prompt()
            .map(|prompt| prompt.item().display().to_string()),
        can_guess: phase == QuizPhase::Running,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GuessButtonVm {
    pub category: Category,
    pub label: &'static str,
    pub disabled: bool,
}

#[must_use]
pub fn map_guess_buttons(session: &QuizSession) -> Vec<GuessButtonVm> {
    let disabled = session.phase() != QuizPhase::Running;
    session
        .dataset()
        .categories()
        .map(|category| GuessButtonVm {
            category,
            label: category.display_name(),
            disabled,
        })
        .collect()
}

/// Start a run and describe what to show next.
pub fn start_run(session: &mut QuizSession, rounds: u32) -> QuizNotices {
    match session.start_run(rounds) {
        Ok(_) => QuizNotices::default(),
        Err(err) => QuizNotices {
            error: Some(ViewError::from(&err)),
            ..QuizNotices::default()
        },
    }
}

/// Apply a guess; `None` means the guess was ignored and the current notices stay.
pub fn submit_guess(session: &mut QuizSession, guess: Category) -> Option<QuizNotices> {
    match session.submit_guess(guess) {
        Ok(GuessOutcome::Ignored) => None,
        Ok(GuessOutcome::Scored(scored)) => Some(QuizNotices {
            feedback: Some(NoticeVm::from(scored.feedback)),
            summary: scored.summary.as_ref().map(SummaryVm::from),
            error: None,
        }),
        Err(err) => Some(QuizNotices {
            error: Some(ViewError::from(&err)),
            ..QuizNotices::default()
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::Clock;
    use quiz_core::time::fixed_now;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use services::DatasetIndex;
    use std::path::PathBuf;
    use std::sync::Arc;

    fn build_session(index: DatasetIndex) -> QuizSession {
        QuizSession::new(
            Arc::new(index),
            Clock::fixed(fixed_now()),
            StdRng::seed_from_u64(3),
        )
    }

    fn single_category_session() -> QuizSession {
        build_session(DatasetIndex::from_entries([(
            Category::Glioma,
            vec!["/data/glioma/1.jpg"],
        )]))
    }

    #[test]
    fn idle_status_hides_score_line() {
        let session = single_category_session();
        let status = map_quiz_status(&session);
        assert_eq!(status.phase, QuizPhase::Idle);
        assert_eq!(status.status_line, None);
        assert_eq!(status.image_src.as_deref(), Some("/data/glioma/1.jpg"));
        assert!(!status.can_guess);
        assert!(map_guess_buttons(&session).iter().all(|button| button.disabled));
    }

    #[test]
    fn running_status_shows_score_and_attempts() {
        let mut session = single_category_session();
        assert_eq!(start_run(&mut session, 3), QuizNotices::default());
        submit_guess(&mut session, Category::Glioma).unwrap();

        let status = map_quiz_status(&session);
        assert_eq!(status.status_line.as_deref(), Some("Score: 1 | Attempts: 1/3"));
        assert!(status.can_guess);
        let buttons = map_guess_buttons(&session);
        assert_eq!(buttons.len(), 1);
        assert_eq!(buttons[0].label, "Glioma");
        assert!(!buttons[0].disabled);
    }

    #[test]
    fn wrong_guess_names_the_correct_class() {
        let mut session = single_category_session();
        start_run(&mut session, 2);
        let notices = submit_guess(&mut session, Category::Pituitary).unwrap();
        let feedback = notices.feedback.unwrap();
        assert_eq!(feedback.message, "Wrong! The correct class was Glioma.");
        assert_eq!(feedback.tone, NoticeTone::Error);
        assert!(notices.summary.is_none());
    }

    #[test]
    fn final_guess_carries_summary() {
        let mut session = single_category_session();
        start_run(&mut session, 1);
        let notices = submit_guess(&mut session, Category::Glioma).unwrap();
        assert_eq!(
            notices.feedback.unwrap().message,
            "Correct! Your guess is right."
        );
        let summary = notices.summary.unwrap();
        assert_eq!(summary.message, "Amazing! You scored 100%! 🎉");
        assert!(summary.celebrate);

        assert_eq!(submit_guess(&mut session, Category::Glioma), None);
        assert!(!map_quiz_status(&session).can_guess);
    }

    #[test]
    fn summary_messages_per_tier() {
        let now = fixed_now();
        let pass = SummaryVm::from(&RunSummary::new(7, 10, now, now).unwrap());
        assert_eq!(pass.message, "Congratulations! You scored 70%! 🎉");
        assert_eq!(pass.tone, NoticeTone::Success);

        let low = SummaryVm::from(&RunSummary::new(1, 3, now, now).unwrap());
        assert_eq!(low.message, "Good effort! You scored 33%. Keep practicing!");
        assert_eq!(low.tone, NoticeTone::Warning);
        assert!(!low.celebrate);
    }

    #[test]
    fn errors_map_to_view_errors() {
        let mut session = single_category_session();
        let notices = start_run(&mut session, 0);
        assert_eq!(notices.error, Some(ViewError::InvalidRoundCount));

        let mut empty = build_session(DatasetIndex::from_entries([(
            Category::NoTumor,
            Vec::<PathBuf>::new(),
        )]));
        let notices = start_run(&mut empty, 5);
        assert_eq!(notices.error, Some(ViewError::EmptyCategory));
        assert_eq!(map_quiz_status(&empty).phase, QuizPhase::Idle);
    }
}
