use std::fs;
use std::sync::Arc;

use chrono::Duration;
use quiz_core::model::{Category, ScoreTier};
use quiz_core::time::fixed_now;
use rand::SeedableRng;
use rand::rngs::StdRng;
use services::{Clock, DatasetIndex, GuessOutcome, QuizPhase, QuizSession};

#[test]
fn quiz_run_over_directory_dataset() {
    let root = tempfile::tempdir().unwrap();
    for category in Category::ALL {
        let dir = root.path().join(category.as_str());
        fs::create_dir(&dir).unwrap();
        for n in 0..3 {
            fs::write(dir.join(format!("{n}.jpg")), b"jpg").unwrap();
        }
    }

    let index = Arc::new(DatasetIndex::build(root.path(), &Category::ALL).unwrap());
    assert_eq!(index.total_items(), 12);
    assert!(index.empty_categories().is_empty());

    let mut clock = Clock::fixed(fixed_now());
    let mut session = QuizSession::new(Arc::clone(&index), clock, StdRng::seed_from_u64(42));
    let preview = session.current_prompt().expect("preview prompt").clone();
    assert!(preview.item().starts_with(root.path().join(preview.category().as_str())));

    session.start_run(4).unwrap();
    assert_eq!(session.phase(), QuizPhase::Running);

    let mut last = None;
    while !session.is_complete() {
        let answer = session.current_prompt().unwrap().category();
        last = Some(session.submit_guess(answer).unwrap());
    }

    let Some(GuessOutcome::Scored(scored)) = last else {
        panic!("final guess should be scored");
    };
    let summary = scored.summary.expect("summary on final guess");
    assert!(scored.next_prompt.is_none());
    assert_eq!(summary.score(), 4);
    assert_eq!(summary.tier(), ScoreTier::Perfect);

    clock.advance(Duration::minutes(1));
    let mut restarted = QuizSession::new(index, clock, StdRng::seed_from_u64(42));
    restarted.start_run(1).unwrap();
    assert_eq!(restarted.started_at(), Some(fixed_now() + Duration::minutes(1)));
}
