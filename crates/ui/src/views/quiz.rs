use dioxus::prelude::*;

use quiz_core::model::RoundCount;
use services::QuizPhase;

use crate::context::AppContext;
use crate::vm::{QuizNotices, map_guess_buttons, map_quiz_status, start_run, submit_guess};

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let default_rounds = ctx.default_rounds().get();
    let mut session = use_signal(move || ctx.new_session());
    let mut rounds = use_signal(move || default_rounds);
    let mut notices = use_signal(QuizNotices::default);

    let status = map_quiz_status(&session.read());
    let guesses = map_guess_buttons(&session.read());
    let current = notices();
    let min_rounds = RoundCount::MIN.to_string();
    let max_rounds = RoundCount::MAX.to_string();

    rsx! {
        div { class: "page quiz-page",
            header { class: "view-header",
                h2 { class: "view-title", "Brain MRI Guessing Game 🧠" }
                p { class: "view-subtitle", "Test your knowledge of brain tumor identification!" }
            }
            div { class: "view-divider" }

            div { class: "quiz-controls",
                label { r#for: "quiz-rounds", "Number of tests:" }
                input {
                    id: "quiz-rounds",
                    class: "quiz-rounds-input",
                    r#type: "number",
                    min: "{min_rounds}",
                    max: "{max_rounds}",
                    value: "{rounds}",
                    oninput: move |evt| {
                        // Keep the last valid value while the field is mid-edit.
                        if let Ok(value) = evt.value().trim().parse::<u32>() {
                            rounds.set(value);
                        }
                    },
                }
                button {
                    id: "quiz-start",
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| {
                        let next = start_run(&mut session.write(), rounds());
                        notices.set(next);
                    },
                    "Start Test"
                }
            }

            if let Some(err) = current.error {
                p { class: "notice notice--error", "{err.message()}" }
            }

            if status.phase == QuizPhase::Idle {
                p { class: "view-hint", "Choose how many images to test, then press Start Test." }
            }
            if let Some(line) = status.status_line.as_ref() {
                p { class: "quiz-status", "{line}" }
            }
            if let Some(src) = status.image_src.as_ref() {
                figure { class: "quiz-image",
                    img { src: "{src}", alt: "Brain MRI Image" }
                    figcaption { "Brain MRI Image" }
                }
            }

            div { class: "quiz-guesses",
                for guess in guesses {
                    button {
                        key: "{guess.label}",
                        class: "btn guess-btn",
                        r#type: "button",
                        disabled: guess.disabled,
                        onclick: move |_| {
                            if let Some(next) = submit_guess(&mut session.write(), guess.category) {
                                notices.set(next);
                            }
                        },
                        "{guess.label}"
                    }
                }
            }

            if let Some(feedback) = current.feedback.as_ref() {
                p { class: feedback.tone.css_class(), "{feedback.message}" }
            }
            if let Some(summary) = current.summary.as_ref() {
                div { class: summary.css_class(),
                    p { class: summary.tone.css_class(), "{summary.message}" }
                }
            }
        }
    }
}
