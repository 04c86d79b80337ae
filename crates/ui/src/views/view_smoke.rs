use std::path::PathBuf;

use quiz_core::model::{Category, RoundCount};
use services::DatasetIndex;

use super::test_harness::{full_dataset, setup_view_harness};

#[test]
fn quiz_view_smoke_renders_idle_page() {
    let mut harness = setup_view_harness(full_dataset(), RoundCount::default());
    harness.rebuild();
    let html = harness.render();

    for expected in [
        "Brain MRI Guessing Game",
        "Test your knowledge of brain tumor identification!",
        "Number of tests:",
        "Start Test",
        "Brain MRI Image",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    for category in Category::ALL {
        let label = category.display_name();
        assert!(html.contains(label), "missing {label} in {html}");
    }
    assert!(!html.contains("Score:"), "idle page should hide score in {html}");
}

#[test]
fn quiz_view_smoke_shows_preview_image() {
    let mut harness = setup_view_harness(full_dataset(), RoundCount::default());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("/data/"), "missing preview src in {html}");
    assert!(html.contains("scan.jpg"), "missing preview src in {html}");
}

#[test]
fn quiz_view_smoke_uses_configured_round_default() {
    let mut harness = setup_view_harness(full_dataset(), RoundCount::new(12).unwrap());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains(r#"value="12""#), "missing default rounds in {html}");
}

#[test]
fn quiz_view_smoke_renders_without_images() {
    let dataset = DatasetIndex::from_entries([(Category::Glioma, Vec::<PathBuf>::new())]);
    let mut harness = setup_view_harness(dataset, RoundCount::default());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Start Test"), "missing start button in {html}");
    assert!(!html.contains("<img"), "unexpected image in {html}");
    assert!(html.contains("Glioma"), "missing guess button in {html}");
}
