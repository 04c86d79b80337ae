use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::Clock;
use quiz_core::model::{Category, RoundCount};
use services::DatasetIndex;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Parser, Debug)]
#[command(name = "quiz")]
#[command(about = "Brain MRI guessing game")]
struct Args {
    /// Directory holding one sub-directory of images per category.
    #[arg(long, env = "QUIZ_DATASET_DIR", default_value = "image_data")]
    dataset: PathBuf,

    /// Number of tests pre-filled in the round input.
    #[arg(long, env = "QUIZ_ROUNDS", default_value = "5", value_parser = parse_round_count)]
    rounds: RoundCount,

    /// Seed for reproducible image order.
    #[arg(long, env = "QUIZ_SEED")]
    seed: Option<u64>,
}

fn parse_round_count(raw: &str) -> Result<RoundCount, String> {
    let value: u32 = raw
        .trim()
        .parse()
        .map_err(|_| format!("invalid round count: {raw}"))?;
    RoundCount::new(value).map_err(|err| err.to_string())
}

struct DesktopApp {
    dataset: Arc<DatasetIndex>,
    default_rounds: RoundCount,
    rng_seed: Option<u64>,
}

impl UiApp for DesktopApp {
    fn dataset(&self) -> Arc<DatasetIndex> {
        Arc::clone(&self.dataset)
    }

    fn default_rounds(&self) -> RoundCount {
        self.default_rounds
    }

    fn clock(&self) -> Clock {
        Clock::default()
    }

    fn rng_seed(&self) -> Option<u64> {
        self.rng_seed
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("quiz=info".parse()?)
                .add_directive("services=info".parse()?),
        )
        .init();

    let args = Args::parse();

    // Absolute item paths let the webview load images regardless of its cwd.
    let root = args
        .dataset
        .canonicalize()
        .unwrap_or_else(|_| args.dataset.clone());
    let dataset = DatasetIndex::build(&root, &Category::ALL)
        .with_context(|| format!("failed to index dataset at {}", root.display()))?;

    let empty = dataset.empty_categories();
    if !empty.is_empty() {
        warn!(?empty, "some categories have no images; runs may fail to draw");
    }
    info!(
        dataset = %root.display(),
        rounds = %args.rounds,
        seeded = args.seed.is_some(),
        "launching quiz"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        dataset: Arc::new(dataset),
        default_rounds: args.rounds,
        rng_seed: args.seed,
    });
    let context = build_app_context(app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Brain MRI Guessing Game")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}
