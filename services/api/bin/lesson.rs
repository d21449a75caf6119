//! Lesson CLI
//!
//! Generates one or more lessons for a session and prints them as JSON, which
//! makes it easy to eyeball content rotation and timing without running the
//! HTTP service.

use anyhow::{Context, bail};
use clap::Parser;
use lesson_core::{LearningStyle, LessonConfig, LessonEngine};
use serde_json::json;

#[derive(Parser)]
#[command(name = "lesson", about = "Generate and validate lessons from the command line", version)]
struct Cli {
    /// Subject to draw content from (e.g. mathematics, science, english)
    #[arg(short, long)]
    subject: String,

    /// Skill area shown in the generated copy
    #[arg(short = 'k', long, default_value = "core skills")]
    skill_area: String,

    /// Grade level, 0 (kindergarten) to 12
    #[arg(short, long, default_value_t = 3)]
    grade: u8,

    /// Learning style: visual, auditory, kinesthetic or mixed
    #[arg(long)]
    style: Option<LearningStyle>,

    /// Session id used to track content history
    #[arg(long, default_value = "cli")]
    session: String,

    /// Number of consecutive lessons to generate for the session
    #[arg(short = 'n', long, default_value_t = 1)]
    count: u32,

    /// Seed for reproducible content selection
    #[arg(long)]
    seed: Option<u64>,

    /// Attach a validation report to each lesson
    #[arg(long)]
    validate: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if cli.subject.trim().is_empty() {
        bail!("--subject must not be blank");
    }

    let mut engine = match cli.seed {
        Some(seed) => LessonEngine::seeded(seed),
        None => LessonEngine::default(),
    };
    let config = LessonConfig {
        subject: cli.subject,
        skill_area: cli.skill_area,
        grade_level: cli.grade,
        learning_style: cli.style,
        session_id: cli.session,
    };

    let mut output = Vec::new();
    for _ in 0..cli.count {
        let lesson = engine.generate_lesson(&config);
        let entry = if cli.validate {
            let report = engine.validate_lesson(&lesson);
            json!({ "lesson": lesson, "validation": report })
        } else {
            json!({ "lesson": lesson })
        };
        output.push(entry);
    }

    let rendered = serde_json::to_string_pretty(&json!({
        "lessons": output,
        "usage": engine.usage_stats(),
    }))
    .context("Failed to serialize lessons")?;
    println!("{rendered}");
    Ok(())
}
