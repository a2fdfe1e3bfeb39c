use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use teachspark::cli::{Cli, Commands};
use teachspark::config::Config;
use teachspark::core::{
    FeedbackReport, FeedbackService, SessionStore, StatusMarker, TranscriptService, VideoReference,
    extract_video_id,
};
use teachspark::error::{Error, Result};
use teachspark::server;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("teachspark=info,tower_http=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::default();

    match cli.command {
        Some(Commands::Profile { path }) => run_profile(path).await?,
        Some(Commands::Video {
            url,
            start,
            end,
            languages,
        }) => run_video(url, start, end, languages).await?,
        Some(Commands::Feedback) => run_feedback(&config).await?,
        Some(Commands::Reset) => {
            SessionStore::default().clear()?;
            println!("Session state cleared.");
        }
        Some(Commands::Serve) | None => server::serve(config).await?,
    }

    Ok(())
}

async fn run_profile(path: std::path::PathBuf) -> Result<()> {
    let content = tokio::fs::read_to_string(&path).await?;
    let profile = serde_json::from_str(&content)?;

    let store = SessionStore::default();
    if store.profile_exists() {
        println!("Replacing the previously saved profile.");
    }
    let saved = store.save_profile(&profile).await?;
    println!("Profile saved to: {}", saved.display());
    Ok(())
}

async fn run_video(url: String, start: f64, end: f64, languages: String) -> Result<()> {
    let video_id =
        extract_video_id(&url).ok_or_else(|| Error::custom("Invalid video URL or ID"))?;
    println!("Processing video: {video_id}");

    let languages: Vec<&str> = languages.split(',').map(|s| s.trim()).collect();
    let service = TranscriptService::new()?;

    println!("Fetching transcript...");
    let outcome = service.fetch(&video_id, &languages).await;
    if let Some(reason) = outcome.reason() {
        println!("Could not fetch captions ({reason}); using the built-in sample transcript.");
    }

    let result = outcome.into_value();
    let video = VideoReference {
        video_id,
        url,
        time_range: [start, end],
        transcript: result.transcript,
    };

    let store = SessionStore::default();
    if store.video_exists() {
        println!("Replacing the previously saved video data.");
    }
    let saved = store.save_video(&video).await?;
    println!("Video data saved to: {}", saved.display());
    Ok(())
}

async fn run_feedback(config: &Config) -> Result<()> {
    let store = SessionStore::default();
    let profile = store.load_profile().await?;
    let video = store.load_video().await?;

    let service = FeedbackService::new(config.openai_api_key.as_deref(), &config.openai_model);

    println!("Generating feedback for video {}...", video.video_id);
    let outcome = service.analyze(&profile, &video.transcript).await;

    if outcome.is_fallback() {
        match outcome.reason() {
            Some(reason) => println!("Analysis failed ({reason}); showing sample feedback.\n"),
            None => println!("No API key configured; showing sample feedback.\n"),
        }
    }

    print_report(outcome.value());
    Ok(())
}

fn print_report(report: &FeedbackReport) {
    if !report.overall_feedback.is_empty() {
        println!("OVERALL FEEDBACK");
        println!("{}\n", report.overall_feedback);
    }

    print_list("STRENGTHS", &report.summary.strengths);
    print_list("AREAS FOR IMPROVEMENT", &report.summary.areas_for_improvement);
    print_list("AVOID / RETHINK", &report.summary.avoid_rethink);

    print_domain("PLANNING AND PREPARATION", &report.domains.planning);
    print_domain("CLASSROOM ENVIRONMENT", &report.domains.environment);
    print_domain("INSTRUCTION", &report.domains.instruction);
}

fn print_list(title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("{title}");
    for item in items {
        println!("  - {item}");
    }
    println!();
}

fn print_domain(title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("{title}");
    for item in items {
        let label = match StatusMarker::detect(item) {
            Some(StatusMarker::Strength) => "strength",
            Some(StatusMarker::Improvement) => "improve ",
            Some(StatusMarker::Concern) => "rethink ",
            None => "note    ",
        };
        println!("  [{label}] {item}");
    }
    println!();
}
