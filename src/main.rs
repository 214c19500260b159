use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

use recap::{
    AppConfig, OpenAiClient, OpenAiConfig, RunMode, print_results, run_pipeline, run_timestamp,
    save_results,
};

/// Audio extensions the provider is known to accept
const SUPPORTED_EXTENSIONS: &[&str] = &["mp3", "wav", "m4a", "flac"];

#[derive(Parser)]
#[command(name = "recap")]
#[command(author, version, about = "Meeting recording summarizer and action item tracker", long_about = None)]
struct Cli {
    /// Path to the meeting audio recording
    #[arg(default_value = "sample_data/meeting_sample.mp3")]
    audio_file: PathBuf,

    /// Bypass provider calls and use canned artifacts (also: MOCK_MODE=true)
    #[arg(long)]
    mock: bool,

    /// Persist the artifacts to the output directory (also: SAVE_OUTPUT=true)
    #[arg(long)]
    save: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let mut config = AppConfig::from_env();
    config.mock_mode |= cli.mock;
    config.save_output |= cli.save;

    println!("Meeting Summarizer & Action Tracker");
    println!("{}", "=".repeat(60));

    let mode = if config.mock_mode {
        info!("Running in mock mode, provider calls are bypassed");
        RunMode::Mock
    } else {
        match OpenAiConfig::from_env() {
            Ok(api_config) => {
                info!("Using the OpenAI API for real processing");
                RunMode::Live(OpenAiClient::new(api_config))
            }
            Err(e) => {
                eprintln!("Error: {e}");
                eprintln!("Set MOCK_MODE=true (or pass --mock) to run without an API key.");
                return ExitCode::FAILURE;
            }
        }
    };

    if !config.mock_mode {
        if !cli.audio_file.exists() {
            eprintln!("Error: audio file not found: {}", cli.audio_file.display());
            eprintln!("Pass --mock to test without an audio file.");
            return ExitCode::FAILURE;
        }
        check_extension(&cli.audio_file);
    }

    info!("Processing audio file: {:?}", cli.audio_file);

    let outcome = tokio::select! {
        outcome = run_pipeline(&mode, &cli.audio_file) => outcome,
        _ = tokio::signal::ctrl_c() => {
            eprintln!("\nProcess interrupted by user");
            return ExitCode::SUCCESS;
        }
    };

    match outcome {
        Ok(result) => {
            print_results(&result);

            if config.save_output {
                let timestamp = run_timestamp();
                match save_results(&result, &config.output_dir, &timestamp) {
                    Ok(_) => info!(
                        "Results saved to {:?} with timestamp {}",
                        config.output_dir, timestamp
                    ),
                    Err(e) => warn!("Could not save results to files: {e:#}"),
                }
            }

            println!("\nMeeting analysis completed successfully.");
            println!("\nNext steps:");
            println!("  - Review the action items and assign them to team members");
            println!("  - Send the follow-up message to meeting participants");
            println!("  - Schedule follow-up meetings as needed");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("\nError: {e}");
            eprintln!("\nTroubleshooting:");
            eprintln!("  - Check your OPENAI_API_KEY environment variable");
            eprintln!("  - Verify the audio file path and format");
            eprintln!("  - Try running with --mock for testing");
            ExitCode::FAILURE
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

/// Warn about extensions the provider may reject
fn check_extension(path: &Path) {
    let known = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()));

    if !known {
        warn!(
            "File extension of {:?} may not be supported (known formats: {})",
            path,
            SUPPORTED_EXTENSIONS.join(", ")
        );
    }
}
