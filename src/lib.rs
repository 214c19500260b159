pub mod config;
pub mod error;
pub mod io;
pub mod llm;
pub mod models;
pub mod stages;

pub use config::AppConfig;
pub use error::PipelineError;
pub use io::{SavedArtifacts, print_results, run_timestamp, save_results};
pub use llm::{ChatOptions, OpenAiClient, OpenAiConfig};
pub use models::{ActionItem, MeetingResult, Priority};
pub use stages::{
    RunMode, execute_extraction, execute_followup, execute_summarization, execute_transcription,
    run_pipeline,
};
