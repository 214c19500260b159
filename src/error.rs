use std::path::PathBuf;

/// Failure taxonomy for a pipeline run.
///
/// Provider failures are caught at their stage boundary and wrapped with the
/// stage tag and a human-readable message; no distinction is kept between
/// network, auth, or content failures below that. Any variant aborts the run.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("OPENAI_API_KEY environment variable not set")]
    MissingApiKey,

    #[error("audio file not found: {}", .0.display())]
    AudioFileNotFound(PathBuf),

    #[error("failed to transcribe audio: {0}")]
    Transcription(#[source] anyhow::Error),

    #[error("failed to generate meeting summary: {0}")]
    Summarization(#[source] anyhow::Error),

    #[error("failed to extract action items: {0}")]
    Extraction(#[source] anyhow::Error),

    #[error("failed to create follow-up message: {0}")]
    Followup(#[source] anyhow::Error),
}
