use std::path::Path;

use tracing::info;

use crate::error::PipelineError;
use crate::llm::OpenAiClient;
use crate::models::MeetingResult;
use crate::stages::{
    execute_extraction, execute_followup, execute_summarization, execute_transcription,
};

/// How the stages reach the provider: one real client, or canned mock values.
pub enum RunMode {
    /// Call the OpenAI API
    Live(OpenAiClient),
    /// Return fixed canned artifacts, no network access
    Mock,
}

/// Run the four stages in order and assemble the aggregate result.
///
/// The first failing stage aborts the run; its error propagates unchanged
/// and later stages are never invoked. There are no partial results.
pub async fn run_pipeline(
    mode: &RunMode,
    audio_path: &Path,
) -> Result<MeetingResult, PipelineError> {
    info!("Step 1: transcribing audio");
    let transcript = execute_transcription(mode, audio_path).await?;
    info!("Transcription completed ({} chars)", transcript.len());

    info!("Step 2: generating meeting summary");
    let summary = execute_summarization(mode, &transcript).await?;
    info!("Summary generated");

    info!("Step 3: extracting action items");
    let action_items = execute_extraction(mode, &transcript).await?;
    info!("Extracted {} action items", action_items.len());

    info!("Step 4: creating follow-up message");
    let followup_message = execute_followup(mode, &summary, &action_items).await?;
    info!("Follow-up message created");

    Ok(MeetingResult {
        transcript,
        summary,
        action_items,
        followup_message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use mockito::Matcher;

    use crate::llm::OpenAiConfig;

    fn chat_body(content: &str) -> String {
        serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": content}}]
        })
        .to_string()
    }

    fn live_mode(server: &mockito::ServerGuard) -> RunMode {
        RunMode::Live(OpenAiClient::new(OpenAiConfig::new(
            "test-key".to_string(),
            server.url(),
        )))
    }

    fn fake_audio(dir: &tempfile::TempDir) -> std::path::PathBuf {
        let path = dir.path().join("meeting.mp3");
        std::fs::write(&path, b"fake audio bytes").unwrap();
        path
    }

    #[tokio::test]
    async fn mock_run_produces_complete_result() {
        let result = run_pipeline(&RunMode::Mock, Path::new("does_not_exist.mp3"))
            .await
            .unwrap();

        assert_eq!(result.action_items.len(), 6);
        assert!(result.transcript.contains("Sarah"));
        assert!(result.summary.contains("## Meeting Overview"));
        assert!(result.followup_message.contains("Action Items"));
    }

    #[tokio::test]
    async fn live_run_chains_all_four_stages() {
        let mut server = mockito::Server::new_async().await;
        let dir = tempfile::tempdir().unwrap();
        let audio = fake_audio(&dir);

        server
            .mock("POST", "/audio/transcriptions")
            .with_status(200)
            .with_body("Sarah opened the meeting.")
            .create_async()
            .await;
        server
            .mock("POST", "/chat/completions")
            .match_body(Matcher::Regex("comprehensive meeting summary".to_string()))
            .with_status(200)
            .with_body(chat_body("## Meeting Overview\nShort sync."))
            .create_async()
            .await;
        server
            .mock("POST", "/chat/completions")
            .match_body(Matcher::Regex("extract all action items".to_string()))
            .with_status(200)
            .with_body(chat_body(
                r#"{"action_items": [{"task": "Ship the release", "owner": "Sarah", "deadline": "Friday", "priority": "High", "context": ""}]}"#,
            ))
            .create_async()
            .await;
        server
            .mock("POST", "/chat/completions")
            .match_body(Matcher::Regex("follow-up email".to_string()))
            .with_status(200)
            .with_body(chat_body("Hi team, thanks for attending."))
            .create_async()
            .await;

        let result = run_pipeline(&live_mode(&server), &audio).await.unwrap();

        assert_eq!(result.transcript, "Sarah opened the meeting.");
        assert_eq!(result.action_items.len(), 1);
        assert_eq!(result.action_items[0].owner, "Sarah");
        assert_eq!(result.followup_message, "Hi team, thanks for attending.");
    }

    #[tokio::test]
    async fn extraction_failure_aborts_before_followup() {
        let mut server = mockito::Server::new_async().await;
        let dir = tempfile::tempdir().unwrap();
        let audio = fake_audio(&dir);

        server
            .mock("POST", "/audio/transcriptions")
            .with_status(200)
            .with_body("Sarah opened the meeting.")
            .create_async()
            .await;
        server
            .mock("POST", "/chat/completions")
            .match_body(Matcher::Regex("comprehensive meeting summary".to_string()))
            .with_status(200)
            .with_body(chat_body("## Meeting Overview\nShort sync."))
            .create_async()
            .await;
        // model replies with something that is not JSON at all
        server
            .mock("POST", "/chat/completions")
            .match_body(Matcher::Regex("extract all action items".to_string()))
            .with_status(200)
            .with_body(chat_body("sorry, no JSON today"))
            .create_async()
            .await;
        let followup = server
            .mock("POST", "/chat/completions")
            .match_body(Matcher::Regex("follow-up email".to_string()))
            .expect(0)
            .create_async()
            .await;

        let err = run_pipeline(&live_mode(&server), &audio).await.unwrap_err();

        assert!(matches!(err, PipelineError::Extraction(_)));
        assert!(err.to_string().contains("failed to extract action items"));
        followup.assert_async().await;
    }

    #[tokio::test]
    async fn missing_audio_file_fails_before_any_call() {
        let mut server = mockito::Server::new_async().await;
        let transcription = server
            .mock("POST", "/audio/transcriptions")
            .expect(0)
            .create_async()
            .await;

        let err = run_pipeline(&live_mode(&server), Path::new("no_such_file.mp3"))
            .await
            .unwrap_err();

        assert!(matches!(err, PipelineError::AudioFileNotFound(_)));
        transcription.assert_async().await;
    }
}
