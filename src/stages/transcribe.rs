use std::path::Path;

use crate::error::PipelineError;
use crate::stages::RunMode;

/// Execute the transcription stage: audio file in, plain transcript text out.
///
/// The file check happens before the upload so a bad path fails without a
/// network round trip. Mock mode skips both.
pub async fn execute_transcription(
    mode: &RunMode,
    audio_path: &Path,
) -> Result<String, PipelineError> {
    let client = match mode {
        RunMode::Mock => return Ok(mock_transcript()),
        RunMode::Live(client) => client,
    };

    if !audio_path.exists() {
        return Err(PipelineError::AudioFileNotFound(audio_path.to_path_buf()));
    }

    client
        .transcribe(audio_path)
        .await
        .map_err(PipelineError::Transcription)
}

/// Canned transcript returned in mock mode
pub fn mock_transcript() -> String {
    "\
Good morning everyone, thank you for joining today's project planning meeting. I'm Sarah, \
the project manager, and we have John from development, Lisa from design, and Mike from QA \
with us today.

Let's start with our agenda. First, we need to review the current sprint progress. John, \
can you give us an update on the API development?

John: Sure Sarah. We've completed about 70% of the user authentication API. The remaining \
work should be done by Friday. However, we discovered some issues with the database schema \
that might require Lisa's input on the user profile structure.

Sarah: That's great progress John. Lisa, can you work with John to resolve the database \
schema issues by Wednesday?

Lisa: Absolutely, I'll schedule a session with John tomorrow morning to go through the user \
profile requirements and update the database schema accordingly.

Sarah: Perfect. Mike, how are we looking on the testing front?

Mike: I've prepared the test cases for the authentication flow and I'm ready to start \
testing as soon as the API is complete. I'll need the staging environment to be updated by \
Thursday to run the full test suite.

Sarah: Great. So our action items are: John to complete the API by Friday, Lisa to work \
with John on database schema by Wednesday, and Mike needs the staging environment updated \
by Thursday. Let's reconvene next Monday to review our progress. Meeting adjourned."
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_mode_skips_the_file_check() {
        let transcript = execute_transcription(&RunMode::Mock, Path::new("missing.mp3"))
            .await
            .unwrap();

        assert_eq!(transcript, mock_transcript());
        assert!(transcript.contains("Sarah"));
    }
}
