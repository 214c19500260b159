use crate::models::ActionItem;

/// Aggregate result of one pipeline run.
///
/// Assembled once after the final stage succeeds and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct MeetingResult {
    /// Plain-text transcript from the transcription stage
    pub transcript: String,
    /// Markdown summary from the summarization stage
    pub summary: String,
    /// Action items in extraction order
    pub action_items: Vec<ActionItem>,
    /// Follow-up email from the final stage
    pub followup_message: String,
}
