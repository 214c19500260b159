use crate::models::ActionItem;

/// System prompt for the summarization stage
pub const SUMMARY_SYSTEM_PROMPT: &str =
    "You are an expert meeting summarizer. Create clear, well-structured summaries in markdown format.";

/// System prompt for the extraction stage
pub const EXTRACTION_SYSTEM_PROMPT: &str =
    "You are an expert at extracting action items from meeting transcripts. Respond only with valid JSON format.";

/// System prompt for the follow-up stage
pub const FOLLOWUP_SYSTEM_PROMPT: &str =
    "You are a professional executive assistant creating follow-up communications. Write clear, actionable, and well-structured emails.";

/// Build the user prompt for the summarization stage
pub fn build_summary_prompt(transcript: &str) -> String {
    format!(
        r#"Please create a comprehensive meeting summary from the following transcript.
Structure your response in markdown format with the following sections:

## Meeting Overview
Brief description of the meeting purpose and attendees

## Key Discussion Points
Main topics that were discussed

## Decisions Made
Any decisions or agreements reached during the meeting

## Next Steps
General next steps or follow-up items mentioned

Here's the transcript to summarize:

{transcript}

Please provide a clear, professional summary that captures the essence of the meeting."#
    )
}

/// Build the user prompt for the extraction stage
pub fn build_extraction_prompt(transcript: &str) -> String {
    format!(
        r#"Analyze the following meeting transcript and extract all action items, tasks, and commitments. For each action item, identify:

1. The specific task or action to be completed
2. The person responsible (owner)
3. The deadline or timeframe (if mentioned)
4. Any additional context or dependencies

Format your response as a JSON array where each action item is an object with these fields:
- "task": Clear description of what needs to be done
- "owner": Person responsible for the task
- "deadline": Deadline or timeframe (use "Not specified" if not mentioned)
- "priority": Estimated priority level (High/Medium/Low based on context)
- "context": Any additional relevant information or dependencies

Here's the transcript to analyze:

{transcript}

Respond with only valid JSON format."#
    )
}

/// Build the user prompt for the follow-up stage
pub fn build_followup_prompt(summary: &str, action_items: &[ActionItem]) -> String {
    format!(
        r#"Create a professional follow-up email based on the meeting summary and action items below. The email should be well-structured, clear, and actionable. Include:

1. A brief greeting and meeting reference
2. Key meeting highlights
3. Clearly formatted action items with owners and deadlines
4. Professional closing

Meeting Summary:
{summary}

Action Items:
{items}

Format the email professionally with proper structure and clear sections."#,
        items = format_action_items(action_items)
    )
}

/// Render action items as a numbered list for the follow-up prompt
pub fn format_action_items(items: &[ActionItem]) -> String {
    if items.is_empty() {
        return "No specific action items were identified.".to_string();
    }

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            format!(
                "{}. {}\n   - Owner: {}\n   - Deadline: {}\n   - Priority: {}",
                i + 1,
                item.task,
                item.owner,
                item.deadline,
                item.priority
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::Priority;

    #[test]
    fn formats_items_as_numbered_list() {
        let items = vec![
            ActionItem {
                task: "Ship the release".to_string(),
                owner: "Sarah".to_string(),
                deadline: "Friday".to_string(),
                priority: Priority::High,
                context: String::new(),
            },
            ActionItem {
                task: "Update the changelog".to_string(),
                owner: "John".to_string(),
                deadline: "Monday".to_string(),
                priority: Priority::Low,
                context: "After the release".to_string(),
            },
        ];

        let text = format_action_items(&items);

        assert!(text.starts_with("1. Ship the release"));
        assert!(text.contains("   - Owner: Sarah"));
        assert!(text.contains("   - Priority: High"));
        assert!(text.contains("2. Update the changelog"));
    }

    #[test]
    fn missing_fields_render_with_sentinels() {
        let items: Vec<ActionItem> = serde_json::from_str(r#"[{"task": "Ship"}]"#).unwrap();
        let text = format_action_items(&items);

        assert!(text.contains("- Owner: Not assigned"));
        assert!(text.contains("- Deadline: No deadline specified"));
        assert!(text.contains("- Priority: Medium"));
    }

    #[test]
    fn empty_list_renders_placeholder() {
        assert_eq!(
            format_action_items(&[]),
            "No specific action items were identified."
        );
    }

    #[test]
    fn prompts_embed_their_inputs() {
        assert!(build_summary_prompt("the transcript body").contains("the transcript body"));
        assert!(build_extraction_prompt("the transcript body").contains("the transcript body"));

        let prompt = build_followup_prompt("## Summary", &[]);
        assert!(prompt.contains("## Summary"));
        assert!(prompt.contains("No specific action items were identified."));
    }
}
