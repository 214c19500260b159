use crate::error::PipelineError;
use crate::llm::{ChatOptions, FOLLOWUP_SYSTEM_PROMPT, build_followup_prompt};
use crate::models::ActionItem;
use crate::stages::RunMode;

/// Execute the follow-up stage: summary and action items in, email text out.
pub async fn execute_followup(
    mode: &RunMode,
    summary: &str,
    action_items: &[ActionItem],
) -> Result<String, PipelineError> {
    let client = match mode {
        RunMode::Mock => return Ok(mock_followup_message()),
        RunMode::Live(client) => client,
    };

    client
        .chat(
            FOLLOWUP_SYSTEM_PROMPT,
            &build_followup_prompt(summary, action_items),
            ChatOptions {
                max_tokens: 1000,
                temperature: 0.3,
                json_response: false,
            },
        )
        .await
        .map_err(PipelineError::Followup)
}

/// Canned follow-up email returned in mock mode
pub fn mock_followup_message() -> String {
    "\
Subject: Follow-up: Project Planning Meeting

Dear Team,

Thank you for your participation in today's project planning meeting. This follow-up email \
summarizes our discussion and outlines the action items we agreed upon.

## Meeting Highlights

We made excellent progress reviewing our current sprint status. The user authentication API \
development is 70% complete, and we've identified some database schema issues that need \
immediate attention. Our testing preparation is on track, with test cases ready for \
implementation.

## Action Items

1. Complete user authentication API development
   - Owner: John
   - Deadline: Friday
   - Priority: High

2. Resolve database schema issues for user profile structure
   - Owner: Lisa
   - Deadline: Wednesday
   - Priority: High

3. Schedule session with John to review user profile requirements
   - Owner: Lisa
   - Deadline: Tomorrow morning
   - Priority: High

4. Update staging environment for testing
   - Owner: Not specified
   - Deadline: Thursday
   - Priority: Medium

5. Begin comprehensive testing of authentication flow
   - Owner: Mike
   - Deadline: After API completion
   - Priority: Medium

6. Attend follow-up meeting to review progress
   - Owner: All team members
   - Deadline: Next Monday
   - Priority: Medium

## Next Steps

Please ensure all action items are completed by their respective deadlines. If you encounter \
any blockers or need additional resources, please reach out immediately.

Our next progress review meeting is scheduled for Monday. Please come prepared with updates \
on your assigned tasks.

Best regards,
Meeting Coordinator

---
This follow-up was generated automatically by the Meeting Summarizer & Action Tracker."
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_followup_lists_the_action_items() {
        let message = execute_followup(&RunMode::Mock, "irrelevant", &[])
            .await
            .unwrap();

        assert!(message.contains("Action Items"));
        assert!(message.contains("Owner: John"));
        assert!(message.starts_with("Subject:"));
    }
}
