use serde::{Deserialize, Serialize};

/// Estimated priority of an action item.
///
/// The extraction prompt asks the model for High/Medium/Low; anything else,
/// including casing variants, falls back to Medium instead of failing the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl From<String> for Priority {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "high" => Priority::High,
            "low" => Priority::Low,
            _ => Priority::Medium,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        };
        f.write_str(label)
    }
}

/// One task extracted from a meeting transcript.
///
/// Every field carries a sentinel default so rendering never sees a missing
/// value, no matter how sparse the model's JSON is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionItem {
    /// What needs to be done
    #[serde(default = "default_task")]
    pub task: String,
    /// Person responsible for the task
    #[serde(default = "default_owner")]
    pub owner: String,
    /// Deadline or timeframe
    #[serde(default = "default_deadline")]
    pub deadline: String,
    /// Estimated priority
    #[serde(default)]
    pub priority: Priority,
    /// Additional context or dependencies
    #[serde(default)]
    pub context: String,
}

fn default_task() -> String {
    "No task specified".to_string()
}

fn default_owner() -> String {
    "Not assigned".to_string()
}

fn default_deadline() -> String {
    "No deadline specified".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_sentinels() {
        let item: ActionItem = serde_json::from_str(r#"{"task": "Update the docs"}"#).unwrap();

        assert_eq!(item.task, "Update the docs");
        assert_eq!(item.owner, "Not assigned");
        assert_eq!(item.deadline, "No deadline specified");
        assert_eq!(item.priority, Priority::Medium);
        assert_eq!(item.context, "");
    }

    #[test]
    fn priority_parsing_is_case_insensitive() {
        let item: ActionItem =
            serde_json::from_str(r#"{"task": "x", "priority": "high"}"#).unwrap();
        assert_eq!(item.priority, Priority::High);
    }

    #[test]
    fn unknown_priority_defaults_to_medium() {
        let item: ActionItem =
            serde_json::from_str(r#"{"task": "x", "priority": "urgent"}"#).unwrap();
        assert_eq!(item.priority, Priority::Medium);
    }

    #[test]
    fn priority_serializes_as_capitalized_label() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"High\"");
        assert_eq!(serde_json::to_string(&Priority::Low).unwrap(), "\"Low\"");
    }
}
