use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;

use crate::models::MeetingResult;

/// Paths of the four artifacts persisted for one run
#[derive(Debug, Clone)]
pub struct SavedArtifacts {
    pub transcript: PathBuf,
    pub summary: PathBuf,
    pub action_items: PathBuf,
    pub followup: PathBuf,
}

/// Timestamp shared by all artifacts of one run
pub fn run_timestamp() -> String {
    Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Persist the four artifacts under `output_dir`, named with a shared timestamp.
///
/// The action items are written as a pretty-printed JSON array; the other
/// three artifacts are written verbatim.
pub fn save_results(
    result: &MeetingResult,
    output_dir: &Path,
    timestamp: &str,
) -> Result<SavedArtifacts> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory: {:?}", output_dir))?;

    let transcript = output_dir.join(format!("transcript_{timestamp}.txt"));
    std::fs::write(&transcript, &result.transcript)
        .with_context(|| format!("Failed to write {:?}", transcript))?;

    let summary = output_dir.join(format!("summary_{timestamp}.md"));
    std::fs::write(&summary, &result.summary)
        .with_context(|| format!("Failed to write {:?}", summary))?;

    let action_items = output_dir.join(format!("action_items_{timestamp}.json"));
    let json = serde_json::to_string_pretty(&result.action_items)
        .context("Failed to serialize action items")?;
    std::fs::write(&action_items, json)
        .with_context(|| format!("Failed to write {:?}", action_items))?;

    let followup = output_dir.join(format!("followup_{timestamp}.txt"));
    std::fs::write(&followup, &result.followup_message)
        .with_context(|| format!("Failed to write {:?}", followup))?;

    Ok(SavedArtifacts {
        transcript,
        summary,
        action_items,
        followup,
    })
}

/// Print the full analysis to stdout
pub fn print_results(result: &MeetingResult) {
    println!();
    println!("{}", "=".repeat(80));
    println!("MEETING ANALYSIS RESULTS");
    println!("{}", "=".repeat(80));

    println!("\nTRANSCRIPT");
    println!("{}", "-".repeat(40));
    println!("{}", result.transcript);

    println!("\nSUMMARY");
    println!("{}", "-".repeat(40));
    println!("{}", result.summary);

    println!("\nACTION ITEMS");
    println!("{}", "-".repeat(40));
    if result.action_items.is_empty() {
        println!("No action items found.");
    } else {
        for (i, item) in result.action_items.iter().enumerate() {
            println!("{}. {}", i + 1, item.task);
            println!("   Owner: {}", item.owner);
            println!("   Deadline: {}", item.deadline);
            println!("   Priority: {}", item.priority);
            if !item.context.is_empty() {
                println!("   Context: {}", item.context);
            }
            println!();
        }
    }

    println!("FOLLOW-UP MESSAGE");
    println!("{}", "-".repeat(40));
    println!("{}", result.followup_message);
    println!("\n{}", "=".repeat(80));
}
