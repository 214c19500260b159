use std::path::Path;

use anyhow::{Context, Result};
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};

use crate::error::PipelineError;

/// Default endpoint for the OpenAI API
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Configuration for the OpenAI API client
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// API key (from OPENAI_API_KEY env var)
    pub api_key: String,
    /// Base URL of the API (overridable via OPENAI_BASE_URL)
    pub base_url: String,
    /// Chat model used by the text stages
    pub chat_model: String,
    /// Speech-to-text model used by the transcription stage
    pub transcribe_model: String,
}

impl OpenAiConfig {
    /// Create config from environment variables
    pub fn from_env() -> Result<Self, PipelineError> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| PipelineError::MissingApiKey)?;
        let base_url =
            std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Ok(Self::new(api_key, base_url))
    }

    /// Create with the fixed model identifiers
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            chat_model: "gpt-4o".to_string(),
            transcribe_model: "whisper-1".to_string(),
        }
    }
}

/// Per-call sampling settings for a chat completion
#[derive(Debug, Clone, Copy)]
pub struct ChatOptions {
    /// Maximum tokens in the response
    pub max_tokens: u32,
    /// Temperature (0-1, lower = more deterministic)
    pub temperature: f64,
    /// Ask the API to return a JSON object instead of free text
    pub json_response: bool,
}

/// OpenAI API client
pub struct OpenAiClient {
    client: reqwest::Client,
    config: OpenAiConfig,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Send a chat completion request and return the assistant's text
    pub async fn chat(&self, system: &str, user: &str, opts: ChatOptions) -> Result<String> {
        let request = ChatRequest {
            model: self.config.chat_model.clone(),
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: system.to_string(),
                },
                Message {
                    role: "user".to_string(),
                    content: user.to_string(),
                },
            ],
            max_tokens: opts.max_tokens,
            temperature: opts.temperature,
            response_format: opts.json_response.then(|| ResponseFormat {
                format_type: "json_object".to_string(),
            }),
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .context("Failed to send request to OpenAI API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("OpenAI API error: {} - {}", status, body);
        }

        let response: ChatResponse = response
            .json()
            .await
            .context("Failed to parse OpenAI API response")?;

        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .context("No choices in response")
    }

    /// Upload an audio file to the speech-to-text endpoint, returns plain text
    pub async fn transcribe(&self, audio_path: &Path) -> Result<String> {
        let audio_bytes = tokio::fs::read(audio_path)
            .await
            .with_context(|| format!("Failed to read audio file: {:?}", audio_path))?;

        let filename = audio_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("audio")
            .to_string();

        let form = Form::new()
            .part(
                "file",
                Part::bytes(audio_bytes)
                    .file_name(filename)
                    .mime_str(audio_mime_type(audio_path))?,
            )
            .text("model", self.config.transcribe_model.clone())
            .text("response_format", "text");

        let response = self
            .client
            .post(format!("{}/audio/transcriptions", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .multipart(form)
            .send()
            .await
            .context("Failed to send request to OpenAI API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("OpenAI API error: {} - {}", status, body);
        }

        response
            .text()
            .await
            .context("Failed to read transcription response")
    }
}

/// MIME type for the multipart upload, guessed from the file extension
fn audio_mime_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("wav") => "audio/wav",
        Some("mp3") => "audio/mpeg",
        Some("m4a") => "audio/mp4",
        Some("flac") => "audio/flac",
        Some("ogg") => "audio/ogg",
        _ => "application/octet-stream",
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    max_tokens: u32,
    temperature: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: String,
}
