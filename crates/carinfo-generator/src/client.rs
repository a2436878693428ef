//! Chat-completions client.
//!
//! One POST per query, no retries. A non-2xx status is `Error::Upstream`;
//! a failed connection, a timeout or an unreadable envelope is
//! `Error::Transport`. The message text itself is returned untouched for
//! the ingestion layer to judge.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use carinfo_core::config::GeneratorSettings;
use carinfo_core::traits::CarInfoGenerator;
use carinfo_core::{CarQuery, Error, Result};

use crate::prompt::build_prompt;

const MAX_ERROR_BODY: usize = 512;

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Deserialize)]
struct ReplyMessage {
    content: Option<String>,
}

/// Extract `choices[0].message.content` from a response body.
pub fn message_content(body: &[u8]) -> Result<String> {
    let envelope: ChatResponse = serde_json::from_slice(body)
        .map_err(|e| Error::Transport(format!("unreadable response envelope: {e}")))?;
    envelope
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| Error::Transport("response envelope has no message content".to_string()))
}

fn truncate(mut body: String) -> String {
    if body.len() > MAX_ERROR_BODY {
        let mut cut = MAX_ERROR_BODY;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        body.truncate(cut);
        body.push('…');
    }
    body
}

pub struct ChatCompletionsGenerator {
    client: Client,
    settings: GeneratorSettings,
    api_key: Option<String>,
}

impl ChatCompletionsGenerator {
    pub fn new(settings: GeneratorSettings) -> Result<Self> {
        settings.validate()?;
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .user_agent(concat!("carinfo/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Transport(format!("failed to build HTTP client: {e}")))?;
        let api_key = settings.resolved_api_key();
        if api_key.is_none() {
            warn!("no generator API key configured; requests are sent unauthenticated");
        }
        Ok(Self { client, settings, api_key })
    }

    #[instrument(skip(self), fields(model = %self.settings.model))]
    async fn complete(&self, query: &CarQuery) -> Result<String> {
        let start = Instant::now();
        let prompt = build_prompt(query);
        let body = ChatRequest {
            model: &self.settings.model,
            messages: [ChatMessage { role: "user", content: &prompt }],
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
        };

        let mut request = self.client.post(&self.settings.endpoint).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }
        if let Some(referer) = &self.settings.referer {
            request = request.header("HTTP-Referer", referer);
        }
        if let Some(title) = &self.settings.title {
            request = request.header("X-Title", title);
        }

        let response = request.send().await.map_err(|e| Error::Transport(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            let text = match response.text().await {
                Ok(text) => text,
                Err(e) => {
                    warn!(status = status.as_u16(), error = %e, "failed to read error body");
                    String::new()
                }
            };
            warn!(status = status.as_u16(), "generator request failed");
            return Err(Error::Upstream { status: status.as_u16(), body: truncate(text) });
        }

        let bytes = response.bytes().await.map_err(|e| Error::Transport(e.to_string()))?;
        let content = message_content(&bytes)?;
        let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        info!(elapsed_ms, chars = content.len(), "generator replied");
        debug!(%content, "raw generator reply");
        Ok(content)
    }
}

#[async_trait]
impl CarInfoGenerator for ChatCompletionsGenerator {
    async fn generate(&self, query: &CarQuery) -> Result<String> {
        self.complete(query).await
    }
}
