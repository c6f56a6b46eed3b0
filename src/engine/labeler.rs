//! Label client: one blocking request per image against the vision service.

use anyhow::{Context, Result, anyhow, bail};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::path::Path;

use crate::Label;
use crate::engine::tools::mime_type_for;
use crate::utils::config::{LABEL_PROMPT, VisionApi};

/// Labelling seam: one image path in, one label out.
pub trait Labeler {
    fn label(&self, image: &Path) -> Result<Label>;
}

/// Labeler backed by the remote vision service. Holds one HTTP client for the
/// whole run; construct it once and pass it into the pipeline.
pub struct VisionLabeler {
    client: Client,
    api_url: String,
    api_key: String,
}

impl VisionLabeler {
    pub fn new(api_key: String) -> Result<Self> {
        let client = Client::builder().build().context("build HTTP client")?;
        Ok(VisionLabeler {
            client,
            api_url: VisionApi::URL.to_string(),
            api_key,
        })
    }

    /// Point the client at a compatible gateway instead of the default endpoint.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

fn encode_image(path: &Path) -> Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read image {}", path.display()))?;
    Ok(STANDARD.encode(bytes))
}

fn label_payload(image: &Path) -> Result<serde_json::Value> {
    let encoded = encode_image(image)?;
    let mime = mime_type_for(image);
    Ok(serde_json::json!({
        "model": VisionApi::MODEL,
        "messages": [{
            "role": "user",
            "content": [
                { "type": "text", "text": LABEL_PROMPT },
                {
                    "type": "image_url",
                    "image_url": {
                        "url": format!("data:{mime};base64,{encoded}"),
                        "detail": VisionApi::IMAGE_DETAIL,
                    }
                }
            ]
        }],
        "max_tokens": VisionApi::MAX_TOKENS,
    }))
}

impl Labeler for VisionLabeler {
    fn label(&self, image: &Path) -> Result<Label> {
        let payload = label_payload(image)?;
        let res = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .context("send label request")?;
        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().unwrap_or_default();
            bail!("label request failed: {} - {}", status, body);
        }
        let resp: ChatResponse = res.json().context("parse label response json")?;
        let content = resp
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| anyhow!("label response contained no choices"))?;
        Label::new(content)
    }
}
