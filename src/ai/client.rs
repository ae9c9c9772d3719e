//! Async client for the Anthropic Messages API.
//!
//! Two calls: a vision call that identifies ingredients in an uploaded
//! photo, and a text call that turns the ingredient list into recipe
//! suggestions. No retries beyond what reqwest does by default.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::constants::{IDENTIFY_MAX_TOKENS, SUGGEST_MAX_TOKENS};
use crate::error::{AppError, Result};
use crate::image::EncodedImage;

use super::prompts;

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Client for the recipe generation model
#[derive(Clone)]
pub struct RecipeClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct MessagesRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: Vec<Content>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
enum Content {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(rename = "image")]
    Image { source: ImageSource },
}

#[derive(Debug, Serialize)]
struct ImageSource {
    #[serde(rename = "type")]
    source_type: &'static str,
    media_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    text: Option<String>,
}

impl RecipeClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.anthropic_base_url.clone(),
            api_key: config.anthropic_api_key.clone(),
            model: config.anthropic_model.clone(),
        }
    }

    /// Identify visible ingredients in an encoded image
    ///
    /// Returns the model's structured text (`INGREDIENTS:` / `CATEGORIES:`
    /// sections); use [`crate::ai::parse::ingredient_names`] to extract the
    /// flat name list.
    pub async fn identify_ingredients(&self, image: &EncodedImage) -> Result<String> {
        let request = MessagesRequest {
            model: self.model.clone(),
            max_tokens: IDENTIFY_MAX_TOKENS,
            messages: vec![Message {
                role: "user",
                content: vec![
                    Content::Image {
                        source: ImageSource {
                            source_type: "base64",
                            media_type: image.media_type.as_str().to_string(),
                            data: image.data.clone(),
                        },
                    },
                    Content::Text {
                        text: prompts::IDENTIFY_PROMPT.to_string(),
                    },
                ],
            }],
        };

        self.send(request).await
    }

    /// Suggest recipes for the identified ingredients and preferences
    pub async fn suggest_recipes(
        &self,
        ingredients: &str,
        dietary: &[String],
        cuisine: Option<&str>,
    ) -> Result<String> {
        let request = MessagesRequest {
            model: self.model.clone(),
            max_tokens: SUGGEST_MAX_TOKENS,
            messages: vec![Message {
                role: "user",
                content: vec![Content::Text {
                    text: prompts::suggest_prompt(ingredients, dietary, cuisine),
                }],
            }],
        };

        self.send(request).await
    }

    /// POST a messages request and extract the first text block
    async fn send(&self, request: MessagesRequest) -> Result<String> {
        let url = format!("{}/v1/messages", self.base_url);

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::AiApi {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: MessagesResponse = response.json().await?;

        parsed
            .content
            .into_iter()
            .find_map(|c| c.text)
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| AppError::AiResponse("no text content in response".to_string()))
    }
}
