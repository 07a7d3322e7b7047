//! 文本生成客户端
//!
//! 调用外部补全服务为讲稿生成摘要。

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::errors::{CourseMarketError, Result};

pub struct CompletionClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: String,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    text: String,
}

impl CompletionClient {
    pub fn from_config() -> Option<Self> {
        let config = AppConfig::get();
        if !config.ai.enabled {
            return None;
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.ai.timeout))
            .build()
            .unwrap_or_default();

        Some(Self {
            client,
            endpoint: config.ai.endpoint.trim_end_matches('/').to_string(),
            api_key: config.ai.api_key.clone(),
            model: config.ai.model.clone(),
        })
    }

    /// 为讲稿生成摘要
    pub async fn summarize(&self, transcript: &str) -> Result<String> {
        let request = CompletionRequest {
            model: &self.model,
            prompt: format!(
                "Summarize the following lecture transcript in a few concise paragraphs:\n\n{transcript}"
            ),
            max_tokens: 512,
        };

        let response: CompletionResponse = self
            .client
            .post(format!("{}/v1/completions", self.endpoint))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| CourseMarketError::external_service(format!("摘要生成失败: {e}")))?
            .json()
            .await?;

        Ok(response.text.trim().to_string())
    }
}
