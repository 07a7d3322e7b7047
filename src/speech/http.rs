use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::Transcriber;
use crate::config::SpeechConfig;
use crate::errors::{CourseMarketError, Result};

/// 云端语音识别客户端
///
/// 将整段 wav 提交给识别服务，轮询会话直到服务端报告完成，
/// 把各分段识别文本拼接成完整讲稿。
pub struct HttpTranscriber {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    language: String,
}

#[derive(Debug, Deserialize)]
struct SessionResponse {
    session_id: String,
}

#[derive(Debug, Deserialize)]
struct SessionStatus {
    // "running" 或 "completed"
    status: String,
    #[serde(default)]
    segments: Vec<String>,
}

impl HttpTranscriber {
    pub fn new(config: &SpeechConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .unwrap_or_default();

        Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            language: config.language.clone(),
        }
    }

    async fn open_session(&self, audio: Vec<u8>) -> Result<String> {
        let response = self
            .client
            .post(format!("{}/v1/sessions", self.endpoint))
            .bearer_auth(&self.api_key)
            .query(&[
                ("language", self.language.as_str()),
                ("sample_rate", "16000"),
                ("channels", "1"),
            ])
            .header("Content-Type", "audio/wav")
            .body(audio)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| CourseMarketError::transcription(format!("识别会话创建失败: {e}")))?;

        let session: SessionResponse = response.json().await?;
        Ok(session.session_id)
    }

    async fn poll_session(&self, session_id: &str) -> Result<String> {
        // 识别服务按分段返回文本，会话完成前持续累积
        loop {
            let status: SessionStatus = self
                .client
                .get(format!("{}/v1/sessions/{}", self.endpoint, session_id))
                .bearer_auth(&self.api_key)
                .send()
                .await?
                .error_for_status()
                .map_err(|e| CourseMarketError::transcription(format!("识别会话查询失败: {e}")))?
                .json()
                .await?;

            if status.status == "completed" {
                debug!(
                    "Transcription session {} completed with {} segments",
                    session_id,
                    status.segments.len()
                );
                return Ok(status.segments.join(" "));
            }

            tokio::time::sleep(Duration::from_secs(2)).await;
        }
    }
}

#[async_trait]
impl Transcriber for HttpTranscriber {
    async fn transcribe(&self, audio_path: &Path) -> Result<String> {
        let audio = tokio::fs::read(audio_path)
            .await
            .map_err(|e| CourseMarketError::file_operation(format!("读取音频失败: {e}")))?;

        let session_id = self.open_session(audio).await?;
        self.poll_session(&session_id).await
    }
}
