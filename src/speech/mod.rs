//! 语音识别客户端
//!
//! 讲座上传管线把提取出的 wav 交给这里换取讲稿文本。
//! 后端按配置选择：http（云端识别服务）或 disabled（跳过识别）。

mod disabled;
mod http;

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use crate::config::AppConfig;
use crate::errors::Result;

pub use disabled::DisabledTranscriber;
pub use http::HttpTranscriber;

/// 语音识别统一接口
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// 识别一段音频，返回完整讲稿文本
    ///
    /// 实现需自行处理会话的分段累积，调用方只关心最终文本。
    async fn transcribe(&self, audio_path: &Path) -> Result<String>;
}

/// 根据配置创建识别客户端
pub fn create_transcriber() -> Arc<dyn Transcriber> {
    let config = AppConfig::get();
    match config.speech.speech_type.as_str() {
        "http" => Arc::new(HttpTranscriber::new(&config.speech)),
        other => {
            if other != "disabled" {
                tracing::warn!(
                    "Unknown speech backend '{}', transcription disabled",
                    other
                );
            }
            Arc::new(DisabledTranscriber)
        }
    }
}
