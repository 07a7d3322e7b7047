use std::path::Path;

use async_trait::async_trait;

use super::Transcriber;
use crate::errors::{CourseMarketError, Result};

/// 识别功能关闭时的占位实现
///
/// 总是返回错误，上传管线据此降级为空讲稿。
pub struct DisabledTranscriber;

#[async_trait]
impl Transcriber for DisabledTranscriber {
    async fn transcribe(&self, _audio_path: &Path) -> Result<String> {
        Err(CourseMarketError::transcription(
            "Speech recognition is disabled",
        ))
    }
}
