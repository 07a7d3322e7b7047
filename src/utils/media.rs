//! 音频提取工具
//!
//! 调用外部 ffmpeg 进程从讲座视频中提取单声道 16kHz PCM wav，
//! 供语音识别服务使用。

use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use crate::errors::{CourseMarketError, Result};

/// 从视频文件提取音频轨道
///
/// 输出文件与视频同目录，扩展名替换为 .wav。调用方负责在
/// 使用完毕后删除该临时文件。
pub async fn extract_audio(ffmpeg_path: &str, video_path: &Path) -> Result<PathBuf> {
    let wav_path = video_path.with_extension("wav");

    debug!(
        "Extracting audio: {} -> {}",
        video_path.display(),
        wav_path.display()
    );

    let output = Command::new(ffmpeg_path)
        .arg("-y")
        .arg("-i")
        .arg(video_path)
        .arg("-vn")
        .arg("-acodec")
        .arg("pcm_s16le")
        .arg("-ar")
        .arg("16000")
        .arg("-ac")
        .arg("1")
        .arg(&wav_path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|e| {
            CourseMarketError::audio_extraction(format!("无法启动 {ffmpeg_path}: {e}"))
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        // 提取失败时不留下半成品
        let _ = std::fs::remove_file(&wav_path);
        return Err(CourseMarketError::audio_extraction(format!(
            "ffmpeg exited with {}: {}",
            output.status,
            stderr.trim()
        )));
    }

    Ok(wav_path)
}

/// 删除临时音频文件，失败时仅记录日志
pub fn cleanup_audio(wav_path: &Path) {
    if let Err(e) = std::fs::remove_file(wav_path) {
        tracing::warn!("Failed to remove temporary audio {}: {}", wav_path.display(), e);
    }
}
