use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use futures_util::TryStreamExt;
use futures_util::stream::StreamExt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::fs::File;
use std::time::Duration;
use tracing::{info, warn};
use uuid::Uuid;

use super::LectureService;
use crate::config::AppConfig;
use crate::errors::{CourseMarketError, Result};
use crate::models::lectures::requests::{CreateLectureMeta, CreateLectureRequest};
use crate::models::lectures::responses::LectureResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::courses::ensure_course_owner;
use crate::speech::create_transcriber;
use crate::utils::media;
use crate::utils::validate_magic_bytes;

/// 讲座上传管线
///
/// 保存视频 → 提取音频 → 语音识别 → 写入讲座记录。
/// 提取或识别任一环节失败都不阻止讲座创建，只是讲稿为空；
/// 已落盘的视频不回滚。
pub async fn create_lecture(
    service: &LectureService,
    request: &HttpRequest,
    course_id: i64,
    payload: Multipart,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = AppConfig::get();

    if let Err(resp) = ensure_course_owner(&storage, request, course_id).await {
        return Ok(resp);
    }

    // 1. 收集表单字段并保存上传的视频
    let (meta, video_path) = match collect_upload(config, course_id, payload).await {
        Ok(parts) => parts,
        Err(resp) => return Ok(*resp),
    };

    // 视频来源二选一：上传文件或外链
    if video_path.is_none() && meta.video_url.as_deref().is_none_or(|u| u.trim().is_empty()) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::LectureVideoMissing,
            "Either a video file or a videoUrl is required",
        )));
    }

    if meta.title.trim().is_empty() {
        if let Some(ref path) = video_path {
            let _ = fs::remove_file(path);
        }
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Lecture title is required",
        )));
    }

    // 2. 本地视频走音频提取 + 语音识别，失败降级为空讲稿
    let transcript = match video_path {
        Some(ref path) => Some(derive_transcript_with_timeout(config, path).await),
        None => None,
    };

    let video_url = match video_path {
        Some(ref path) => {
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default();
            format!("/lectures/{course_id}/{file_name}")
        }
        None => meta.video_url.clone().unwrap_or_default(),
    };

    // 3. 写入讲座记录
    let create_request = CreateLectureRequest {
        course_id,
        title: meta.title,
        video_url,
        thumbnail_url: None,
        transcript,
        duration_seconds: meta.duration_seconds,
    };

    match storage.create_lecture(create_request).await {
        Ok(lecture) => {
            info!("Lecture {} created for course {}", lecture.id, course_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                LectureResponse::full(lecture),
                "Lecture created successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建讲座失败: {e}"),
            )),
        ),
    }
}

/// 解析 multipart：文本字段 + 可选的 video 文件
///
/// 视频流式落盘到 lectures/<course_id>/ 下的唯一文件名，
/// 第一个 chunk 校验魔术字节，超限即删除半成品。
async fn collect_upload(
    config: &AppConfig,
    course_id: i64,
    mut payload: Multipart,
) -> std::result::Result<(CreateLectureMeta, Option<PathBuf>), Box<HttpResponse>> {
    let mut meta = CreateLectureMeta::default();
    let mut video_path: Option<PathBuf> = None;

    while let Ok(Some(mut field)) = payload.try_next().await {
        let content_disposition = field.content_disposition();
        let name = content_disposition
            .and_then(|cd| cd.get_name())
            .unwrap_or_default()
            .to_string();

        match name.as_str() {
            "title" => meta.title = read_text_field(&mut field).await,
            "videoUrl" => {
                let url = read_text_field(&mut field).await;
                if !url.trim().is_empty() {
                    meta.video_url = Some(url.trim().to_string());
                }
            }
            "durationSeconds" => {
                meta.duration_seconds = read_text_field(&mut field)
                    .await
                    .trim()
                    .parse()
                    .unwrap_or(0);
            }
            "video" => {
                if video_path.is_some() {
                    return Err(Box::new(HttpResponse::BadRequest().json(
                        ApiResponse::error_empty(
                            ErrorCode::MultifileUploadNotAllowed,
                            "Only one video can be uploaded at a time",
                        ),
                    )));
                }

                let original_name = content_disposition
                    .and_then(|cd| cd.get_filename())
                    .map(|s| s.to_string())
                    .unwrap_or_default();

                let extension = Path::new(&original_name)
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .map(|ext| format!(".{}", ext.to_lowercase()))
                    .unwrap_or_default();

                if !config
                    .upload
                    .allowed_video_types
                    .iter()
                    .any(|t| t.to_lowercase() == extension)
                {
                    return Err(Box::new(HttpResponse::BadRequest().json(
                        ApiResponse::error_empty(
                            ErrorCode::FileTypeNotAllowed,
                            "Video type not allowed",
                        ),
                    )));
                }

                let lectures_dir = config.lectures_dir(course_id);
                if !Path::new(&lectures_dir).exists()
                    && let Err(e) = fs::create_dir_all(&lectures_dir)
                {
                    tracing::error!("{}", CourseMarketError::file_operation(format!("{e}")));
                    return Err(Box::new(HttpResponse::InternalServerError().json(
                        ApiResponse::<()>::error_empty(
                            ErrorCode::FileUploadFailed,
                            "创建讲座目录失败",
                        ),
                    )));
                }

                let stored_name = format!("{}{}", Uuid::new_v4(), extension);
                let file_path = PathBuf::from(format!("{lectures_dir}/{stored_name}"));
                let mut f = match File::create(&file_path) {
                    Ok(file) => file,
                    Err(e) => {
                        tracing::error!("{}", CourseMarketError::file_operation(format!("{e}")));
                        return Err(Box::new(HttpResponse::InternalServerError().json(
                            ApiResponse::<()>::error_empty(
                                ErrorCode::FileUploadFailed,
                                "文件创建失败",
                            ),
                        )));
                    }
                };

                let mut total_size: usize = 0;
                let mut first_chunk = true;
                while let Some(chunk) = field.next().await {
                    let data = match chunk {
                        Ok(data) => data,
                        Err(e) => {
                            let _ = fs::remove_file(&file_path);
                            tracing::error!("Video upload stream error: {}", e);
                            return Err(Box::new(HttpResponse::BadRequest().json(
                                ApiResponse::<()>::error_empty(
                                    ErrorCode::FileUploadFailed,
                                    "Video upload interrupted",
                                ),
                            )));
                        }
                    };

                    if first_chunk {
                        first_chunk = false;
                        if !validate_magic_bytes(&data, &extension) {
                            let _ = fs::remove_file(&file_path);
                            return Err(Box::new(HttpResponse::BadRequest().json(
                                ApiResponse::error_empty(
                                    ErrorCode::FileTypeNotAllowed,
                                    "文件内容与扩展名不匹配",
                                ),
                            )));
                        }
                    }

                    total_size += data.len();
                    if total_size > config.upload.max_video_size {
                        let _ = fs::remove_file(&file_path);
                        return Err(Box::new(HttpResponse::BadRequest().json(
                            ApiResponse::error_empty(
                                ErrorCode::FileSizeExceeded,
                                "Video size exceeds the limit",
                            ),
                        )));
                    }

                    if let Err(e) = f.write_all(&data) {
                        let _ = fs::remove_file(&file_path);
                        tracing::error!("{}", CourseMarketError::file_operation(format!("{e}")));
                        return Err(Box::new(HttpResponse::InternalServerError().json(
                            ApiResponse::<()>::error_empty(
                                ErrorCode::FileUploadFailed,
                                "文件写入失败",
                            ),
                        )));
                    }
                }

                video_path = Some(file_path);
            }
            _ => {
                // 忽略未知字段，消费掉流
                while let Some(_chunk) = field.next().await {}
            }
        }
    }

    Ok((meta, video_path))
}

async fn read_text_field(field: &mut actix_multipart::Field) -> String {
    let mut bytes = Vec::new();
    while let Some(Ok(chunk)) = field.next().await {
        bytes.extend_from_slice(&chunk);
    }
    String::from_utf8_lossy(&bytes).to_string()
}

/// 提取音频并识别讲稿，整体受识别超时约束
///
/// 任何失败（包括超时）都降级为空讲稿。
async fn derive_transcript_with_timeout(config: &AppConfig, video_path: &Path) -> String {
    let timeout = Duration::from_secs(config.speech.timeout);

    let transcript = match tokio::time::timeout(timeout, derive_transcript(config, video_path)).await
    {
        Ok(Ok(text)) => text,
        Ok(Err(e)) => {
            warn!("Transcription failed for {}: {}", video_path.display(), e);
            String::new()
        }
        Err(_) => {
            warn!(
                "Transcription timed out after {}s for {}",
                config.speech.timeout,
                video_path.display()
            );
            String::new()
        }
    };

    // 超时取消时管线内的清理不会执行，这里兜底删除临时音频
    let wav_path = video_path.with_extension("wav");
    if wav_path.exists() {
        media::cleanup_audio(&wav_path);
    }

    transcript
}

async fn derive_transcript(config: &AppConfig, video_path: &Path) -> Result<String> {
    let wav_path = media::extract_audio(&config.media.ffmpeg_path, video_path).await?;

    let transcriber = create_transcriber();
    let result = transcriber.transcribe(&wav_path).await;

    media::cleanup_audio(&wav_path);

    result
}
