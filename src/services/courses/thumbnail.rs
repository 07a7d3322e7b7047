use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use futures_util::TryStreamExt;
use futures_util::stream::StreamExt;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::{fs::File, path::PathBuf};
use uuid::Uuid;

use super::{CourseService, ensure_course_owner};
use crate::config::AppConfig;
use crate::errors::CourseMarketError;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate_magic_bytes;

pub async fn upload_thumbnail(
    service: &CourseService,
    request: &HttpRequest,
    course_id: i64,
    mut payload: Multipart,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = AppConfig::get();

    if let Err(resp) = ensure_course_owner(&storage, request, course_id).await {
        return Ok(resp);
    }

    let thumbnails_dir = config.thumbnails_dir();
    if !Path::new(&thumbnails_dir).exists()
        && let Err(e) = fs::create_dir_all(&thumbnails_dir)
    {
        tracing::error!("{}", CourseMarketError::file_operation(format!("{e}")));
        return Ok(
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error_empty(
                ErrorCode::FileUploadFailed,
                "创建缩略图目录失败",
            )),
        );
    }

    let mut stored_path: Option<PathBuf> = None;
    let mut public_url = String::new();

    while let Ok(Some(mut field)) = payload.try_next().await {
        let content_disposition = field.content_disposition();
        let name = content_disposition
            .and_then(|cd| cd.get_name())
            .unwrap_or_default()
            .to_string();

        if name != "thumbnail" {
            continue;
        }

        if stored_path.is_some() {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::MultifileUploadNotAllowed,
                "Only one thumbnail can be uploaded at a time",
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
            .allowed_image_types
            .iter()
            .any(|t| t.to_lowercase() == extension)
        {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::FileTypeNotAllowed,
                "Image type not allowed",
            )));
        }

        let stored_name = format!("{}-{}{}", course_id, Uuid::new_v4(), extension);
        let file_path = PathBuf::from(format!("{thumbnails_dir}/{stored_name}"));
        let mut f = match File::create(&file_path) {
            Ok(file) => file,
            Err(e) => {
                tracing::error!("{}", CourseMarketError::file_operation(format!("{e}")));
                return Ok(HttpResponse::InternalServerError().json(
                    ApiResponse::<()>::error_empty(ErrorCode::FileUploadFailed, "文件创建失败"),
                ));
            }
        };

        let mut total_size: usize = 0;
        let mut first_chunk = true;
        while let Some(chunk) = field.next().await {
            let data = chunk?;

            // 第一个 chunk 时验证魔术字节
            if first_chunk {
                first_chunk = false;
                if !validate_magic_bytes(&data, &extension) {
                    let _ = fs::remove_file(&file_path);
                    return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                        ErrorCode::FileTypeNotAllowed,
                        "文件内容与扩展名不匹配",
                    )));
                }
            }

            total_size += data.len();
            if total_size > config.upload.max_image_size {
                let _ = fs::remove_file(&file_path);
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::FileSizeExceeded,
                    "Image size exceeds the limit",
                )));
            }
            f.write_all(&data)?;
        }

        public_url = format!("/thumbnails/{stored_name}");
        stored_path = Some(file_path);
    }

    if stored_path.is_none() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::FileNotFound,
            "No thumbnail found in upload payload",
        )));
    }

    match storage.set_course_thumbnail(course_id, &public_url).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            serde_json::json!({ "thumbnail_url": public_url }),
            "Thumbnail uploaded successfully",
        ))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CourseNotFound,
            "Course not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::FileUploadFailed,
                format!("Failed to save thumbnail: {e}"),
            )),
        ),
    }
}
