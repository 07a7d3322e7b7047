use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use futures_util::TryStreamExt;
use futures_util::stream::StreamExt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::fs::File;
use tracing::info;
use uuid::Uuid;

use super::{LectureService, ensure_lecture_in_course};
use crate::config::AppConfig;
use crate::errors::CourseMarketError;
use crate::models::lectures::requests::CreateResourceRequest;
use crate::models::lectures::responses::ResourceUploadResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::courses::{ensure_course_access, ensure_course_owner};
use crate::utils::validate_magic_bytes;

pub async fn upload_resource(
    service: &LectureService,
    request: &HttpRequest,
    course_id: i64,
    lecture_id: i64,
    mut payload: Multipart,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = AppConfig::get();

    if let Err(resp) = ensure_course_owner(&storage, request, course_id).await {
        return Ok(resp);
    }

    if let Err(resp) = ensure_lecture_in_course(&storage, course_id, lecture_id).await {
        return Ok(resp);
    }

    let resources_dir = config.resources_dir(course_id);
    if !Path::new(&resources_dir).exists()
        && let Err(e) = fs::create_dir_all(&resources_dir)
    {
        tracing::error!("{}", CourseMarketError::file_operation(format!("{e}")));
        return Ok(
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error_empty(
                ErrorCode::FileUploadFailed,
                "创建资源目录失败",
            )),
        );
    }

    let mut title = String::new();
    let mut original_name = String::new();
    let mut content_type = String::new();
    let mut file_size: i64 = 0;
    let mut stored: Option<(PathBuf, String)> = None;

    while let Ok(Some(mut field)) = payload.try_next().await {
        let content_disposition = field.content_disposition();
        let name = content_disposition
            .and_then(|cd| cd.get_name())
            .unwrap_or_default()
            .to_string();

        match name.as_str() {
            "title" => {
                let mut bytes = Vec::new();
                while let Some(Ok(chunk)) = field.next().await {
                    bytes.extend_from_slice(&chunk);
                }
                title = String::from_utf8_lossy(&bytes).trim().to_string();
            }
            "file" => {
                if stored.is_some() {
                    return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                        ErrorCode::MultifileUploadNotAllowed,
                        "Only one file can be uploaded at a time",
                    )));
                }

                original_name = content_disposition
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
                    .allowed_resource_types
                    .iter()
                    .any(|t| t.to_lowercase() == extension)
                {
                    return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                        ErrorCode::FileTypeNotAllowed,
                        "File type not allowed",
                    )));
                }

                content_type = field
                    .content_type()
                    .map(|ct| ct.to_string())
                    .unwrap_or_default();

                let stored_name = format!("{}-{}{}", lecture_id, Uuid::new_v4(), extension);
                let file_path = PathBuf::from(format!("{resources_dir}/{stored_name}"));
                let mut f = match File::create(&file_path) {
                    Ok(file) => file,
                    Err(e) => {
                        tracing::error!("{}", CourseMarketError::file_operation(format!("{e}")));
                        return Ok(HttpResponse::InternalServerError().json(
                            ApiResponse::<()>::error_empty(
                                ErrorCode::FileUploadFailed,
                                "文件创建失败",
                            ),
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
                            return Ok(HttpResponse::BadRequest().json(
                                ApiResponse::error_empty(
                                    ErrorCode::FileTypeNotAllowed,
                                    "文件内容与扩展名不匹配",
                                ),
                            ));
                        }
                    }

                    total_size += data.len();
                    if total_size > config.upload.max_resource_size {
                        let _ = fs::remove_file(&file_path);
                        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                            ErrorCode::FileSizeExceeded,
                            "File size exceeds the limit",
                        )));
                    }
                    f.write_all(&data)?;
                }

                file_size = total_size as i64;
                let public_url = format!("/resources/{course_id}/{stored_name}");
                stored = Some((file_path, public_url));
            }
            _ => {
                while let Some(_chunk) = field.next().await {}
            }
        }
    }

    let (_, file_url) = match stored {
        Some(parts) => parts,
        None => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::FileNotFound,
                "No file found in upload payload",
            )));
        }
    };

    // 没有显式标题时用原始文件名
    if title.is_empty() {
        title = original_name.clone();
    }

    let create_request = CreateResourceRequest {
        lecture_id,
        title,
        file_url,
        file_size,
        content_type,
    };

    match storage.create_resource(create_request).await {
        Ok(resource) => {
            info!("Resource {} uploaded for lecture {}", resource.id, lecture_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                ResourceUploadResponse { resource },
                "Resource uploaded successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::FileUploadFailed,
                format!("Failed to save resource: {e}"),
            )),
        ),
    }
}

pub async fn list_resources(
    service: &LectureService,
    request: &HttpRequest,
    course_id: i64,
    lecture_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = ensure_lecture_in_course(&storage, course_id, lecture_id).await {
        return Ok(resp);
    }

    // 资源只对报名学员、课程讲师与管理员可见
    if let Err(resp) = ensure_course_access(&storage, request, course_id).await {
        return Ok(resp);
    }

    match storage.list_resources_by_lecture(lecture_id).await {
        Ok(resources) => Ok(HttpResponse::Ok().json(ApiResponse::success(resources, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询资源列表失败: {e}"),
            )),
        ),
    }
}

pub async fn delete_resource(
    service: &LectureService,
    request: &HttpRequest,
    course_id: i64,
    resource_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = ensure_course_owner(&storage, request, course_id).await {
        return Ok(resp);
    }

    let resource = match storage.get_resource_by_id(resource_id).await {
        Ok(Some(resource)) => resource,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::FileNotFound,
                "Resource not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询资源失败: {e}"),
                )),
            );
        }
    };

    // 资源必须属于该课程下的讲座
    match storage.get_lecture_by_id(resource.lecture_id).await {
        Ok(Some(lecture)) if lecture.course_id == course_id => {}
        _ => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::FileNotFound,
                "Resource not found",
            )));
        }
    }

    match storage.delete_resource(resource_id).await {
        Ok(true) => {
            // 磁盘文件一并清理
            if let Some(file_name) = resource
                .file_url
                .strip_prefix(&format!("/resources/{course_id}/"))
            {
                let config = AppConfig::get();
                let file_path = format!("{}/{}", config.resources_dir(course_id), file_name);
                let _ = std::fs::remove_file(&file_path);
            }

            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Resource deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::FileNotFound,
            "Resource not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除资源失败: {e}"),
            )),
        ),
    }
}
