use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use std::fs::File;
use std::io::Read;
use std::path::{Component, Path, PathBuf};

use crate::config::AppConfig;
use crate::errors::CourseMarketError;
use crate::models::{ApiResponse, ErrorCode};

// 公共目录下的三类文件：thumbnails/、lectures/<course_id>/、resources/<course_id>/

fn guess_content_type(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("mp4") | Some("m4v") => "video/mp4",
        Some("mov") => "video/quicktime",
        Some("webm") => "video/webm",
        Some("mkv") => "video/x-matroska",
        Some("avi") => "video/x-msvideo",
        Some("pdf") => "application/pdf",
        Some("zip") => "application/zip",
        Some("txt") | Some("md") | Some("srt") | Some("vtt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

/// 提供公共目录下的文件
///
/// 路径段逐一校验，含 .. 或绝对段的请求直接拒绝。
pub async fn serve_public_file(req: HttpRequest) -> ActixResult<HttpResponse> {
    let config = AppConfig::get();

    let area = req.match_info().query("area");
    let tail = req.match_info().query("tail");

    if !matches!(area, "thumbnails" | "lectures" | "resources") {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::FileNotFound,
            "File not found",
        )));
    }

    // 拒绝目录穿越
    let relative = Path::new(tail);
    if relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_)))
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Invalid file path",
        )));
    }

    let file_path = PathBuf::from(&config.upload.public_dir)
        .join(area)
        .join(relative);

    if !file_path.exists() || !file_path.is_file() {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::FileNotFound,
            "File not found",
        )));
    }

    let mut file = match File::open(&file_path) {
        Ok(f) => f,
        Err(e) => {
            tracing::error!("{:?}", CourseMarketError::file_operation(format!("{e:?}")));
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "File open failed",
                )),
            );
        }
    };

    let mut buf = Vec::new();
    if file.read_to_end(&mut buf).is_err() {
        tracing::error!("{:?}", CourseMarketError::file_operation("File read failed"));
        return Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "File read failed",
            )),
        );
    }

    Ok(HttpResponse::Ok()
        .insert_header((
            actix_web::http::header::CONTENT_TYPE,
            guess_content_type(&file_path),
        ))
        .body(buf))
}

// 配置路由
pub fn configure_public_file_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/{area}/{tail:.*}", web::get().to(serve_public_file));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_content_type() {
        assert_eq!(guess_content_type(Path::new("a/video.mp4")), "video/mp4");
        assert_eq!(guess_content_type(Path::new("a/pic.PNG")), "image/png");
        assert_eq!(
            guess_content_type(Path::new("a/unknown.bin")),
            "application/octet-stream"
        );
    }
}
