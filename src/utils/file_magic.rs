/// 验证文件内容的魔术字节是否与扩展名匹配
///
/// # Arguments
/// * `data` - 文件内容的前几个字节
/// * `extension` - 文件扩展名（包含点号，如 ".mp4"）
///
/// # Returns
/// * `true` - 魔术字节匹配或该类型不需要验证
/// * `false` - 魔术字节不匹配
pub fn validate_magic_bytes(data: &[u8], extension: &str) -> bool {
    if data.is_empty() {
        return false;
    }

    match extension.to_lowercase().as_str() {
        // 视频格式
        ".mp4" | ".m4v" | ".mov" => {
            // ISO BMFF：偏移 4 处为 "ftyp"
            data.len() >= 8 && &data[4..8] == b"ftyp"
        }
        ".webm" | ".mkv" => data.starts_with(&[0x1A, 0x45, 0xDF, 0xA3]),
        ".avi" => data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"AVI ",
        ".flv" => data.starts_with(b"FLV"),

        // 音频格式
        ".wav" => data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WAVE",
        ".mp3" => data.starts_with(b"ID3") || data.starts_with(&[0xFF, 0xFB]),

        // 图片格式
        ".png" => data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]),
        ".jpg" | ".jpeg" => data.starts_with(&[0xFF, 0xD8, 0xFF]),
        ".gif" => data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a"),
        ".webp" => data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WEBP",

        // 文档格式
        ".pdf" => data.starts_with(b"%PDF"),
        ".doc" | ".xls" | ".ppt" => {
            // MS Office 旧格式 (OLE Compound Document)
            data.starts_with(&[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1])
        }
        ".docx" | ".xlsx" | ".pptx" => {
            // MS Office 新格式 (ZIP-based OOXML)
            data.starts_with(&[0x50, 0x4B, 0x03, 0x04])
        }

        // 压缩格式
        ".zip" => data.starts_with(&[0x50, 0x4B, 0x03, 0x04]),
        ".gz" | ".gzip" => data.starts_with(&[0x1F, 0x8B]),

        // 文本格式 - 不检查魔术字节
        ".txt" | ".md" | ".json" | ".csv" | ".srt" | ".vtt" => true,

        // 未知格式 - 默认拒绝
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mp4_magic() {
        let mp4_header = [0x00, 0x00, 0x00, 0x20, b'f', b't', b'y', b'p', b'i', b's', b'o', b'm'];
        assert!(validate_magic_bytes(&mp4_header, ".mp4"));
        assert!(validate_magic_bytes(&mp4_header, ".MOV"));
        assert!(!validate_magic_bytes(&mp4_header, ".webm"));
    }

    #[test]
    fn test_webm_magic() {
        let webm_header = [0x1A, 0x45, 0xDF, 0xA3, 0x01];
        assert!(validate_magic_bytes(&webm_header, ".webm"));
        assert!(validate_magic_bytes(&webm_header, ".mkv"));
        assert!(!validate_magic_bytes(&webm_header, ".mp4"));
    }

    #[test]
    fn test_avi_magic() {
        let mut avi_header = Vec::new();
        avi_header.extend_from_slice(b"RIFF");
        avi_header.extend_from_slice(&[0x00; 4]);
        avi_header.extend_from_slice(b"AVI ");
        assert!(validate_magic_bytes(&avi_header, ".avi"));
        assert!(!validate_magic_bytes(&avi_header, ".wav"));
    }

    #[test]
    fn test_wav_magic() {
        let mut wav_header = Vec::new();
        wav_header.extend_from_slice(b"RIFF");
        wav_header.extend_from_slice(&[0x00; 4]);
        wav_header.extend_from_slice(b"WAVE");
        assert!(validate_magic_bytes(&wav_header, ".wav"));
    }

    #[test]
    fn test_png_magic() {
        let png_header = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        assert!(validate_magic_bytes(&png_header, ".png"));
        assert!(!validate_magic_bytes(&png_header, ".jpg"));
    }

    #[test]
    fn test_pdf_magic() {
        let pdf_header = b"%PDF-1.4";
        assert!(validate_magic_bytes(pdf_header, ".pdf"));
        assert!(!validate_magic_bytes(pdf_header, ".doc"));
    }

    #[test]
    fn test_empty_data_rejected() {
        assert!(!validate_magic_bytes(&[], ".mp4"));
    }

    #[test]
    fn test_unknown_extension_rejected() {
        assert!(!validate_magic_bytes(b"anything", ".exe"));
    }
}
