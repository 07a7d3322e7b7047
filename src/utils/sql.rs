/// 转义 LIKE 模式中的通配符
///
/// 用户输入的搜索词中的 % 和 _ 应按字面量匹配。
pub fn escape_like_pattern(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_percent() {
        assert_eq!(escape_like_pattern("50%"), "50\\%");
    }

    #[test]
    fn test_escape_underscore() {
        assert_eq!(escape_like_pattern("a_b"), "a\\_b");
    }

    #[test]
    fn test_escape_backslash_first() {
        assert_eq!(escape_like_pattern("\\%"), "\\\\\\%");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape_like_pattern("rust course"), "rust course");
    }
}
