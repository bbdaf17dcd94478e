/// 转义 LIKE 模式中的特殊字符，防止用户输入被当作通配符
pub fn escape_like_pattern(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\\' | '%' | '_' => {
                escaped.push('\\');
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
    }
    escaped
}

/// 把搜索关键字变成姓名匹配模式：去空格、转小写、转义后包上 %
///
/// 与存储层的 `REPLACE(LOWER(student_name), ' ', '')` 表达式配对使用，
/// 使 "Yamada Taro" 和 "yamadataro" 命中同一行。
pub fn name_match_pattern(keyword: &str) -> String {
    let normalized: String = keyword
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();
    format!("%{}%", escape_like_pattern(&normalized))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_pattern() {
        assert_eq!(escape_like_pattern("50%_off\\"), "50\\%\\_off\\\\");
        assert_eq!(escape_like_pattern("plain"), "plain");
    }

    #[test]
    fn test_name_match_pattern_strips_spaces_and_case() {
        assert_eq!(name_match_pattern("Yamada Taro"), "%yamadataro%");
        assert_eq!(name_match_pattern("  A B  "), "%ab%");
    }

    #[test]
    fn test_name_match_pattern_escapes_wildcards() {
        assert_eq!(name_match_pattern("a%b"), "%a\\%b%");
    }
}
