//! 输入子句拆分
//!
//! 把 `nums = [2,7,11,15], target = 9` 这样的输入子句拆成按位置排列的参数表达式。
//! 只在引号外、括号深度为 0 的逗号处拆分。

use anyhow::Result;
use regex::Regex;

use crate::description::LabelTokenizer;

/// 引号状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteState {
    None,
    Single,
    Double,
}

/// 按顶层逗号拆分
///
/// 反斜杠后的字符总是按字面处理，不会改变引号状态或括号深度；
/// 括号深度在 0 处截止，不会变成负数。每段去掉首尾空白，末尾的空段被丢弃。
pub fn split_top_level(clause: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut quote = QuoteState::None;
    let mut escape = false;
    let mut depth: usize = 0;

    for ch in clause.chars() {
        if escape {
            current.push(ch);
            escape = false;
            continue;
        }
        if ch == '\\' {
            current.push(ch);
            escape = true;
            continue;
        }
        match quote {
            QuoteState::Single | QuoteState::Double => {
                current.push(ch);
                if (quote == QuoteState::Single && ch == '\'')
                    || (quote == QuoteState::Double && ch == '"')
                {
                    quote = QuoteState::None;
                }
                continue;
            }
            QuoteState::None => {}
        }
        match ch {
            '"' => {
                quote = QuoteState::Double;
                current.push(ch);
            }
            '\'' => {
                quote = QuoteState::Single;
                current.push(ch);
            }
            '[' | '{' | '(' => {
                depth += 1;
                current.push(ch);
            }
            ']' | '}' | ')' => {
                depth = depth.saturating_sub(1);
                current.push(ch);
            }
            ',' if depth == 0 => {
                parts.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }

    let last = current.trim();
    if !last.is_empty() {
        parts.push(last.to_string());
    }
    parts
}

/// 修补缺失的结尾引号
///
/// 从页面取文本时结尾引号有时会丢失，例如 `"Hello World`。
/// 以引号开头、但没有未转义的同种引号结尾时补上一个。只有一个引号字符时得到空字符串。
pub fn repair_quote(expr: &str) -> String {
    let Some(quote) = ['"', '\''].into_iter().find(|&q| expr.starts_with(q)) else {
        return expr.to_string();
    };
    let body = &expr[quote.len_utf8()..];
    let terminated = match body.strip_suffix(quote) {
        // 结尾引号前有奇数个反斜杠时，引号是被转义的
        Some(inner) => inner.chars().rev().take_while(|&c| c == '\\').count() % 2 == 0,
        None => false,
    };
    if terminated {
        expr.to_string()
    } else {
        format!("{expr}{quote}")
    }
}

/// 参数拆分器
#[derive(Debug, Clone)]
pub struct ArgumentSplitter {
    tokenizer: LabelTokenizer,
    assignment_re: Regex,
}

impl ArgumentSplitter {
    pub fn new(tokenizer: LabelTokenizer) -> Result<Self> {
        // 参数名允许 Unicode 单词字符和常用汉字
        let assignment_re = Regex::new(r"(?s)^\s*[\w\x{4e00}-\x{9fa5}]+\s*=\s*(.+?)\s*$")?;
        Ok(Self { tokenizer, assignment_re })
    }

    /// 拆分输入子句
    pub fn split(&self, clause: &str) -> Vec<String> {
        split_top_level(clause)
    }

    /// 把一段 `name = value` 化简成 `value`，再修补引号
    pub fn reduce(&self, segment: &str) -> String {
        let expr = match self.assignment_re.captures(segment).and_then(|c| c.get(1)) {
            Some(value) => value.as_str().trim(),
            None => segment.trim(),
        };
        repair_quote(expr)
    }

    /// 把整个输入子句转换成参数表达式列表
    pub fn parse_arguments(&self, input: &str) -> Vec<String> {
        let stripped = self.tokenizer.strip_leading_label(input);
        if stripped.is_empty() {
            return Vec::new();
        }
        self.split(&stripped)
            .iter()
            .map(|segment| self.reduce(segment))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LabelWords;

    fn splitter() -> ArgumentSplitter {
        ArgumentSplitter::new(LabelTokenizer::new(&LabelWords::default()).unwrap()).unwrap()
    }

    #[test]
    fn test_split_respects_quotes_and_brackets() {
        assert_eq!(
            split_top_level("a, \"b, c\", [d, e]"),
            vec!["a".to_string(), "\"b, c\"".to_string(), "[d, e]".to_string()]
        );
        assert_eq!(
            split_top_level("grid = [[1,2],[3,4]], f = fn(a, b), m = {\"k\": 1, \"v\": 2}"),
            vec![
                "grid = [[1,2],[3,4]]".to_string(),
                "f = fn(a, b)".to_string(),
                "m = {\"k\": 1, \"v\": 2}".to_string()
            ]
        );
    }

    #[test]
    fn test_split_escape_and_single_quotes() {
        assert_eq!(
            split_top_level(r#"s = "a\",b", c = 'x,y'"#),
            vec![r#"s = "a\",b""#.to_string(), "c = 'x,y'".to_string()]
        );
        // 单引号内的双引号不会结束引号
        assert_eq!(split_top_level(r#"'a"b', 1"#), vec![r#"'a"b'"#.to_string(), "1".to_string()]);
    }

    #[test]
    fn test_split_depth_floors_at_zero() {
        assert_eq!(
            split_top_level("a), b, [c"),
            vec!["a)".to_string(), "b".to_string(), "[c".to_string()]
        );
    }

    #[test]
    fn test_split_drops_only_trailing_empty() {
        assert_eq!(
            split_top_level("a, , b,"),
            vec!["a".to_string(), String::new(), "b".to_string()]
        );
        assert!(split_top_level("  ").is_empty());
    }

    #[test]
    fn test_reduce_strips_name() {
        let s = splitter();
        assert_eq!(s.reduce("  target =   9  "), "9");
        assert_eq!(s.reduce("nums = [2,7,11,15]"), "[2,7,11,15]");
        assert_eq!(s.reduce("数组 = [1]"), "[1]");
        assert_eq!(s.reduce("[1, 2]"), "[1, 2]");
        assert_eq!(s.reduce("\"a = b\""), "\"a = b\"");
    }

    #[test]
    fn test_quote_repair() {
        let s = splitter();
        assert_eq!(s.reduce("s = \"Hello World"), "\"Hello World\"");
        assert_eq!(s.reduce("'abc"), "'abc'");
        assert_eq!(s.reduce("\"III\""), "\"III\"");
        assert_eq!(repair_quote("\"\""), "\"\"");
        assert_eq!(repair_quote("plain"), "plain");
    }

    #[test]
    fn test_quote_repair_lone_and_escaped_quotes() {
        let s = splitter();
        assert_eq!(s.reduce("s = \""), "\"\"");
        assert_eq!(repair_quote("'"), "''");
        assert_eq!(repair_quote(r#""a\""#), r#""a\"""#);
        assert_eq!(repair_quote(r#""a\\""#), r#""a\\""#);
        assert_eq!(s.parse_arguments("输入：s = \""), vec!["\"\"".to_string()]);
    }

    #[test]
    fn test_parse_arguments() {
        let s = splitter();
        assert_eq!(
            s.parse_arguments("输入：nums = [2,7,11,15], target = 9"),
            vec!["[2,7,11,15]".to_string(), "9".to_string()]
        );
        assert_eq!(s.parse_arguments("s = \"III\""), vec!["\"III\"".to_string()]);
        assert!(s.parse_arguments("输入：").is_empty());
    }
}
