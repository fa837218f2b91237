use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// 输入格式
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputFormat {
    /// 根据文件扩展名或内容自动判断
    Auto,
    /// 纯文本题目描述（可带 YAML 前置数据）
    Text,
    /// 保存下来的题目页面 HTML
    Html,
}

// lc-testgen - 从题目描述的示例中生成可运行的测试代码
#[derive(Parser, Debug)]
#[clap(
    name = "lc-testgen",
    version,
    about = "Generate a runnable test harness from the examples in a problem description",
    after_help = "INPUT FORMATS:\n  text                   Plain-text description, optional YAML front matter\n  html                   Saved problem page\n\nEXAMPLES:\n  lc-testgen --input two-sum.txt\n  lc-testgen --input page.html --output two_sum.test.js\n  lc-testgen --input roman.txt --editor-line 'var romanToInt = function(s) {'\n  lc-testgen --parse-only --input page.html"
)]
pub struct CliArgs {
    // Input file - Problem description, stdin when omitted
    // 输入文件 - 题目描述，省略时从标准输入读取
    #[clap(short = 'i', long = "input", help = "Problem description file (stdin when omitted)")]
    pub input: Option<PathBuf>,

    // Input format
    // 输入格式
    #[clap(long = "format", value_enum, default_value = "auto", help = "Input format")]
    pub format: InputFormat,

    // Editor line - A single visible editor line
    // 编辑器行 - 编辑器中可见的一行代码
    #[clap(long = "editor-line", help = "Visible editor line used to infer the function name")]
    pub editor_line: Option<String>,

    // Editor file - Full editor buffer
    // 编辑器文件 - 完整的编辑器内容
    #[clap(long = "editor-file", help = "File holding the full editor buffer")]
    pub editor_file: Option<PathBuf>,

    // Output file - Where the generated harness is written
    // 输出文件 - 生成的测试代码写入位置
    #[clap(short = 'o', long = "output", help = "Output file for the generated harness")]
    pub output: Option<PathBuf>,

    // Parse only - Print the extracted test cases instead of the harness
    // 仅解析 - 只输出解析出的测试用例
    #[clap(short = 'p', long = "parse-only", help = "Print extracted test cases as JSON")]
    pub parse_only: bool,

    // Config file
    // 配置文件
    #[clap(short = 'c', long = "config", help = "Generator configuration file (TOML)")]
    pub config: Option<PathBuf>,

    // Verbose mode - Show more log information
    // 详细模式 - 显示更多日志信息
    #[clap(short = 'v', long = "verbose", help = "Enable verbose logging")]
    pub verbose: bool,

    // Quiet mode - Only report errors
    // 安静模式 - 只显示错误
    #[clap(short = 'q', long = "quiet", help = "Suppress non-essential output")]
    pub quiet: bool,
}

impl CliArgs {
    /// Parse command line arguments
    /// 解析命令行参数
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get log level
    /// 获取日志级别
    pub fn get_log_level(&self) -> &str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }

    /// 判断实际使用的输入格式
    pub fn resolve_format(&self, content: &str) -> InputFormat {
        match self.format {
            InputFormat::Auto => {
                let by_extension = self
                    .input
                    .as_ref()
                    .and_then(|p| p.extension())
                    .and_then(|e| e.to_str())
                    .map(|e| e.eq_ignore_ascii_case("html") || e.eq_ignore_ascii_case("htm"));
                match by_extension {
                    Some(true) => InputFormat::Html,
                    _ if content.trim_start().starts_with('<') => InputFormat::Html,
                    _ => InputFormat::Text,
                }
            }
            other => other,
        }
    }
}
