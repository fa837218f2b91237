//! 测试脚本的输出
//!
//! 先尝试主输出（指定的输出文件，或标准输出），失败时记录警告并退回标准输出。

use anyhow::{Context, Result};
use log::{info, warn};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// 生成文本的去处
#[cfg_attr(test, mockall::automock)]
pub trait HarnessSink {
    /// 用于日志的名字
    fn name(&self) -> String;
    fn deliver(&mut self, text: &str) -> Result<()>;
}

/// 写入文件
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HarnessSink for FileSink {
    fn name(&self) -> String {
        format!("文件 {}", self.path.display())
    }

    fn deliver(&mut self, text: &str) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("无法创建输出目录: {}", parent.display()))?;
        }
        fs::write(&self.path, text)
            .with_context(|| format!("无法写入输出文件: {}", self.path.display()))
    }
}

/// 打印到标准输出
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl HarnessSink for StdoutSink {
    fn name(&self) -> String {
        "标准输出".to_string()
    }

    fn deliver(&mut self, text: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes()).context("无法写入标准输出")?;
        stdout.flush().context("无法刷新标准输出")
    }
}

/// 先写主输出，失败时退回备用输出
///
/// 只有两个输出都失败时才返回错误。
pub fn deliver_with_fallback(
    primary: &mut dyn HarnessSink,
    fallback: &mut dyn HarnessSink,
    text: &str,
) -> Result<()> {
    match primary.deliver(text) {
        Ok(()) => {
            info!("已输出到{}", primary.name());
            Ok(())
        }
        Err(e) => {
            warn!("输出到{}失败: {e:#}，改为输出到{}", primary.name(), fallback.name());
            fallback
                .deliver(text)
                .with_context(|| format!("备用输出{}也失败了", fallback.name()))
        }
    }
}
