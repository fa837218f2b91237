use anyhow::{Context, Result};
use env_logger::Env;
use log::{debug, error, info};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use lc_testgen::TestGenerator;
use lc_testgen::config::{CliArgs, GeneratorConfig};
use lc_testgen::delivery::{self, FileSink, HarnessSink, StdoutSink};
use lc_testgen::snapshot::PageSnapshot;

const DEFAULT_CONFIG_FILE: &str = "lc-testgen.toml";

fn main() {
    let args = CliArgs::parse_args();
    env_logger::Builder::from_env(Env::default().default_filter_or(args.get_log_level()))
        .format_timestamp(None)
        .init();

    if let Err(e) = run(&args) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

/// 读取配置：命令行指定的文件，或当前目录下存在的默认配置文件，否则使用默认值
fn load_config(args: &CliArgs) -> Result<GeneratorConfig> {
    if let Some(path) = &args.config {
        info!("使用配置文件: {}", path.display());
        return GeneratorConfig::from_file(path);
    }
    let default_path = Path::new(DEFAULT_CONFIG_FILE);
    if default_path.is_file() {
        info!("使用当前目录下的配置文件: {DEFAULT_CONFIG_FILE}");
        return GeneratorConfig::from_file(default_path);
    }
    debug!("未找到配置文件，使用默认配置");
    Ok(GeneratorConfig::default())
}

fn read_input(args: &CliArgs) -> Result<String> {
    match &args.input {
        Some(path) => {
            fs::read_to_string(path)
                .with_context(|| format!("无法读取输入文件: {}", path.display()))
        }
        None => {
            debug!("从标准输入读取题目描述");
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("无法从标准输入读取题目描述")?;
            Ok(content)
        }
    }
}

fn run(args: &CliArgs) -> Result<()> {
    let config = load_config(args)?;
    let generator = TestGenerator::new(&config).context("无法根据配置创建生成器")?;

    let content = read_input(args)?;
    let editor_buffer = match &args.editor_file {
        Some(path) => Some(
            fs::read_to_string(path)
                .with_context(|| format!("无法读取编辑器文件: {}", path.display()))?,
        ),
        None => None,
    };

    let format = args.resolve_format(&content);
    debug!("输入格式: {format:?}");
    let snapshot = PageSnapshot::load(&content, format, generator.tokenizer())?
        .with_editor_overrides(args.editor_line.clone(), editor_buffer);

    let text = if args.parse_only {
        let cases = generator.build_cases(&snapshot.description);
        info!("解析出 {} 个测试用例", cases.len());
        let mut json = serde_json::to_string_pretty(&cases).context("无法序列化测试用例")?;
        json.push('\n');
        json
    } else {
        generator.generate(&snapshot)
    };

    let mut fallback = StdoutSink;
    match &args.output {
        Some(path) => {
            let mut primary = FileSink::new(path);
            delivery::deliver_with_fallback(&mut primary, &mut fallback, &text)
        }
        None => fallback.deliver(&text),
    }
}
