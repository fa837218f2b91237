//! 配置模块
//!
//! 命令行参数与生成器配置文件。

pub mod cli_args;
pub mod generator_config;

pub use cli_args::{CliArgs, InputFormat};
pub use generator_config::{GeneratorConfig, LabelWords};
