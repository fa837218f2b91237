//! lc-testgen - 从题目描述的示例中生成可运行的测试代码
//!
//! 流水线：页面快照 → 示例分段 → 示例内容解析 → 参数拆分与期望值转换 → 函数名推断 → 测试脚本。

pub mod codegen;
pub mod config;
pub mod delivery;
pub mod description;
pub mod generator;
pub mod snapshot;
pub mod utils;

pub use generator::TestGenerator;
