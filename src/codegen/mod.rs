//! 代码生成
//!
//! 把抽取出的示例子句转换成参数表达式和期望值，推断目标函数名，并输出测试脚本。

mod arguments;
mod function_name;
mod harness;
mod literal;

pub use arguments::{ArgumentSplitter, repair_quote, split_top_level};
pub use function_name::{FunctionNameResolver, NameSource, ResolvedName};
pub use harness::{HarnessGenerator, TestCase};
pub use literal::{LiteralCoercer, LiteralKind};
