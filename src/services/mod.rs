//! 服务层模块
//!
//! 外部协作方的端口与适配：
//! - codegen: AI 代码生成端口（数据契约 + 异步管道）
//! - settings: 用户设置（serde 默认值 + JSON 读写）

pub mod codegen;
pub mod settings;

pub use codegen::{CodeGenerator, FileContext, GenerationResult};
pub use settings::Settings;
