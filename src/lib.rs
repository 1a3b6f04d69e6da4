//! acode - 无界面 IDE 内核库
//!
//! 模块结构：
//! - workspace: 虚拟文件系统（节点池、路径解析、合并引擎）
//! - kernel: 核心框架（AppState, Action, Effect, Store）
//! - services: 服务层（代码生成端口、用户设置）
//! - logging: tracing 初始化（滚动日志文件 + 控制台通道）

pub mod kernel;
pub mod logging;
pub mod services;
pub mod workspace;
