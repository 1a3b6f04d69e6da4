//! 代码生成端口
//!
//! 协作方返回 `{ files: [{path, content, language?}], description }`；
//! 网络或解析失败统一折叠为「空文件列表 + 错误描述」，上层把空批次
//! 当作 no-op 处理。

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::kernel::{Action, KernelBusSender};
use crate::workspace::GeneratedFile;

pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send + 'static>>;

/// 随生成请求附带的活动文件上下文
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileContext {
    pub name: String,
    pub content: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationResult {
    #[serde(default)]
    pub files: Vec<GeneratedFile>,
    #[serde(default)]
    pub description: String,
}

impl GenerationResult {
    /// 协作方失败时的约定形状：空文件列表，描述携带错误文本
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            files: Vec::new(),
            description: message.into(),
        }
    }

    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str(raw) {
            Ok(result) => result,
            Err(err) => {
                tracing::warn!(%err, "generation response was not valid JSON");
                Self::failure(format!("Failed to generate code. \n\nError: {err}"))
            }
        }
    }
}

/// 把用户请求包装成带活动文件上下文的完整提示
pub fn compose_prompt(message: &str, context: Option<&FileContext>) -> String {
    match context {
        Some(ctx) => format!(
            "CONTEXT: You are looking at the file \"{}\".\n\nCONTENT:\n```\n{}\n```\n\nUSER REQUEST: {}",
            ctx.name, ctx.content, message
        ),
        None => message.to_string(),
    }
}

pub trait CodeGenerator: Send + Sync {
    fn generate(
        &self,
        prompt: String,
        context: Option<FileContext>,
    ) -> BoxFuture<GenerationResult>;
}

/// 在 tokio 上执行一次生成，完成后把结果回送到内核总线
pub fn spawn_generation(
    handle: &tokio::runtime::Handle,
    generator: Arc<dyn CodeGenerator>,
    prompt: String,
    context: Option<FileContext>,
    bus: KernelBusSender,
) {
    handle.spawn(async move {
        let result = generator.generate(prompt, context).await;
        tracing::info!(files = result.files.len(), "generation finished");
        let _ = bus.send_action(Action::FilesGenerated {
            files: result.files,
            description: result.description,
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_prompt_without_context_is_the_message_itself() {
        assert_eq!(compose_prompt("build a game", None), "build a game");
    }

    #[test]
    fn compose_prompt_embeds_the_active_file() {
        let ctx = FileContext {
            name: "app.js".to_string(),
            content: "let x = 1;".to_string(),
        };
        let prompt = compose_prompt("make x 2", Some(&ctx));
        assert!(prompt.starts_with("CONTEXT: You are looking at the file \"app.js\"."));
        assert!(prompt.contains("let x = 1;"));
        assert!(prompt.ends_with("USER REQUEST: make x 2"));
    }

    #[test]
    fn from_json_parses_the_contract_shape() {
        let raw = r#"{
            "files": [
                { "path": "src/main.rs", "content": "fn main() {}", "language": "rust" },
                { "path": "Cargo.toml", "content": "[package]" }
            ],
            "description": "A rust project."
        }"#;

        let result = GenerationResult::from_json(raw);
        assert_eq!(result.files.len(), 2);
        assert_eq!(result.files[0].language.as_deref(), Some("rust"));
        assert_eq!(result.files[1].language, None);
        assert_eq!(result.description, "A rust project.");
    }

    #[test]
    fn from_json_folds_parse_errors_into_a_failure_result() {
        let result = GenerationResult::from_json("not json at all");
        assert!(result.files.is_empty());
        assert!(result.description.starts_with("Failed to generate code."));
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let result = GenerationResult::from_json("{}");
        assert!(result.files.is_empty());
        assert_eq!(result.description, "");
    }
}
