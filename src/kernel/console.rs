//! 内置命令行：help / clear / ls / mkdir / touch
//!
//! 只做「文本 → 工作区调用」的映射，不含任何树逻辑。

use std::time::{SystemTime, UNIX_EPOCH};

use crate::workspace::Workspace;

pub(crate) fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub timestamp_ms: u64,
}

#[derive(Debug, Default)]
pub struct ConsoleState {
    pub entries: Vec<LogEntry>,
    pub visible: bool,
}

impl ConsoleState {
    pub fn log(&mut self, level: LogLevel, message: impl Into<String>) {
        self.entries.push(LogEntry {
            level,
            message: message.into(),
            timestamp_ms: now_ms(),
        });
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Success, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// 执行一行命令：先回显 `$ line`，再追加输出
    pub fn execute(&mut self, workspace: &mut Workspace, line: &str) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }
        self.info(format!("$ {line}"));

        let mut tokens = line.split_whitespace();
        let verb = tokens.next().unwrap_or_default().to_lowercase();
        let param = tokens.next();

        match verb.as_str() {
            "help" => {
                self.info("Available commands: ls, mkdir <path>, touch <path>, clear, help");
            }
            "clear" => self.clear(),
            "ls" => {
                let listing = list_root(workspace);
                self.info(listing);
            }
            "mkdir" => {
                let reply = mkdir(workspace, param);
                self.log(reply.0, reply.1);
            }
            "touch" => {
                let reply = touch(workspace, param);
                self.log(reply.0, reply.1);
            }
            other => self.error(format!("command not found: {other}")),
        }
    }
}

fn list_root(workspace: &Workspace) -> String {
    let names: Vec<String> = workspace
        .children(workspace.root())
        .filter_map(|id| {
            let node = workspace.node(id)?;
            Some(if workspace.is_dir(id) {
                format!("{}/", node.name)
            } else {
                node.name.to_string()
            })
        })
        .collect();

    if names.is_empty() {
        "(empty directory)".to_string()
    } else {
        names.join("  ")
    }
}

/// 拆出末段名与前缀路径（"src/components" → ("components", "src")）
fn split_target(param: &str) -> (Option<&str>, String) {
    let mut segments: Vec<&str> = param.split('/').collect();
    let last = segments.pop().filter(|s| !s.is_empty());
    (last, segments.join("/"))
}

fn mkdir(workspace: &mut Workspace, param: Option<&str>) -> (LogLevel, String) {
    let Some(param) = param else {
        return (LogLevel::Error, "usage: mkdir <path/folder_name>".to_string());
    };

    let (name, prefix) = split_target(param);
    let Some(name) = name else {
        return (LogLevel::Error, "Error: Invalid folder name".to_string());
    };

    let parent = if prefix.is_empty() {
        workspace.root()
    } else {
        match workspace.resolve_path(&prefix, true) {
            Some(id) => id,
            None => {
                return (
                    LogLevel::Error,
                    format!("Error: Could not resolve path '{prefix}'"),
                );
            }
        }
    };

    if workspace.child_named(parent, name).is_some() {
        return (
            LogLevel::Error,
            format!("Error: '{name}' already exists at this path."),
        );
    }

    match workspace.create_folder(Some(parent), name) {
        Ok(_) => (LogLevel::Success, format!("Created directory: {param}")),
        Err(_) => (
            LogLevel::Error,
            format!("Failed to create directory: {param}"),
        ),
    }
}

fn touch(workspace: &mut Workspace, param: Option<&str>) -> (LogLevel, String) {
    let Some(param) = param else {
        return (LogLevel::Error, "usage: touch <path/file_name>".to_string());
    };

    let (name, prefix) = split_target(param);
    let Some(name) = name else {
        return (LogLevel::Error, "Error: Invalid file name".to_string());
    };

    // touch 不创建中间目录：父路径必须已存在
    let parent = if prefix.is_empty() {
        workspace.root()
    } else {
        match workspace.resolve_path(&prefix, false) {
            Some(id) => id,
            None => {
                return (
                    LogLevel::Error,
                    format!("Error: Path '{prefix}' does not exist."),
                );
            }
        }
    };

    if workspace.child_named(parent, name).is_some() {
        return (
            LogLevel::Error,
            format!("Error: File '{name}' already exists."),
        );
    }

    match workspace.create_file(Some(parent), name) {
        Ok(_) => (LogLevel::Success, format!("Created file: {param}")),
        Err(_) => (LogLevel::Error, format!("Failed to create file: {param}")),
    }
}
