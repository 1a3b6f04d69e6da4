use crate::services::codegen::FileContext;
use crate::services::settings::Settings;
use crate::workspace::{GeneratedFile, NodeId, Workspace};

#[derive(Debug, Clone)]
pub enum Action {
    CreateFile {
        parent: Option<NodeId>,
        name: String,
    },
    CreateFolder {
        parent: Option<NodeId>,
        name: String,
    },
    RenameNode {
        id: NodeId,
        name: String,
    },
    DeleteNode {
        id: NodeId,
    },
    ToggleFolder {
        id: NodeId,
    },
    OpenFile {
        id: NodeId,
    },
    CloseFile,
    UpdateFileContent {
        id: NodeId,
        content: String,
    },
    Commit {
        message: String,
    },
    ResetWorkspace,
    ConsoleInput {
        line: String,
    },
    ConsoleToggle,
    ChatSubmit {
        prompt: String,
    },
    FilesGenerated {
        files: Vec<GeneratedFile>,
        description: String,
    },
    RunPreview,
    UpdateSettings {
        settings: Settings,
    },
}

/// 提交生成请求时随效果携带的活动文件上下文
pub fn active_context(workspace: &Workspace) -> Option<FileContext> {
    let node = workspace.active_node()?;
    Some(FileContext {
        name: node.name.to_string(),
        content: node.content.clone(),
    })
}
