use crate::services::settings::Settings;
use crate::workspace::Workspace;

use super::chat::ChatState;
use super::console::ConsoleState;

/// 提交模拟里的工作区状态摘要（头部状态条使用）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitStatus {
    Clean,
    Modified,
}

impl GitStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Clean => "clean",
            Self::Modified => "modified",
        }
    }
}

#[derive(Default)]
pub struct AppState {
    pub workspace: Workspace,
    pub console: ConsoleState,
    pub chat: ChatState,
    pub settings: Settings,
    /// 最近一次构建出的预览文档
    pub preview: Option<String>,
}

impl AppState {
    pub fn git_status(&self) -> GitStatus {
        if self.workspace.has_uncommitted() {
            GitStatus::Modified
        } else {
            GitStatus::Clean
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn git_status_tracks_modified_files() {
        let mut state = AppState::default();
        assert_eq!(state.git_status(), GitStatus::Clean);
        assert_eq!(state.git_status().label(), "clean");

        state.workspace.create_file(None, "a.txt").unwrap();
        assert_eq!(state.git_status(), GitStatus::Modified);

        state.workspace.mark_all_committed();
        assert_eq!(state.git_status(), GitStatus::Clean);
    }
}
