use super::action::active_context;
use super::preview::build_preview;
use super::{Action, AppState, Effect};
use crate::workspace::MergeApplied;

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn changed(changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed: changed,
        }
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        let AppState {
            workspace,
            console,
            chat,
            ..
        } = &mut self.state;

        match action {
            Action::CreateFile { parent, name } => {
                match workspace.create_file(parent, &name) {
                    Ok(_) => console.success(format!("Created file: {name}")),
                    Err(err) => {
                        tracing::warn!(%name, %err, "create file refused");
                        console.error(format!("Failed to create file \"{name}\". Check duplicates."));
                    }
                }
                DispatchResult::changed(true)
            }
            Action::CreateFolder { parent, name } => {
                match workspace.create_folder(parent, &name) {
                    Ok(_) => console.success(format!("Created folder: {name}")),
                    Err(err) => {
                        tracing::warn!(%name, %err, "create folder refused");
                        console
                            .error(format!("Failed to create folder \"{name}\". Check duplicates."));
                    }
                }
                DispatchResult::changed(true)
            }
            Action::RenameNode { id, name } => {
                match workspace.rename(id, &name) {
                    Ok(()) => console.success(format!("Renamed to: {name}")),
                    Err(err) => {
                        tracing::warn!(%name, %err, "rename refused");
                        console.error(format!("Failed to rename to \"{name}\"."));
                    }
                }
                DispatchResult::changed(true)
            }
            Action::DeleteNode { id } => {
                let existed = id != workspace.root() && workspace.node(id).is_some();
                workspace.delete(id);
                if existed {
                    console.info("Item deleted.");
                }
                DispatchResult::changed(existed)
            }
            Action::ToggleFolder { id } => {
                DispatchResult::changed(workspace.toggle_expanded(id))
            }
            Action::OpenFile { id } => DispatchResult::changed(workspace.set_active(Some(id))),
            Action::CloseFile => DispatchResult::changed(workspace.set_active(None)),
            Action::UpdateFileContent { id, content } => {
                DispatchResult::changed(workspace.update_file_content(id, &content))
            }
            Action::Commit { message } => {
                workspace.mark_all_committed();
                console.success(format!("Committed: \"{message}\""));
                DispatchResult::changed(true)
            }
            Action::ResetWorkspace => {
                workspace.reset();
                console.info("Workspace reset.");
                DispatchResult::changed(true)
            }
            Action::ConsoleInput { line } => {
                let before = console.entries.len();
                console.execute(workspace, &line);
                DispatchResult::changed(console.entries.len() != before)
            }
            Action::ConsoleToggle => {
                console.toggle();
                DispatchResult::changed(true)
            }
            Action::ChatSubmit { prompt } => {
                let context = active_context(workspace);
                chat.push_user(prompt.clone());
                DispatchResult {
                    effects: vec![Effect::Generate { prompt, context }],
                    state_changed: true,
                }
            }
            Action::FilesGenerated { files, description } => {
                console.info("AI updating workspace...");
                let outcomes = workspace.merge_all(files);
                let skipped = outcomes
                    .iter()
                    .filter(|o| o.applied == MergeApplied::Skipped)
                    .count();
                tracing::info!(
                    applied = outcomes.len() - skipped,
                    skipped,
                    "generated batch merged"
                );
                console.success("AI build complete.");
                chat.push_model(description);
                DispatchResult::changed(true)
            }
            Action::RunPreview => {
                console.info("Building project...");
                let document = build_preview(workspace);
                console.success("Build successful. Launching preview.");
                self.state.preview = Some(document);
                DispatchResult::changed(true)
            }
            Action::UpdateSettings { settings } => {
                self.state.settings = settings.clone();
                DispatchResult {
                    effects: vec![Effect::SaveSettings(settings)],
                    state_changed: true,
                }
            }
        }
    }
}
