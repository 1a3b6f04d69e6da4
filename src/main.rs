use std::io::{self, BufRead, Write};

use acode::kernel::{Action, AppState, Store};
use acode::services::settings;
use acode::workspace::Workspace;

fn print_prompt() -> io::Result<()> {
    print!("> ");
    io::stdout().flush()
}

fn print_tree(workspace: &Workspace) {
    let rows = workspace.visible_rows();
    if rows.is_empty() {
        println!("(empty workspace)");
        return;
    }
    for row in rows {
        let indent = "  ".repeat(row.depth.saturating_sub(1) as usize);
        let suffix = if row.is_dir { "/" } else { "" };
        println!("{indent}{}{suffix}", row.name);
    }
}

fn main() -> io::Result<()> {
    let _logging = acode::logging::init();

    let mut state = AppState::default();
    state.settings = settings::load_settings();
    let mut store = Store::new(state);

    println!("acode console — 'help' for commands, ':tree' to print the workspace, ':quit' to exit");
    print_prompt()?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();

        match trimmed {
            ":quit" | ":exit" => break,
            ":tree" => print_tree(&store.state().workspace),
            _ => {
                let seen = store.state().console.entries.len();
                store.dispatch(Action::ConsoleInput {
                    line: trimmed.to_string(),
                });
                if let Some(fresh) = store.state().console.entries.get(seen..) {
                    // 跳过回显行，只打印命令输出
                    for entry in fresh.iter().skip(1) {
                        println!("{}", entry.message);
                    }
                }
            }
        }
        print_prompt()?;
    }

    Ok(())
}
