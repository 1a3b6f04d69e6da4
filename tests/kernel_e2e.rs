use std::sync::Arc;
use std::time::Duration;

use acode::kernel::{kernel_bus, Action, AppState, Effect, KernelMessage, Store};
use acode::services::codegen::{
    spawn_generation, BoxFuture, CodeGenerator, FileContext, GenerationResult,
};
use acode::workspace::GeneratedFile;

struct CannedGenerator {
    result: GenerationResult,
}

impl CodeGenerator for CannedGenerator {
    fn generate(
        &self,
        _prompt: String,
        _context: Option<FileContext>,
    ) -> BoxFuture<GenerationResult> {
        let result = self.result.clone();
        Box::pin(async move { result })
    }
}

fn generated(path: &str, content: &str) -> GeneratedFile {
    GeneratedFile {
        path: path.to_string(),
        content: content.to_string(),
        language: None,
    }
}

#[tokio::test]
async fn chat_prompt_flows_through_generation_into_the_tree() {
    let (bus_tx, mut bus_rx) = kernel_bus();
    let mut store = Store::new(AppState::default());

    let result = store.dispatch(Action::ChatSubmit {
        prompt: "build a todo app".into(),
    });
    let Some(Effect::Generate { prompt, context }) = result.effects.into_iter().next() else {
        panic!("chat submit must request a generation");
    };
    assert_eq!(prompt, "build a todo app");
    assert!(context.is_none());

    let generator = Arc::new(CannedGenerator {
        result: GenerationResult {
            files: vec![
                generated("src/App.jsx", "export default function App() {}"),
                generated("src/index.css", "body {}"),
                generated("index.html", "<html><head></head><body></body></html>"),
            ],
            description: "Scaffolded a React project.".to_string(),
        },
    });
    spawn_generation(
        &tokio::runtime::Handle::current(),
        generator,
        prompt,
        context,
        bus_tx.clone(),
    );

    let msg = tokio::task::spawn_blocking(move || bus_rx.recv_timeout(Duration::from_secs(5)))
        .await
        .expect("join")
        .expect("generation should answer on the bus");
    let KernelMessage::Action(action) = msg;
    store.dispatch(action);

    let ws = &store.state().workspace;
    let src = ws.child_named(ws.root(), "src").unwrap();
    assert!(ws.child_named(src, "App.jsx").is_some());
    assert!(ws.child_named(src, "index.css").is_some());
    assert!(ws.child_named(ws.root(), "index.html").is_some());
    assert_eq!(
        store.state().chat.last_model_text(),
        Some("Scaffolded a React project.")
    );

    // 预览把生成的资源拼进 html 壳
    store.dispatch(Action::RunPreview);
    let preview = store.state().preview.as_deref().unwrap();
    assert!(preview.contains("<style>body {}</style>"));
}

#[tokio::test]
async fn collaborator_failure_reaches_the_chat_without_touching_the_tree() {
    let (bus_tx, mut bus_rx) = kernel_bus();
    let mut store = Store::new(AppState::default());

    let generator = Arc::new(CannedGenerator {
        result: GenerationResult::from_json("HTTP 502 Bad Gateway"),
    });
    spawn_generation(
        &tokio::runtime::Handle::current(),
        generator,
        "anything".to_string(),
        None,
        bus_tx.clone(),
    );

    let msg = tokio::task::spawn_blocking(move || bus_rx.recv_timeout(Duration::from_secs(5)))
        .await
        .expect("join")
        .expect("failure should still answer on the bus");
    let KernelMessage::Action(action) = msg;
    store.dispatch(action);

    assert_eq!(store.state().workspace.len(), 1);
    assert!(store
        .state()
        .chat
        .last_model_text()
        .unwrap()
        .starts_with("Failed to generate code."));
}

#[test]
fn console_session_builds_and_inspects_a_workspace() {
    let mut store = Store::new(AppState::default());
    let mut run = |line: &str| {
        store.dispatch(Action::ConsoleInput { line: line.into() });
    };

    run("touch src/index.js"); // src 还不存在
    run("mkdir src/components");
    run("touch src/components/Button.jsx");
    run("touch src/components/Button.jsx"); // 重复
    run("ls");

    let messages: Vec<&str> = store
        .state()
        .console
        .entries
        .iter()
        .map(|e| e.message.as_str())
        .collect();

    assert!(messages.contains(&"Error: Path 'src' does not exist."));
    assert!(messages.contains(&"Created directory: src/components"));
    assert!(messages.contains(&"Created file: src/components/Button.jsx"));
    assert!(messages.contains(&"Error: File 'Button.jsx' already exists."));
    assert_eq!(*messages.last().unwrap(), "src/");

    let ws = &store.state().workspace;
    let src = ws.child_named(ws.root(), "src").unwrap();
    let components = ws.child_named(src, "components").unwrap();
    assert_eq!(ws.child_count(components), 1);
}

#[test]
fn repeated_generation_updates_files_in_place() {
    let mut store = Store::new(AppState::default());

    store.dispatch(Action::FilesGenerated {
        files: vec![generated("game/main.lua", "print('v1')")],
        description: "v1".into(),
    });
    let ws = &store.state().workspace;
    let game = ws.child_named(ws.root(), "game").unwrap();
    let main = ws.child_named(game, "main.lua").unwrap();

    // 打开该文件再生成一次：id 不变，内容换新
    store.dispatch(Action::OpenFile { id: main });
    store.dispatch(Action::FilesGenerated {
        files: vec![generated("game/main.lua", "print('v2')")],
        description: "v2".into(),
    });

    let ws = &store.state().workspace;
    assert_eq!(ws.active(), Some(main));
    assert_eq!(ws.node(main).unwrap().content, "print('v2')");
    assert_eq!(ws.child_count(game), 1);
}
