//! 静态预览构建：HTML 壳 + 内联 <style>/<script>
//!
//! 不是构建系统：只把工作区里的 css/js/ts 文件拼进第一个 html 文件。

use crate::workspace::Workspace;

const DEFAULT_SHELL: &str = "<!DOCTYPE html><html><head><title>Preview</title></head><body><div id=\"root\"></div></body></html>";

pub fn build_preview(workspace: &Workspace) -> String {
    let mut html: Option<&str> = None;
    let mut styles = String::new();
    let mut scripts = String::new();

    for id in workspace.files() {
        let Some(node) = workspace.node(id) else {
            continue;
        };
        let name = node.name.to_lowercase();
        if name.ends_with(".html") {
            if html.is_none() {
                html = Some(&node.content);
            }
        } else if name.ends_with(".css") {
            if !styles.is_empty() {
                styles.push('\n');
            }
            styles.push_str(&format!("<style>{}</style>", node.content));
        } else if name.ends_with(".js") || name.ends_with(".ts") {
            if !scripts.is_empty() {
                scripts.push('\n');
            }
            scripts.push_str(&format!("<script>{}</script>", node.content));
        }
    }

    let shell = html.unwrap_or(DEFAULT_SHELL);
    let with_styles = shell.replacen("</head>", &format!("{styles}</head>"), 1);
    with_styles.replacen("</body>", &format!("{scripts}</body>"), 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workspace::NodeId;

    fn put(ws: &mut Workspace, name: &str, content: &str) -> NodeId {
        let id = ws.create_file(None, name).unwrap();
        ws.update_file_content(id, content);
        id
    }

    #[test]
    fn empty_workspace_gets_the_default_shell() {
        let ws = Workspace::new();
        let doc = build_preview(&ws);
        assert!(doc.contains("<div id=\"root\"></div>"));
        assert!(doc.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn css_and_js_are_inlined_into_the_html_shell() {
        let mut ws = Workspace::new();
        put(
            &mut ws,
            "index.html",
            "<html><head></head><body><p>hi</p></body></html>",
        );
        put(&mut ws, "style.css", "p { color: red; }");
        put(&mut ws, "app.js", "console.log('go');");

        let doc = build_preview(&ws);
        assert!(doc.contains("<style>p { color: red; }</style></head>"));
        assert!(doc.contains("<script>console.log('go');</script></body>"));
        assert!(doc.contains("<p>hi</p>"));
    }

    #[test]
    fn nested_assets_are_found_and_ts_counts_as_script() {
        let mut ws = Workspace::new();
        let src = ws.create_folder(None, "src").unwrap();
        let app = ws.create_file(Some(src), "app.ts").unwrap();
        ws.update_file_content(app, "let x = 1;");

        let doc = build_preview(&ws);
        assert!(doc.contains("<script>let x = 1;</script>"));
    }

    #[test]
    fn only_the_first_html_file_becomes_the_shell() {
        let mut ws = Workspace::new();
        put(&mut ws, "a.html", "<html><head></head><body>A</body></html>");
        put(&mut ws, "b.html", "<html><head></head><body>B</body></html>");

        let doc = build_preview(&ws);
        assert!(doc.contains(">A<") || doc.contains("A</body>"));
        assert!(!doc.contains("B</body>"));
    }
}
