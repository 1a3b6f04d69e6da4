//! 扩展名 → 语言标记 / 种子内容
//!
//! 纯函数，不依赖节点池，编辑器和图标逻辑共用。

use compact_str::CompactString;

/// 取最后一个 '.' 之后的小写后缀；无后缀或后缀为空时返回 None
pub fn extension_of(name: &str) -> Option<CompactString> {
    let (_, ext) = name.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    Some(CompactString::from(ext.to_lowercase()))
}

/// 文件的语言标记：扩展名本身，没有扩展名时退化为 "text"
pub fn language_tag(name: &str) -> CompactString {
    extension_of(name).unwrap_or_else(|| CompactString::const_new("text"))
}

/// 新建文件的种子内容；未知扩展名为空串
pub fn template_for(ext: &str) -> &'static str {
    match ext {
        "html" => {
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n    <meta charset=\"UTF-8\">\n    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n    <title>New Project</title>\n    <style>\n      body { font-family: sans-serif; padding: 20px; background: #f0f0f0; }\n    </style>\n</head>\n<body>\n    <h1>Hello World</h1>\n    <script>\n      console.log(\"App started\");\n    </script>\n</body>\n</html>"
        }
        "css" => {
            "body {\n    margin: 0;\n    padding: 0;\n    font-family: system-ui, -apple-system, sans-serif;\n}"
        }
        "js" => "console.log('Hello from JavaScript!');",
        "ts" => "const greeting: string = 'Hello TypeScript';\nconsole.log(greeting);",
        "json" => "{\n  \"name\": \"project\",\n  \"version\": \"1.0.0\"\n}",
        "jsx" => {
            "import React from 'react';\n\nexport default function App() {\n  return <h1>Hello React</h1>;\n}"
        }
        "tsx" => {
            "import React from 'react';\n\nexport default function App() {\n  return <h1>Hello React TS</h1>;\n}"
        }
        "py" => {
            "# Python Script\ndef main():\n    print(\"Hello from Python!\")\n\nif __name__ == \"__main__\":\n    main()"
        }
        "go" => {
            "package main\n\nimport \"fmt\"\n\nfunc main() {\n    fmt.Println(\"Hello from Go!\")\n}"
        }
        "rs" => "fn main() {\n    println!(\"Hello from Rust!\");\n}",
        "java" => {
            "public class Main {\n    public static void main(String[] args) {\n        System.out.println(\"Hello from Java!\");\n    }\n}"
        }
        "cpp" => {
            "#include <iostream>\n\nint main() {\n    std::cout << \"Hello from C++!\" << std::endl;\n    return 0;\n}"
        }
        "c" => {
            "#include <stdio.h>\n\nint main() {\n    printf(\"Hello from C!\\n\");\n    return 0;\n}"
        }
        "php" => "<?php\n\necho \"Hello from PHP!\";\n?>",
        "dart" => "void main() {\n  print('Hello from Dart!');\n}",
        "lua" => "print(\"Hello from Lua!\")",
        _ => "",
    }
}

/// 直接按文件名取种子内容
pub fn template_for_name(name: &str) -> &'static str {
    match extension_of(name) {
        Some(ext) => template_for(&ext),
        None => "",
    }
}

#[cfg(test)]
#[path = "../../tests/unit/workspace/language.rs"]
mod tests;
