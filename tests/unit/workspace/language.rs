use crate::workspace::language::{extension_of, language_tag, template_for, template_for_name};

#[test]
fn extension_of_takes_the_lowercased_suffix_after_the_last_dot() {
    let cases = [
        ("main.rs", Some("rs")),
        ("MAIN.RS", Some("rs")),
        ("archive.tar.gz", Some("gz")),
        (".gitignore", Some("gitignore")),
        ("trailing.", None),
        ("README", None),
        ("", None),
    ];

    for (name, expected) in cases {
        assert_eq!(
            extension_of(name).as_deref(),
            expected,
            "extension_of({name:?})"
        );
    }
}

#[test]
fn language_tag_falls_back_to_text() {
    let cases = [
        ("app.TSX", "tsx"),
        ("script.py", "py"),
        ("notes.weird", "weird"),
        ("Makefile", "text"),
        ("dot.", "text"),
    ];

    for (name, expected) in cases {
        assert_eq!(language_tag(name), expected, "language_tag({name:?})");
    }
}

#[test]
fn known_extensions_have_seed_templates() {
    let known = [
        "html", "css", "js", "ts", "json", "jsx", "tsx", "py", "go", "rs", "java", "cpp", "c",
        "php", "dart", "lua",
    ];

    for ext in known {
        assert!(!template_for(ext).is_empty(), "{ext} should have a template");
    }
    assert_eq!(template_for("txt"), "");
    assert_eq!(template_for("md"), "");
}

#[test]
fn template_for_name_goes_through_the_extension() {
    assert!(template_for_name("src/main.rs".rsplit('/').next().unwrap()).contains("fn main()"));
    assert!(template_for_name("index.HTML").contains("<!DOCTYPE html>"));
    assert_eq!(template_for_name("README"), "");
}
