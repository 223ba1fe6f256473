use crate::{compile_to_vue, CompileOptions};
use pagecraft_model::Forest;
use serde_json::json;

fn compile(value: serde_json::Value) -> String {
    let forest: Forest = serde_json::from_value(value).expect("valid forest");
    compile_to_vue(&forest, CompileOptions::default())
}

#[test]
fn test_sfc_sections() {
    assert_eq!(
        compile(json!([])),
        "<template>\n</template>\n\n<script setup>\n// Vue component logic\n</script>\n\n<style scoped>\n/* Component styles */\n</style>\n"
    );
}

#[test]
fn test_nested_structure_with_style_string() {
    let code = compile(json!([{
        "id": "s", "type": "section", "style": { "textAlign": "center", "padding": 8 },
        "children": [
            { "id": "h", "type": "heading", "props": { "text": "Hi" } },
            { "id": "b", "type": "button", "props": { "text": "Go" } }
        ]
    }]));

    assert!(code.contains(
        "  <section style=\"text-align: center; padding: 8;\">\n    <h1>Hi</h1>\n    <button>Go</button>\n  </section>\n"
    ));
}

#[test]
fn test_fallback_literals_match_html() {
    let code = compile(json!([
        { "id": "h", "type": "heading", "props": { "text": null } },
        { "id": "b", "type": "button" },
        { "id": "l", "type": "link", "props": { "href": "/about" } },
        { "id": "d", "type": "divider" }
    ]));

    assert!(code.contains("<h1>Heading</h1>"));
    assert!(code.contains("<button>Button</button>"));
    assert!(code.contains("<a href=\"/about\">Link</a>"));
    assert!(code.contains("<hr />"));
}

#[test]
fn test_mustache_is_not_interpolated() {
    let code = compile(json!([
        { "id": "t", "type": "text", "props": { "text": "{{ secret }} & more" } }
    ]));

    assert!(code.contains("<p>&#123;&#123; secret &#125;&#125; &amp; more</p>"));
    assert!(!code.contains("{{"));
}

#[test]
fn test_fields_and_card() {
    let code = compile(json!([{
        "id": "c", "type": "card",
        "children": [
            { "id": "i", "type": "input", "props": { "label": "Email", "type": "email" } },
            { "id": "t", "type": "textarea", "props": { "placeholder": "Say hi" } }
        ]
    }]));

    assert!(code.contains("  <div class=\"card\">\n"));
    assert!(code.contains("      <label>Email</label>\n      <input type=\"email\" placeholder=\"Enter text...\" />\n"));
    assert!(code.contains("      <textarea placeholder=\"Say hi\"></textarea>\n"));
    assert_eq!(code.matches("<label>").count(), 1);
}

#[test]
fn test_unsafe_urls_and_unknown_types() {
    let code = compile(json!([
        { "id": "i", "type": "image", "props": { "src": "javascript:alert(1)" } },
        { "id": "u", "type": "video" }
    ]));

    assert!(code.contains("<img src=\"#\" alt=\"Image\" />"));
    assert!(!code.contains("video"));
}

#[test]
fn test_custom_indent() {
    let forest: Forest = serde_json::from_value(json!([
        { "id": "s", "type": "section", "children": [{ "id": "d", "type": "divider" }] }
    ]))
    .unwrap();
    let code = compile_to_vue(&forest, CompileOptions { indent: "\t".to_string() });

    assert!(code.contains("\t<section>\n\t\t<hr />\n\t</section>\n"));
}
