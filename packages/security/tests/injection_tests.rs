use pagecraft_security::*;

const HOSTILE: &[&str] = &[
    "<script>alert(1)</script>",
    "javascript:alert(1)",
    " JAVASCRIPT:alert(document.cookie)",
    "jav\nascript:alert(1)",
    "data:text/html,<script>alert(1)</script>",
    "vbscript:msgbox(1)",
    "<img src=x onerror=alert(1)>",
    "\"><svg onload=alert(1)>",
    "width:1px; } body{background:url('javascript:evil')}",
    "expression(alert(1))",
    "javajavascript:script:alert(1)",
    "&lt;already escaped&gt; & raw",
    "https://example.com/?q=<b>",
    "/relative/path",
    "",
];

#[test]
fn test_script_url_becomes_placeholder() {
    assert_eq!(sanitize_url("javascript:alert(1)"), "#");
}

#[test]
fn test_script_tag_leaves_no_tag_syntax() {
    let clean = sanitize_text("<script>alert(1)</script>");
    assert!(!clean.contains('<'));
    assert!(!clean.contains('>'));
    assert_eq!(clean, "alert(1)");
}

#[test]
fn test_css_breakout_loses_script_scheme() {
    let clean = sanitize_css("width:1px; } body{background:url('javascript:evil')}");
    assert!(!clean.contains("javascript:"));
}

#[test]
fn test_every_sanitizer_is_idempotent() {
    for input in HOSTILE {
        let text = sanitize_text(input);
        assert_eq!(sanitize_text(&text), text, "sanitize_text on {:?}", input);

        let html = sanitize_html(input);
        assert_eq!(sanitize_html(&html), html, "sanitize_html on {:?}", input);

        let url = sanitize_url(input);
        assert_eq!(sanitize_url(&url), url, "sanitize_url on {:?}", input);

        let css = sanitize_css(input);
        assert_eq!(sanitize_css(&css), css, "sanitize_css on {:?}", input);
    }
}

#[test]
fn test_escaped_html_has_no_markup_characters() {
    for input in HOSTILE {
        let html = sanitize_html(input);
        assert!(!html.contains('<') && !html.contains('>') && !html.contains('"'));
    }
}

#[test]
fn test_url_output_never_carries_a_foreign_scheme() {
    for input in HOSTILE {
        let url = sanitize_url(input).to_lowercase();
        assert!(
            url == "#" || url.starts_with("http") || url.starts_with('/'),
            "{:?} produced {:?}",
            input,
            url
        );
    }
}

#[test]
fn test_props_are_idempotent() {
    let props = serde_json::json!({
        "text": "<b>bold</b>",
        "href": "javascript:void(0)",
        "label": " Name ",
        "level": 2
    });
    let once = sanitize_props(props.as_object().unwrap());
    let twice = sanitize_props(&once);
    assert_eq!(once, twice);
}
