use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern"));

static SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.\-]*:").expect("scheme pattern"));

static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^&(?:#[0-9]+|#[xX][0-9a-fA-F]+|[a-zA-Z][a-zA-Z0-9]*);").expect("entity pattern")
});

static DANGEROUS_CSS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)expression\s*\(",
        r"(?i)javascript\s*:",
        r"(?i)@import",
        r"(?i)behavior\s*:",
        r"(?i)-moz-binding",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("css pattern"))
    .collect()
});

const ALLOWED_SCHEMES: [&str; 4] = ["http", "https", "mailto", "tel"];

/// Strip anything shaped like an HTML tag, then trim
pub fn sanitize_text(text: &str) -> String {
    TAG.replace_all(text, "").trim().to_string()
}

/// Escape for HTML text content and quoted attribute values.
///
/// Existing character and entity references are kept as they are, so
/// escaping twice gives the same result as escaping once.
pub fn sanitize_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, c) in text.char_indices() {
        match c {
            '&' if ENTITY.is_match(&text[i..]) => out.push('&'),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Keep http(s)/mailto/tel URLs and `/`, `./`, `../` relative paths.
/// Everything else becomes `#`.
pub fn sanitize_url(url: &str) -> String {
    // Browsers drop tabs and newlines inside URLs, so `java\tscript:` is still a scheme
    let cleaned: String = url.chars().filter(|c| !matches!(c, '\t' | '\n' | '\r')).collect();
    let trimmed = cleaned.trim_matches(|c: char| c.is_control() || c == ' ');

    if let Some(scheme) = SCHEME.find(trimmed) {
        let name = trimmed[..scheme.end() - 1].to_ascii_lowercase();
        let rest = &trimmed[scheme.end()..];
        let allowed = ALLOWED_SCHEMES.contains(&name.as_str())
            && (!name.starts_with("http") || !rest.trim_start_matches('/').is_empty());

        return if allowed { trimmed.to_string() } else { "#".to_string() };
    }

    if trimmed.starts_with('/') || trimmed.starts_with("./") || trimmed.starts_with("../") {
        trimmed.to_string()
    } else {
        "#".to_string()
    }
}

/// Remove legacy script hooks from free-form CSS.
///
/// Stripping repeats until nothing matches, so fragments like
/// `javajavascript:script:` cannot reassemble into a live pattern.
pub fn sanitize_css(css: &str) -> String {
    let mut current = css.to_string();
    loop {
        let mut next = current.clone();
        for pattern in DANGEROUS_CSS.iter() {
            next = pattern.replace_all(&next, "").into_owned();
        }
        if next == current {
            return current;
        }
        current = next;
    }
}

fn is_url_key(key: &str) -> bool {
    matches!(key, "href" | "src" | "url")
}

/// Run every string prop through the matching sanitizer by key.
/// Non-string values are copied untouched.
pub fn sanitize_props(props: &Map<String, Value>) -> Map<String, Value> {
    props
        .iter()
        .map(|(key, value)| {
            let clean = match value {
                Value::String(s) if is_url_key(key) => Value::String(sanitize_url(s)),
                Value::String(s) => Value::String(sanitize_text(s)),
                other => other.clone(),
            };
            (key.clone(), clean)
        })
        .collect()
}
