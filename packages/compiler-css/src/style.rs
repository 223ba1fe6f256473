use pagecraft_model::Style;
use pagecraft_security::sanitize_css;
use serde_json::Value;

/// `backgroundColor` → `background-color`
pub fn camel_to_kebab(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// `background-color` → `backgroundColor`
pub fn kebab_to_camel(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut chars = key.chars().peekable();
    while let Some(c) = chars.next() {
        match chars.peek() {
            Some(next) if c == '-' && next.is_ascii_lowercase() => {
                out.push(next.to_ascii_uppercase());
                chars.next();
            }
            _ => out.push(c),
        }
    }
    out
}

/// CSS text for a style value. Strings and numbers only; anything else has
/// no CSS form and yields `None`.
pub fn css_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(sanitize_css(s)),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Declarations of a style map as one inline `style` attribute value
pub fn inline_style(style: &Style) -> String {
    style
        .iter()
        .filter_map(|(key, value)| {
            css_value(value).map(|value| format!("{}: {};", camel_to_kebab(key), value))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One indented declaration per line, the form the style editor shows
pub fn style_to_css_text(style: &Style) -> String {
    style
        .iter()
        .filter_map(|(key, value)| {
            css_value(value).map(|value| format!("  {}: {};", camel_to_kebab(key), value))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse style editor text back into a camelCase style map.
///
/// Line based: each line holding a `:` is one declaration. Lines without
/// one are skipped. Values may contain further colons (`url(http://..)`).
pub fn parse_css_text(text: &str) -> Style {
    let clean = sanitize_css(text);
    let mut style = Style::new();

    for line in clean.lines() {
        let Some((key, value)) = line.trim().split_once(':') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        let value = value.trim();
        let value = value.strip_suffix(';').unwrap_or(value).trim_end();
        style.insert(kebab_to_camel(key), Value::String(value.to_string()));
    }

    style
}
