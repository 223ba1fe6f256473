use crate::context::{CompileOptions, CompilerContext};
use pagecraft_compiler_css::css_value;
use pagecraft_model::render_rules::{image_alt, image_src, input_type, label, link_href, placeholder};
use pagecraft_model::{count_nodes, render_rule, Component, Content, FieldControl, Style};
use pagecraft_security::{sanitize_text, sanitize_url};
use serde_json::Value;
use tracing::{debug, info, instrument};

/// Compile a forest to the source of one React function component
#[instrument(skip_all)]
pub fn compile_to_react(forest: &[Component], options: CompileOptions) -> String {
    let ctx = CompilerContext::new(options);

    ctx.add_line("import React from 'react';");
    ctx.add("\n");
    ctx.add_line(&format!(
        "export default function {}() {{",
        ctx.options.identifier()
    ));
    ctx.indent();
    ctx.add_line("return (");
    ctx.indent();
    ctx.add_line("<>");
    ctx.indent();

    for component in forest {
        compile_component(component, &ctx);
    }

    ctx.dedent();
    ctx.add_line("</>");
    ctx.dedent();
    ctx.add_line(");");
    ctx.dedent();
    ctx.add("}\n");

    let output = ctx.get_output();
    info!(nodes = count_nodes(forest), bytes = output.len(), "react export complete");
    output
}

fn compile_component(component: &Component, ctx: &CompilerContext) {
    let Some(rule) = render_rule(&component.kind) else {
        debug!(id = %component.id, "skipping component of unknown type");
        return;
    };

    let tag = rule.tag;
    let mut attrs = String::new();
    if let Some(class) = rule.class {
        attrs.push_str(&attribute("className", class));
    }
    let style = style_object(&component.style);

    match rule.content {
        Content::Children => {
            let children = component.rendered_children();
            if children.is_empty() {
                ctx.add_line(&format!("<{tag}{attrs}{style}></{tag}>"));
                return;
            }
            ctx.add_line(&format!("<{tag}{attrs}{style}>"));
            ctx.indent();
            for child in children {
                compile_component(child, ctx);
            }
            ctx.dedent();
            ctx.add_line(&format!("</{tag}>"));
        }

        Content::Text { .. } => {
            let text = jsx_text(&rule.text(component));
            ctx.add_line(&format!("<{tag}{attrs}{style}>{text}</{tag}>"));
        }

        Content::Link => {
            let href = attribute("href", &sanitize_url(&link_href(component)));
            let text = jsx_text(&rule.text(component));
            ctx.add_line(&format!("<{tag}{href}{attrs}{style}>{text}</{tag}>"));
        }

        Content::Image => {
            let src = attribute("src", &sanitize_url(&image_src(component)));
            let alt = attribute("alt", &sanitize_text(&image_alt(component)));
            ctx.add_line(&format!("<{tag}{src}{alt}{attrs}{style} />"));
        }

        Content::Field { control } => {
            ctx.add_line(&format!("<{tag}{attrs}{style}>"));
            ctx.indent();
            if let Some(label) = label(component) {
                ctx.add_line(&format!("<label>{}</label>", jsx_text(&label)));
            }
            let placeholder = attribute("placeholder", &sanitize_text(&placeholder(component)));
            match control {
                FieldControl::Input => {
                    let kind = attribute("type", &sanitize_text(&input_type(component)));
                    ctx.add_line(&format!("<input{kind}{placeholder} />"));
                }
                FieldControl::Textarea => {
                    ctx.add_line(&format!("<textarea{placeholder}></textarea>"));
                }
            }
            ctx.dedent();
            ctx.add_line(&format!("</{tag}>"));
        }

        Content::Void => ctx.add_line(&format!("<{tag}{attrs}{style} />")),
    }
}

/// Text child with JSX-significant characters turned into string expressions
fn jsx_text(value: &str) -> String {
    let clean = sanitize_text(value);
    let mut out = String::with_capacity(clean.len());
    for c in clean.chars() {
        match c {
            '{' | '}' | '<' | '>' => {
                out.push_str("{\"");
                out.push(c);
                out.push_str("\"}");
            }
            _ => out.push(c),
        }
    }
    out
}

/// ` name="value"`, or ` name={"value"}` when the value holds a quote or backslash
fn attribute(name: &str, value: &str) -> String {
    if value.contains('"') || value.contains('\\') {
        format!(" {}={{{}}}", name, Value::from(value))
    } else {
        format!(" {}=\"{}\"", name, value)
    }
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

fn js_single_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// ` style={{ fontSize: '12px', opacity: 0.9 }}` or nothing for an empty map
fn style_object(style: &Style) -> String {
    let entries: Vec<String> = style
        .iter()
        .filter_map(|(key, value)| {
            let rendered = match value {
                Value::Number(n) => n.to_string(),
                other => js_single_quoted(&css_value(other)?),
            };
            let key = if is_identifier(key) {
                key.clone()
            } else {
                js_single_quoted(key)
            };
            Some(format!("{}: {}", key, rendered))
        })
        .collect();

    if entries.is_empty() {
        String::new()
    } else {
        format!(" style={{{{ {} }}}}", entries.join(", "))
    }
}
