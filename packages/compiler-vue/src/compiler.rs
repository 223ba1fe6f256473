use pagecraft_compiler_css::inline_style;
use pagecraft_model::render_rules::{image_alt, image_src, input_type, label, link_href, placeholder};
use pagecraft_model::{count_nodes, render_rule, Component, Content, FieldControl};
use pagecraft_security::{sanitize_html, sanitize_text, sanitize_url};
use tracing::{debug, info, instrument};

/// Options for Vue compilation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Indentation string for the template block
    pub indent: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            indent: "  ".to_string(),
        }
    }
}

struct Context {
    options: CompileOptions,
    depth: usize,
    buffer: String,
}

impl Context {
    fn new(options: CompileOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.options.indent);
        }
        self.add(text);
        self.add("\n");
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

/// Compile a forest to a Vue single-file component
#[instrument(skip_all)]
pub fn compile_to_vue(forest: &[Component], options: CompileOptions) -> String {
    let mut ctx = Context::new(options);

    ctx.add_line("<template>");
    ctx.indent();
    for component in forest {
        compile_component(component, &mut ctx);
    }
    ctx.dedent();
    ctx.add_line("</template>");
    ctx.add("\n");
    ctx.add_line("<script setup>");
    ctx.add_line("// Vue component logic");
    ctx.add_line("</script>");
    ctx.add("\n");
    ctx.add_line("<style scoped>");
    ctx.add_line("/* Component styles */");
    ctx.add_line("</style>");

    info!(nodes = count_nodes(forest), bytes = ctx.buffer.len(), "vue export complete");
    ctx.buffer
}

/// HTML escaping plus mustache braces, so user text is never interpolated
fn escape(value: &str) -> String {
    sanitize_html(value).replace('{', "&#123;").replace('}', "&#125;")
}

fn text(value: &str) -> String {
    escape(&sanitize_text(value))
}

fn url(value: &str) -> String {
    escape(&sanitize_url(value))
}

fn style_attribute(component: &Component) -> String {
    let style = inline_style(&component.style);
    if style.is_empty() {
        String::new()
    } else {
        format!(" style=\"{}\"", escape(&style))
    }
}

fn compile_component(component: &Component, ctx: &mut Context) {
    let Some(rule) = render_rule(&component.kind) else {
        debug!(id = %component.id, "skipping component of unknown type");
        return;
    };

    let tag = rule.tag;
    let class = rule
        .class
        .map(|class| format!(" class=\"{}\"", class))
        .unwrap_or_default();
    let style = style_attribute(component);

    match rule.content {
        Content::Children => {
            let children = component.rendered_children();
            if children.is_empty() {
                ctx.add_line(&format!("<{tag}{class}{style}></{tag}>"));
                return;
            }
            ctx.add_line(&format!("<{tag}{class}{style}>"));
            ctx.indent();
            for child in children {
                compile_component(child, ctx);
            }
            ctx.dedent();
            ctx.add_line(&format!("</{tag}>"));
        }

        Content::Text { .. } => {
            let content = text(&rule.text(component));
            ctx.add_line(&format!("<{tag}{class}{style}>{content}</{tag}>"));
        }

        Content::Link => {
            let href = url(&link_href(component));
            let content = text(&rule.text(component));
            ctx.add_line(&format!("<{tag} href=\"{href}\"{class}{style}>{content}</{tag}>"));
        }

        Content::Image => {
            let src = url(&image_src(component));
            let alt = text(&image_alt(component));
            ctx.add_line(&format!("<{tag} src=\"{src}\" alt=\"{alt}\"{class}{style} />"));
        }

        Content::Field { control } => {
            ctx.add_line(&format!("<{tag}{class}{style}>"));
            ctx.indent();
            if let Some(label) = label(component) {
                ctx.add_line(&format!("<label>{}</label>", text(&label)));
            }
            let placeholder = text(&placeholder(component));
            match control {
                FieldControl::Input => ctx.add_line(&format!(
                    "<input type=\"{}\" placeholder=\"{}\" />",
                    text(&input_type(component)),
                    placeholder
                )),
                FieldControl::Textarea => {
                    ctx.add_line(&format!("<textarea placeholder=\"{}\"></textarea>", placeholder))
                }
            }
            ctx.dedent();
            ctx.add_line(&format!("</{tag}>"));
        }

        Content::Void => ctx.add_line(&format!("<{tag}{class}{style} />")),
    }
}
