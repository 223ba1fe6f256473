use pagecraft_compiler_css::{animation_inline, inline_style, keyframes_for};
use pagecraft_model::render_rules::{image_alt, image_src, input_type, label, link_href, placeholder};
use pagecraft_model::{
    count_nodes, render_rule, AnimationTrigger, Component, Content, FieldControl, Project,
    ProjectSettings,
};
use pagecraft_security::{sanitize_html, sanitize_text, sanitize_url};
use thiserror::Error;
use tracing::{debug, info, instrument};

const DEFAULT_TITLE: &str = "Generated Website";
const DEFAULT_TWITTER_CARD: &str = "summary_large_image";

const BASE_STYLES: [&str; 6] = [
    "body {",
    "  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;",
    "  max-width: 1200px;",
    "  margin: 0 auto;",
    "  padding: 20px;",
    "}",
];

/// Errors that can occur during HTML compilation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error("Page not found: {0}")]
    PageNotFound(String),
}

/// Options for HTML compilation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Put every body element on its own indented line
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
    /// Emit keyframes and on-load animation declarations
    pub include_animations: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            pretty: false,
            indent: "  ".to_string(),
            include_animations: true,
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

    /// Body content: one line per element only when pretty printing
    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    /// Document skeleton lines are always formatted
    fn line(&mut self, text: &str) {
        if text.is_empty() {
            self.add("\n");
            return;
        }
        self.add_indent();
        self.add(text);
        self.add("\n");
    }

    fn add_indent(&mut self) {
        let indent = self.options.indent.clone();
        for _ in 0..self.depth {
            self.add(&indent);
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Compile a page of `project` (by id or name, current page when `None`)
pub fn compile_page(
    project: &Project,
    page: Option<&str>,
    options: CompileOptions,
) -> Result<String, CompileError> {
    let page = match page {
        Some(id_or_name) => project
            .find_page(id_or_name)
            .ok_or_else(|| CompileError::PageNotFound(id_or_name.to_string()))?,
        None => project
            .current_page()
            .ok_or_else(|| CompileError::PageNotFound(project.current_page_id.clone()))?,
    };
    Ok(compile_to_html(&page.components, project, options))
}

/// Compile a forest into a standalone HTML document.
///
/// Head meta tags come from the project settings; the body is the forest.
#[instrument(skip_all)]
pub fn compile_to_html(forest: &[Component], project: &Project, options: CompileOptions) -> String {
    let mut ctx = Context::new(options);

    ctx.line("<!DOCTYPE html>");
    ctx.line("<html lang=\"en\">");
    compile_head(forest, project, &mut ctx);

    ctx.line("<body>");
    if !forest.is_empty() {
        ctx.indent();
        if !ctx.options.pretty {
            ctx.add_indent();
        }
        for component in forest {
            compile_component(component, &mut ctx);
        }
        if !ctx.options.pretty {
            ctx.add("\n");
        }
        ctx.dedent();
    }
    ctx.line("</body>");
    ctx.line("</html>");

    let output = ctx.get_output();
    info!(nodes = count_nodes(forest), bytes = output.len(), "html export complete");
    output
}

fn meta_value(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(sanitize_text)
        .filter(|v| !v.is_empty())
        .map(|v| sanitize_html(&v))
}

fn meta_url(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .map(|v| sanitize_html(&sanitize_url(v)))
}

fn compile_head(forest: &[Component], project: &Project, ctx: &mut Context) {
    let settings: ProjectSettings = project.settings();
    let title = meta_value(&settings.site_title)
        .or_else(|| meta_value(&Some(project.name.clone())))
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());
    let description = meta_value(&settings.site_description);

    ctx.line("<head>");
    ctx.indent();

    ctx.line("<meta charset=\"UTF-8\">");
    ctx.line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    ctx.line(&format!("<title>{}</title>", title));

    if let Some(description) = &description {
        ctx.line(&format!("<meta name=\"description\" content=\"{}\">", description));
    }
    if let Some(keywords) = meta_value(&settings.site_keywords) {
        ctx.line(&format!("<meta name=\"keywords\" content=\"{}\">", keywords));
    }
    if let Some(favicon) = meta_url(&settings.favicon) {
        ctx.line(&format!("<link rel=\"icon\" href=\"{}\">", favicon));
    }

    let og_title = meta_value(&settings.og_title).unwrap_or_else(|| title.clone());
    ctx.line(&format!("<meta property=\"og:title\" content=\"{}\">", og_title));
    if let Some(og_description) = meta_value(&settings.og_description).or(description) {
        ctx.line(&format!(
            "<meta property=\"og:description\" content=\"{}\">",
            og_description
        ));
    }
    if let Some(og_image) = meta_url(&settings.og_image) {
        ctx.line(&format!("<meta property=\"og:image\" content=\"{}\">", og_image));
    }
    let card = meta_value(&settings.twitter_card).unwrap_or_else(|| DEFAULT_TWITTER_CARD.to_string());
    ctx.line(&format!("<meta name=\"twitter:card\" content=\"{}\">", card));

    ctx.line("<style>");
    ctx.indent();
    for rule in BASE_STYLES {
        ctx.line(rule);
    }
    if ctx.options.include_animations {
        let keyframes = keyframes_for(forest);
        if !keyframes.is_empty() {
            ctx.line("");
            for line in keyframes.lines() {
                ctx.line(line);
            }
        }
    }
    ctx.dedent();
    ctx.line("</style>");

    ctx.dedent();
    ctx.line("</head>");
}

/// ` style="..."` or nothing for an unstyled, unanimated node
fn style_attribute(component: &Component, include_animations: bool) -> String {
    let mut style = inline_style(&component.style);

    if include_animations {
        if let Some(animation) = &component.animation {
            let on_load = matches!(animation.trigger, None | Some(AnimationTrigger::OnLoad));
            let declarations = animation_inline(animation);
            if on_load && !declarations.is_empty() {
                if !style.is_empty() {
                    style.push(' ');
                }
                style.push_str(&declarations);
            }
        }
    }

    if style.is_empty() {
        String::new()
    } else {
        format!(" style=\"{}\"", sanitize_html(&style))
    }
}

fn text(value: &str) -> String {
    sanitize_html(&sanitize_text(value))
}

fn url(value: &str) -> String {
    sanitize_html(&sanitize_url(value))
}

fn compile_component(component: &Component, ctx: &mut Context) {
    let Some(rule) = render_rule(&component.kind) else {
        debug!(id = %component.id, "skipping component of unknown type");
        return;
    };

    let tag = rule.tag;
    let style = style_attribute(component, ctx.options.include_animations);
    let class = rule
        .class
        .map(|class| format!(" class=\"{}\"", class))
        .unwrap_or_default();

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
            ctx.add_line(&format!("<img src=\"{src}\" alt=\"{alt}\"{class}{style} />"));
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
