//! Search-engine artifacts generated next to an HTML export.

use pagecraft_model::Project;
use pagecraft_security::sanitize_html;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_BASE_URL: &str = "https://example.com";

/// Meta descriptions shorter than this get a suggestion
const MIN_DESCRIPTION_LEN: usize = 120;

fn base(url: &str) -> &str {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_BASE_URL
    } else {
        trimmed
    }
}

/// `sitemap.xml` with one entry per page. The current page gets priority 1.0.
pub fn sitemap_xml(project: &Project, base_url: &str) -> String {
    let base_url = base(base_url);
    let current = project.current_page().map(|p| p.id.as_str());

    let entries: Vec<String> = project
        .pages
        .iter()
        .map(|page| {
            let priority = if Some(page.id.as_str()) == current { "1.0" } else { "0.8" };
            format!(
                "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    <changefreq>monthly</changefreq>\n    <priority>{}</priority>\n  </url>",
                sanitize_html(&format!("{}/{}", base_url, page.slug())),
                page.updated_at.format("%Y-%m-%d"),
                priority
            )
        })
        .collect();

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n{}\n</urlset>\n",
        entries.join("\n")
    )
}

pub fn robots_txt(base_url: &str) -> String {
    format!("User-agent: *\nAllow: /\n\nSitemap: {}/sitemap.xml\n", base(base_url))
}

/// Input for the JSON-LD block. Empty fields are left out of the markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaData {
    pub schema_type: String,
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

impl SchemaData {
    /// Organization schema prefilled from the project name and description
    pub fn from_project(project: &Project, url: Option<&str>) -> Self {
        let settings = project.settings();
        Self {
            schema_type: "Organization".to_string(),
            name: project.name.clone(),
            url: url.unwrap_or_default().to_string(),
            logo: String::new(),
            description: settings.site_description.unwrap_or_default(),
            address: String::new(),
            phone: String::new(),
            email: String::new(),
        }
    }
}

/// Pretty-printed schema.org JSON-LD object
pub fn schema_markup(data: &SchemaData) -> String {
    let mut schema = Map::new();
    schema.insert("@context".to_string(), Value::from("https://schema.org"));
    schema.insert("@type".to_string(), Value::from(data.schema_type.as_str()));
    schema.insert("name".to_string(), Value::from(data.name.as_str()));

    let optional = [
        ("url", &data.url),
        ("logo", &data.logo),
        ("description", &data.description),
        ("address", &data.address),
        ("telephone", &data.phone),
        ("email", &data.email),
    ];
    for (key, value) in optional {
        if !value.is_empty() {
            schema.insert(key.to_string(), Value::from(value.as_str()));
        }
    }

    format!("{:#}", Value::Object(schema))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoReport {
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
}

impl SeoReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty() && self.suggestions.is_empty()
    }
}

/// Check the project settings for missing or weak meta data
pub fn analyze(project: &Project, site_url: Option<&str>) -> SeoReport {
    let settings = project.settings();
    let present = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.trim().is_empty());
    let mut report = SeoReport::default();

    if !present(&settings.site_title) {
        report.issues.push("Missing site title".to_string());
    }
    match settings.site_description.as_deref().map(str::trim) {
        Some(description) if !description.is_empty() => {
            if description.chars().count() < MIN_DESCRIPTION_LEN {
                report
                    .suggestions
                    .push(format!("Meta description should be at least {} characters", MIN_DESCRIPTION_LEN));
            }
        }
        _ => report.issues.push("Missing meta description".to_string()),
    }
    if !present(&settings.favicon) {
        report.suggestions.push("Add a favicon for better branding".to_string());
    }
    if site_url.map_or(true, |url| url.trim().is_empty()) {
        report
            .suggestions
            .push("Add your website URL for schema markup".to_string());
    }

    report
}
