//! HTML exporter for Pagecraft forests.
//!
//! Produces a standalone document with meta tags from the project settings,
//! and the SEO files that usually ship next to it.

mod compiler;
pub mod seo;


pub use compiler::{compile_page, compile_to_html, CompileError, CompileOptions};
pub use seo::{analyze, robots_txt, schema_markup, sitemap_xml, SchemaData, SeoReport};
