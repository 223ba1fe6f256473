//! # Pagecraft Model
//!
//! The component tree every other Pagecraft crate works on.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: Project → Page → forest of Component │
//! │  - pure tree ops (find/add/update/delete)   │
//! │  - clone with fresh ids, templates          │
//! │  - per-type render rules                    │
//! └─────────────────────────────────────────────┘
//!          ↓                         ↓
//! ┌──────────────────┐   ┌─────────────────────┐
//! │ editor: session, │   │ compilers: html,    │
//! │ history, storage │   │ react, vue          │
//! └──────────────────┘   └─────────────────────┘
//! ```
//!
//! Tree operations never modify their input forest. A missing target id is
//! a no-op for the plain functions; the `try_*` variants report it.
//!
//! ```rust
//! use pagecraft_model::{add_component, create_component, find_component_by_id, ComponentType};
//!
//! let section = create_component(ComponentType::Section);
//! let section_id = section.id.clone();
//! let forest = add_component(&[], None, section);
//! let forest = add_component(&forest, Some(&section_id), create_component(ComponentType::Heading));
//!
//! assert_eq!(find_component_by_id(&forest, &section_id).unwrap().children.len(), 1);
//! ```

pub mod component;
pub mod error;
pub mod export;
pub mod id_generator;
pub mod instantiate;
pub mod project;
pub mod render_rules;
pub mod templates;
pub mod tree;
pub mod visitor;

pub use component::*;
pub use error::*;
pub use export::ExportTarget;
pub use id_generator::{generate_id, IdGenerator};
pub use instantiate::{clone_with_fresh_ids, clone_with_ids, regenerate_ids};
pub use project::{Page, Project, ProjectSettings};
pub use render_rules::{render_rule, Content, FieldControl, RenderRule};
pub use templates::{instantiate_template, templates, templates_by_category, Template};
pub use tree::*;
pub use visitor::*;
