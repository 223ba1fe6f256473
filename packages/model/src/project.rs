//! Pages and the project aggregate that owns them.

use crate::component::Forest;
use crate::error::ProjectError;
use crate::id_generator::generate_id;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub components: Forest,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Page {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: generate_id(),
            name: name.into(),
            components: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Lowercase, dash separated form of the name, used for URLs and file names
    pub fn slug(&self) -> String {
        let mut slug = String::new();
        for word in self
            .name
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
        {
            if !slug.is_empty() {
                slug.push('-');
            }
            slug.push_str(&word.to_lowercase());
        }
        slug
    }
}

/// SEO and meta fields consumed by the HTML exporter
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_keywords: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_card: Option<String>,
}

/// Aggregate root: every page of a site plus its settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub pages: Vec<Page>,
    pub current_page_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<ProjectSettings>,
}

impl Project {
    /// New project with a single "Home" page selected
    pub fn new(name: impl Into<String>) -> Self {
        let home = Page::new("Home");
        let now = Utc::now();
        Self {
            id: generate_id(),
            name: name.into(),
            current_page_id: home.id.clone(),
            pages: vec![home],
            created_at: now,
            updated_at: now,
            settings: None,
        }
    }

    pub fn page(&self, id: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == id)
    }

    pub fn page_mut(&mut self, id: &str) -> Option<&mut Page> {
        self.pages.iter_mut().find(|p| p.id == id)
    }

    /// The selected page, or the first page when the selection dangles.
    /// `None` only for a project without pages.
    pub fn current_page(&self) -> Option<&Page> {
        self.page(&self.current_page_id).or_else(|| self.pages.first())
    }

    pub fn current_page_mut(&mut self) -> Option<&mut Page> {
        let index = self
            .pages
            .iter()
            .position(|p| p.id == self.current_page_id)
            .unwrap_or(0);
        self.pages.get_mut(index)
    }

    /// Forest of the current page, empty for a project without pages
    pub fn current_components(&self) -> &[crate::component::Component] {
        self.current_page().map(|p| p.components.as_slice()).unwrap_or(&[])
    }

    /// Look a page up by id first, then by case-insensitive name
    pub fn find_page(&self, id_or_name: &str) -> Option<&Page> {
        self.page(id_or_name).or_else(|| {
            self.pages
                .iter()
                .find(|p| p.name.eq_ignore_ascii_case(id_or_name))
        })
    }

    /// Append a page and make it current. Returns the new page id.
    pub fn add_page(&mut self, name: &str) -> Result<String, ProjectError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ProjectError::EmptyName);
        }

        let page = Page::new(name);
        let id = page.id.clone();
        debug!(page_id = %id, name, "page added");
        self.pages.push(page);
        self.current_page_id = id.clone();
        self.touch();
        Ok(id)
    }

    pub fn delete_page(&mut self, id: &str) -> Result<(), ProjectError> {
        let index = self
            .pages
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| ProjectError::PageNotFound(id.to_string()))?;
        if self.pages.len() <= 1 {
            return Err(ProjectError::LastPage);
        }

        self.pages.remove(index);
        if self.current_page_id == id {
            self.current_page_id = self.pages[0].id.clone();
        }
        debug!(page_id = id, "page deleted");
        self.touch();
        Ok(())
    }

    pub fn rename_page(&mut self, id: &str, name: &str) -> Result<(), ProjectError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ProjectError::EmptyName);
        }

        let page = self
            .page_mut(id)
            .ok_or_else(|| ProjectError::PageNotFound(id.to_string()))?;
        page.name = name.to_string();
        page.updated_at = Utc::now();
        self.touch();
        Ok(())
    }

    pub fn select_page(&mut self, id: &str) -> Result<(), ProjectError> {
        if self.page(id).is_none() {
            return Err(ProjectError::PageNotFound(id.to_string()));
        }
        self.current_page_id = id.to_string();
        Ok(())
    }

    /// Replace a page's forest and bump both timestamps
    pub fn set_page_components(&mut self, id: &str, components: Forest) -> Result<(), ProjectError> {
        let page = self
            .page_mut(id)
            .ok_or_else(|| ProjectError::PageNotFound(id.to_string()))?;
        page.components = components;
        page.updated_at = Utc::now();
        self.touch();
        Ok(())
    }

    pub fn settings(&self) -> ProjectSettings {
        self.settings.clone().unwrap_or_default()
    }

    pub fn set_settings(&mut self, settings: ProjectSettings) {
        self.settings = Some(settings);
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
