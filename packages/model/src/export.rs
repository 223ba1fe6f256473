use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output format of an export, with its fixed download file name and MIME type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportTarget {
    Html,
    React,
    Vue,
}

impl ExportTarget {
    pub const ALL: [ExportTarget; 3] = [ExportTarget::Html, ExportTarget::React, ExportTarget::Vue];

    pub fn filename(self) -> &'static str {
        match self {
            ExportTarget::Html => "website.html",
            ExportTarget::React => "component.jsx",
            ExportTarget::Vue => "component.vue",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportTarget::Html => "text/html",
            ExportTarget::React => "text/javascript",
            ExportTarget::Vue => "text/plain",
        }
    }
}

impl fmt::Display for ExportTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportTarget::Html => "html",
            ExportTarget::React => "react",
            ExportTarget::Vue => "vue",
        };
        f.write_str(name)
    }
}

impl FromStr for ExportTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(ExportTarget::Html),
            "react" | "jsx" => Ok(ExportTarget::React),
            "vue" => Ok(ExportTarget::Vue),
            other => Err(format!("Unknown export target: {}", other)),
        }
    }
}
