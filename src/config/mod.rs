//! Project configuration and serialization.

use serde::{Deserialize, Serialize};

use crate::geometry::Section;

fn default_project_name() -> String {
    "Untitled Wall".to_string()
}

fn default_sections() -> Vec<Section> {
    vec![Section::default()]
}

/// A saved wall layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "WallProject")]
pub struct ProjectConfig {
    /// Project name.
    #[serde(default = "default_project_name")]
    pub name: String,
    /// Sections in assembly order, left to right.
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: default_project_name(),
            sections: default_sections(),
        }
    }
}

impl ProjectConfig {
    /// Default layout under a given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn total_modules(&self) -> u64 {
        self.sections.iter().map(|s| s.module_count as u64).sum()
    }
}
