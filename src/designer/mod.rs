//! Wall designer: the editable section list behind a calculation.
//!
//! Rows carry a stable [`SectionId`] so individual sections can be edited or
//! removed. Every edit drops the last result; [`WallDesigner::calculate`]
//! produces a fresh one from the current rows.

mod input;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::config::ProjectConfig;
use crate::geometry::{self, CalculationResult, Section, MODULE_WIDTH_CM};

pub use input::{
    coerce_module_count, parse_angle, snap_angle, ANGLE_SLIDER_MAX, ANGLE_SLIDER_MIN,
    ANGLE_SLIDER_STEP, MIN_MODULE_COUNT,
};

/// Unique identifier for a section row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SectionId(pub Uuid);

impl SectionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors from editing the section list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DesignError {
    #[error("No section with id {0}")]
    UnknownSection(SectionId),
}

/// One editable row.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionRow {
    pub id: SectionId,
    pub section: Section,
}

impl SectionRow {
    fn new(section: Section) -> Self {
        Self {
            id: SectionId::new(),
            section,
        }
    }
}

/// Editable wall layout plus its most recent calculation.
#[derive(Debug, Clone)]
pub struct WallDesigner {
    rows: Vec<SectionRow>,
    result: Option<CalculationResult>,
}

impl Default for WallDesigner {
    fn default() -> Self {
        Self {
            rows: vec![SectionRow::new(Section::default())],
            result: None,
        }
    }
}

impl WallDesigner {
    /// Start with the default layout (one section of five modules at 5°).
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing sections. An empty list falls back to the default layout.
    ///
    /// Module counts below [`MIN_MODULE_COUNT`] are raised to it, as with edits.
    pub fn from_sections(sections: impl IntoIterator<Item = Section>) -> Self {
        let rows: Vec<SectionRow> = sections
            .into_iter()
            .map(|s| Section::new(s.module_count.max(MIN_MODULE_COUNT), s.angle_per_module))
            .map(SectionRow::new)
            .collect();
        if rows.is_empty() {
            return Self::default();
        }
        Self { rows, result: None }
    }

    pub fn from_project(project: &ProjectConfig) -> Self {
        Self::from_sections(project.sections.iter().copied())
    }

    /// Snapshot the current rows into a project document.
    pub fn to_project(&self, name: impl Into<String>) -> ProjectConfig {
        ProjectConfig {
            name: name.into(),
            sections: self.sections(),
        }
    }

    pub fn rows(&self) -> &[SectionRow] {
        &self.rows
    }

    /// Sections in assembly order.
    pub fn sections(&self) -> Vec<Section> {
        self.rows.iter().map(|r| r.section).collect()
    }

    /// Last calculation, if nothing was edited since.
    pub fn result(&self) -> Option<&CalculationResult> {
        self.result.as_ref()
    }

    /// Append a straight single-module section and return its id.
    pub fn add_section(&mut self) -> SectionId {
        let row = SectionRow::new(Section::straight(1));
        let id = row.id;
        self.rows.push(row);
        self.result = None;
        log::debug!("Added section {} ({} total)", id, self.rows.len());
        id
    }

    /// Remove a section. The last remaining section cannot be removed;
    /// returns whether a row was removed.
    pub fn remove_section(&mut self, id: SectionId) -> Result<bool, DesignError> {
        let index = self.index_of(id)?;
        if self.rows.len() <= 1 {
            log::debug!("Refusing to remove the only section {}", id);
            return Ok(false);
        }

        self.rows.remove(index);
        self.result = None;
        Ok(true)
    }

    /// Set the module count, clamped to at least one.
    pub fn set_module_count(&mut self, id: SectionId, count: u32) -> Result<(), DesignError> {
        let row = self.row_mut(id)?;
        row.section.module_count = count.max(MIN_MODULE_COUNT);
        self.result = None;
        Ok(())
    }

    /// Set the module count from raw text, see [`coerce_module_count`].
    pub fn set_module_count_text(&mut self, id: SectionId, text: &str) -> Result<(), DesignError> {
        self.set_module_count(id, coerce_module_count(text))
    }

    pub fn set_angle(&mut self, id: SectionId, angle: f64) -> Result<(), DesignError> {
        let row = self.row_mut(id)?;
        row.section.angle_per_module = angle;
        self.result = None;
        Ok(())
    }

    /// Set the angle from raw text. Unparseable text leaves the angle unchanged.
    pub fn set_angle_text(&mut self, id: SectionId, text: &str) -> Result<(), DesignError> {
        match parse_angle(text) {
            Some(angle) => self.set_angle(id, angle),
            None => {
                self.index_of(id)?;
                log::debug!("Ignoring angle input '{}' for section {}", text, id);
                Ok(())
            }
        }
    }

    /// Set the angle from the slider, snapped to its step and range.
    pub fn set_angle_from_slider(&mut self, id: SectionId, value: f64) -> Result<(), DesignError> {
        self.set_angle(id, snap_angle(value))
    }

    /// Compute the outline for the current rows and keep it as the result.
    pub fn calculate(&mut self) -> &CalculationResult {
        let result = geometry::compute(&self.sections());
        log::info!(
            "Calculated {} sections: width {:.2} cm, depth {:.2} cm, arc {:.2} cm",
            self.rows.len(),
            result.width,
            result.depth,
            result.arc_length
        );
        self.result.insert(result)
    }

    /// Back to the default layout, discarding the result.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn total_modules(&self) -> u64 {
        self.rows.iter().map(|r| r.section.module_count as u64).sum()
    }

    /// Total arc length in centimeters, available without calculating.
    pub fn total_arc_length(&self) -> f64 {
        self.total_modules() as f64 * MODULE_WIDTH_CM
    }

    fn index_of(&self, id: SectionId) -> Result<usize, DesignError> {
        self.rows
            .iter()
            .position(|r| r.id == id)
            .ok_or(DesignError::UnknownSection(id))
    }

    fn row_mut(&mut self, id: SectionId) -> Result<&mut SectionRow, DesignError> {
        self.rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(DesignError::UnknownSection(id))
    }
}
