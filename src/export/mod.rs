//! Loading and saving project files, exporting calculation results.
//!
//! Files ending in `.json` are JSON; anything else is treated as XML.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::config::ProjectConfig;
use crate::geometry::CalculationResult;

/// Errors that can occur while reading or writing files.
#[derive(Error, Debug)]
pub enum ProjectError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to parse XML: {0}")]
    XmlDe(String),
    #[error("Failed to write XML: {0}")]
    XmlSe(String),
}

/// On-disk document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Xml,
}

impl FileFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => FileFormat::Json,
            _ => FileFormat::Xml,
        }
    }

    fn encode<T: Serialize>(self, value: &T) -> Result<String, ProjectError> {
        match self {
            FileFormat::Json => Ok(serde_json::to_string_pretty(value)?),
            FileFormat::Xml => {
                quick_xml::se::to_string(value).map_err(|e| ProjectError::XmlSe(e.to_string()))
            }
        }
    }

    fn decode<T: DeserializeOwned>(self, contents: &str) -> Result<T, ProjectError> {
        match self {
            FileFormat::Json => Ok(serde_json::from_str(contents)?),
            FileFormat::Xml => {
                quick_xml::de::from_str(contents).map_err(|e| ProjectError::XmlDe(e.to_string()))
            }
        }
    }
}

/// Load a project file.
pub fn load_project(path: &Path) -> Result<ProjectConfig, ProjectError> {
    let contents = std::fs::read_to_string(path)?;
    let project: ProjectConfig = FileFormat::from_path(path).decode(&contents)?;

    if project.sections.is_empty() {
        log::warn!("Project {:?} has no sections", path);
    }
    log::info!(
        "Loaded project '{}' ({} sections, {} modules) from {:?}",
        project.name,
        project.sections.len(),
        project.total_modules(),
        path
    );
    Ok(project)
}

/// Save a project file.
pub fn save_project(project: &ProjectConfig, path: &Path) -> Result<(), ProjectError> {
    let contents = FileFormat::from_path(path).encode(project)?;
    std::fs::write(path, contents)?;
    log::info!("Saved project '{}' to {:?}", project.name, path);
    Ok(())
}

/// Export calculation results to JSON or XML.
pub struct ResultExporter;

impl ResultExporter {
    pub fn to_json(result: &CalculationResult) -> Result<String, ProjectError> {
        FileFormat::Json.encode(result)
    }

    pub fn to_xml(result: &CalculationResult) -> Result<String, ProjectError> {
        FileFormat::Xml.encode(result)
    }

    /// Write a result to `path`, format chosen by extension.
    pub fn export(result: &CalculationResult, path: &Path) -> Result<(), ProjectError> {
        let contents = FileFormat::from_path(path).encode(result)?;
        std::fs::write(path, contents)?;
        log::info!("Exported result ({} points) to {:?}", result.points.len(), path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{compute, Section};
    use std::path::PathBuf;

    fn temp_path(ext: &str) -> PathBuf {
        std::env::temp_dir().join(format!("ledwall-{}.{}", uuid::Uuid::new_v4(), ext))
    }

    fn sample_project() -> ProjectConfig {
        ProjectConfig {
            name: "Main stage".to_string(),
            sections: vec![Section::new(4, 5.0), Section::new(2, -2.5), Section::straight(3)],
        }
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(FileFormat::from_path(Path::new("wall.json")), FileFormat::Json);
        assert_eq!(FileFormat::from_path(Path::new("wall.JSON")), FileFormat::Json);
        assert_eq!(FileFormat::from_path(Path::new("wall.xml")), FileFormat::Xml);
        assert_eq!(FileFormat::from_path(Path::new("wall")), FileFormat::Xml);
    }

    #[test]
    fn test_project_json_file() {
        let path = temp_path("json");
        let project = sample_project();

        save_project(&project, &path).unwrap();
        let loaded = load_project(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, project);
    }

    #[test]
    fn test_project_xml_file() {
        let path = temp_path("ledwall");
        let project = sample_project();

        save_project(&project, &path).unwrap();
        let loaded = load_project(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, project);
    }

    #[test]
    fn test_missing_file() {
        let err = load_project(&temp_path("json")).unwrap_err();
        assert!(matches!(err, ProjectError::Io(_)));
    }

    #[test]
    fn test_malformed_json() {
        let path = temp_path("json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = load_project(&path).unwrap_err();
        std::fs::remove_file(&path).ok();

        assert!(matches!(err, ProjectError::Json(_)));
    }

    #[test]
    fn test_result_json() {
        let result = compute(&[Section::straight(2)]);
        let json = ResultExporter::to_json(&result).unwrap();

        assert!(json.contains("\"arcLength\": 100.0"));
        let parsed: CalculationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }

    #[test]
    fn test_result_xml() {
        let result = compute(&[Section::straight(2)]);
        let xml = ResultExporter::to_xml(&result).unwrap();

        assert!(xml.starts_with("<CalculationResult>"));
        assert!(xml.contains("<arcLength>"));
        assert_eq!(xml.matches("<points>").count(), 3);
    }

    #[test]
    fn test_result_xml_round_trip() {
        for result in [
            compute(&[Section::new(4, 5.0), Section::new(2, -2.5)]),
            compute(&[]),
        ] {
            let xml = ResultExporter::to_xml(&result).unwrap();
            let parsed: CalculationResult = quick_xml::de::from_str(&xml).unwrap();

            assert_eq!(parsed.points.len(), result.points.len());
            assert!((parsed.width - result.width).abs() < 1e-9);
            assert!((parsed.depth - result.depth).abs() < 1e-9);
            assert!((parsed.arc_length - result.arc_length).abs() < 1e-9);
            for (a, b) in parsed.points.iter().zip(&result.points) {
                assert!((a.x - b.x).abs() < 1e-9);
                assert!((a.y - b.y).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_export_to_file() {
        let path = temp_path("json");
        let result = compute(&[Section::new(3, -5.0)]);

        ResultExporter::export(&result, &path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert!(contents.contains("\"points\""));
    }
}
