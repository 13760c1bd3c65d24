use rust_embed::Embed;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

/// Site content shipped inside the binary so the client and server render
/// from the same records without any fetch.
#[derive(Embed)]
#[folder = "data"]
pub struct Assets;

pub static PROJECTS: LazyLock<Vec<Project>> =
    LazyLock::new(|| load("projects.json").expect("Should be able to load project data"));
pub static SKILL_CATEGORIES: LazyLock<Vec<SkillCategory>> =
    LazyLock::new(|| load("skills.json").expect("Should be able to load skill data"));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub icon: String,
    pub skills: Vec<String>,
    pub color: String,
}

#[derive(Error, Debug, Clone)]
pub enum DataError {
    #[error("site data file not found: {0}")]
    NotFound(&'static str),
    #[error("couldn't parse site data {0}: {1}")]
    Parse(&'static str, String),
}

fn load<T: DeserializeOwned>(file: &'static str) -> Result<Vec<T>, DataError> {
    let asset = Assets::get(file).ok_or(DataError::NotFound(file))?;
    serde_json::from_slice(&asset.data).map_err(|e| DataError::Parse(file, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_projects_parse_in_order() {
        let projects: Vec<Project> = load("projects.json").expect("projects.json should parse");
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].name, "Placeholder");
        assert_eq!(projects[1].name, "Decentralized Task Manager");
        assert!(projects.iter().all(|p| !p.technologies.is_empty()));
        assert!(projects.iter().all(|p| !p.link.is_empty()));
    }

    #[test]
    fn sample_skills_parse() {
        let categories: Vec<SkillCategory> = load("skills.json").expect("skills.json should parse");
        assert_eq!(categories.len(), 6);
        assert!(categories.iter().all(|c| !c.skills.is_empty()));
        assert!(categories.iter().all(|c| c.color.starts_with("from-")));
    }

    #[test]
    fn statics_resolve_once() {
        assert_eq!(PROJECTS.len(), 2);
        assert_eq!(SKILL_CATEGORIES.len(), 6);
    }

    #[test]
    fn missing_file_is_a_typed_error() {
        let res: Result<Vec<Project>, _> = load("no-such-file.json");
        assert!(matches!(res, Err(DataError::NotFound(_))));
    }
}
