// Content store
//
// Loads the portfolio document once and hands out read-only views of it.
// Nothing in here ever writes back.

use crate::content::models::*;
use crate::error::{FolioError, Result};
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;

// Bundled document, used when nobody points us at a file
const DEFAULT_DOCUMENT: &str = include_str!("../../data/portfolio.json");

// Ids get typed after `view`, and the parser splits on whitespace
const PROJECT_ID_PATTERN: &str = r"^[A-Za-z0-9][A-Za-z0-9._-]*$";

#[derive(Debug)]
pub struct ContentStore {
    profile: Profile,
    skills: SkillSet,
    languages: Vec<SpokenLanguage>,
    experience: Vec<ExperienceEntry>,
    projects: Vec<Project>,
    project_index: HashMap<String, usize>,
    social: Vec<SocialLink>,
    commands: Vec<(String, CommandMeta)>,
}

impl ContentStore {
    /// Build a store from an already parsed document
    ///
    /// Lowercases command names and indexes projects by id.
    ///
    /// # Returns
    /// * `Err(FolioError::DuplicateProjectId)` - two projects share an id
    /// * `Err(FolioError::InvalidProjectId)` - an id has whitespace or odd characters
    /// * `Err(FolioError::InvalidContent)` - empty command table or blank profile name
    pub fn from_document(doc: PortfolioDocument) -> Result<Self> {
        if doc.whoami.name.trim().is_empty() {
            return Err(FolioError::InvalidContent("profile name is empty".to_string()));
        }
        if doc.commands.is_empty() {
            return Err(FolioError::InvalidContent(
                "command table is empty, nothing to type".to_string(),
            ));
        }

        let id_format = Regex::new(PROJECT_ID_PATTERN)
            .map_err(|e| FolioError::InvalidContent(e.to_string()))?;

        let mut project_index = HashMap::with_capacity(doc.projects.len());
        for (i, project) in doc.projects.iter().enumerate() {
            if !id_format.is_match(&project.id) {
                return Err(FolioError::InvalidProjectId(project.id.clone()));
            }
            if project_index.insert(project.id.clone(), i).is_some() {
                return Err(FolioError::DuplicateProjectId(project.id.clone()));
            }
        }

        let mut commands: Vec<(String, CommandMeta)> = Vec::with_capacity(doc.commands.len());
        for (name, meta) in doc.commands {
            let name = name.trim().to_lowercase();
            if commands.iter().any(|(existing, _)| *existing == name) {
                log::warn!("command '{}' is described twice, keeping the first", name);
                continue;
            }
            commands.push((name, meta));
        }

        log::info!(
            "loaded portfolio for {}: {} projects, {} commands",
            doc.whoami.name,
            doc.projects.len(),
            commands.len()
        );

        Ok(Self {
            profile: doc.whoami,
            skills: doc.skills,
            languages: doc.languages,
            experience: doc.experience,
            projects: doc.projects,
            project_index,
            social: doc.social,
            commands,
        })
    }

    /// Parse a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let doc: PortfolioDocument = serde_json::from_str(json)?;
        Self::from_document(doc)
    }

    /// Read and parse a JSON document from disk
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("reading portfolio from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The document compiled into the binary
    pub fn bundled() -> Result<Self> {
        Self::from_json(DEFAULT_DOCUMENT)
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn skills(&self) -> &SkillSet {
        &self.skills
    }

    pub fn languages(&self) -> &[SpokenLanguage] {
        &self.languages
    }

    pub fn experience(&self) -> &[ExperienceEntry] {
        &self.experience
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Look up a project by its exact id
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.project_index.get(id).map(|&i| &self.projects[i])
    }

    /// Project ids in source order
    pub fn project_ids(&self) -> impl Iterator<Item = &str> {
        self.projects.iter().map(|p| p.id.as_str())
    }

    pub fn social(&self) -> &[SocialLink] {
        &self.social
    }

    /// Command metadata in document order, names already lowercased
    pub fn commands(&self) -> &[(String, CommandMeta)] {
        &self.commands
    }

    pub fn command_meta(&self, name: &str) -> Option<&CommandMeta> {
        self.commands
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, meta)| meta)
    }
}
