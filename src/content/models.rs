/// Data models for portfolio content
///
/// Mirrors the JSON document the terminal is fed at startup. Field names on
/// the wire are camelCase; a few are renamed to read better in Rust.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Who the portfolio belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub location: String,
    pub years_of_experience: u32,
}

/// How good someone is at a skill. Ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Expert => "Expert",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: SkillLevel,
    pub icon: String,
}

/// Skills grouped by category. Display order is the field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSet {
    #[serde(default)]
    pub frameworks: Vec<Skill>,
    #[serde(default)]
    pub languages: Vec<Skill>,
    #[serde(default)]
    pub databases: Vec<Skill>,
    #[serde(default)]
    pub tools: Vec<Skill>,
}

/// A human language, not a programming one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpokenLanguage {
    pub name: String,
    pub level: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub role: String,
    pub period: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Images,
    Video,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMedia {
    #[serde(rename = "type")]
    pub kind: MediaKind,
    #[serde(default)]
    pub items: Vec<String>,
}

/// Status value that counts as "done" when listing projects
pub const COMPLETED_STATUS: &str = "Completed";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub status: String,
    #[serde(rename = "github")]
    pub repository: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    pub media: ProjectMedia,
}

impl Project {
    /// Whether the status is the canonical completed value (case doesn't matter)
    pub fn is_completed(&self) -> bool {
        self.status.trim().eq_ignore_ascii_case(COMPLETED_STATUS)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    #[serde(rename = "username")]
    pub handle: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOption {
    pub flag: String,
    pub description: String,
}

/// What `help` says about a command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandMeta {
    pub description: String,
    pub usage: String,
    #[serde(default)]
    pub options: Vec<CommandOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

/// The whole content document as it sits on disk
#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioDocument {
    pub whoami: Profile,
    #[serde(default)]
    pub skills: SkillSet,
    #[serde(default)]
    pub languages: Vec<SpokenLanguage>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub social: Vec<SocialLink>,
    /// Kept in document order, that's the order `help` prints them in
    #[serde(deserialize_with = "ordered_commands")]
    pub commands: Vec<(String, CommandMeta)>,
}

// A plain HashMap would lose the document order, so walk the JSON object by hand.
fn ordered_commands<'de, D>(deserializer: D) -> std::result::Result<Vec<(String, CommandMeta)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct OrderedCommands;

    impl<'de> Visitor<'de> for OrderedCommands {
        type Value = Vec<(String, CommandMeta)>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of command name to command metadata")
        }

        fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((name, meta)) = map.next_entry::<String, CommandMeta>()? {
                entries.push((name, meta));
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(OrderedCommands)
}
