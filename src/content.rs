use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::{fmt, sync::LazyLock};
use thiserror::Error;

use crate::theme::Theme;

pub const SITE_FILE: &str = "site.json";

pub static SITE: LazyLock<SiteContent> = LazyLock::new(|| {
    SiteContent::load().expect("embedded site content should be valid")
});

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    Missing(String),
    #[error("couldn't parse site content: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Anchor key of a page section, e.g. `projects` for `<section id="projects">`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    pub id: SectionId,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub tagline: String,
    pub summary: String,
    pub email: String,
    pub linkedin: String,
    pub scene_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub period: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct About {
    pub paragraphs: Vec<String>,
    pub education: Education,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub organization: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    pub link: String,
}

impl ProjectEntry {
    /// External links open in a new tab; in-page anchors (`#`) don't.
    pub fn is_external(&self) -> bool {
        self.link.starts_with("http")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    #[serde(default)]
    pub theme: Theme,
    pub profile: Profile,
    pub nav: Vec<NavItem>,
    pub about: About,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub skills: Vec<SkillGroup>,
    pub contact_blurb: String,
}

impl SiteContent {
    pub fn load() -> Result<Self, ContentError> {
        let file =
            Assets::get(SITE_FILE).ok_or_else(|| ContentError::Missing(SITE_FILE.to_string()))?;
        Self::from_json(&file.data)
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, ContentError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
