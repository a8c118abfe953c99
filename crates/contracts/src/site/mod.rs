//! Site content and settings.
//!
//! The whole page structure (pages, portfolio categories, testimonials,
//! poems, title animation, contact endpoint) comes from `site.toml`, which is
//! embedded in the binary and validated once on first access.

use crate::poetry::{Poem, PoemShelf};
use crate::testimonials::Testimonial;
use crate::typewriter::TypewriterConfig;
use crate::view_selector::{filter, FilterItem, ViewSelector, ViewSelectorError};
use anyhow::Context;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::BTreeSet;
use thiserror::Error;

/// Default site content embedded in the binary
const DEFAULT_SITE: &str = include_str!("site.toml");

static SITE: Lazy<Result<SiteConfig, String>> =
    Lazy::new(|| SiteConfig::parse(DEFAULT_SITE).map_err(|e| format!("{:#}", e)));

/// The embedded site configuration.
pub fn site() -> Result<&'static SiteConfig, &'static str> {
    SITE.as_ref().map_err(String::as_str)
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SiteConfigError {
    #[error("no page is marked as initial")]
    NoInitialPage,
    #[error("more than one page is marked as initial")]
    MultipleInitialPages,
    #[error("portfolio category '{0}' is declared twice")]
    DuplicateCategory(String),
    #[error("project '{project}' uses undeclared category '{category}'")]
    UnknownCategory { project: String, category: String },
    #[error("poem id {0} is used twice")]
    DuplicatePoem(u32),
    #[error("title animation needs at least one non-empty string")]
    NoTypedStrings,
    #[error("skill '{name}' has level {level}, expected 0..=100")]
    InvalidSkill { name: String, level: u8 },
    #[error(transparent)]
    View(#[from] ViewSelectorError),
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    pub profile: Profile,
    pub typed: TypewriterConfig,
    pub contact: ContactConfig,
    pub pages: Vec<PageConfig>,
    #[serde(default)]
    pub about: AboutConfig,
    #[serde(default)]
    pub resume: ResumeConfig,
    pub portfolio: PortfolioConfig,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub poems: Vec<Poem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub avatar: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub socials: Vec<Social>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Social {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactConfig {
    pub endpoint: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageConfig {
    pub label: String,
    #[serde(default)]
    pub initial: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AboutConfig {
    #[serde(default)]
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub services: Vec<Service>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Service {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResumeConfig {
    #[serde(default)]
    pub education: Vec<TimelineEntry>,
    #[serde(default)]
    pub experience: Vec<TimelineEntry>,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimelineEntry {
    pub title: String,
    pub period: String,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioConfig {
    pub categories: Vec<String>,
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub title: String,
    pub category: String,
    pub image: String,
    #[serde(default)]
    pub url: Option<String>,
}

impl SiteConfig {
    /// Parse and validate a site document.
    pub fn parse(source: &str) -> anyhow::Result<Self> {
        let config: SiteConfig = toml::from_str(source).context("failed to parse site.toml")?;
        config.validate().context("invalid site.toml")?;
        log::debug!(
            "site loaded: {} pages, {} projects, {} poems",
            config.pages.len(),
            config.portfolio.projects.len(),
            config.poems.len()
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SiteConfigError> {
        match self.pages.iter().filter(|p| p.initial).count() {
            0 => return Err(SiteConfigError::NoInitialPage),
            1 => {}
            _ => return Err(SiteConfigError::MultipleInitialPages),
        }
        self.view_selector()?;

        let mut categories = BTreeSet::new();
        for category in &self.portfolio.categories {
            if !categories.insert(filter::normalize(category)) {
                return Err(SiteConfigError::DuplicateCategory(category.clone()));
            }
        }
        for project in &self.portfolio.projects {
            if !categories.contains(&filter::normalize(&project.category)) {
                return Err(SiteConfigError::UnknownCategory {
                    project: project.title.clone(),
                    category: project.category.clone(),
                });
            }
        }

        let mut ids = BTreeSet::new();
        for poem in &self.poems {
            if !ids.insert(poem.id) {
                return Err(SiteConfigError::DuplicatePoem(poem.id));
            }
        }

        if self.typed.strings.iter().all(|s| s.trim().is_empty()) {
            return Err(SiteConfigError::NoTypedStrings);
        }

        if let Some(skill) = self.resume.skills.iter().find(|s| s.level > 100) {
            return Err(SiteConfigError::InvalidSkill {
                name: skill.name.clone(),
                level: skill.level,
            });
        }
        Ok(())
    }

    /// Label of the page shown when the URL does not name one.
    pub fn initial_page(&self) -> &str {
        self.pages
            .iter()
            .find(|p| p.initial)
            .or_else(|| self.pages.first())
            .map(|p| p.label.as_str())
            .unwrap_or_default()
    }

    pub fn view_selector(&self) -> Result<ViewSelector, ViewSelectorError> {
        let labels: Vec<&str> = self.pages.iter().map(|p| p.label.as_str()).collect();
        let items = self
            .portfolio
            .projects
            .iter()
            .map(|p| FilterItem::new(&p.category))
            .collect();
        ViewSelector::new(&labels, self.initial_page(), items)
    }

    pub fn poem_shelf(&self) -> PoemShelf {
        PoemShelf::new(self.poems.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
pages = [{ label = "About", initial = true }, { label = "Portfolio" }]

[profile]
name = "Test"
title = "Tester"
avatar = "/a.png"
email = "t@example.com"

[typed]
strings = ["one"]
type_speed_ms = 10
back_speed_ms = 5

[contact]
endpoint = "/api/contact"

[portfolio]
categories = ["Web"]
projects = [{ title = "Site", category = "web", image = "/p.png" }]
"#;

    #[test]
    fn test_default_site_loads() {
        let config = site().unwrap();
        assert!(!config.pages.is_empty());
        let selector = config.view_selector().unwrap();
        assert_eq!(
            selector.visible_page().page_key,
            crate::view_selector::page_key(config.initial_page())
        );
        assert_eq!(
            selector.filter().items().len(),
            config.portfolio.projects.len()
        );
        assert_eq!(config.poem_shelf().poems().len(), config.poems.len());
    }

    #[test]
    fn test_minimal_site_parses() {
        let config = SiteConfig::parse(MINIMAL).unwrap();
        assert_eq!(config.initial_page(), "About");
        assert!(config.testimonials.is_empty());
        assert!(config.about.paragraphs.is_empty());
    }

    #[test]
    fn test_rejects_undeclared_category() {
        let source = MINIMAL.replace(r#"category = "web""#, r#"category = "games""#);
        let mut config: SiteConfig = toml::from_str(&source).unwrap();
        assert_eq!(
            config.validate(),
            Err(SiteConfigError::UnknownCategory {
                project: "Site".to_string(),
                category: "games".to_string(),
            })
        );
        config.portfolio.categories.push("Games".to_string());
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_bad_initial_pages() {
        let mut config: SiteConfig = toml::from_str(MINIMAL).unwrap();
        config.pages[1].initial = true;
        assert_eq!(config.validate(), Err(SiteConfigError::MultipleInitialPages));
        config.pages.iter_mut().for_each(|p| p.initial = false);
        assert_eq!(config.validate(), Err(SiteConfigError::NoInitialPage));
    }

    #[test]
    fn test_rejects_duplicate_pages() {
        let mut config: SiteConfig = toml::from_str(MINIMAL).unwrap();
        config.pages[1].label = "about".to_string();
        assert_eq!(
            config.validate(),
            Err(SiteConfigError::View(ViewSelectorError::DuplicatePage(
                "about".to_string()
            )))
        );
    }

    #[test]
    fn test_parse_reports_context() {
        let err = SiteConfig::parse("pages = 3").unwrap_err();
        assert!(format!("{:#}", err).contains("failed to parse site.toml"));
    }
}
