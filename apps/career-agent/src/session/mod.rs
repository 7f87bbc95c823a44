//! Per-visitor UI state: current page, theme and remembered skills.
//!
//! A `Session` is loaded for every request by the `CurrentSession` extractor,
//! mutated by the page action, and saved back to the `SessionStore`.

pub mod store;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::skills::split_skills;

/// The five pages of the app. Every page links to every other via the sidebar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Page {
    #[default]
    Home,
    BuildCv,
    Predict,
    Jobs,
    AiFix,
}

impl Page {
    /// Sidebar order.
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::BuildCv,
        Page::Predict,
        Page::Jobs,
        Page::AiFix,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::BuildCv => "build-cv",
            Page::Predict => "predict",
            Page::Jobs => "jobs",
            Page::AiFix => "ai-fix",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "🏠 Home",
            Page::BuildCv => "📝 Build CV",
            Page::Predict => "🔮 Predict",
            Page::Jobs => "🎯 Jobs",
            Page::AiFix => "✨ AI Fix",
        }
    }
}

impl FromStr for Page {
    type Err = AppError;

    fn from_str(slug: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|page| page.slug() == slug)
            .ok_or_else(|| AppError::NotFound(format!("Unknown page '{slug}'")))
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub page: Page,
    pub theme: Theme,
    pub skills: Option<String>,
}

impl Session {
    pub fn navigate(&mut self, page: Page) {
        self.page = page;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// Stores skills for reuse on other pages. Input without any skill token
    /// keeps the previous value.
    pub fn remember_skills(&mut self, raw: &str) {
        if !split_skills(raw).is_empty() {
            self.skills = Some(raw.trim().to_string());
        }
    }

    pub fn skills_or_empty(&self) -> &str {
        self.skills.as_deref().unwrap_or("")
    }
}
