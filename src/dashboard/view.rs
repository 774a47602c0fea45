use serde::{Deserialize, Serialize};

/// The dashboard's one piece of view state: which section is showing
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    #[default]
    Dashboard,
    Upload,
    Evaluate,
    Results,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Dashboard,
        Section::Upload,
        Section::Evaluate,
        Section::Results,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Upload => "Upload",
            Section::Evaluate => "Evaluate",
            Section::Results => "Results",
        }
    }

    /// Route the web UI serves this section on
    pub fn href(&self) -> &'static str {
        match self {
            Section::Dashboard => "/",
            Section::Upload => "/upload",
            Section::Evaluate => "/evaluate",
            Section::Results => "/results",
        }
    }

    /// Navigation entries with `self` marked active
    pub fn nav(&self) -> Vec<NavItem> {
        Section::ALL
            .iter()
            .map(|section| NavItem {
                title: section.title(),
                href: section.href(),
                active: section == self,
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub title: &'static str,
    pub href: &'static str,
    pub active: bool,
}
