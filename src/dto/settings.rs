use serde::Serialize;

use crate::domain::settings::{ConfigEntries, SettingsSection, SystemConfig};

#[derive(Debug, Serialize)]
pub struct SectionLink {
    pub slug: &'static str,
    pub title: &'static str,
    pub active: bool,
}

/// Data required to render one settings section.
#[derive(Debug, Serialize)]
pub struct SettingsPageData {
    pub section: SettingsSection,
    pub title: &'static str,
    pub sections: Vec<SectionLink>,
    pub config: SystemConfig,
    /// Rows of the referral/ranking tables, already converted for display.
    pub entries: ConfigEntries,
}
