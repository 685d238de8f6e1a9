//! Configuration loading and validation.
//!
//! Settings live in a JSON file. The path is taken from the command line
//! when given, otherwise `boardseed.json` next to the working directory is
//! tried, then the user's config directory. Validation is separate from
//! loading so the CLI can point at the exact field that is wrong.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::content::ProcessTemplate;
use crate::models::TeamConfig;

const APP_NAME: &str = "boardseed";
const CONFIG_FILE: &str = "boardseed.json";

/// Token value shipped in the starter config, rejected by validation.
const PLACEHOLDER_TOKEN: &str = "YOUR_PAT_TOKEN";

/// A configuration value that stops the tool from running.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("organization_url is not set")]
    MissingOrganizationUrl,

    #[error("project is not set")]
    MissingProject,

    #[error("personal_access_token is not set, update the config file with a real token")]
    MissingToken,

    #[error("unsupported process template '{0}', supported: Scrum, Agile, Basic, CMMI")]
    UnknownTemplate(String),

    #[error("no teams configured, at least one team with an area path is required")]
    NoTeams,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Organization URL, e.g. `https://dev.azure.com/contoso`.
    pub organization_url: String,
    /// Project the work items are created in.
    pub project: String,
    pub personal_access_token: String,
    /// Process template the project was created with.
    #[serde(default = "default_template")]
    pub process_template: String,
    /// Lay items out across a simulated sprint history.
    #[serde(default)]
    pub use_sprint_history: bool,
    #[serde(default)]
    pub teams: Vec<TeamConfig>,
}

fn default_template() -> String {
    "Scrum".to_string()
}

impl Settings {
    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let settings = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(settings)
    }

    /// Check that every required field is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.organization_url.trim().is_empty() {
            return Err(ConfigError::MissingOrganizationUrl);
        }
        if self.project.trim().is_empty() {
            return Err(ConfigError::MissingProject);
        }
        if self.personal_access_token.trim().is_empty()
            || self.personal_access_token == PLACEHOLDER_TOKEN
        {
            return Err(ConfigError::MissingToken);
        }
        self.template()?;
        if self.teams.is_empty() {
            return Err(ConfigError::NoTeams);
        }
        Ok(())
    }

    /// The parsed process template.
    pub fn template(&self) -> Result<ProcessTemplate, ConfigError> {
        ProcessTemplate::parse(&self.process_template)
            .ok_or_else(|| ConfigError::UnknownTemplate(self.process_template.clone()))
    }

    /// A starter config for new installs. Placeholders keep validation
    /// failing until the operator fills in real values.
    pub fn starter() -> Self {
        Self {
            organization_url: "https://dev.azure.com/your-organization".to_string(),
            project: "YourProject".to_string(),
            personal_access_token: PLACEHOLDER_TOKEN.to_string(),
            process_template: default_template(),
            use_sprint_history: false,
            teams: vec![
                TeamConfig {
                    name: "Frontend".to_string(),
                    area_path: "YourProject\\Frontend".to_string(),
                    iteration_path: "YourProject".to_string(),
                },
                TeamConfig {
                    name: "Backend".to_string(),
                    area_path: "YourProject\\Backend".to_string(),
                    iteration_path: "YourProject".to_string(),
                },
            ],
        }
    }

    /// Write the starter config to `path`, refusing to clobber an existing
    /// file.
    pub fn write_starter(path: &Path) -> Result<()> {
        if path.exists() {
            bail!("{} already exists, not overwriting it", path.display());
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).context("Failed to create config directory")?;
            }
        }
        let content =
            serde_json::to_string_pretty(&Self::starter()).context("Failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }
}

/// Where to read settings from: an explicit path wins, then a local
/// `boardseed.json`, then the user config directory.
pub fn resolve_path(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(path) = explicit {
        return path;
    }
    let local = PathBuf::from(CONFIG_FILE);
    if local.exists() {
        return local;
    }
    if let Some(mut path) = dirs::config_dir() {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        if path.exists() {
            return path;
        }
    }
    local
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usable() -> Settings {
        Settings {
            organization_url: "https://dev.azure.com/contoso".to_string(),
            project: "Demo".to_string(),
            personal_access_token: "secret".to_string(),
            process_template: "Scrum".to_string(),
            use_sprint_history: false,
            teams: vec![TeamConfig {
                name: "Frontend".to_string(),
                area_path: "Demo\\Frontend".to_string(),
                iteration_path: "Demo".to_string(),
            }],
        }
    }

    #[test]
    fn valid_settings_pass() {
        assert_eq!(usable().validate(), Ok(()));
    }

    #[test]
    fn placeholder_token_is_rejected() {
        let mut settings = usable();
        settings.personal_access_token = PLACEHOLDER_TOKEN.to_string();
        assert_eq!(settings.validate(), Err(ConfigError::MissingToken));
    }

    #[test]
    fn unknown_template_is_rejected() {
        let mut settings = usable();
        settings.process_template = "Kanban".to_string();
        assert_eq!(
            settings.validate(),
            Err(ConfigError::UnknownTemplate("Kanban".to_string()))
        );
    }

    #[test]
    fn teams_are_required() {
        let mut settings = usable();
        settings.teams.clear();
        assert_eq!(settings.validate(), Err(ConfigError::NoTeams));
    }

    #[test]
    fn missing_fields_are_reported_in_order() {
        let mut settings = usable();
        settings.organization_url = "  ".to_string();
        assert_eq!(settings.validate(), Err(ConfigError::MissingOrganizationUrl));
    }

    #[test]
    fn load_reads_a_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("boardseed.json");
        std::fs::write(
            &path,
            serde_json::to_string_pretty(&usable()).unwrap(),
        )
        .unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.project, "Demo");
        assert_eq!(settings.teams.len(), 1);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn defaults_apply_for_omitted_fields() {
        let json = r#"{
            "organization_url": "https://dev.azure.com/contoso",
            "project": "Demo",
            "personal_access_token": "secret"
        }"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.process_template, "Scrum");
        assert!(!settings.use_sprint_history);
        assert!(settings.teams.is_empty());
    }

    #[test]
    fn starter_config_needs_editing_before_use() {
        let starter = Settings::starter();
        assert_eq!(starter.validate(), Err(ConfigError::MissingToken));
    }

    #[test]
    fn write_starter_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("boardseed.json");
        Settings::write_starter(&path).unwrap();
        assert!(Settings::write_starter(&path).is_err());

        let written = Settings::load(&path).unwrap();
        assert_eq!(written.teams.len(), 2);
    }

    #[test]
    fn explicit_path_wins() {
        let explicit = PathBuf::from("/tmp/custom.json");
        assert_eq!(resolve_path(Some(explicit.clone())), explicit);
    }
}
