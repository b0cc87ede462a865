use crate::{TrellisError, TrellisResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_BOARD_TITLE: &str = "My Board";
const DEFAULT_CARD_PLACEHOLDER: &str = "New card";
const DEFAULT_LIST_PLACEHOLDER: &str = "New list";
const DEFAULT_HISTORY_LIMIT: usize = 100;

/// How fresh card and list ids are minted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// `card-1`, `card-2`, ... seeded above any id already on the board.
    #[default]
    Sequential,
    /// `card-<uuid v4>`.
    Uuid,
}

/// A list to create when the board starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSeed {
    pub title: String,
    #[serde(default)]
    pub cards: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_placeholder: Option<String>,
    pub id_strategy: IdStrategy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history_limit: Option<usize>,
    /// Initial lists. `None` falls back to the built-in starter board.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lists: Option<Vec<ListSeed>>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/trellis/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("trellis/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("trellis\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Load from the platform config location. A missing file yields defaults.
    pub fn load() -> TrellisResult<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> TrellisResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content, &path.display().to_string())
    }

    pub fn from_toml_str(content: &str, origin: &str) -> TrellisResult<Self> {
        toml::from_str(content).map_err(|source| TrellisError::Config {
            path: origin.to_string(),
            source,
        })
    }

    pub fn effective_board_title(&self) -> &str {
        self.board_title.as_deref().unwrap_or(DEFAULT_BOARD_TITLE)
    }

    pub fn effective_card_placeholder(&self) -> &str {
        self.card_placeholder
            .as_deref()
            .unwrap_or(DEFAULT_CARD_PLACEHOLDER)
    }

    pub fn effective_list_placeholder(&self) -> &str {
        self.list_placeholder
            .as_deref()
            .unwrap_or(DEFAULT_LIST_PLACEHOLDER)
    }

    pub fn effective_history_limit(&self) -> usize {
        self.history_limit.unwrap_or(DEFAULT_HISTORY_LIMIT)
    }

    /// Copy of this config with every optional field resolved to its effective value.
    pub fn effective(&self) -> Self {
        Self {
            board_title: Some(self.effective_board_title().to_string()),
            card_placeholder: Some(self.effective_card_placeholder().to_string()),
            list_placeholder: Some(self.effective_list_placeholder().to_string()),
            id_strategy: self.id_strategy,
            history_limit: Some(self.effective_history_limit()),
            lists: self.lists.clone(),
        }
    }

    pub fn to_toml_string(&self) -> TrellisResult<String> {
        toml::to_string_pretty(self).map_err(|e| TrellisError::Internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_when_fields_missing() {
        let config = AppConfig::from_toml_str("", "inline").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.effective_board_title(), "My Board");
        assert_eq!(config.effective_card_placeholder(), "New card");
        assert_eq!(config.effective_list_placeholder(), "New list");
        assert_eq!(config.effective_history_limit(), 100);
        assert_eq!(config.id_strategy, IdStrategy::Sequential);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            board_title = "Launch"
            card_placeholder = "Untitled"
            id_strategy = "uuid"
            history_limit = 5

            [[lists]]
            title = "Backlog"
            cards = ["Write docs", "Ship"]

            [[lists]]
            title = "Done"
        "#;
        let config = AppConfig::from_toml_str(toml, "inline").unwrap();
        assert_eq!(config.effective_board_title(), "Launch");
        assert_eq!(config.effective_card_placeholder(), "Untitled");
        assert_eq!(config.effective_list_placeholder(), "New list");
        assert_eq!(config.id_strategy, IdStrategy::Uuid);
        assert_eq!(config.effective_history_limit(), 5);

        let lists = config.lists.unwrap();
        assert_eq!(lists.len(), 2);
        assert_eq!(lists[0].cards, vec!["Write docs", "Ship"]);
        assert!(lists[1].cards.is_empty());
    }

    #[test]
    fn test_malformed_config_reports_origin() {
        let err = AppConfig::from_toml_str("id_strategy = \"random\"", "bad.toml").unwrap_err();
        match err {
            TrellisError::Config { path, .. } => assert_eq!(path, "bad.toml"),
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "board_title = \"From disk\"").unwrap();

        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.effective_board_title(), "From disk");
    }

    #[test]
    fn test_load_from_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, TrellisError::Io(_)));
    }

    #[test]
    fn test_effective_config_round_trips_through_toml() {
        let effective = AppConfig::default().effective();
        let text = effective.to_toml_string().unwrap();
        assert!(text.contains("board_title = \"My Board\""));
        assert!(text.contains("id_strategy = \"sequential\""));

        let parsed = AppConfig::from_toml_str(&text, "printed").unwrap();
        assert_eq!(parsed, effective);
    }
}
