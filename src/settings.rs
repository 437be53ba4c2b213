use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Flat settings record persisted as pretty JSON. Field names match the keys
/// written by earlier builds so existing config files keep loading; the delay
/// fields stay raw text, not parsed numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_hotkey")]
    pub hotkey: String,
    #[serde(default)]
    pub h: String,
    #[serde(default)]
    pub m: String,
    #[serde(default)]
    pub s: String,
    #[serde(default)]
    pub ms: String,
    /// "left" or "right"; anything else falls back to left on use.
    #[serde(default = "default_click")]
    pub click: String,
    /// Background image path; empty when none was chosen.
    #[serde(default)]
    pub bg: String,
    #[serde(default = "default_win_w")]
    pub win_w: u32,
    #[serde(default = "default_win_h")]
    pub win_h: u32,
}

fn default_hotkey() -> String {
    "f6".to_string()
}

fn default_click() -> String {
    "left".to_string()
}

fn default_win_w() -> u32 {
    600
}

fn default_win_h() -> u32 {
    400
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hotkey: default_hotkey(),
            h: String::new(),
            m: String::new(),
            s: String::new(),
            ms: String::new(),
            click: default_click(),
            bg: String::new(),
            win_w: default_win_w(),
            win_h: default_win_h(),
        }
    }
}

impl Settings {
    /// Load from `path`. A missing or unreadable file and any parse error
    /// fall back to defaults; nothing is surfaced to the user.
    pub fn load(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::debug!("no settings at {}: {err}", path.display());
                return Self::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(settings) => settings,
            Err(err) => {
                tracing::warn!("ignoring malformed settings {}: {err}", path.display());
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// `config.json` beside the executable, or under the working directory when
/// the executable path is unavailable.
pub fn default_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("config.json")
}
