//! UI events and screens
//!
//! The webview sends a `UiEvent` and draws whatever `Screen` comes back.

use serde::{Deserialize, Serialize};

use zonemap_session::SearchError;
use zonemap_view::{Legend, MapSpec, Opacity, ViewModel};

pub const LOCKED_PROMPT: &str = "合言葉を入力するとアプリが使えます。";
pub const WELCOME_HINT: &str = "住所を入力して検索してください。";
pub const NOT_FOUND_MESSAGE: &str = "住所が見つかりませんでした。";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum UiEvent {
    Unlock(String),
    SearchRequested(String),
    /// Raw slider value; clamped into 0.0..=1.0
    OpacityChanged(f64),
}

impl UiEvent {
    pub fn name(&self) -> &'static str {
        match self {
            UiEvent::Unlock(_) => "unlock",
            UiEvent::SearchRequested(_) => "search_requested",
            UiEvent::OpacityChanged(_) => "opacity_changed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    NotFound,
    Transport,
}

/// Initial values for the sidebar controls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiDefaults {
    pub default_address: String,
    pub default_opacity: Opacity,
    pub opacity_min: f64,
    pub opacity_max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Screen {
    /// Everything else is hidden until the passphrase matches
    Locked { prompt: String },
    /// Unlocked, nothing searched yet
    Welcome { hint: String },
    Map {
        view: ViewModel,
        map: MapSpec,
        legend: Legend,
    },
    /// Shown in place of the map; the user can simply search again
    SearchFailed {
        kind: FailureKind,
        message: String,
        query: String,
        retryable: bool,
    },
}

impl Screen {
    pub fn locked() -> Self {
        Screen::Locked {
            prompt: LOCKED_PROMPT.to_string(),
        }
    }

    pub fn welcome() -> Self {
        Screen::Welcome {
            hint: WELCOME_HINT.to_string(),
        }
    }

    pub fn search_failed(query: &str, error: &SearchError) -> Self {
        let (kind, message) = match error {
            SearchError::NotFound { .. } => (FailureKind::NotFound, NOT_FOUND_MESSAGE.to_string()),
            SearchError::Transport(cause) => (FailureKind::Transport, format!("エラー: {cause}")),
        };

        Screen::SearchFailed {
            kind,
            message,
            query: query.to_string(),
            retryable: true,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Screen::Locked { .. } => "locked",
            Screen::Welcome { .. } => "welcome",
            Screen::Map { .. } => "map",
            Screen::SearchFailed { .. } => "search_failed",
        }
    }
}
