//! Game settings and presets
//!
//! Persisted in LocalStorage on web. The page URL can force a preset with
//! `?preset=wide` or `?preset=compact`.

use serde::{Deserialize, Serialize};

use crate::consts::CANVAS_ASPECT;

/// Default hidden message
pub const DEFAULT_MESSAGE: &str = "ぼくのなまえはやすこうちといいます。よろしくおねがいします";

/// Prefix of the completion notification
pub const DEFAULT_WIN_PREFIX: &str = "完成！:";

/// Layout/speed presets for the two supported page variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Preset {
    /// Desktop page: wide canvas, faster ball
    #[default]
    Wide,
    /// Phone page: narrow canvas, slower ball
    Compact,
}

impl Preset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Wide => "Wide",
            Preset::Compact => "Compact",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "wide" | "desktop" => Some(Preset::Wide),
            "compact" | "mobile" => Some(Preset::Compact),
            _ => None,
        }
    }

    /// Maximum canvas width in CSS pixels
    pub fn max_viewport_width(&self) -> f32 {
        match self {
            Preset::Wide => 1000.0,
            Preset::Compact => 640.0,
        }
    }

    /// Ball velocity is canvas size divided by this per frame
    pub fn ball_speed_divisor(&self) -> f32 {
        match self {
            Preset::Wide => 90.0,
            Preset::Compact => 120.0,
        }
    }
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Preset the numeric fields were derived from
    pub preset: Preset,
    /// Canvas width never exceeds this
    pub max_viewport_width: f32,
    /// Ball speed divisor (larger is slower)
    pub ball_speed_divisor: f32,
    /// Block grid columns
    pub column_count: usize,
    /// The hidden message, one block per character
    pub message: String,
    /// Text placed before the message in the completion notification
    #[serde(default = "default_win_prefix")]
    pub win_prefix: String,
}

fn default_win_prefix() -> String {
    DEFAULT_WIN_PREFIX.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_preset(Preset::default())
    }
}

impl Settings {
    /// Create settings from a preset (applies preset defaults)
    pub fn from_preset(preset: Preset) -> Self {
        Self {
            preset,
            max_viewport_width: preset.max_viewport_width(),
            ball_speed_divisor: preset.ball_speed_divisor(),
            column_count: 7,
            message: DEFAULT_MESSAGE.to_string(),
            win_prefix: default_win_prefix(),
        }
    }

    /// Apply a preset, keeping the message
    pub fn apply_preset(&mut self, preset: Preset) {
        self.preset = preset;
        self.max_viewport_width = preset.max_viewport_width();
        self.ball_speed_divisor = preset.ball_speed_divisor();
    }

    /// Replace the hidden message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Canvas size for a given viewport width
    pub fn canvas_size(&self, viewport_width: f32) -> (f32, f32) {
        let width = viewport_width.min(self.max_viewport_width).floor();
        let height = (width * CANVAS_ASPECT).floor();
        (width, height)
    }

    /// Completion notification text
    pub fn win_text(&self) -> String {
        format!("{}{}", self.win_prefix, self.message)
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "reveal_breakout_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match serde_json::from_str(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

/// Pull a `preset=` value out of a URL query string (`?a=b&preset=compact`)
pub fn preset_from_query(query: &str) -> Option<Preset> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "preset")
        .and_then(|(_, value)| Preset::from_str(value))
}
