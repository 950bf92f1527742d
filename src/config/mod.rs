// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[timing]` - Fade and hold durations
//! - `[style]` - Toast colors, corner radius, height and side margins
//! - `[layout]` - Long-text wrapping metrics
//!
//! Every field is optional. Missing values take their default and values
//! outside the supported range are clamped when converted into notifier
//! settings.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument or `TONS_TOAST_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use tons_toast::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.timing.hold_ms = Some(5_000);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::notifications::{LayoutMetrics, Settings, Timing, ToastStyle};
use crate::ui::theming::ThemeMode;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Toast animation timing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimingConfig {
    /// Fade-in and fade-out duration in milliseconds.
    #[serde(default = "default_fade_ms", skip_serializing_if = "Option::is_none")]
    pub fade_ms: Option<u64>,

    /// Time a toast stays fully visible, in milliseconds.
    #[serde(default = "default_hold_ms", skip_serializing_if = "Option::is_none")]
    pub hold_ms: Option<u64>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            fade_ms: default_fade_ms(),
            hold_ms: default_hold_ms(),
        }
    }
}

/// Toast appearance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StyleConfig {
    /// Text color as `[r, g, b, a]` in `0.0..=1.0`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<[f32; 4]>,

    /// Background color as `[r, g, b, a]` in `0.0..=1.0`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<[f32; 4]>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f32>,

    /// Height of a single-line toast.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,

    /// Gap between the toast and the window edges.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side_margin: Option<f32>,
}

/// Long-text wrapping.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LayoutConfig {
    /// Character count above which a toast wraps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiline_threshold: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_lines: Option<usize>,

    /// Average glyph advance used to estimate line capacity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glyph_width: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_padding: Option<f32>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub timing: TimingConfig,

    #[serde(default)]
    pub style: StyleConfig,

    #[serde(default)]
    pub layout: LayoutConfig,
}

impl Config {
    /// Timing with out-of-range values clamped.
    #[must_use]
    pub fn timing(&self) -> Timing {
        let fade = self
            .timing
            .fade_ms
            .unwrap_or(DEFAULT_FADE_MS)
            .clamp(MIN_FADE_MS, MAX_FADE_MS);
        let hold = self
            .timing
            .hold_ms
            .unwrap_or(DEFAULT_HOLD_MS)
            .clamp(MIN_HOLD_MS, MAX_HOLD_MS);

        Timing {
            fade: Duration::from_millis(fade),
            hold: Duration::from_millis(hold),
        }
    }

    /// Style applied to toasts posted without an explicit one.
    #[must_use]
    pub fn toast_style(&self) -> ToastStyle {
        let style = &self.style;
        ToastStyle {
            text_color: color_or(style.text_color, DEFAULT_TEXT_COLOR),
            background: color_or(style.background_color, DEFAULT_BACKGROUND_COLOR),
            corner_radius: clamp_f32(
                style.corner_radius,
                DEFAULT_CORNER_RADIUS,
                0.0,
                MAX_CORNER_RADIUS,
            ),
            height: clamp_f32(
                style.height,
                DEFAULT_TOAST_HEIGHT,
                MIN_TOAST_HEIGHT,
                MAX_TOAST_HEIGHT,
            ),
            side_margin: clamp_f32(style.side_margin, DEFAULT_SIDE_MARGIN, 0.0, MAX_SIDE_MARGIN),
        }
    }

    /// Wrapping metrics with out-of-range values clamped.
    #[must_use]
    pub fn layout_metrics(&self) -> LayoutMetrics {
        let layout = &self.layout;
        LayoutMetrics {
            multiline_threshold: layout
                .multiline_threshold
                .unwrap_or(DEFAULT_MULTILINE_THRESHOLD)
                .clamp(MIN_MULTILINE_THRESHOLD, MAX_MULTILINE_THRESHOLD),
            max_lines: layout
                .max_lines
                .unwrap_or(DEFAULT_MAX_LINES)
                .clamp(MIN_MAX_LINES, MAX_MAX_LINES),
            glyph_width: clamp_f32(
                layout.glyph_width,
                DEFAULT_GLYPH_WIDTH,
                MIN_GLYPH_WIDTH,
                MAX_GLYPH_WIDTH,
            ),
            line_height: clamp_f32(
                layout.line_height,
                DEFAULT_LINE_HEIGHT,
                MIN_LINE_HEIGHT,
                MAX_LINE_HEIGHT,
            ),
            text_padding: clamp_f32(
                layout.text_padding,
                DEFAULT_TEXT_PADDING,
                0.0,
                MAX_TEXT_PADDING,
            ),
        }
    }

    /// Settings for a notifier [`Manager`](crate::ui::notifications::Manager).
    #[must_use]
    pub fn notifier_settings(&self) -> Settings {
        Settings {
            timing: self.timing(),
            metrics: self.layout_metrics(),
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_fade_ms() -> Option<u64> {
    Some(DEFAULT_FADE_MS)
}

fn default_hold_ms() -> Option<u64> {
    Some(DEFAULT_HOLD_MS)
}

/// Clamps a configured value, using `default` when unset or not finite.
fn clamp_f32(value: Option<f32>, default: f32, min: f32, max: f32) -> f32 {
    match value {
        Some(v) if v.is_finite() => v.clamp(min, max),
        _ => default,
    }
}

fn color_or(value: Option<[f32; 4]>, default: [f32; 4]) -> Color {
    let [r, g, b, a] = value
        .filter(|components| components.iter().all(|c| c.is_finite()))
        .unwrap_or(default)
        .map(|c| c.clamp(0.0, 1.0));
    Color::from_rgba(r, g, b, a)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("could not load {}: {err}", path.display());
                    return (
                        Config::default(),
                        Some(format!("Settings could not be read, using defaults ({err})")),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::test_utils::assert_abs_diff_eq;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Light,
            },
            timing: TimingConfig {
                fade_ms: Some(200),
                hold_ms: Some(5_000),
            },
            style: StyleConfig {
                text_color: Some([1.0, 0.9, 0.2, 1.0]),
                height: Some(44.0),
                ..StyleConfig::default()
            },
            layout: LayoutConfig {
                max_lines: Some(3),
                ..LayoutConfig::default()
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_falls_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[timing\nfade_ms = ").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_file_uses_defaults_for_missing_sections() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[timing]\nhold_ms = 4500\n").expect("write");

        let config = load_from_path(&config_path).expect("valid config");

        assert_eq!(config.timing.hold_ms, Some(4_500));
        assert_eq!(config.timing.fade_ms, Some(DEFAULT_FADE_MS));
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.layout_metrics(), LayoutMetrics::default());
    }

    #[test]
    fn default_config_matches_notifier_defaults() {
        let config = Config::default();
        assert_eq!(config.notifier_settings(), Settings::default());
        assert_eq!(config.toast_style(), ToastStyle::default());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config {
            timing: TimingConfig {
                fade_ms: Some(0),
                hold_ms: Some(10_000_000),
            },
            style: StyleConfig {
                height: Some(f32::NAN),
                side_margin: Some(-5.0),
                background_color: Some([2.0, -1.0, 0.5, 0.5]),
                ..StyleConfig::default()
            },
            layout: LayoutConfig {
                max_lines: Some(0),
                glyph_width: Some(0.0),
                ..LayoutConfig::default()
            },
            ..Config::default()
        };

        let timing = config.timing();
        assert_eq!(timing.fade, Duration::from_millis(MIN_FADE_MS));
        assert_eq!(timing.hold, Duration::from_millis(MAX_HOLD_MS));

        let style = config.toast_style();
        assert_abs_diff_eq!(style.height, DEFAULT_TOAST_HEIGHT);
        assert_abs_diff_eq!(style.side_margin, 0.0);
        assert_abs_diff_eq!(style.background.r, 1.0);
        assert_abs_diff_eq!(style.background.g, 0.0);

        let metrics = config.layout_metrics();
        assert_eq!(metrics.max_lines, MIN_MAX_LINES);
        assert_abs_diff_eq!(metrics.glyph_width, MIN_GLYPH_WIDTH);
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }
}
