//! Site configuration loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file) yields the
//! standard site:
//!
//! ```toml
//! [viewport]
//! width = 1280.0
//! height = 800.0
//! initial_scroll = 0.0
//!
//! [reveal]
//! threshold = 0.1
//! mode = "once"
//! duration_ms = 700
//! stagger_ms = 150
//! easing = "ease-out"
//!
//! [site]
//! title = "Owen Au"
//! output_dir = "dist"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use folio_core::geometry::Size;
use folio_core::{RevealMode, TrackerOptions};
use folio_style::easing::Easing;
use folio_style::transition::RevealTransition;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub viewport: ViewportConfig,
    #[serde(default)]
    pub reveal: RevealConfig,
    #[serde(default)]
    pub site: SiteSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewportConfig {
    /// Viewport width in pixels
    #[serde(default = "default_width")]
    pub width: f32,
    /// Viewport height in pixels
    #[serde(default = "default_height")]
    pub height: f32,
    /// Vertical scroll offset pages are rendered at
    #[serde(default)]
    pub initial_scroll: f32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            initial_scroll: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealConfig {
    /// Visible fraction (0.0-1.0) that reveals a block
    #[serde(default = "default_threshold")]
    pub threshold: f32,
    /// "once" latches the first reveal, "continuous" follows visibility
    #[serde(default)]
    pub mode: RevealMode,
    /// Transition duration in milliseconds
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
    /// Delay between consecutive list items in milliseconds
    #[serde(default = "default_stagger_ms")]
    pub stagger_ms: u64,
    /// Timing function: "linear", "ease", "ease-in", "ease-out", "ease-in-out"
    #[serde(default = "default_easing")]
    pub easing: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            mode: RevealMode::default(),
            duration_ms: default_duration_ms(),
            stagger_ms: default_stagger_ms(),
            easing: default_easing(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSection {
    /// Document title suffix
    #[serde(default = "default_title")]
    pub title: String,
    /// Export directory
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: default_title(),
            output_dir: default_output_dir(),
        }
    }
}

fn default_width() -> f32 {
    1280.0
}

fn default_height() -> f32 {
    800.0
}

fn default_threshold() -> f32 {
    folio_core::DEFAULT_THRESHOLD
}

fn default_duration_ms() -> u64 {
    700
}

fn default_stagger_ms() -> u64 {
    150
}

fn default_easing() -> String {
    "ease-out".to_string()
}

fn default_title() -> String {
    "Owen Au".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("dist")
}

impl SiteConfig {
    /// Parse and validate configuration text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config: Self = toml::from_str(&text).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        tracing::debug!(target: "folio::site", path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Check every value is usable.
    pub fn validate(&self) -> Result<()> {
        let ViewportConfig {
            width,
            height,
            initial_scroll,
        } = self.viewport;
        if !(width.is_finite() && width > 0.0) {
            return Err(Error::invalid_config("viewport.width", "must be a positive number"));
        }
        if !(height.is_finite() && height > 0.0) {
            return Err(Error::invalid_config("viewport.height", "must be a positive number"));
        }
        if !(initial_scroll.is_finite() && initial_scroll >= 0.0) {
            return Err(Error::invalid_config(
                "viewport.initial_scroll",
                "must be a non-negative number",
            ));
        }
        self.tracker_options()?;
        self.transition()?;
        Ok(())
    }

    /// Tracker options for every reveal block.
    pub fn tracker_options(&self) -> Result<TrackerOptions> {
        Ok(TrackerOptions::new()
            .with_mode(self.reveal.mode)
            .try_with_threshold(self.reveal.threshold)?)
    }

    /// The transition applied to every reveal block, before staggering.
    pub fn transition(&self) -> Result<RevealTransition> {
        let easing: Easing = self.reveal.easing.parse()?;
        Ok(RevealTransition::new()
            .with_duration(Duration::from_millis(self.reveal.duration_ms))
            .with_easing(easing))
    }

    /// Delay between consecutive items of a staggered list.
    pub fn stagger(&self) -> Duration {
        Duration::from_millis(self.reveal.stagger_ms)
    }

    /// The viewport size pages are laid out for.
    pub fn viewport_size(&self) -> Size {
        Size::new(self.viewport.width, self.viewport.height)
    }
}
