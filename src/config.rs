use anyhow::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::warn;

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub classifier: ClassifierConfig,
    #[serde(default)]
    pub pointer: PointerConfig,
    #[serde(default)]
    pub debounce: DebounceConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ClassifierConfig {
    /// Max x distance between neighbouring fingertips of a flat hand (normalized)
    #[serde(default = "default_flat_hand_threshold")]
    pub flat_hand_threshold: f32,
    /// Zoom Out: every wrist angle (thumb-index, index-middle, middle-ring,
    /// ring-pinky) must be below these, in degrees
    #[serde(default = "default_zoom_out_max_deg")]
    pub zoom_out_max_deg: [f32; 4],
    /// Zoom In: every wrist angle must exceed these, in degrees
    #[serde(default = "default_zoom_in_min_deg")]
    pub zoom_in_min_deg: [f32; 4],
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PointerConfig {
    /// EMA factor for position
    #[serde(default = "default_pointer_alpha")]
    pub alpha: f32,
    /// Deadzone at rest (px)
    #[serde(default = "default_deadzone_base")]
    pub deadzone_base: f32,
    /// Deadzone at full speed (px)
    #[serde(default = "default_deadzone_min")]
    pub deadzone_min: f32,
    /// Speed (px/frame) at which the deadzone bottoms out
    #[serde(default = "default_deadzone_speed")]
    pub deadzone_speed: f32,
    /// Per-axis clamp on a single update (px)
    #[serde(default = "default_max_step")]
    pub max_step: f32,
    /// EMA factor for direction
    #[serde(default = "default_direction_alpha")]
    pub direction_alpha: f32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DebounceConfig {
    /// Consecutive identical labels required before one is emitted
    #[serde(default = "default_debounce_threshold")]
    pub threshold: usize,
}

fn default_flat_hand_threshold() -> f32 { crate::hand::FLAT_HAND_THRESHOLD }
fn default_zoom_out_max_deg() -> [f32; 4] { [4.0, 4.0, 5.0, 4.0] }
fn default_zoom_in_min_deg() -> [f32; 4] { [30.0, 5.0, 5.0, 10.0] }
fn default_pointer_alpha() -> f32 { 0.35 }
fn default_deadzone_base() -> f32 { 12.0 }
fn default_deadzone_min() -> f32 { 4.0 }
fn default_deadzone_speed() -> f32 { 25.0 }
fn default_max_step() -> f32 { 25.0 }
fn default_direction_alpha() -> f32 { 0.45 }
fn default_debounce_threshold() -> usize { 1 }

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            flat_hand_threshold: default_flat_hand_threshold(),
            zoom_out_max_deg: default_zoom_out_max_deg(),
            zoom_in_min_deg: default_zoom_in_min_deg(),
        }
    }
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            alpha: default_pointer_alpha(),
            deadzone_base: default_deadzone_base(),
            deadzone_min: default_deadzone_min(),
            deadzone_speed: default_deadzone_speed(),
            max_step: default_max_step(),
            direction_alpha: default_direction_alpha(),
        }
    }
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            threshold: default_debounce_threshold(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Load `path`, falling back to defaults when it is missing or invalid
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("config {} not loaded ({}), using defaults", path.display(), e);
                Self::default()
            }
        }
    }
}
