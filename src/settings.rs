//! Display settings and field tuning
//!
//! Defaults reproduce the built-in constants. On web, overrides can be placed
//! as JSON in LocalStorage; anything missing falls back to the default.

use serde::{Deserialize, Serialize};

use crate::renderer::Color;
use crate::sim::FieldConfig;

/// Field and presentation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Grid shape and motion tuning
    pub field: FieldConfig,

    // === Colors ===
    /// Full-surface fill painted every frame
    pub background: Color,
    /// Particle fill
    pub particle_color: Color,
    /// Pointer coordinate label
    pub label_color: Color,

    // === HUD ===
    /// Draw the pointer coordinates at the pointer
    pub show_pointer_label: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field: FieldConfig::default(),

            background: Color::BLACK,
            particle_color: Color::WHITE,
            // Same as the background, so the label only shows over particles
            label_color: Color::BLACK,

            show_pointer_label: true,
        }
    }
}

impl Settings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "particle_scatter_settings";

    /// Parse settings JSON and sanitise the field config
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.field.validate();
        Ok(settings)
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
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

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::ReturnRule;

    #[test]
    fn test_empty_json_is_default() {
        let settings = Settings::from_json("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let json = r#"{
            "field": { "rows": 4, "return_rule": { "kind": "clamped", "max_speed": 6.0 } },
            "show_pointer_label": false
        }"#;
        let settings = Settings::from_json(json).unwrap();

        assert_eq!(settings.field.rows, 4);
        assert_eq!(settings.field.columns, 200);
        assert_eq!(settings.field.spacing, 3.0);
        assert_eq!(settings.field.return_rule, ReturnRule::Clamped { max_speed: 6.0 });
        assert!(!settings.show_pointer_label);
        assert_eq!(settings.particle_color, Color::WHITE);
    }

    #[test]
    fn test_invalid_values_are_sanitised() {
        let settings = Settings::from_json(r#"{ "field": { "columns": 0, "radius": -3.0 } }"#)
            .unwrap();
        assert_eq!(settings.field, FieldConfig::default());
    }

    #[test]
    fn test_oversized_grid_falls_back_to_default() {
        let json = r#"{ "field": { "rows": 4294967296, "columns": 4294967296 } }"#;
        let settings = Settings::from_json(json).unwrap();
        assert_eq!(settings.field.rows, 50);
        assert_eq!(settings.field.columns, 200);

        let driver = crate::FrameDriver::new(settings, 1);
        assert_eq!(driver.field().len(), 50 * 200);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Settings::from_json("{ not json").is_err());
    }
}
