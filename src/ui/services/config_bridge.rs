use crate::config::{AppConfig, ConfigManager, ConfigSection, PipelineConfig};
use crate::error::StockcastError;
use crate::ui::state::AppState;

pub struct ConfigBridge;

impl ConfigBridge {
    /// Settings edited in the side panel, checked before a run
    pub fn to_pipeline_config(state: &AppState) -> Result<PipelineConfig, StockcastError> {
        let config = state.pipeline.clone();
        config.validate()?;
        Ok(config)
    }

    /// Snapshot of the UI state as a saveable configuration
    pub fn to_app_config(state: &AppState) -> AppConfig {
        AppConfig {
            pipeline: state.pipeline.clone(),
            display: state.display.clone(),
        }
    }

    /// Persist the current settings to the file the app was started with
    pub fn save_settings(state: &AppState) -> Result<(), StockcastError> {
        let path = state.config_path.as_ref().ok_or_else(|| {
            StockcastError::Configuration("No configuration file path set".to_string())
        })?;

        let manager = ConfigManager::new();
        let snapshot = Self::to_app_config(state);
        manager.update(|config| *config = snapshot)?;
        manager.save_to_file(path)?;

        log::info!("Saved settings to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_fraction_blocks_run() {
        let mut state = AppState::default();
        state.pipeline.test_fraction = 0.0;
        assert!(ConfigBridge::to_pipeline_config(&state).is_err());
    }

    #[test]
    fn test_snapshot_matches_state() {
        let mut state = AppState::default();
        state.pipeline.seed = 9;
        let config = ConfigBridge::to_app_config(&state);
        assert_eq!(config.pipeline.seed, 9);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_save_settings_writes_file() {
        let path = std::env::temp_dir().join(format!("stockcast_bridge_{}.toml", std::process::id()));
        let mut state = AppState::default();
        state.config_path = Some(path.clone());
        state.display.currency_symbol = "$".to_string();

        ConfigBridge::save_settings(&state).unwrap();

        let manager = ConfigManager::new();
        manager.load_layered(Some(&path)).unwrap();
        assert_eq!(manager.get().display.currency_symbol, "$");
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_save_settings_without_path() {
        assert!(ConfigBridge::save_settings(&AppState::default()).is_err());
    }
}
