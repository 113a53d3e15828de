//! Config - 설정 관리
//!
//! - `settings.rs` - FilterSettings / ClassifierSettings
//! - `loader.rs` - `.fws` 폴더 계층 로더

mod loader;
mod settings;

pub use loader::{load_file, parse_settings, SettingsLoader, CONFIG_DIR_NAME};
pub use settings::{ClassifierSettings, FilterSettings, LOCAL_SETTINGS_FILE, SETTINGS_FILE};
