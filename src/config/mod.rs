mod loader;
mod store;
mod types;

pub use loader::{save_preferences, ConfigError};
pub use store::PreferencesStore;
pub use types::{AutoSleepPreferences, Config, LinksConfig, Preferences, UiConfig};
