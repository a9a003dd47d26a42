pub mod load;
pub mod types;

pub use types::{Config, ConfigError, Language, LayoutProfile, MonitorSpec, UserSettings};
