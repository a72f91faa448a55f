use config::{Config, ConfigError, File as ConfigFile};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Root folder holding the study images (subfolders included).
    pub image_dir: String,
    /// CSV file the ratings are appended to.
    pub results_path: String,
}

pub fn load_configuration() -> Result<AppConfig, ConfigError> {
    let builder = Config::builder()
        .set_default("image_dir", "images")?
        .set_default("results_path", "human_ratings.csv")?
        .add_source(ConfigFile::with_name("Config").required(false))
        .build()?;
    builder.try_deserialize::<AppConfig>()
}
