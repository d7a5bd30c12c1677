use std::env;
use std::path::PathBuf;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub empty_result_is_error: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            data_dir: env::var("CLINIC_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| {
                    warn!("CLINIC_DATA_DIR not set, using ./data");
                    PathBuf::from("./data")
                }),
            empty_result_is_error: env::var("CLINIC_EMPTY_RESULT_IS_ERROR")
                .ok()
                .and_then(|raw| match raw.parse() {
                    Ok(flag) => Some(flag),
                    Err(_) => {
                        warn!("CLINIC_EMPTY_RESULT_IS_ERROR is not a boolean, using default");
                        None
                    }
                })
                .unwrap_or(true),
        }
    }
}
