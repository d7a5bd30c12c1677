use tempfile::TempDir;

use shared_config::AppConfig;
use shared_models::CallerIdentity;
use shared_store::{StoreContext, StoreError};

/// Installs an env-filtered subscriber for the test binary. Safe to call
/// from every test; repeat installs are ignored.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with_test_writer()
        .try_init();
}

/// Store configuration backed by a per-test temporary directory. Keep the
/// value alive for as long as the context is in use; dropping it deletes the
/// directory.
pub struct TestConfig {
    dir: TempDir,
    pub empty_result_is_error: bool,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl TestConfig {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp store dir"),
            empty_result_is_error: true,
        }
    }

    pub fn with_policy(empty_result_is_error: bool) -> Self {
        Self {
            empty_result_is_error,
            ..Self::new()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            data_dir: self.dir.path().to_path_buf(),
            empty_result_is_error: self.empty_result_is_error,
        }
    }

    pub fn open_context(&self) -> Result<StoreContext, StoreError> {
        init_tracing();
        StoreContext::open(&self.to_app_config())
    }
}

pub fn caller(token: &str) -> CallerIdentity {
    CallerIdentity::new(token)
}
