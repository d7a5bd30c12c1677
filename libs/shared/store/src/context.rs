use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

use shared_config::AppConfig;

use crate::error::StoreError;
use crate::id::IdentifierGenerator;
use crate::record_store::RecordStore;

/// How list-shaped reads (get-all, search, history) treat an empty result
/// set. The source system reports an empty set as `NotFound`; flipping the
/// flag yields the conventional empty collection instead.
#[derive(Debug, Clone, Copy)]
pub struct QueryPolicy {
    pub empty_result_is_error: bool,
}

/// Owns the shared durable address space and everything the entity services
/// need from it. Opened once at process start and passed by reference into
/// every service constructor; there is no teardown, persistence is automatic.
pub struct StoreContext {
    db: sled::Db,
    policy: QueryPolicy,
    ids: IdentifierGenerator,
}

impl StoreContext {
    pub fn open(config: &AppConfig) -> Result<Self, StoreError> {
        info!("Opening record store at {:?}", config.data_dir);
        let db = sled::open(&config.data_dir)?;
        Ok(Self {
            db,
            policy: QueryPolicy {
                empty_result_is_error: config.empty_result_is_error,
            },
            ids: IdentifierGenerator,
        })
    }

    /// Opens the typed store registered under `namespace`. Trees are cheap
    /// handles onto the shared database, created on first use.
    pub fn open_store<V>(&self, namespace: &str) -> Result<RecordStore<V>, StoreError>
    where
        V: Serialize + DeserializeOwned,
    {
        debug!("Opening store namespace {}", namespace);
        let tree = self.db.open_tree(namespace)?;
        Ok(RecordStore::new(tree))
    }

    pub fn policy(&self) -> QueryPolicy {
        self.policy
    }

    pub fn ids(&self) -> IdentifierGenerator {
        self.ids
    }
}
