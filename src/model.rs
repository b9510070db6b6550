//! Shared application state, stored in serenity's global context so every
//! event handler can reach it.

use std::collections::HashMap;
use std::sync::Arc;

use serenity::prelude::TypeMapKey;
use tokio::sync::{Mutex, RwLock};

use crate::config::BotConfig;
use crate::sheets::{Schema, SheetsClient};

/// The central, shared state of the application. An `Arc<AppState>` lives in
/// the global context; commands and the daily job both borrow from it.
pub struct AppState {
    pub config: Arc<BotConfig>,
    pub sheets: Arc<SheetsClient>,
    pub schema: Schema,
    /// One async mutex per list name. Appends compute their target row from a
    /// read of current occupancy, so two concurrent requests for the same
    /// list must not interleave between that read and the write.
    list_locks: RwLock<HashMap<String, Arc<Mutex<()>>>>,
}

impl AppState {
    pub fn new(config: Arc<BotConfig>, sheets: Arc<SheetsClient>, schema: Schema) -> Self {
        Self {
            config,
            sheets,
            schema,
            list_locks: RwLock::new(HashMap::new()),
        }
    }

    pub async fn from_ctx(ctx: &serenity::prelude::Context) -> Option<Arc<Self>> {
        ctx.data.read().await.get::<AppState>().cloned()
    }

    /// The append lock for one list, created on first use. Locks are keyed by
    /// list name and never dropped; the set of lists is small and stable.
    pub async fn list_lock(&self, list: &str) -> Arc<Mutex<()>> {
        if let Some(lock) = self.list_locks.read().await.get(list) {
            return lock.clone();
        }
        let mut locks = self.list_locks.write().await;
        locks
            .entry(list.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}

impl TypeMapKey for AppState {
    type Value = Arc<AppState>;
}
