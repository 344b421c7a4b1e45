use crate::config::ServerConfig;
use pimon_common::types::FleetEntry;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// Most-recent state per configured host, keyed by the host address from
/// the config. Entries appear after the first poll attempt and are
/// overwritten in place on every sweep; nothing is ever removed.
pub type FleetMap = HashMap<String, FleetEntry>;

#[derive(Clone)]
pub struct AppState {
    pub fleet: Arc<Mutex<FleetMap>>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            fleet: Arc::new(Mutex::new(HashMap::new())),
            config: Arc::new(config),
        }
    }

    /// Lock the fleet map, recovering a poisoned lock.
    pub fn lock_fleet(&self) -> MutexGuard<'_, FleetMap> {
        self.fleet
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
