use std::sync::Arc;

use crate::dispatch::Dispatcher;
use explorer_providers::config::ProvidersConfig;

/// Shared per-process state: the dispatcher with its configured adapters.
/// Immutable after construction; requests only read through it.
pub struct AppState {
    pub dispatcher: Dispatcher,
}

impl AppState {
    pub fn new(config: &ProvidersConfig) -> Arc<Self> {
        Arc::new(Self {
            dispatcher: Dispatcher::new(config),
        })
    }
}
