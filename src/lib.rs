pub mod config;
pub mod observe;
pub mod redirect;
pub mod table;

use std::sync::Arc;

use crate::{
    observe::{JsonLineObserver, ResolveObserver},
    table::RedirectTable,
};

/// Shared state for the redirect handlers. The table is built once before
/// serving begins and never mutated afterwards, so it is shared without a
/// lock.
pub struct AppState {
    pub table: RedirectTable,
    pub observer: Arc<dyn ResolveObserver>,
}

impl AppState {
    pub fn new(table: RedirectTable) -> Self {
        Self {
            table,
            observer: Arc::new(JsonLineObserver),
        }
    }

    pub fn with_observer(table: RedirectTable, observer: Arc<dyn ResolveObserver>) -> Self {
        Self { table, observer }
    }
}
