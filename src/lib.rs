#![doc(test(attr(deny(warnings))))]

//! Split Core offers the form, submission, and cache-reconciliation
//! primitives that power shared-expense client applications.

pub mod api;
pub mod config;
pub mod domain;
pub mod errors;
pub mod flows;
pub mod forms;
pub mod notify;
pub mod screen;
pub mod store;
pub mod submit;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Split Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
