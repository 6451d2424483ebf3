//! OPI Storage Common Library
//!
//! Resource lifecycle exerciser for the OPI storage services, the gRPC
//! adapters it runs over, and an in-memory backend emulating the services.

pub mod backend;
pub mod client;
pub mod error;
pub mod lifecycle;
pub mod memory;
pub mod types;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub mod generated {
    #![allow(clippy::all)]
    include!("generated/opi_api.storage.v1.rs");
}

// Re-export commonly used types
pub use backend::{Backend, BackendError, BackendPlan, BackendReport};
pub use error::{Error, Result};
pub use lifecycle::{
    run_lifecycle, run_lifecycle_with, LifecycleClient, LifecycleFailure, LifecycleResult,
    LifecycleState, LifecycleStep, LifecycleSummary,
};
pub use memory::{InMemoryBackend, InMemoryClient};
pub use types::*;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default storage daemon endpoint
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:50051";
