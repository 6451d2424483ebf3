//! OPI Storage Simulator Daemon
//!
//! Serves the NVMe-oF remote controller, null debug and AIO controller
//! services from in-memory state.

pub mod config;
pub mod grpc;
pub mod state;
