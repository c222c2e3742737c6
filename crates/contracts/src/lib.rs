//! Shared data contracts for the BI dashboard backend and its clients.
//!
//! Everything here is plain serde data. Computation lives in the backend.

pub mod dashboards;
pub mod enums;
pub mod shared;
pub mod system;
