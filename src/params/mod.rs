//! Parameter data structures, snapshot loading, and caller-side validation

mod data;
pub mod loader;
pub mod validate;

pub use data::{Acquisition, Financing, ParameterSet, RentOps, Settings, Tax};
pub use loader::{load_snapshot, save_snapshot, Snapshot, SnapshotError};
pub use validate::{clamp, is_ready};
