//! PrimeRendit Engine - Year-by-year projection engine for buy-to-let real-estate investments
//!
//! This library provides:
//! - Parameter model with the product's presets and acquisition-cost helpers
//! - Share-snapshot JSON codec (merge-onto-defaults decoding)
//! - Caller-side readiness gate and range clamping
//! - Deterministic yearly projection: rents, debt service, taxes, net wealth
//! - Summary KPIs (gross yield, cash-on-cash return, total profit)
//! - CSV schedule exports and the German plain-text analysis summary

pub mod params;
pub mod projection;
pub mod report;

// Re-export commonly used types
pub use params::{ParameterSet, Snapshot, SnapshotError};
pub use params::{clamp, is_ready};
pub use projection::{ProjectionEngine, ResultsSummary, YearRow};
