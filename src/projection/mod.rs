//! Year-by-year projection: carried state, the engine, and the emitted schedule

mod state;
mod engine;
mod schedule;

pub use state::ProjectionState;
pub use engine::ProjectionEngine;
pub use schedule::{ResultsSummary, YearRow};
