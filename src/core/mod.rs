//! Reconciliation engine and derived metrics. Everything here is pure
//! (modulo the backup's file I/O): callers read the stores and pass
//! explicit values in.

pub mod backup;
pub mod calls;
pub mod classify;
pub mod logic;
pub mod metrics;
pub mod reconcile;

pub use logic::Core;
pub use reconcile::build_view;
