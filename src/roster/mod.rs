//! Roster store: read-only access to the base people/company dataset,
//! plus the updated-roster save artifact.

pub mod load;
pub mod save;

pub use load::{load_companies, load_people};
pub use save::save_people;
