//! Meteor Mayhem (workspace facade crate).
//!
//! Re-exports the workspace crates under `meteor_mayhem::{core,engine,input,term,types}`
//! and hosts the binary's command line and logging setup.

pub mod cli;
pub mod logging;

pub use meteor_mayhem_core as core;
pub use meteor_mayhem_engine as engine;
pub use meteor_mayhem_input as input;
pub use meteor_mayhem_term as term;
pub use meteor_mayhem_types as types;
