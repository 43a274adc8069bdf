//! Game loop.
//!
//! [`Session`] is generic over the display ([`RenderSurface`](crate::term::RenderSurface)),
//! the input ([`InputSource`](crate::input::InputSource)) and the time source
//! ([`Clock`](crate::core::Clock)), so the same loop runs in the terminal and
//! headless in tests.

pub mod session;

pub use meteor_mayhem_core as core;
pub use meteor_mayhem_input as input;
pub use meteor_mayhem_term as term;
pub use meteor_mayhem_types as types;

pub use session::{Outcome, Session};
