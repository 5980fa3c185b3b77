//! Core domain logic for the waitlist landing page: the demo script, the
//! playback state machine behind the terminal animation, and the waitlist
//! submission flow.

#[cfg(feature = "ssr")]
pub mod config;
mod script;
mod sequencer;
pub mod waitlist;
#[cfg(test)]
mod tests;

pub use script::*;
pub use sequencer::*;
