//! Platform independent core of the community resource map client.
//!
//! The whole client state lives in [`AppState`]. User input and
//! network responses are fed in as [`Msg`]s, every handler returns the
//! [`Effect`]s the surrounding runtime has to carry out (fetching,
//! prompting, alerting, moving the map). Nothing in this crate talks to
//! the browser, so every handler can be tested natively.

pub mod config;
pub mod debounce;
pub mod event;
pub mod filter;
pub mod form;
pub mod geo;
pub mod rating;
pub mod timestamp;
pub mod view;

mod error;
mod state;

pub use self::{error::*, state::*};
