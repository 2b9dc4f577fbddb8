//! Storefront state and command dispatch.
//!
//! The presentation layer owns one [`Storefront`] value and feeds it
//! [`Command`]s; each dispatch returns the [`Event`]s it produced.

mod command;
mod state;

pub use command::{AuthTab, Command, Event};
pub use state::Storefront;
