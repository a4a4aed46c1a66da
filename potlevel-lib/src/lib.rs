//! A library for leveling a Monzo current account balance against a savings
//! pot.
//!
//! The crate has two halves: a thin authenticated [`Client`] over the handful
//! of Monzo endpoints the tool needs, and the [`Level`] operation which
//! decides whether money should move into or out of a pot to bring the
//! account balance to a target.

#![deny(
    clippy::all,
    missing_debug_implementations,
    missing_copy_implementations,
    missing_docs
)]
#![warn(clippy::pedantic)]

mod account;
pub use account::Account;
mod balance;
pub use balance::Balance;
mod pot;
pub use pot::Pot;
mod api;
pub use api::Api;
mod client;
pub use client::{Client, Direction, Error, DEFAULT_BASE_URL};
pub mod level;
#[doc(inline)]
pub use level::Level;
