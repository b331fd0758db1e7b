//! Relay Trend Core Library
//!
//! Core functionality for nostr-relay-trend: given the relay-list and
//! block-list events published by a set of followed participants, decide
//! which relays to open connections to and classify the health of those
//! connections for display.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![deny(unsafe_code)]

pub mod defaults;
pub mod identity;
pub mod relay;
pub mod signer;
