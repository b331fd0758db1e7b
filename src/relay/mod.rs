//! Relay membership resolution and connection-health classification.
//!
//! This module decides which relays a client should talk to for a set of
//! followed participants, and summarizes the health of those connections.
//!
//! # Architecture
//!
//! ```text
//! relay-list events (kind 10002)          block-list event (kind 10006)
//!         │                                        │
//!         ▼                                        ▼
//! extract_relay_preferences              resolve_blocked_relays
//!         │                                        │
//!         └────────────┬───────────────────────────┘
//!                      ▼
//!               select_relays ──────▶ RelaySelection
//!                      │
//!                      ▼
//!        ConnectionCategory::count (live telemetry → display counts)
//! ```
//!
//! Everything here is a pure value computation: no connections are opened
//! and no state persists between passes. The only suspension point is the
//! decryption call inside [`resolve_blocked_relays`].

mod blocklist;
mod preferences;
mod selection;
mod status;
mod url;

pub use blocklist::resolve_blocked_relays;
pub use preferences::{extract_relay_preferences, RelayPreference};
pub use selection::{select_relays, PreferenceEntry, RelaySelection};
pub use status::ConnectionCategory;
pub use url::{RelayUrl, RelayUrlError};
