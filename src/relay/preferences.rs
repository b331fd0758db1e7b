//! Relay preference extraction from relay-list events (NIP-65, kind 10002).

use std::collections::HashMap;

use nostr::Event;
use serde::{Deserialize, Serialize};

use super::url::RelayUrl;

/// Read/write preference for a single relay.
///
/// Declared per relay in a participant's relay-list event. Repeated
/// declarations for the same relay merge by logical OR, so a flag never
/// moves back from `true` to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayPreference {
    /// The participant reads events from this relay.
    pub read: bool,
    /// The participant writes events to this relay.
    pub write: bool,
}

impl RelayPreference {
    /// Merges another declaration for the same relay into this one.
    pub fn merge(&mut self, other: Self) {
        self.read |= other.read;
        self.write |= other.write;
    }
}

/// Extracts the relay preference map from a relay-list event.
///
/// Only tags shaped `["r", <address>, ...]` with a parseable address are
/// considered; every other tag is silently skipped. The address is
/// normalized before keying. A two-element tag declares both directions; a
/// third element of `"read"` or `"write"` restricts the relay to that
/// direction, and any other value falls back to declaring both.
///
/// Pure and infallible: an event with no usable tags yields an empty map.
#[must_use]
pub fn extract_relay_preferences(event: &Event) -> HashMap<RelayUrl, RelayPreference> {
    let mut preferences: HashMap<RelayUrl, RelayPreference> = HashMap::new();
    for tag in event.tags.iter().map(nostr::Tag::as_slice) {
        let (Some(marker), Some(address)) = (tag.first(), tag.get(1)) else {
            continue;
        };
        if marker != "r" {
            continue;
        }
        let Ok(url) = RelayUrl::parse(address) else {
            continue;
        };
        let declared = match tag.get(2).map(String::as_str) {
            Some("read") => RelayPreference {
                read: true,
                write: false,
            },
            Some("write") => RelayPreference {
                read: false,
                write: true,
            },
            // No direction marker, or one we don't recognize: both directions
            _ => RelayPreference {
                read: true,
                write: true,
            },
        };
        preferences.entry(url).or_default().merge(declared);
    }
    preferences
}
