//! Default seed relays.
//!
//! Queried on first run, before any relay-list events have been seen, to
//! bootstrap the candidate list.

/// Relays to ask for relay-list and block-list events when nothing else is
/// known yet. Both are aggregate/directory relays.
pub const DEFAULT_RELAYS: [&str; 2] = ["wss://directory.yabu.me/", "wss://purplepag.es/"];

#[cfg(test)]
mod tests {
    use crate::relay::RelayUrl;

    use super::*;

    #[test]
    fn default_relays_are_already_canonical_and_secure() {
        for address in DEFAULT_RELAYS {
            let url = RelayUrl::parse(address).unwrap();
            assert_eq!(url.as_str(), address);
            assert!(url.is_secure());
        }
    }
}
