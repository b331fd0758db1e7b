//! Participant identifier decoding (NIP-19).

use nostr::nips::nip19::{FromBech32, Nip19};
use nostr::PublicKey;
use tracing::debug;

/// Decodes a human-shareable `npub` or `nprofile` reference into the raw
/// public key used to key every map in this crate.
///
/// Returns `None` for malformed bech32 and for any other NIP-19 entity
/// (`nsec`, `note`, ...), so callers can distinguish "no such identifier"
/// from a transport failure without an error path.
#[must_use]
pub fn participant_from_bech32(reference: &str) -> Option<PublicKey> {
    match Nip19::from_bech32(reference) {
        Ok(Nip19::Pubkey(public_key)) => Some(public_key),
        Ok(Nip19::Profile(profile)) => Some(profile.public_key),
        Ok(_) => {
            debug!("{reference} is not an npub/nprofile");
            None
        }
        Err(error) => {
            debug!("failed to decode {reference}: {error}");
            None
        }
    }
}
