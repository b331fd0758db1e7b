//! Blocked-relay resolution from block-list events (NIP-51, kind 10006).
//!
//! A block-list event carries public `relay` tags everyone can read, plus an
//! optional encrypted payload in its content holding further `relay` tags
//! the author keeps private. Resolution merges both portions, degrading to
//! the public portion alone whenever the private one cannot be recovered.

use std::collections::BTreeSet;

use nostr::{Event, PublicKey};
use tracing::warn;

use crate::signer::{Decryptor, EncryptionScheme};

use super::url::RelayUrl;

/// Marker NIP-04 embeds in its ciphertexts; its presence selects the legacy
/// scheme when that capability exists.
const NIP04_MARKER: &str = "?iv=";

/// Resolves the full blocked-relay set from a block-list event.
///
/// The public portion comes from the event's `relay` tags. If the event
/// content is non-empty it is treated as an encrypted private list: the
/// scheme is chosen by capability probing (NIP-04 when the ciphertext
/// carries the `?iv=` marker and the capability supports it, otherwise
/// NIP-44 when supported), and exactly one decryption attempt is made. A
/// failed attempt does not fall back to the other scheme. Decryption
/// failure, missing capability, or an unparsable payload all degrade to the
/// public portion alone with a warning; this function never fails.
///
/// `viewer` is the counterparty for the decryption, normally the block
/// list's author looking at their own list.
pub async fn resolve_blocked_relays<D: Decryptor>(
    event: &Event,
    viewer: &PublicKey,
    decryptor: &D,
) -> BTreeSet<RelayUrl> {
    let mut blocked = relay_set(event.tags.iter().map(nostr::Tag::as_slice));
    if !event.content.is_empty() {
        blocked.extend(resolve_private_portion(event, viewer, decryptor).await);
    }
    blocked
}

async fn resolve_private_portion<D: Decryptor>(
    event: &Event,
    viewer: &PublicKey,
    decryptor: &D,
) -> BTreeSet<RelayUrl> {
    let Some(scheme) = select_scheme(&event.content, decryptor) else {
        warn!("no decryption capability for private block list");
        return BTreeSet::new();
    };
    let plaintext = match decryptor.decrypt(scheme, viewer, &event.content).await {
        Ok(plaintext) => plaintext,
        Err(error) => {
            warn!("failed to decrypt private block list via {scheme}: {error}");
            return BTreeSet::new();
        }
    };
    match serde_json::from_str::<Vec<Vec<String>>>(&plaintext) {
        Ok(tags) => relay_set(tags.iter().map(Vec::as_slice)),
        Err(error) => {
            warn!("private block list is not a tag array: {error}");
            BTreeSet::new()
        }
    }
}

/// Picks the decryption scheme for a ciphertext.
///
/// Selection is by capability presence only: a supported scheme that later
/// fails to decrypt is not substituted.
fn select_scheme<D: Decryptor>(ciphertext: &str, decryptor: &D) -> Option<EncryptionScheme> {
    if ciphertext.contains(NIP04_MARKER) && decryptor.supports(EncryptionScheme::Nip04) {
        Some(EncryptionScheme::Nip04)
    } else if decryptor.supports(EncryptionScheme::Nip44) {
        Some(EncryptionScheme::Nip44)
    } else {
        None
    }
}

/// Collects normalized addresses from `relay` tags, skipping malformed ones.
fn relay_set<'a>(tags: impl Iterator<Item = &'a [String]>) -> BTreeSet<RelayUrl> {
    tags.filter(|tag| tag.first().is_some_and(|marker| marker == "relay"))
        .filter_map(|tag| tag.get(1))
        .filter_map(|address| RelayUrl::parse(address).ok())
        .collect()
}
