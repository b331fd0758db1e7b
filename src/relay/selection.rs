//! Covering-set selection over caller-ordered candidate relays.

use std::collections::{HashMap, HashSet};

use nostr::PublicKey;

use super::url::RelayUrl;

/// One participant's relay preference list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceEntry {
    /// The participant reachable through these relays.
    pub participant: PublicKey,
    /// Relays through which the participant may be reached. Order is
    /// irrelevant; duplicates are ignored.
    pub relays: Vec<RelayUrl>,
}

impl PreferenceEntry {
    /// Creates a preference entry for one participant.
    #[must_use]
    pub fn new(participant: PublicKey, relays: Vec<RelayUrl>) -> Self {
        Self {
            participant,
            relays,
        }
    }
}

/// Outcome of a covering-set pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelaySelection {
    /// Chosen relays, in selection order.
    pub relays: Vec<RelayUrl>,
    /// Participants no chosen relay reaches, each with its original
    /// preference list, so the caller can alert on unreachable participants.
    pub uncovered: Vec<PreferenceEntry>,
}

impl RelaySelection {
    /// Returns true when every participant is reachable through a chosen
    /// relay.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.uncovered.is_empty()
    }
}

/// Greedily selects the relays to connect to so that every participant is
/// covered by at least one of them.
///
/// Candidate order is authoritative and must be stable: candidates are
/// visited exactly in the order given, with no internal reordering or
/// popularity tie-break, so the caller can bias the pass toward relays it
/// already knows to be healthy. An unstable candidate order makes the
/// result unstable in turn.
///
/// Candidates that are not `wss://`, or that appear in `blocked` or `dead`,
/// are skipped. A surviving candidate is selected as soon as it reaches at
/// least one participant no earlier pick has claimed, and it then claims
/// every such participant; candidates left with nothing to claim are never
/// selected. Participants still unclaimed after the pass are reported in
/// [`RelaySelection::uncovered`].
///
/// Never fails: with no usable candidates the selection is empty and every
/// participant is reported uncovered.
#[must_use]
pub fn select_relays(
    preferences: &[PreferenceEntry],
    candidates: &[RelayUrl],
    blocked: &HashSet<RelayUrl>,
    dead: &HashSet<RelayUrl>,
) -> RelaySelection {
    let mut unclaimed: HashSet<PublicKey> = preferences
        .iter()
        .map(|entry| entry.participant)
        .collect();

    let mut served_by: HashMap<&RelayUrl, HashSet<PublicKey>> = HashMap::new();
    for entry in preferences {
        for relay in &entry.relays {
            served_by
                .entry(relay)
                .or_default()
                .insert(entry.participant);
        }
    }

    let mut chosen = Vec::new();
    for candidate in candidates {
        if !candidate.is_secure() || blocked.contains(candidate) || dead.contains(candidate) {
            continue;
        }
        let Some(served) = served_by.get(candidate) else {
            continue;
        };
        let claimed: Vec<PublicKey> = served
            .iter()
            .filter(|participant| unclaimed.contains(*participant))
            .copied()
            .collect();
        if claimed.is_empty() {
            continue;
        }
        for participant in claimed {
            unclaimed.remove(&participant);
        }
        chosen.push(candidate.clone());
    }

    let uncovered = preferences
        .iter()
        .filter(|entry| unclaimed.contains(&entry.participant))
        .cloned()
        .collect();

    RelaySelection {
        relays: chosen,
        uncovered,
    }
}
