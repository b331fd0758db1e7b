//! Connection-state classification and display glyphs.

use std::collections::HashMap;
use std::fmt;

use super::url::RelayUrl;

/// Semantic category for a relay connection state.
///
/// The connection layer reports per-relay states as free-form labels
/// (`"connected"`, `"retrying"`, ...). Categories collapse those labels into
/// the five buckets the dashboard reports, each with a fixed display glyph.
/// Classification is total: any unrecognized label, and any relay with no
/// reported state at all, lands in [`Unknown`](Self::Unknown).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionCategory {
    /// Connected and ready.
    Connected,
    /// Connection established but idle.
    Dormant,
    /// Transitional: connecting or retrying.
    Pending,
    /// The connection errored or the relay rejected us.
    Failed,
    /// Not yet observed, terminated, or in an unrecognized state.
    Unknown,
}

impl ConnectionCategory {
    /// Every category, in display order.
    pub const ALL: [Self; 5] = [
        Self::Connected,
        Self::Dormant,
        Self::Pending,
        Self::Failed,
        Self::Unknown,
    ];

    /// Classifies a raw connection-state label.
    ///
    /// Total over arbitrary input: unrecognized labels map to `Unknown`.
    #[must_use]
    pub fn from_state(raw: &str) -> Self {
        match raw {
            "connected" => Self::Connected,
            "dormant" => Self::Dormant,
            "connecting" | "retrying" => Self::Pending,
            "error" | "rejected" => Self::Failed,
            _ => Self::Unknown,
        }
    }

    /// The fixed display glyph for this category.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Connected => "\u{1f7e2}",  // 🟢
            Self::Dormant => "\u{1f535}",    // 🔵
            Self::Pending => "\u{1f7e1}",    // 🟡
            Self::Failed => "\u{1f534}",     // 🔴
            Self::Unknown => "\u{2b1c}",     // ⬜
        }
    }

    /// Looks a category up by its display glyph.
    ///
    /// Returns `None` for anything that is not one of the five fixed glyphs,
    /// so callers can distinguish a recognized category from junk input.
    #[must_use]
    pub fn from_glyph(glyph: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.glyph() == glyph)
    }

    /// The raw state labels that make up this category, in display order.
    ///
    /// `Unknown` lists only the recognized idle states; at classification
    /// time it additionally absorbs unrecognized labels and relays that were
    /// never observed.
    #[must_use]
    pub const fn states(self) -> &'static [&'static str] {
        match self {
            Self::Connected => &["connected"],
            Self::Dormant => &["dormant"],
            Self::Pending => &["connecting", "retrying"],
            Self::Failed => &["error", "rejected"],
            Self::Unknown => &["initialized", "waiting-for-retrying", "terminated"],
        }
    }

    /// Counts the relays in `population` whose effective category is `self`.
    ///
    /// A relay absent from `live_states` has effective category `Unknown`;
    /// otherwise its reported label is classified with
    /// [`from_state`](Self::from_state). Summing the count over
    /// [`ALL`](Self::ALL) categories therefore always gives the population
    /// size.
    #[must_use]
    pub fn count(self, population: &[RelayUrl], live_states: &HashMap<RelayUrl, String>) -> usize {
        population
            .iter()
            .filter(|&relay| {
                live_states
                    .get(relay)
                    .map_or(Self::Unknown, |state| Self::from_state(state))
                    == self
            })
            .count()
    }
}

impl fmt::Display for ConnectionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> RelayUrl {
        RelayUrl::parse(s).unwrap()
    }

    #[test]
    fn classifies_recognized_states() {
        assert_eq!(
            ConnectionCategory::from_state("connected"),
            ConnectionCategory::Connected
        );
        assert_eq!(
            ConnectionCategory::from_state("dormant"),
            ConnectionCategory::Dormant
        );
        assert_eq!(
            ConnectionCategory::from_state("connecting"),
            ConnectionCategory::Pending
        );
        assert_eq!(
            ConnectionCategory::from_state("retrying"),
            ConnectionCategory::Pending
        );
        assert_eq!(
            ConnectionCategory::from_state("error"),
            ConnectionCategory::Failed
        );
        assert_eq!(
            ConnectionCategory::from_state("rejected"),
            ConnectionCategory::Failed
        );
    }

    #[test]
    fn idle_and_unrecognized_states_are_unknown() {
        for label in ["initialized", "waiting-for-retrying", "terminated", "banana", ""] {
            assert_eq!(
                ConnectionCategory::from_state(label),
                ConnectionCategory::Unknown
            );
        }
    }

    #[test]
    fn glyph_lookup_is_a_bijection_over_categories() {
        for category in ConnectionCategory::ALL {
            assert_eq!(
                ConnectionCategory::from_glyph(category.glyph()),
                Some(category)
            );
        }
        assert_eq!(ConnectionCategory::from_glyph("?"), None);
        assert_eq!(ConnectionCategory::from_glyph(""), None);
    }

    #[test]
    fn states_for_pending_lists_constituents_in_order() {
        assert_eq!(
            ConnectionCategory::Pending.states(),
            &["connecting", "retrying"]
        );
    }

    #[test]
    fn every_listed_state_classifies_back_to_its_category() {
        for category in ConnectionCategory::ALL {
            for state in category.states() {
                assert_eq!(ConnectionCategory::from_state(state), category);
            }
        }
    }

    #[test]
    fn count_treats_unobserved_relays_as_unknown() {
        let population = vec![url("wss://r1.example/"), url("wss://r2.example/")];
        let live: HashMap<RelayUrl, String> =
            [(url("wss://r1.example/"), "connected".to_string())].into();

        assert_eq!(ConnectionCategory::Unknown.count(&population, &live), 1);
        assert_eq!(ConnectionCategory::Connected.count(&population, &live), 1);
        assert_eq!(ConnectionCategory::Failed.count(&population, &live), 0);
    }

    #[test]
    fn count_groups_transitional_states() {
        let population = vec![
            url("wss://r1.example/"),
            url("wss://r2.example/"),
            url("wss://r3.example/"),
        ];
        let live: HashMap<RelayUrl, String> = [
            (url("wss://r1.example/"), "connecting".to_string()),
            (url("wss://r2.example/"), "retrying".to_string()),
            (url("wss://r3.example/"), "rejected".to_string()),
        ]
        .into();

        assert_eq!(ConnectionCategory::Pending.count(&population, &live), 2);
        assert_eq!(ConnectionCategory::Failed.count(&population, &live), 1);
    }

    #[test]
    fn counts_partition_the_population() {
        let population = vec![
            url("wss://r1.example/"),
            url("wss://r2.example/"),
            url("wss://r3.example/"),
            url("wss://r4.example/"),
        ];
        let live: HashMap<RelayUrl, String> = [
            (url("wss://r1.example/"), "connected".to_string()),
            (url("wss://r2.example/"), "made-up-state".to_string()),
            (url("wss://r3.example/"), "dormant".to_string()),
        ]
        .into();

        let total: usize = ConnectionCategory::ALL
            .into_iter()
            .map(|category| category.count(&population, &live))
            .sum();
        assert_eq!(total, population.len());
    }

    #[test]
    fn display_renders_the_glyph() {
        assert_eq!(ConnectionCategory::Connected.to_string(), "\u{1f7e2}");
    }
}
