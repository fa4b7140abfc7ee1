//! Decorative notch annotation.
//!
//! A physical cipher wheel needs a home-position marker so the two
//! disks can be realigned after each message. The notch rule emits one
//! extra open arc just inside a specific ring, under a specific
//! character, and nothing else: the predicate is (ring ordinal,
//! character code), both configurable.

use serde::Deserialize;

use crate::{
    geometry::Point,
    layout::{Sector, open_arc_data},
};

fn default_enabled() -> bool {
    true
}

fn default_ring_ordinal() -> usize {
    2
}

fn default_char_code() -> u8 {
    b' '
}

fn default_offset() -> f64 {
    2.0
}

/// Rule emitting a home-position notch arc.
///
/// By default the rule is enabled and marks the space character on the
/// second ring with an open arc at `inner_radius + 2`. The arc spans
/// the same angular bounds as the triggering sector and is stroked
/// only, never closed into a wedge.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NotchRule {
    enabled: bool,
    ring_ordinal: usize,
    char_code: u8,
    offset: f64,
}

impl NotchRule {
    /// Creates a notch rule for the given ring ordinal (1-based) and
    /// character code.
    pub fn new(ring_ordinal: usize, char_code: u8, offset: f64) -> Self {
        Self {
            enabled: true,
            ring_ordinal,
            char_code,
            offset,
        }
    }

    /// Returns a disabled copy of this rule.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Returns the radial offset of the notch above the ring's inner
    /// boundary
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Returns true if the notch fires for this ring and character.
    pub fn applies(&self, ring_ordinal: usize, char_code: u8) -> bool {
        self.enabled && ring_ordinal == self.ring_ordinal && char_code == self.char_code
    }

    /// Emits the notch path data if the rule fires, `None` otherwise.
    ///
    /// The ring ordinal is passed in explicitly by the composer; the
    /// rule itself holds no drawing state.
    pub fn maybe_notch(
        &self,
        ring_ordinal: usize,
        char_code: u8,
        sector: Sector,
        center: Point,
        inner_radius: f64,
    ) -> Option<String> {
        if !self.applies(ring_ordinal, char_code) {
            return None;
        }
        Some(open_arc_data(center, inner_radius + self.offset, sector))
    }
}

impl Default for NotchRule {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            ring_ordinal: default_ring_ordinal(),
            char_code: default_char_code(),
            offset: default_offset(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::ring_sectors;

    #[test]
    fn test_fires_only_for_configured_ring_and_char() {
        let rule = NotchRule::default();

        assert!(rule.applies(2, b' '));
        assert!(!rule.applies(1, b' '));
        assert!(!rule.applies(3, b' '));
        assert!(!rule.applies(2, b'A'));
    }

    #[test]
    fn test_disabled_rule_never_fires() {
        let rule = NotchRule::default().disabled();
        assert!(!rule.applies(2, b' '));
    }

    #[test]
    fn test_notch_arc_radius_includes_offset() {
        let rule = NotchRule::default();
        let center = Point::new(100.0, 100.0);
        let sector = ring_sectors(4)[0];

        let d = rule
            .maybe_notch(2, b' ', sector, center, 30.0)
            .expect("rule should fire");

        assert!(d.contains("A 32.000 32.000 0 0 1"));
        assert!(!d.contains('Z'));
    }

    #[test]
    fn test_custom_predicate() {
        let rule = NotchRule::new(3, b'*', 1.5);

        assert!(rule.applies(3, b'*'));
        assert!(!rule.applies(2, b' '));

        let center = Point::new(0.0, 0.0);
        let d = rule
            .maybe_notch(3, b'*', ring_sectors(2)[1], center, 10.0)
            .expect("rule should fire");
        assert!(d.contains("A 11.500 11.500"));
    }
}
