//! Named column-pattern presets and the best-effort pattern classifier.

use serde::{Deserialize, Serialize};

use crate::models::column::{pattern_from_groups, ColumnDescriptor};

/// A named, fixed column arrangement offered alongside an explicit custom pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnPreset {
    /// `A B C | D E F`
    ThreeThree,
    /// `A B | C D`
    TwoTwo,
    /// `A B | C`
    TwoOne,
    /// `A | B`
    OneOne,
    /// Any pattern that is not exactly one of the above
    Custom,
}

impl ColumnPreset {
    /// All presets, custom last.
    pub const ALL: [Self; 5] = [
        Self::ThreeThree,
        Self::TwoTwo,
        Self::TwoOne,
        Self::OneOne,
        Self::Custom,
    ];

    /// Short key used on the command line and in settings.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::ThreeThree => "3-3",
            Self::TwoTwo => "2-2",
            Self::TwoOne => "2-1",
            Self::OneOne => "1-1",
            Self::Custom => "custom",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::ThreeThree => "Three-three with center aisle",
            Self::TwoTwo => "Two-two with center aisle",
            Self::TwoOne => "Two-one with center aisle",
            Self::OneOne => "One-one with center aisle",
            Self::Custom => "Custom",
        }
    }

    /// Looks a preset up by key. Accepts the kebab-case names as well (`three-three`).
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|preset| {
            preset.key() == key
                || serde_json::to_value(preset)
                    .ok()
                    .and_then(|v| v.as_str().map(|s| s == key))
                    .unwrap_or(false)
        })
    }

    /// Seat group sizes, or `None` for custom.
    const fn groups(self) -> Option<&'static [usize]> {
        let groups: &'static [usize] = match self {
            Self::ThreeThree => &[3, 3],
            Self::TwoTwo => &[2, 2],
            Self::TwoOne => &[2, 1],
            Self::OneOne => &[1, 1],
            Self::Custom => return None,
        };
        Some(groups)
    }

    /// The preset's column descriptors, or `None` for custom.
    #[must_use]
    pub fn columns(self) -> Option<Vec<ColumnDescriptor>> {
        self.groups().map(pattern_from_groups)
    }

    /// Classifies a column pattern as the closest named preset.
    ///
    /// The seat count and the presence of an aisle pick a candidate preset;
    /// the candidate is only returned when the pattern matches its
    /// descriptors exactly, otherwise the result is [`ColumnPreset::Custom`].
    /// The mapping is lossy and not invertible: several arrangements share
    /// the same seat count, and none of them is guessed.
    #[must_use]
    pub fn classify(pattern: &[ColumnDescriptor]) -> Self {
        let seats = pattern.iter().filter(|c| c.is_seat()).count();
        let has_aisle = pattern.iter().any(ColumnDescriptor::is_aisle);

        let candidate = match (seats, has_aisle) {
            (6, true) => Self::ThreeThree,
            (4, true) => Self::TwoTwo,
            (3, true) => Self::TwoOne,
            (2, true) => Self::OneOne,
            _ => return Self::Custom,
        };

        match candidate.columns() {
            Some(columns) if columns.as_slice() == pattern => candidate,
            _ => Self::Custom,
        }
    }
}

impl std::fmt::Display for ColumnPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_classify_as_themselves() {
        for preset in ColumnPreset::ALL {
            if let Some(columns) = preset.columns() {
                assert_eq!(ColumnPreset::classify(&columns), preset);
            }
        }
    }

    #[test]
    fn test_classify_same_seat_count_different_arrangement_is_custom() {
        // 1-2 has three seats and an aisle, like 2-1, but is a different layout
        let pattern = pattern_from_groups(&[1, 2]);
        assert_eq!(ColumnPreset::classify(&pattern), ColumnPreset::Custom);
    }

    #[test]
    fn test_classify_without_aisle_is_custom() {
        let pattern = pattern_from_groups(&[4]);
        assert_eq!(ColumnPreset::classify(&pattern), ColumnPreset::Custom);
    }

    #[test]
    fn test_classify_widebody_is_custom() {
        let pattern = pattern_from_groups(&[3, 4, 3]);
        assert_eq!(ColumnPreset::classify(&pattern), ColumnPreset::Custom);
    }

    #[test]
    fn test_from_key() {
        assert_eq!(ColumnPreset::from_key("3-3"), Some(ColumnPreset::ThreeThree));
        assert_eq!(ColumnPreset::from_key("two-one"), Some(ColumnPreset::TwoOne));
        assert_eq!(ColumnPreset::from_key(" Custom "), Some(ColumnPreset::Custom));
        assert_eq!(ColumnPreset::from_key("4-4"), None);
    }

    #[test]
    fn test_custom_has_no_columns() {
        assert!(ColumnPreset::Custom.columns().is_none());
    }
}
