// SPDX-License-Identifier: MPL-2.0
//! Dashboard state: the ordered list of clocks plus the dark-mode flag.
//!
//! This is session state only. It starts from a seed and is never written
//! back anywhere, so a restart returns to the seed.

use crate::clock::{catalog, Zone};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fmt;

/// Opaque identifier of a clock, unique within one dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClockId(u64);

impl fmt::Display for ClockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One clock on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockConfig {
    pub id: ClockId,
    pub zone: Zone,
    pub label: String,
}

impl ClockConfig {
    /// IANA identifier of the clock's zone.
    #[must_use]
    pub fn timezone(&self) -> &'static str {
        self.zone.identifier()
    }
}

/// Unvalidated description of a starting clock, as written in the config
/// file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClockSeed {
    pub timezone: String,
    #[serde(default)]
    pub label: Option<String>,
}

impl ClockSeed {
    pub fn new(timezone: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            timezone: timezone.into(),
            label: Some(label.into()),
        }
    }
}

/// The three clocks a fresh dashboard starts with.
#[must_use]
pub fn default_seed() -> Vec<ClockSeed> {
    vec![
        ClockSeed::new("America/New_York", "New York"),
        ClockSeed::new("Europe/London", "London"),
        ClockSeed::new("Asia/Tokyo", "Tokyo"),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardState {
    clocks: Vec<ClockConfig>,
    dark_mode: bool,
    next_id: u64,
}

impl DashboardState {
    /// Creates an empty dashboard.
    #[must_use]
    pub fn new(dark_mode: bool) -> Self {
        Self {
            clocks: Vec::new(),
            dark_mode,
            next_id: 1,
        }
    }

    /// Creates a dashboard holding the built-in three clocks.
    #[must_use]
    pub fn with_default_seed(dark_mode: bool) -> Self {
        let (state, rejected) = Self::from_seed(&default_seed(), dark_mode);
        debug_assert!(rejected.is_empty(), "built-in seed must be valid");
        state
    }

    /// Creates a dashboard from `seeds`, keeping their order.
    ///
    /// Seeds naming an unknown zone are left out and returned as errors so
    /// the caller can report them.
    #[must_use]
    pub fn from_seed(seeds: &[ClockSeed], dark_mode: bool) -> (Self, Vec<Error>) {
        let mut state = Self::new(dark_mode);
        let mut rejected = Vec::new();
        for seed in seeds {
            if let Err(err) = state.add(&seed.timezone, seed.label.as_deref()) {
                rejected.push(err);
            }
        }
        (state, rejected)
    }

    /// Appends a clock for `timezone`.
    ///
    /// A blank or missing `label` falls back to [`catalog::default_label`].
    /// The same zone may be added any number of times.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTimezone`] without touching the list if the
    /// zone is unknown.
    pub fn add(&mut self, timezone: &str, label: Option<&str>) -> Result<ClockId> {
        let zone = Zone::parse(timezone)?;
        let label = match label.map(str::trim) {
            Some(custom) if !custom.is_empty() => custom.to_string(),
            _ => catalog::default_label(timezone),
        };

        let id = ClockId(self.next_id);
        self.next_id += 1;
        self.clocks.push(ClockConfig { id, zone, label });
        Ok(id)
    }

    /// Removes the clock with `id`. Unknown ids are ignored.
    pub fn remove(&mut self, id: ClockId) -> Option<ClockConfig> {
        let position = self.clocks.iter().position(|clock| clock.id == id)?;
        Some(self.clocks.remove(position))
    }

    /// Flips dark mode and returns the new value.
    pub fn toggle_dark_mode(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.dark_mode
    }

    #[must_use]
    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Clocks in display order.
    #[must_use]
    pub fn clocks(&self) -> &[ClockConfig] {
        &self.clocks
    }

    #[must_use]
    pub fn get(&self, id: ClockId) -> Option<&ClockConfig> {
        self.clocks.iter().find(|clock| clock.id == id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clocks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_seed_has_three_clocks_in_order() {
        let state = DashboardState::with_default_seed(false);
        let zones: Vec<_> = state.clocks().iter().map(ClockConfig::timezone).collect();
        assert_eq!(zones, ["America/New_York", "Europe/London", "Asia/Tokyo"]);
        let labels: Vec<_> = state.clocks().iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["New York", "London", "Tokyo"]);
        assert!(!state.dark_mode());
    }

    #[test]
    fn add_appends_with_fresh_unique_id() {
        let mut state = DashboardState::with_default_seed(false);
        let existing: Vec<_> = state.clocks().iter().map(|c| c.id).collect();

        let id = state.add("Europe/Paris", Some("Office")).unwrap();

        assert!(!existing.contains(&id));
        let last = state.clocks().last().unwrap();
        assert_eq!(last.id, id);
        assert_eq!(last.label, "Office");
        assert_eq!(last.timezone(), "Europe/Paris");
    }

    #[test]
    fn add_without_label_uses_menu_name() {
        let mut state = DashboardState::new(false);
        let id = state.add("Europe/London", None).unwrap();
        assert_eq!(state.get(id).unwrap().label, "London");
    }

    #[test]
    fn add_with_blank_label_uses_default() {
        let mut state = DashboardState::new(false);
        let id = state.add("Asia/Dubai", Some("   ")).unwrap();
        assert_eq!(state.get(id).unwrap().label, "Dubai");
    }

    #[test]
    fn add_outside_menu_falls_back_to_identifier() {
        let mut state = DashboardState::new(false);
        let id = state.add("Africa/Nairobi", None).unwrap();
        assert_eq!(state.get(id).unwrap().label, "Africa/Nairobi");
    }

    #[test]
    fn add_allows_duplicate_zones() {
        let mut state = DashboardState::new(false);
        let a = state.add("Asia/Tokyo", None).unwrap();
        let b = state.add("Asia/Tokyo", None).unwrap();
        assert_ne!(a, b);
        assert_eq!(state.clocks().len(), 2);
    }

    #[test]
    fn add_rejects_invalid_zone_without_mutation() {
        let mut state = DashboardState::with_default_seed(false);
        let before = state.clone();

        let err = state.add("Not/A_Zone", Some("Nowhere")).unwrap_err();

        assert_eq!(err, Error::InvalidTimezone("Not/A_Zone".into()));
        assert_eq!(state, before);
    }

    #[test]
    fn remove_deletes_matching_entry() {
        let mut state = DashboardState::with_default_seed(false);
        let london = state.clocks()[1].id;

        let removed = state.remove(london).unwrap();

        assert_eq!(removed.label, "London");
        assert!(state.get(london).is_none());
        assert_eq!(state.clocks().len(), 2);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut state = DashboardState::with_default_seed(false);
        let id = state.clocks()[0].id;

        state.remove(id);
        let after_first = state.clone();
        let second = state.remove(id);

        assert!(second.is_none());
        assert_eq!(state, after_first);
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut state = DashboardState::new(false);
        let first = state.add("Asia/Tokyo", None).unwrap();
        state.remove(first);
        let second = state.add("Asia/Tokyo", None).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn toggle_dark_mode_flips_flag() {
        let mut state = DashboardState::new(false);
        assert!(state.toggle_dark_mode());
        assert!(state.dark_mode());
        assert!(!state.toggle_dark_mode());
    }

    #[test]
    fn from_seed_reports_invalid_entries_and_keeps_valid_ones() {
        let seeds = vec![
            ClockSeed::new("Europe/Paris", "Paris"),
            ClockSeed::new("Atlantis/Capital", "Atlantis"),
            ClockSeed {
                timezone: "Asia/Shanghai".into(),
                label: None,
            },
        ];

        let (state, rejected) = DashboardState::from_seed(&seeds, true);

        assert_eq!(rejected, [Error::InvalidTimezone("Atlantis/Capital".into())]);
        let labels: Vec<_> = state.clocks().iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["Paris", "Shanghai"]);
        assert!(state.dark_mode());
    }

    #[test]
    fn clock_id_displays_as_number() {
        let mut state = DashboardState::new(false);
        let id = state.add("Asia/Tokyo", None).unwrap();
        assert_eq!(id.to_string(), "1");
    }
}
