use std::collections::BTreeSet;

use crate::models::venue::{PlayMode, Venue};

/// Sport, location and mode filters of the rental listing.
///
/// `None` on any axis means "all". The three filters combine with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VenueFilter {
    sport: Option<String>,
    location: Option<String>,
    mode: Option<PlayMode>,
}

impl VenueFilter {
    pub fn sport(&self) -> Option<&str> {
        self.sport.as_deref()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn mode(&self) -> Option<PlayMode> {
        self.mode
    }

    /// Selecting a sport always resets the location.
    pub fn set_sport(&mut self, sport: Option<String>) {
        self.sport = sport;
        self.location = None;
    }

    /// Set the location; returns `false` and leaves the filter unchanged when the
    /// location is not offered for the current sport.
    pub fn set_location(&mut self, venues: &[Venue], location: Option<String>) -> bool {
        match location {
            None => {
                self.location = None;
                true
            }
            Some(location) => {
                if self.locations(venues).contains(&location) {
                    self.location = Some(location);
                    true
                } else {
                    false
                }
            }
        }
    }

    pub fn set_mode(&mut self, mode: Option<PlayMode>) {
        self.mode = mode;
    }

    pub fn matches(&self, venue: &Venue) -> bool {
        let sport_ok = self.sport.as_ref().is_none_or(|sport| &venue.sport == sport);
        let location_ok = self
            .location
            .as_ref()
            .is_none_or(|location| &venue.location == location);
        let mode_ok = self.mode.is_none_or(|mode| venue.accepts(mode));
        sport_ok && location_ok && mode_ok
    }

    pub fn apply<'a>(&self, venues: &'a [Venue]) -> Vec<&'a Venue> {
        venues.iter().filter(|venue| self.matches(venue)).collect()
    }

    /// Locations selectable for the current sport, sorted and deduplicated.
    pub fn locations(&self, venues: &[Venue]) -> Vec<String> {
        venues
            .iter()
            .filter(|venue| self.sport.as_ref().is_none_or(|sport| &venue.sport == sport))
            .map(|venue| venue.location.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// Distinct sports present in the catalog, sorted.
pub fn sports(venues: &[Venue]) -> Vec<String> {
    venues
        .iter()
        .map(|venue| venue.sport.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
