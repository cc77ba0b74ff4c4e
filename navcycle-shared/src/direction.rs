//! Canned direction table driven by the notification counter.
//!
//! The counter is reduced modulo [`CYCLE_LEN`] and the position falls into one of
//! four contiguous bands. Within a band the distance counts down one step per
//! tick and only the first position raises a fresh alert.

use std::ops::Range;

use crate::domain::{DirectionEntry, Distance, Icon};

/// Number of counter values in one full pass over the table.
pub const CYCLE_LEN: u64 = 35;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Band {
    GoStraight,
    TurnRight,
    Take520,
    GasStation,
}

impl Band {
    pub const ALL: [Band; 4] = [
        Band::GoStraight,
        Band::TurnRight,
        Band::Take520,
        Band::GasStation,
    ];

    /// Band owning `counter` once reduced into the cycle.
    pub fn for_counter(counter: u64) -> Self {
        match position(counter) {
            0..10 => Band::GoStraight,
            10..20 => Band::TurnRight,
            20..25 => Band::Take520,
            _ => Band::GasStation,
        }
    }

    /// Half-open positions within `[0, CYCLE_LEN)` covered by this band.
    pub fn range(&self) -> Range<u64> {
        match self {
            Band::GoStraight => 0..10,
            Band::TurnRight => 10..20,
            Band::Take520 => 20..25,
            Band::GasStation => 25..CYCLE_LEN,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Band::GoStraight => "Go Straight",
            Band::TurnRight => "Turn Right",
            Band::Take520 => "Take 520",
            Band::GasStation => "Gas Station",
        }
    }

    pub fn icon(&self) -> Icon {
        match self {
            Band::GoStraight => Icon::ArrowStraight,
            Band::TurnRight => Icon::ArrowRightTurn,
            Band::Take520 => Icon::Route520,
            Band::GasStation => Icon::GasStation,
        }
    }

    // 0.1 km, 0.5 km and 40 m per remaining step.
    fn distance(&self, steps_left: u32) -> Distance {
        match self {
            Band::GoStraight | Band::GasStation => Distance::km_hundredths(steps_left * 10),
            Band::TurnRight => Distance::km_hundredths(steps_left * 50),
            Band::Take520 => Distance::meters(steps_left * 40),
        }
    }
}

/// Position of `counter` within the repeating cycle.
pub fn position(counter: u64) -> u64 {
    counter % CYCLE_LEN
}

/// Computes the entry displayed for `counter`. Periodic with period [`CYCLE_LEN`].
pub fn compute_entry(counter: u64) -> DirectionEntry {
    let pos = position(counter);
    let band = Band::for_counter(counter);
    let range = band.range();
    // pos < range.end <= CYCLE_LEN, so this always fits.
    let steps_left = (range.end - pos) as u32;
    DirectionEntry {
        title: band.title(),
        distance: band.distance(steps_left),
        icon: band.icon(),
        alert_once: pos > range.start,
    }
}
