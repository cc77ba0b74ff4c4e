use std::fmt;

use serde::{Deserialize, Serialize};

/// Icon shown next to a direction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Icon {
    #[serde(rename = "arrow_straight")]
    ArrowStraight,
    #[serde(rename = "arrow_right_turn")]
    ArrowRightTurn,
    #[serde(rename = "ic_520")]
    Route520,
    #[serde(rename = "ic_local_gas_station_white_48dp")]
    GasStation,
}

impl Icon {
    /// Stable resource name; icon files are looked up as `<resource_name>.png`.
    pub fn resource_name(&self) -> &'static str {
        match self {
            Icon::ArrowStraight => "arrow_straight",
            Icon::ArrowRightTurn => "arrow_right_turn",
            Icon::Route520 => "ic_520",
            Icon::GasStation => "ic_local_gas_station_white_48dp",
        }
    }

    /// Freedesktop icon-theme name used when no icon directory is configured.
    pub fn themed_name(&self) -> &'static str {
        match self {
            Icon::ArrowStraight => "go-up",
            Icon::ArrowRightTurn => "go-next",
            Icon::Route520 => "go-jump",
            Icon::GasStation => "mark-location",
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.resource_name())
    }
}

/// Remaining distance to the next maneuver.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Distance {
    /// Kilometres, held as hundredths so two-decimal truncation is exact.
    Kilometers { hundredths: u32 },
    Meters(u32),
}

impl Distance {
    pub fn km_hundredths(hundredths: u32) -> Self {
        Distance::Kilometers { hundredths }
    }

    pub fn meters(meters: u32) -> Self {
        Distance::Meters(meters)
    }
}

/// Renders at most two decimals with trailing zeros dropped: `1km`, `0.1km`, `40m`.
impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Distance::Kilometers { hundredths } => {
                let whole = hundredths / 100;
                let frac = hundredths % 100;
                if frac == 0 {
                    write!(f, "{whole}km")
                } else if frac % 10 == 0 {
                    write!(f, "{whole}.{}km", frac / 10)
                } else {
                    write!(f, "{whole}.{frac:02}km")
                }
            }
            Distance::Meters(m) => write!(f, "{m}m"),
        }
    }
}

/// What the navigation notification shows for one counter value.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DirectionEntry {
    pub title: &'static str,
    pub distance: Distance,
    pub icon: Icon,
    /// `false` on the first entry of a direction so the platform alerts afresh;
    /// `true` for the silent distance-only updates that follow.
    pub alert_once: bool,
}

impl DirectionEntry {
    pub fn distance_label(&self) -> String {
        self.distance.to_string()
    }
}
