//! Named intervals from unison to octave

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Interval {
    Unison,
    Minor2nd,
    Major2nd,
    Minor3rd,
    Major3rd,
    Perfect4th,
    Tritone,
    Perfect5th,
    Minor6th,
    Major6th,
    Minor7th,
    Major7th,
    Octave,
}

impl Interval {
    pub const ALL: [Interval; 13] = [
        Interval::Unison,
        Interval::Minor2nd,
        Interval::Major2nd,
        Interval::Minor3rd,
        Interval::Major3rd,
        Interval::Perfect4th,
        Interval::Tritone,
        Interval::Perfect5th,
        Interval::Minor6th,
        Interval::Major6th,
        Interval::Minor7th,
        Interval::Major7th,
        Interval::Octave,
    ];

    /// Size in semitones (0..=12)
    pub fn semitones(&self) -> i32 {
        match self {
            Interval::Unison => 0,
            Interval::Minor2nd => 1,
            Interval::Major2nd => 2,
            Interval::Minor3rd => 3,
            Interval::Major3rd => 4,
            Interval::Perfect4th => 5,
            Interval::Tritone => 6,
            Interval::Perfect5th => 7,
            Interval::Minor6th => 8,
            Interval::Major6th => 9,
            Interval::Minor7th => 10,
            Interval::Major7th => 11,
            Interval::Octave => 12,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::Unison => "unison",
            Interval::Minor2nd => "minor2nd",
            Interval::Major2nd => "major2nd",
            Interval::Minor3rd => "minor3rd",
            Interval::Major3rd => "major3rd",
            Interval::Perfect4th => "perfect4th",
            Interval::Tritone => "tritone",
            Interval::Perfect5th => "perfect5th",
            Interval::Minor6th => "minor6th",
            Interval::Major6th => "major6th",
            Interval::Minor7th => "minor7th",
            Interval::Major7th => "major7th",
            Interval::Octave => "octave",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Interval {
    type Err = String;

    /// Case-insensitive: "Perfect5th" and "PERFECT5TH" both parse
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Interval::ALL
            .iter()
            .copied()
            .find(|interval| interval.as_str() == lower)
            .ok_or_else(|| format!("Unknown interval: '{}'", s))
    }
}
