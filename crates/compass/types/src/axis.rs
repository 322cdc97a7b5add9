//! The four bipolar axes and their poles.
//!
//! Axes and poles are closed enumerations: a pole always knows its axis
//! and its opposite, so an option tagged with a pole that does not
//! belong to the question's axis cannot be expressed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AssessmentError;

// ── Axis ─────────────────────────────────────────────────────────────

/// One bipolar personality dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Axis {
    /// Extraversion / Introversion
    EI,
    /// Sensing / Intuition
    SN,
    /// Thinking / Feeling
    TF,
    /// Judging / Perceiving
    JP,
}

impl Axis {
    /// All axes in type-code order.
    pub const ALL: [Axis; 4] = [Axis::EI, Axis::SN, Axis::TF, Axis::JP];

    /// The first-listed pole of the pair (E, S, T, J).
    pub fn first(self) -> Pole {
        match self {
            Axis::EI => Pole::E,
            Axis::SN => Pole::S,
            Axis::TF => Pole::T,
            Axis::JP => Pole::J,
        }
    }

    /// The second-listed pole of the pair (I, N, F, P).
    pub fn second(self) -> Pole {
        self.first().opposite()
    }

    /// Both poles, first-listed first.
    pub fn poles(self) -> [Pole; 2] {
        [self.first(), self.second()]
    }

    /// Position of this axis in the type code.
    pub fn index(self) -> usize {
        match self {
            Axis::EI => 0,
            Axis::SN => 1,
            Axis::TF => 2,
            Axis::JP => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Axis::EI => "EI",
            Axis::SN => "SN",
            Axis::TF => "TF",
            Axis::JP => "JP",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Axis {
    type Err = AssessmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "EI" | "IE" => Ok(Axis::EI),
            "SN" | "NS" => Ok(Axis::SN),
            "TF" | "FT" => Ok(Axis::TF),
            "JP" | "PJ" => Ok(Axis::JP),
            other => Err(AssessmentError::InvalidConfig(format!(
                "unknown axis '{other}'"
            ))),
        }
    }
}

// ── Pole ─────────────────────────────────────────────────────────────

/// One of the two opposing values of an axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Pole {
    E,
    I,
    S,
    N,
    T,
    F,
    J,
    P,
}

impl Pole {
    pub const ALL: [Pole; 8] = [
        Pole::E,
        Pole::I,
        Pole::S,
        Pole::N,
        Pole::T,
        Pole::F,
        Pole::J,
        Pole::P,
    ];

    /// The axis this pole belongs to.
    pub fn axis(self) -> Axis {
        match self {
            Pole::E | Pole::I => Axis::EI,
            Pole::S | Pole::N => Axis::SN,
            Pole::T | Pole::F => Axis::TF,
            Pole::J | Pole::P => Axis::JP,
        }
    }

    /// The other pole of the same axis.
    pub fn opposite(self) -> Pole {
        match self {
            Pole::E => Pole::I,
            Pole::I => Pole::E,
            Pole::S => Pole::N,
            Pole::N => Pole::S,
            Pole::T => Pole::F,
            Pole::F => Pole::T,
            Pole::J => Pole::P,
            Pole::P => Pole::J,
        }
    }

    /// Whether this is the first-listed pole of its axis.
    pub fn is_first(self) -> bool {
        self.axis().first() == self
    }

    pub fn as_char(self) -> char {
        match self {
            Pole::E => 'E',
            Pole::I => 'I',
            Pole::S => 'S',
            Pole::N => 'N',
            Pole::T => 'T',
            Pole::F => 'F',
            Pole::J => 'J',
            Pole::P => 'P',
        }
    }

    pub fn from_char(c: char) -> Option<Pole> {
        Pole::ALL
            .into_iter()
            .find(|p| p.as_char() == c.to_ascii_uppercase())
    }

    /// Human-readable name of the pole.
    pub fn name(self) -> &'static str {
        match self {
            Pole::E => "Extraversion",
            Pole::I => "Introversion",
            Pole::S => "Sensing",
            Pole::N => "Intuition",
            Pole::T => "Thinking",
            Pole::F => "Feeling",
            Pole::J => "Judging",
            Pole::P => "Perceiving",
        }
    }
}

impl fmt::Display for Pole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Pole {
    type Err = AssessmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Pole::from_char(c)
                .ok_or_else(|| AssessmentError::InvalidConfig(format!("unknown pole '{s}'"))),
            _ => Err(AssessmentError::InvalidConfig(format!(
                "unknown pole '{s}'"
            ))),
        }
    }
}

// ── Per-axis map ─────────────────────────────────────────────────────

/// A value for each of the four axes, serialized keyed by axis name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PerAxis<T> {
    #[serde(rename = "EI")]
    pub ei: T,
    #[serde(rename = "SN")]
    pub sn: T,
    #[serde(rename = "TF")]
    pub tf: T,
    #[serde(rename = "JP")]
    pub jp: T,
}

impl<T> PerAxis<T> {
    pub fn new(ei: T, sn: T, tf: T, jp: T) -> Self {
        Self { ei, sn, tf, jp }
    }

    /// Build a map by evaluating `f` once per axis, in type-code order.
    pub fn from_fn(mut f: impl FnMut(Axis) -> T) -> Self {
        let ei = f(Axis::EI);
        let sn = f(Axis::SN);
        let tf = f(Axis::TF);
        let jp = f(Axis::JP);
        Self { ei, sn, tf, jp }
    }

    pub fn get(&self, axis: Axis) -> &T {
        match axis {
            Axis::EI => &self.ei,
            Axis::SN => &self.sn,
            Axis::TF => &self.tf,
            Axis::JP => &self.jp,
        }
    }

    pub fn get_mut(&mut self, axis: Axis) -> &mut T {
        match axis {
            Axis::EI => &mut self.ei,
            Axis::SN => &mut self.sn,
            Axis::TF => &mut self.tf,
            Axis::JP => &mut self.jp,
        }
    }

    /// Iterate in type-code order.
    pub fn iter(&self) -> impl Iterator<Item = (Axis, &T)> {
        Axis::ALL.into_iter().map(move |axis| (axis, self.get(axis)))
    }

    pub fn map<U>(&self, mut f: impl FnMut(Axis, &T) -> U) -> PerAxis<U> {
        PerAxis::from_fn(|axis| f(axis, self.get(axis)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poles_belong_to_their_axis() {
        for axis in Axis::ALL {
            let [a, b] = axis.poles();
            assert_eq!(a.axis(), axis);
            assert_eq!(b.axis(), axis);
            assert_eq!(a.opposite(), b);
            assert!(a.is_first());
            assert!(!b.is_first());
        }
    }

    #[test]
    fn test_opposite_is_involution() {
        for pole in Pole::ALL {
            assert_eq!(pole.opposite().opposite(), pole);
            assert_ne!(pole.opposite(), pole);
        }
    }

    #[test]
    fn test_parse_pole_and_axis() {
        assert_eq!("n".parse::<Pole>().unwrap(), Pole::N);
        assert!("X".parse::<Pole>().is_err());
        assert!("EN".parse::<Pole>().is_err());
        assert_eq!("tf".parse::<Axis>().unwrap(), Axis::TF);
        assert_eq!("PJ".parse::<Axis>().unwrap(), Axis::JP);
    }

    #[test]
    fn test_per_axis_serializes_by_axis_name() {
        let map = PerAxis::from_fn(|axis| axis.index());
        let json = serde_json::to_value(map).unwrap();
        assert_eq!(json["EI"], 0);
        assert_eq!(json["JP"], 3);

        let collected: Vec<_> = map.iter().map(|(axis, v)| (axis, *v)).collect();
        assert_eq!(collected[2], (Axis::TF, 2));
    }
}
