//! # Grade Scale
//!
//! Fixed mapping from letter grade to grade points on a 4.00 scale.
//!
//! | Letter | Points |
//! |--------|--------|
//! | A      | 4.00   |
//! | A-     | 3.67   |
//! | B+     | 3.33   |
//! | B      | 3.00   |
//! | B-     | 2.67   |
//! | C+     | 2.33   |
//! | C      | 2.00   |
//! | C-     | 1.67   |
//! | D+     | 1.33   |
//! | D      | 1.00   |
//! | F      | 0.00   |

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{EnumIter, IntoEnumIterator};

use crate::types::GpaError;

/// One of the eleven recognized letter grades.
///
/// Variants are declared from best to worst, so iteration order matches the
/// order a grade picker should offer them in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
pub enum GradeLetter {
    #[strum(to_string = "A")]
    #[serde(rename = "A")]
    A,
    #[strum(to_string = "A-")]
    #[serde(rename = "A-")]
    AMinus,
    #[strum(to_string = "B+")]
    #[serde(rename = "B+")]
    BPlus,
    #[strum(to_string = "B")]
    #[serde(rename = "B")]
    B,
    #[strum(to_string = "B-")]
    #[serde(rename = "B-")]
    BMinus,
    #[strum(to_string = "C+")]
    #[serde(rename = "C+")]
    CPlus,
    #[strum(to_string = "C")]
    #[serde(rename = "C")]
    C,
    #[strum(to_string = "C-")]
    #[serde(rename = "C-")]
    CMinus,
    #[strum(to_string = "D+")]
    #[serde(rename = "D+")]
    DPlus,
    #[strum(to_string = "D")]
    #[serde(rename = "D")]
    D,
    #[strum(to_string = "F")]
    #[serde(rename = "F")]
    F,
}

impl GradeLetter {
    /// Grade points for this letter.
    pub fn points(&self) -> Decimal {
        match self {
            GradeLetter::A => dec!(4.00),
            GradeLetter::AMinus => dec!(3.67),
            GradeLetter::BPlus => dec!(3.33),
            GradeLetter::B => dec!(3.00),
            GradeLetter::BMinus => dec!(2.67),
            GradeLetter::CPlus => dec!(2.33),
            GradeLetter::C => dec!(2.00),
            GradeLetter::CMinus => dec!(1.67),
            GradeLetter::DPlus => dec!(1.33),
            GradeLetter::D => dec!(1.00),
            GradeLetter::F => dec!(0.00),
        }
    }

    /// Parses a letter, ignoring surrounding whitespace.
    ///
    /// Matching is case-sensitive: "a" is not a grade.
    pub fn parse(letter: &str) -> Result<Self, GpaError> {
        GradeLetter::from_str(letter.trim())
            .map_err(|_| GpaError::InvalidGrade(letter.to_string()))
    }
}

/// The fixed letter-to-points grade scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GradeScale;

impl GradeScale {
    /// Looks up the points for a letter symbol.
    pub fn points_for(letter: &str) -> Result<Decimal, GpaError> {
        GradeLetter::parse(letter).map(|grade| grade.points())
    }

    /// All letters, best first.
    pub fn letters() -> impl Iterator<Item = GradeLetter> {
        GradeLetter::iter()
    }

    /// `(letter, points)` pairs, best first.
    pub fn entries() -> Vec<(GradeLetter, Decimal)> {
        Self::letters().map(|grade| (grade, grade.points())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_for_every_letter() {
        let expected = [
            ("A", dec!(4.00)),
            ("A-", dec!(3.67)),
            ("B+", dec!(3.33)),
            ("B", dec!(3.00)),
            ("B-", dec!(2.67)),
            ("C+", dec!(2.33)),
            ("C", dec!(2.00)),
            ("C-", dec!(1.67)),
            ("D+", dec!(1.33)),
            ("D", dec!(1.00)),
            ("F", dec!(0.00)),
        ];
        for (letter, points) in expected {
            assert_eq!(GradeScale::points_for(letter).unwrap(), points, "letter {}", letter);
        }
    }

    #[test]
    fn test_rejects_unknown_letters() {
        for bad in ["X", "", "a", "A+", "E", "F-", "B +"] {
            assert_eq!(
                GradeScale::points_for(bad),
                Err(GpaError::InvalidGrade(bad.to_string())),
                "letter {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(GradeLetter::parse(" B+ ").unwrap(), GradeLetter::BPlus);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for grade in GradeScale::letters() {
            assert_eq!(GradeLetter::parse(&grade.to_string()).unwrap(), grade);
        }
    }

    #[test]
    fn test_scale_is_descending() {
        let entries = GradeScale::entries();
        assert_eq!(entries.len(), 11);
        assert_eq!(entries.first().map(|(g, _)| *g), Some(GradeLetter::A));
        assert_eq!(entries.last().map(|(g, _)| *g), Some(GradeLetter::F));
        assert!(entries.windows(2).all(|w| w[0].1 > w[1].1));
    }

    #[test]
    fn test_serde_uses_symbols() {
        let json = serde_json::to_string(&GradeLetter::CMinus).unwrap();
        assert_eq!(json, r#""C-""#);
        let back: GradeLetter = serde_json::from_str(r#""D+""#).unwrap();
        assert_eq!(back, GradeLetter::DPlus);
    }
}
