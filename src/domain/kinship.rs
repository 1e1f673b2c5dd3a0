//! Result of a cousin classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Cousin degree and generational offset between two members.
///
/// `cousin_type` is -1 for the same member or a direct line of descent,
/// 0 for members sharing a parent, 1 for first cousins and so on.
/// `degree_removed` is the number of generations separating the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Kinship {
    pub cousin_type: i32,
    pub degree_removed: u32,
}

const ORDINALS: [&str; 6] = ["zeroth", "first", "second", "third", "fourth", "fifth"];

impl Kinship {
    pub const DIRECT_LINE: i32 = -1;

    pub fn new(cousin_type: i32, degree_removed: u32) -> Self {
        Self {
            cousin_type,
            degree_removed,
        }
    }

    pub fn is_direct_line(&self) -> bool {
        self.cousin_type == Self::DIRECT_LINE
    }

    /// Human readable form, e.g. "first cousin 1 removed".
    ///
    /// With `ordinals` off the cousin type is printed as a plain number.
    pub fn describe(&self, ordinals: bool) -> String {
        if self.is_direct_line() {
            return format!("direct line {} removed", self.degree_removed);
        }
        if !ordinals {
            return format!(
                "cousin type {} {} removed",
                self.cousin_type, self.degree_removed
            );
        }
        let degree = usize::try_from(self.cousin_type)
            .ok()
            .and_then(|idx| ORDINALS.get(idx).map(|word| word.to_string()))
            .unwrap_or_else(|| {
                format!("{}{}", self.cousin_type, ordinal_suffix(self.cousin_type))
            });
        format!("{} cousin {} removed", degree, self.degree_removed)
    }
}

/// English ordinal suffix: 1st, 2nd, 3rd, 4th, 11th, 12th, 13th, 21st.
fn ordinal_suffix(n: i32) -> &'static str {
    match (n % 100, n % 10) {
        (11..=13, _) => "th",
        (_, 1) => "st",
        (_, 2) => "nd",
        (_, 3) => "rd",
        _ => "th",
    }
}

impl From<Kinship> for (i32, u32) {
    fn from(kinship: Kinship) -> Self {
        (kinship.cousin_type, kinship.degree_removed)
    }
}

impl fmt::Display for Kinship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe(true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_direct_line_then_describes_removal_only() {
        assert_eq!(Kinship::new(-1, 3).to_string(), "direct line 3 removed");
    }

    #[test]
    fn given_collateral_then_uses_ordinal_words() {
        assert_eq!(Kinship::new(0, 0).to_string(), "zeroth cousin 0 removed");
        assert_eq!(Kinship::new(1, 2).to_string(), "first cousin 2 removed");
        assert_eq!(Kinship::new(7, 0).to_string(), "7th cousin 0 removed");
    }

    #[test]
    fn given_cousin_type_past_fifth_then_uses_english_suffix() {
        let word = |n| Kinship::new(n, 0).to_string();
        assert_eq!(word(11), "11th cousin 0 removed");
        assert_eq!(word(12), "12th cousin 0 removed");
        assert_eq!(word(13), "13th cousin 0 removed");
        assert_eq!(word(21), "21st cousin 0 removed");
        assert_eq!(word(22), "22nd cousin 0 removed");
        assert_eq!(word(23), "23rd cousin 0 removed");
        assert_eq!(word(111), "111th cousin 0 removed");
    }

    #[test]
    fn given_ordinals_disabled_then_prints_number() {
        assert_eq!(Kinship::new(2, 1).describe(false), "cousin type 2 1 removed");
    }

    #[test]
    fn given_kinship_then_converts_to_pair() {
        let pair: (i32, u32) = Kinship::new(1, 1).into();
        assert_eq!(pair, (1, 1));
    }
}
