//! Handling categories for sorted packages.

use std::fmt;

use serde::Serialize;

/// The stack a package is dispatched to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    /// Neither bulky nor heavy; handled normally
    Standard,
    /// Bulky or heavy (but not both); needs special handling
    Special,
    /// Both bulky and heavy; refused
    Rejected,
}

impl Category {
    /// Apply the dispatch decision table.
    ///
    /// | bulky | heavy | result   |
    /// |-------|-------|----------|
    /// | true  | true  | REJECTED |
    /// | true  | false | SPECIAL  |
    /// | false | true  | SPECIAL  |
    /// | false | false | STANDARD |
    pub fn from_flags(bulky: bool, heavy: bool) -> Self {
        match (bulky, heavy) {
            (true, true) => Category::Rejected,
            (true, false) | (false, true) => Category::Special,
            (false, false) => Category::Standard,
        }
    }

    /// Upper-case stack name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Standard => "STANDARD",
            Category::Special => "SPECIAL",
            Category::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_table() {
        assert_eq!(Category::from_flags(true, true), Category::Rejected);
        assert_eq!(Category::from_flags(true, false), Category::Special);
        assert_eq!(Category::from_flags(false, true), Category::Special);
        assert_eq!(Category::from_flags(false, false), Category::Standard);
    }

    #[test]
    fn test_display() {
        assert_eq!(Category::Standard.to_string(), "STANDARD");
        assert_eq!(Category::Special.to_string(), "SPECIAL");
        assert_eq!(Category::Rejected.to_string(), "REJECTED");
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&Category::Special).unwrap(),
            "\"SPECIAL\""
        );
        assert_eq!(
            serde_json::to_string(&Category::Rejected).unwrap(),
            "\"REJECTED\""
        );
    }
}
