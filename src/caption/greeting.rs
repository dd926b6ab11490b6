//! Time-of-day greeting for the `{wish}` placeholder.

use std::fmt;

/// Greeting chosen from the local hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Greeting {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl Greeting {
    /// Pick the greeting for an hour of the day (0-23).
    ///
    /// ```
    /// use autocaption::caption::Greeting;
    ///
    /// assert_eq!(Greeting::from_hour(5), Greeting::Morning);
    /// assert_eq!(Greeting::from_hour(4).to_string(), "Good Night");
    /// ```
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => Self::Morning,
            12..=16 => Self::Afternoon,
            17..=20 => Self::Evening,
            _ => Self::Night,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "Good Morning",
            Self::Afternoon => "Good Afternoon",
            Self::Evening => "Good Evening",
            Self::Night => "Good Night",
        }
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(Greeting::from_hour(4).as_str(), "Good Night");
        assert_eq!(Greeting::from_hour(5).as_str(), "Good Morning");
        assert_eq!(Greeting::from_hour(11).as_str(), "Good Morning");
        assert_eq!(Greeting::from_hour(12).as_str(), "Good Afternoon");
        assert_eq!(Greeting::from_hour(16).as_str(), "Good Afternoon");
        assert_eq!(Greeting::from_hour(17).as_str(), "Good Evening");
        assert_eq!(Greeting::from_hour(20).as_str(), "Good Evening");
        assert_eq!(Greeting::from_hour(21).as_str(), "Good Night");
        assert_eq!(Greeting::from_hour(0).as_str(), "Good Night");
        assert_eq!(Greeting::from_hour(23).as_str(), "Good Night");
    }

    #[test]
    fn test_every_hour_has_a_greeting() {
        let mornings = (0..24)
            .filter(|h| Greeting::from_hour(*h) == Greeting::Morning)
            .count();
        assert_eq!(mornings, 7);
    }
}
