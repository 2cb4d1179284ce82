use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The trading session a trade was taken in.
///
/// Trade records carry the session as a free-form label; only these four
/// labels are recognized for session breakdowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Session {
    Asia,
    London,
    #[serde(rename = "New York")]
    NewYork,
    #[serde(rename = "New York PM")]
    NewYorkPm,
}

impl Session {
    /// All recognized sessions, in display order.
    pub const ALL: [Session; 4] = [
        Session::Asia,
        Session::London,
        Session::NewYork,
        Session::NewYorkPm,
    ];

    /// The label used by the journal for this session.
    pub fn label(&self) -> &'static str {
        match self {
            Session::Asia => "Asia",
            Session::London => "London",
            Session::NewYork => "New York",
            Session::NewYorkPm => "New York PM",
        }
    }

    /// Maps a journal label to a session. Matching is exact.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Session {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
            .ok_or_else(|| CoreError::InvalidInput("session".to_string(), s.to_string()))
    }
}

/// The closing status of a trade. A trade without an outcome is still open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Winning,
    Losing,
    Breakeven,
    Partial,
}

/// Time bucket size used when grouping trades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Day,
    Week,
    Month,
    Year,
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Granularity::Day => "day",
            Granularity::Week => "week",
            Granularity::Month => "month",
            Granularity::Year => "year",
        };
        f.write_str(name)
    }
}

impl FromStr for Granularity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "day" | "daily" => Ok(Granularity::Day),
            "week" | "weekly" => Ok(Granularity::Week),
            "month" | "monthly" => Ok(Granularity::Month),
            "year" | "yearly" => Ok(Granularity::Year),
            _ => Err(CoreError::InvalidInput("granularity".to_string(), s.to_string())),
        }
    }
}

/// Projection horizon, expressed in trading periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Horizon {
    #[default]
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Horizon {
    pub const ALL: [Horizon; 4] = [
        Horizon::Daily,
        Horizon::Weekly,
        Horizon::Monthly,
        Horizon::Yearly,
    ];

    /// Number of compounding periods the horizon spans.
    pub fn periods(&self) -> u64 {
        match self {
            Horizon::Daily => 1,
            Horizon::Weekly => 5,
            Horizon::Monthly => 20,
            Horizon::Yearly => 240,
        }
    }
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Horizon::Daily => "daily",
            Horizon::Weekly => "weekly",
            Horizon::Monthly => "monthly",
            Horizon::Yearly => "yearly",
        };
        f.write_str(name)
    }
}

impl FromStr for Horizon {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "daily" | "day" => Ok(Horizon::Daily),
            "weekly" | "week" => Ok(Horizon::Weekly),
            "monthly" | "month" => Ok(Horizon::Monthly),
            "yearly" | "year" => Ok(Horizon::Yearly),
            _ => Err(CoreError::InvalidInput("horizon".to_string(), s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_labels_round_trip() {
        for session in Session::ALL {
            assert_eq!(Session::from_label(session.label()), Some(session));
        }
        assert_eq!(Session::from_label("Sydney"), None);
        assert_eq!(Session::from_label("new york"), None);
    }

    #[test]
    fn horizon_periods() {
        let periods: Vec<u64> = Horizon::ALL.iter().map(Horizon::periods).collect();
        assert_eq!(periods, vec![1, 5, 20, 240]);
    }

    #[test]
    fn parses_cli_names() {
        assert_eq!("Week".parse::<Granularity>().unwrap(), Granularity::Week);
        assert_eq!("yearly".parse::<Horizon>().unwrap(), Horizon::Yearly);
        assert!("fortnight".parse::<Granularity>().is_err());
    }
}
