use crate::enums::{Outcome, Session};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Name used for trades logged without a trader.
pub const UNKNOWN_TRADER: &str = "Unknown";

/// A single journaled trade, as supplied by the trade source.
///
/// Records are read-only inputs to the analytics engine. The session is kept as the
/// raw journal label so that trades with an unrecognized session still count towards
/// every statistic except the per-session breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    pub entry_date: NaiveDate,
    pub session_label: String,
    /// `None` while the trade is still open.
    #[serde(default)]
    pub outcome: Option<Outcome>,
    /// Result of the trade in R units.
    #[serde(default)]
    pub risk_multiple: Decimal,
    /// Monetary result of the trade, used as the P&L figure.
    #[serde(default)]
    pub risk_amount: Decimal,
    #[serde(default)]
    pub trader_name: Option<String>,
}

impl TradeRecord {
    /// Creates an open trade with a zero result.
    pub fn new(entry_date: NaiveDate, session_label: impl Into<String>) -> Self {
        Self {
            entry_date,
            session_label: session_label.into(),
            outcome: None,
            risk_multiple: Decimal::ZERO,
            risk_amount: Decimal::ZERO,
            trader_name: None,
        }
    }

    pub fn with_outcome(mut self, outcome: Outcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    pub fn with_result(mut self, risk_multiple: Decimal, risk_amount: Decimal) -> Self {
        self.risk_multiple = risk_multiple;
        self.risk_amount = risk_amount;
        self
    }

    pub fn with_trader(mut self, name: impl Into<String>) -> Self {
        self.trader_name = Some(name.into());
        self
    }

    /// The recognized session of this trade, if any.
    pub fn session(&self) -> Option<Session> {
        Session::from_label(&self.session_label)
    }

    pub fn is_win(&self) -> bool {
        self.outcome == Some(Outcome::Winning)
    }

    pub fn is_open(&self) -> bool {
        self.outcome.is_none()
    }

    /// The trader's display name, falling back to [`UNKNOWN_TRADER`].
    pub fn trader(&self) -> &str {
        match self.trader_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => UNKNOWN_TRADER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn deserializes_journal_entry() {
        let json = r#"{
            "entry_date": "2025-03-14",
            "session_label": "New York PM",
            "outcome": "Winning",
            "risk_multiple": 2.5,
            "risk_amount": "125.50",
            "trader_name": "Lucia"
        }"#;
        let trade: TradeRecord = serde_json::from_str(json).unwrap();

        assert_eq!(trade.entry_date, date("2025-03-14"));
        assert_eq!(trade.session(), Some(Session::NewYorkPm));
        assert!(trade.is_win());
        assert_eq!(trade.risk_multiple, dec!(2.5));
        assert_eq!(trade.risk_amount, dec!(125.50));
        assert_eq!(trade.trader(), "Lucia");
    }

    #[test]
    fn missing_fields_default_to_open_unknown_trade() {
        let json = r#"{ "entry_date": "2025-03-14", "session_label": "Tokyo" }"#;
        let trade: TradeRecord = serde_json::from_str(json).unwrap();

        assert!(trade.is_open());
        assert!(!trade.is_win());
        assert_eq!(trade.session(), None);
        assert_eq!(trade.risk_amount, Decimal::ZERO);
        assert_eq!(trade.trader(), UNKNOWN_TRADER);
    }

    #[test]
    fn blank_trader_name_is_unknown() {
        let trade = TradeRecord::new(date("2025-01-01"), "Asia").with_trader("   ");
        assert_eq!(trade.trader(), UNKNOWN_TRADER);
    }
}
