//! Trading signal — the discrete output of every decision component.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete trading recommendation for one observation.
///
/// Both the technical combiner and the sentiment classifier emit this type;
/// the risk gate is the final authority on whether a Buy/Sell is acted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Signal {
    Buy,
    Sell,
    Hold,
}

impl Signal {
    /// True for Buy/Sell, false for Hold.
    pub fn is_actionable(&self) -> bool {
        matches!(self, Signal::Buy | Signal::Sell)
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Signal::Buy => "BUY",
            Signal::Sell => "SELL",
            Signal::Hold => "HOLD",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_is_actionable() {
        assert!(Signal::Buy.is_actionable());
        assert!(Signal::Sell.is_actionable());
        assert!(!Signal::Hold.is_actionable());
    }

    #[test]
    fn signal_serializes_screaming_snake() {
        assert_eq!(serde_json::to_string(&Signal::Buy).unwrap(), "\"BUY\"");
        assert_eq!(serde_json::to_string(&Signal::Hold).unwrap(), "\"HOLD\"");
        let deser: Signal = serde_json::from_str("\"SELL\"").unwrap();
        assert_eq!(deser, Signal::Sell);
    }

    #[test]
    fn signal_display_matches_wire_form() {
        assert_eq!(Signal::Sell.to_string(), "SELL");
    }
}
