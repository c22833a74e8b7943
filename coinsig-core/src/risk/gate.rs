//! RiskGate — capital tracking, daily drawdown halt, sizing, exit triggers.
//!
//! One gate owns one `RiskState`; there is no sharing. The gate never
//! panics on bad inputs from the market side: invalid prices return a
//! neutral/zero result and exhausted capital forces a halt instead of a
//! division fault.

use serde::{Deserialize, Serialize};

/// Risk parameters. All rates are fractions (0.02 = 2%).
///
/// `max_position_fraction` is the simple "fraction of capital" order cap;
/// `None` disables the cap and leaves only the drawdown/stop-loss machinery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskConfig {
    pub initial_capital: f64,
    pub risk_per_trade: f64,
    pub max_daily_drawdown: f64,
    pub stop_loss_rate: f64,
    pub take_profit_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_position_fraction: Option<f64>,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            initial_capital: 100_000.0,
            risk_per_trade: 0.01,
            max_daily_drawdown: 0.05,
            stop_loss_rate: 0.02,
            take_profit_rate: 0.05,
            max_position_fraction: None,
        }
    }
}

/// Gate state machine: Halted is sticky until an explicit daily reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateState {
    Trading,
    Halted,
}

/// Which exit threshold a price move breached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExitTrigger {
    StopLoss,
    TakeProfit,
}

/// Mutable risk state plus the operations over it.
///
/// Invariant: `current_capital = initial_capital + cumulative realized P&L`,
/// and only `update_daily_pl` mutates capital.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskGate {
    config: RiskConfig,
    current_capital: f64,
    daily_pl: f64,
    state: GateState,
}

impl RiskGate {
    pub fn new(config: RiskConfig) -> Self {
        Self {
            current_capital: config.initial_capital,
            config,
            daily_pl: 0.0,
            state: GateState::Trading,
        }
    }

    pub fn config(&self) -> &RiskConfig {
        &self.config
    }

    pub fn current_capital(&self) -> f64 {
        self.current_capital
    }

    pub fn daily_pl(&self) -> f64 {
        self.daily_pl
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    /// True iff the gate allows new trades.
    pub fn can_trade(&self) -> bool {
        self.state == GateState::Trading
    }

    /// Start of a new trading day: zero the daily P&L and clear any halt.
    /// Caller-driven; the gate has no wall-clock awareness.
    pub fn reset_daily(&mut self) {
        self.daily_pl = 0.0;
        self.state = GateState::Trading;
    }

    /// Position size in units for an entry at `entry_price`.
    ///
    /// `quantity = (current_capital * risk_per_trade) / (entry_price *
    /// stop_loss_rate)`: the max acceptable loss per trade divided by the
    /// expected per-unit loss at the configured stop distance.
    ///
    /// Returns 0.0 for a non-positive entry price. Does not consult the
    /// state machine; callers check `can_trade()` first.
    pub fn compute_position_size(&self, entry_price: f64) -> f64 {
        if entry_price <= 0.0 {
            return 0.0;
        }
        let max_loss = self.current_capital * self.config.risk_per_trade;
        max_loss / (entry_price * self.config.stop_loss_rate)
    }

    /// Record a realized P&L and re-evaluate the daily drawdown limit.
    ///
    /// The drawdown ratio is taken against post-update capital, boundary
    /// inclusive. Capital at or below zero halts immediately rather than
    /// producing an undefined ratio.
    pub fn update_daily_pl(&mut self, pnl: f64) {
        self.daily_pl += pnl;
        self.current_capital += pnl;

        if self.current_capital <= 0.0 {
            self.state = GateState::Halted;
            return;
        }

        let drawdown_ratio = -self.daily_pl / self.current_capital;
        if drawdown_ratio >= self.config.max_daily_drawdown {
            self.state = GateState::Halted;
        }
    }

    /// Check whether `current_price` breaches the stop-loss or take-profit
    /// threshold relative to `entry_price`.
    ///
    /// Returns `None` for a non-positive entry price. Stop-loss is
    /// evaluated first; the rates are caller-configured and not validated
    /// for sign.
    pub fn check_stop_loss_take_profit(
        &self,
        entry_price: f64,
        current_price: f64,
    ) -> Option<ExitTrigger> {
        if entry_price <= 0.0 {
            return None;
        }
        let change_ratio = (current_price - entry_price) / entry_price;
        if change_ratio <= -self.config.stop_loss_rate {
            return Some(ExitTrigger::StopLoss);
        }
        if change_ratio >= self.config.take_profit_rate {
            return Some(ExitTrigger::TakeProfit);
        }
        None
    }

    /// Simple fractional-of-capital order cap.
    ///
    /// Accepts every order when no cap is configured; otherwise rejects an
    /// order whose notional exceeds `current_capital * max_position_fraction`.
    pub fn check_order_size(&self, order_amount: f64) -> bool {
        match self.config.max_position_fraction {
            Some(fraction) => order_amount <= self.current_capital * fraction,
            None => true,
        }
    }
}
