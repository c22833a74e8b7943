//! Risk gate — the final authority on whether and how much to trade.

pub mod gate;

pub use gate::{ExitTrigger, GateState, RiskConfig, RiskGate};
