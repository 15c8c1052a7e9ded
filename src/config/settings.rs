//! Engine settings
//!
//! Plain data handed in by the caller. Serializable so hosts can store
//! a config document wherever they keep their own state.

use serde::{Deserialize, Serialize};

use crate::models::Money;

/// Settings that shape report and export behavior
///
/// Missing fields fall back to their defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Balance carried into the first reported period
    #[serde(default)]
    pub starting_balance: Money,

    /// Days past a loan due date before a payment counts as missed
    #[serde(default = "default_grace_period_days")]
    pub grace_period_days: i64,

    /// ISO 4217 code recorded alongside exports, never used in arithmetic
    #[serde(default = "default_currency_code")]
    pub currency_code: String,
}

fn default_grace_period_days() -> i64 {
    5
}

fn default_currency_code() -> String {
    "USD".to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            starting_balance: Money::zero(),
            grace_period_days: default_grace_period_days(),
            currency_code: default_currency_code(),
        }
    }
}
