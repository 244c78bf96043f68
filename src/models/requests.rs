//! Request bodies accepted by the HTTP shell and their validation.
//!
//! Every field is optional at the serde level so a missing field becomes
//! `InvalidInput` listing what was absent, instead of a generic rejection.

use serde::Deserialize;

use super::Condition;
use crate::error::StockAlertError;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscribeRequest {
    pub user_id: Option<String>,
    pub stock_symbol: Option<String>,
    pub condition: Option<String>,
    pub threshold: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewSubscription {
    pub user_id: String,
    pub stock_symbol: String,
    pub condition: Condition,
    pub threshold: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceUpdateRequest {
    pub stock_symbol: Option<String>,
    pub current_price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceUpdate {
    pub stock_symbol: String,
    pub current_price: f64,
}

fn required_text(value: Option<String>, name: &'static str, missing: &mut Vec<&'static str>) -> String {
    // blank means missing; anything else is kept byte for byte
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => {
            missing.push(name);
            String::new()
        }
    }
}

fn required_number(value: Option<f64>, name: &'static str, missing: &mut Vec<&'static str>) -> f64 {
    match value {
        Some(v) if v.is_finite() => v,
        _ => {
            missing.push(name);
            0.0
        }
    }
}

fn reject_missing(missing: Vec<&'static str>) -> Result<(), StockAlertError> {
    if missing.is_empty() {
        return Ok(());
    }
    Err(StockAlertError::InvalidInput(missing.join(", ")))
}

impl SubscribeRequest {
    pub fn validate(self) -> Result<NewSubscription, StockAlertError> {
        let mut missing = Vec::new();

        let user_id = required_text(self.user_id, "userId", &mut missing);
        let stock_symbol = required_text(self.stock_symbol, "stockSymbol", &mut missing);
        let condition = required_text(self.condition, "condition", &mut missing);
        let threshold = required_number(self.threshold, "threshold", &mut missing);

        reject_missing(missing)?;

        Ok(NewSubscription {
            user_id,
            stock_symbol,
            condition: Condition::parse(&condition),
            threshold,
        })
    }
}

impl PriceUpdateRequest {
    pub fn validate(self) -> Result<PriceUpdate, StockAlertError> {
        let mut missing = Vec::new();

        let stock_symbol = required_text(self.stock_symbol, "stockSymbol", &mut missing);
        let current_price = required_number(self.current_price, "currentPrice", &mut missing);

        reject_missing(missing)?;

        Ok(PriceUpdate {
            stock_symbol,
            current_price,
        })
    }
}
