use std::fmt;

use serde::{Deserialize, Serialize};

/// Comparison a subscriber watches for.
///
/// Anything other than `">"` or `"<"` is kept as `Unrecognized` and never
/// matches a price, so such a subscription stays armed forever.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Condition {
    GreaterThan,
    LessThan,
    Unrecognized(String),
}

impl Condition {
    pub fn parse(op: &str) -> Self {
        match op {
            ">" => Condition::GreaterThan,
            "<" => Condition::LessThan,
            other => Condition::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Condition::GreaterThan => ">",
            Condition::LessThan => "<",
            Condition::Unrecognized(op) => op,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Condition::Unrecognized(_))
    }

    /// True when `price` is strictly on the alerting side of `threshold`.
    pub fn matches(&self, price: f64, threshold: f64) -> bool {
        match self {
            Condition::GreaterThan => price > threshold,
            Condition::LessThan => price < threshold,
            Condition::Unrecognized(_) => false,
        }
    }

    /// True when `price` is back inside the range, where a fired
    /// subscription re-arms.
    pub fn in_reset_zone(&self, price: f64, threshold: f64) -> bool {
        match self {
            Condition::GreaterThan => price <= threshold,
            Condition::LessThan => price >= threshold,
            Condition::Unrecognized(_) => false,
        }
    }
}

impl From<String> for Condition {
    fn from(op: String) -> Self {
        Condition::parse(&op)
    }
}

impl From<Condition> for String {
    fn from(c: Condition) -> Self {
        c.as_str().to_string()
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a price evaluation did to a subscription.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// Armed -> Fired. Carries the alert priority, `|price - threshold|`.
    Fired { priority: f64 },
    /// Fired -> Armed.
    Rearmed,
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub user_id: String,
    pub stock_symbol: String,
    pub condition: Condition,
    pub threshold: f64,

    // false = fired, waiting for the price to come back
    pub armed: bool,
}

impl Subscription {
    pub fn new(user_id: &str, stock_symbol: &str, condition: Condition, threshold: f64) -> Self {
        Self {
            user_id: user_id.to_string(),
            stock_symbol: stock_symbol.to_string(),
            condition,
            threshold,
            armed: true,
        }
    }

    /// `"> 100"` style text used in alerts and log lines.
    pub fn describe(&self) -> String {
        format!("{} {}", self.condition, self.threshold)
    }

    /// Runs the Armed/Fired state machine for one price.
    pub fn evaluate(&mut self, price: f64) -> Transition {
        if self.condition.matches(price, self.threshold) {
            if !self.armed {
                return Transition::Unchanged;
            }
            self.armed = false;
            return Transition::Fired {
                priority: (price - self.threshold).abs(),
            };
        }

        if !self.armed && self.condition.in_reset_zone(price, self.threshold) {
            self.armed = true;
            return Transition::Rearmed;
        }

        Transition::Unchanged
    }
}
