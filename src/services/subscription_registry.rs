use std::collections::HashMap;

use serde::Serialize;

use crate::models::{Condition, Subscription};

/// One user's watch list, in the order it was built.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSubscriptions {
    pub user_id: String,
    pub subscriptions: Vec<Subscription>,
}

/// userId -> ordered subscriptions. Users keep their first-subscription
/// order when listed; duplicate conditions are allowed.
#[derive(Debug, Default)]
pub struct SubscriptionRegistry {
    users: Vec<UserSubscriptions>,
    index: HashMap<String, usize>,
}

impl SubscriptionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an armed subscription to the user's list, creating the list
    /// on first use.
    pub fn subscribe(
        &mut self,
        user_id: &str,
        stock_symbol: &str,
        condition: Condition,
        threshold: f64,
    ) -> &Subscription {
        let slot = match self.index.get(user_id) {
            Some(&i) => i,
            None => {
                self.users.push(UserSubscriptions {
                    user_id: user_id.to_string(),
                    subscriptions: Vec::new(),
                });
                let i = self.users.len() - 1;
                self.index.insert(user_id.to_string(), i);
                i
            }
        };

        let list = &mut self.users[slot].subscriptions;
        list.push(Subscription::new(user_id, stock_symbol, condition, threshold));
        &list[list.len() - 1]
    }

    pub fn list(&self) -> impl Iterator<Item = &UserSubscriptions> {
        self.users.iter()
    }

    pub fn get(&self, user_id: &str) -> Option<&UserSubscriptions> {
        self.index.get(user_id).map(|&i| &self.users[i])
    }

    /// Every subscription on `stock_symbol`, across users, for evaluation.
    pub fn for_symbol_mut<'a>(
        &'a mut self,
        stock_symbol: &'a str,
    ) -> impl Iterator<Item = &'a mut Subscription> + 'a {
        self.users
            .iter_mut()
            .flat_map(|u| u.subscriptions.iter_mut())
            .filter(move |s| s.stock_symbol == stock_symbol)
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn subscription_count(&self) -> usize {
        self.users.iter().map(|u| u.subscriptions.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
