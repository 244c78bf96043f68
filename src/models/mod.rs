pub mod subscription;
pub mod alert;
pub mod requests;

pub use subscription::{Condition, Subscription, Transition};
pub use alert::Alert;
pub use requests::{NewSubscription, PriceUpdate, PriceUpdateRequest, SubscribeRequest};
