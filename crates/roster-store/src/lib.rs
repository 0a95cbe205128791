//! Observable user roster state.
//!
//! [`UserStore`] holds what a form front-end renders (the pending user name
//! and the latest snapshot of stored users) and turns the three form intents
//! into calls on a [`roster_core::UserStorage`].

mod pending_intent;
mod store;

#[cfg(test)]
mod tests;

pub use pending_intent::PendingIntent;
pub use store::UserStore;
