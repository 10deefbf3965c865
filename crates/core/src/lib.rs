//! Domain layer for the Swipe Savvy business registration flow.
//!
//! Holds everything that does not touch a socket or a database: the shared
//! error taxonomy, the registration request and its validation, the business
//! lookup interface, and the registration wizard state machine.

pub mod error;
pub mod lookup;
pub mod registration;
pub mod types;
pub mod wizard;
