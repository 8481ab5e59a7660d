//! Value objects, collaborator ports and the banknote breakdown.
//!
//! Nothing in here performs I/O; the ports describe what the withdrawal
//! engine needs from the bank and from the cash cassettes.

pub mod banknote;
pub mod breakdown;
pub mod credentials;
pub mod error_code;
pub mod money;
pub mod ports;
