//! Application layer containing the withdrawal orchestration.
//!
//! This module defines [`engine::Atm`], which drives a withdrawal through the
//! bank and the cash cassettes. Every collaborator call is awaited before the
//! next one starts; nothing runs in parallel.

pub mod engine;
