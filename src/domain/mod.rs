//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: domain types handed to callers
//! - `wire.rs`: raw serde structs matching server responses (where they differ)
//! - `convert.rs`: `TryFrom`/`From` conversions from wire to domain
//! - `client.rs`: sub-client with the HTTP calls for that slice

pub mod account;
pub mod alert;
pub mod dvr;
pub mod friend;
pub mod presence;
