//! Client-side layer for the LifeDrop backend: wire types, the authenticated
//! HTTP client, token storage and figures derived from fetched data.

pub mod blood_group;
pub mod client;
pub mod config;
pub mod error;
pub mod stats;
pub mod storage;
pub mod types;

pub use blood_group::BloodGroup;
pub use client::Client;
pub use error::ApiError;
