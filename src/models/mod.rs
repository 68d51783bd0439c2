//! Wire and configuration models used at the edges of the client.

pub mod config;
pub mod customer;
