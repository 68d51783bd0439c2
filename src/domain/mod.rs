//! Domain types shared by the pipeline, the Records Source client and the
//! presentation layer.

pub mod customer;
pub mod expiry;
pub mod query;
pub mod types;
