//! DTO modules that bridge services with templates.

pub mod customer;
pub mod main;
