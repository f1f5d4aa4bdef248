//! # Sum Gate Service Library
//!
//! Provides functionality for issuing HS256-signed bearer tokens,
//! verifying them through an ordered claim-check chain, and reducing
//! arbitrary nested JSON values to a single floating-point total.
//!
//! Modules:
//! - `auth` — token issuer, verifier and claim types
//! - `sum` — shape classification and the recursive summation engine
//! - `server` — axum routes gating `/sum` behind `/auth` tokens
//! - `config` — command-line / environment configuration

pub mod auth;
pub mod sum;
pub mod server;
pub mod config;
pub mod observability;
pub mod utils;
pub mod helpers;
pub mod tests;
