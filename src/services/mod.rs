//! Business logic services.
//!
//! Services sit between the HTTP handlers and the bank's financial open API.
//! Each is a trait so handlers can run against in-memory implementations in tests.

pub mod deposit_service;
pub mod fin_api_client;
pub mod member_service;
