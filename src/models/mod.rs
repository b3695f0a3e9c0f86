//! Request, response and upstream wire types.

/// Deposit account models
pub mod deposit;
/// Financial open API header and envelope types
pub mod fin_api;
/// Member models
pub mod member;
