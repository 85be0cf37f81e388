//! HTTP request handlers.
//!
//! Controllers extract and validate request input, call into the service layer and
//! convert the resulting domain models into DTOs.

pub mod game;
pub mod review;

#[cfg(test)]
mod test;
