//! Request and response bodies exchanged with API clients.

pub mod api;
pub mod game;
pub mod review;
pub mod user;
