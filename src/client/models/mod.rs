//! Prisma Cloud API data models
//!
//! Request and response bodies for the endpoints the inventory touches.
//! Every response field is optional: the API omits fields freely and the
//! inventory reports whatever it gets.

mod account;
mod auth;

pub use account::CloudAccount;
pub use auth::{LoginRequest, LoginResponse, Session};
