//! HTTP request handlers, grouped by API surface.

pub mod admin;
pub mod contact;
pub mod results;
