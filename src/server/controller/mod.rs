//! HTTP request handlers.
//!
//! Controllers extract and validate request input, call into the service layer and
//! convert domain models into DTOs for the response.

pub mod contact;
pub mod event;
pub mod gallery;
pub mod news;

#[cfg(test)]
mod test;
