//! Backend for the J.A.R.V.I.S terminal UI: a single chat relay route in
//! front of an upstream completion API, plus a canned-response shortcut
//! table for a handful of keywords.

pub mod config;
pub mod error;
pub mod message;
pub mod routes;
pub mod services;
pub mod state;
