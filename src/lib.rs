//! CryptoDash: a terminal dashboard for transaction history and AI
//! investment advice served by a REST backend.

pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod modules;
pub mod ui;
