pub mod config;
pub mod decision;
pub mod error;
pub mod handlers;
pub mod runner;
pub mod transport;
