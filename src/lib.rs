pub mod catalog;
pub mod config;
pub mod consts;
pub mod error;
pub mod search;
// cmd and reports are binary modules (see main.rs).
