//! Shared configuration, constants and errors for the tripcal workspace.

pub mod config;
pub mod constants;
pub mod error;
