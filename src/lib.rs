//! Leave balance lookup engine.
//!
//! This crate extracts structured employee leave records from semi-structured
//! plain-text leave reports and answers point queries against the extracted
//! set by surname substring or exact employee number.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod fetch;
pub mod models;
pub mod pipeline;
