// src/lib.rs

//! Word of the Day Library

pub mod error;
pub mod models;
pub mod pipeline;
pub mod server;
pub mod services;
pub mod utils;
