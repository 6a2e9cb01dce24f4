pub mod cli;
pub mod client;
pub mod config;
pub mod models;
pub mod services;


pub use client::{ApiError, HttpTagApi, TagApi};
pub use config::Config;
