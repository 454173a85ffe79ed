// src/infrastructure/mod.rs
pub mod database;
pub mod http;
pub mod publishers;
pub mod repositories;
pub mod time;
pub mod util;
