// src/lib.rs

pub mod analysis;
pub mod api;
pub mod config;
pub mod geo;
pub mod locations;
pub mod state;
