// src/api/http/mod.rs

pub mod analysis;
pub mod handlers;
pub mod layers;
pub mod parameters;
pub mod router;

pub use router::router;
