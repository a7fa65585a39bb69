//! API Routes
//!
//! Route handlers organized by functionality.

pub mod exercises;
pub mod health;
