//! Domain layer - Core business logic
//!
//! This module contains the audit's entities, repository traits and the
//! classification service. It performs no I/O of its own.

pub mod entities;
pub mod repositories;
pub mod services;
