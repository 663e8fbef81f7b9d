//! # Utility Modules
//!
//! This module contains configuration constants used throughout the
//! checklist service.

pub mod constant;
