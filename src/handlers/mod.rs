//! # HTTP Request Handlers
//!
//! This module contains all HTTP request handlers for the checklist service.
//! Each handler is responsible for processing specific HTTP requests and
//! returning appropriate responses.
//!
//! ## Available Handlers
//!
//! - **Health Check** (`health_check`) - Application health monitoring
//! - **Items** (`items`) - CRUD operations over to-do items

mod health_check;
mod items;

pub use health_check::*;
pub use items::*;
