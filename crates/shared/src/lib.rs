//! Shared types, errors, and configuration for Cashpool.
//!
//! This crate provides common types used across all other crates:
//! - JWT claims and token service
//! - Typed IDs for type-safe entity references
//! - Pagination types for list endpoints
//! - Application-wide error types
//! - Configuration management

pub mod auth;
pub mod config;
pub mod error;
pub mod jwt;
pub mod types;

pub use auth::{Claims, TokenPair, TokenType};
pub use config::AppConfig;
pub use error::{AppError, AppResult, ResourceKind};
pub use jwt::{JwtConfig, JwtError, JwtService};
