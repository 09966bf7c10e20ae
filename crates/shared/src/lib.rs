//! Shared utilities for the SocialBoost backend.
//!
//! This crate provides functionality used across the other crates:
//! - Password hashing with Argon2id for admin credentials
//! - Validation helpers used by request DTOs

pub mod password;
pub mod validation;
