//! Cartwheel Core - Shared types library.
//!
//! This crate provides the domain types used across all Cartwheel components:
//! - `store` - Client-side cart, wishlist, and session persistence
//! - `integration-tests` - End-to-end tests over a real storage backend
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, quantities,
//!   emails, and variant labels

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
