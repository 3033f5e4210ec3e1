// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) the host implements
//! - [`navigation`]: Playlist stepping and the navigation queue
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The player wires ports and domain rules together

pub mod navigation;
pub mod port;
