//! Shared building blocks for the staking contract suite.
//!
//! This crate provides:
//! - [`reentrancy`] — a scoped execution lock that rejects nested entry into
//!   a contract while one of its guarded operations is still running.
//! - [`ownable`] — single-owner access control with owner-only transfer.
//!
//! Helpers report failures as `bool` / `Option` so each contract can map them
//! onto its own `#[contracterror]` enum.

#![no_std]

pub mod ownable;
pub mod reentrancy;

pub use ownable::*;
pub use reentrancy::*;
