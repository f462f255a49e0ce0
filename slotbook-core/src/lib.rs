//! Core types and storage for the slotbook ecosystem.
//!
//! This crate provides everything the CLI builds on:
//! - `User` and `TimeSlot`, the data model for per-date availability
//! - `Store`, the whole-collection persistent store and current-user pointer
//! - `availability`, the read-modify-write contract all slot editing goes through
//! - `export`, flattening a user's availability into document rows

pub mod availability;
pub mod config;
pub mod error;
pub mod export;
pub mod slot;
pub mod store;
pub mod user;

pub use error::{SlotBookError, SlotBookResult};
pub use slot::TimeSlot;
pub use store::Store;
pub use user::{Availability, User};
