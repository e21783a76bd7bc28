//! # huddle-core
//!
//! Core types, ID generation, and error types for Huddle.
//!
//! This crate provides the foundational types shared across all Huddle crates:
//! - Entity structs for the domain objects (users, projects, tasks, chat messages)
//! - The task status enum and its expected progression
//! - ID prefix constants and the monotonic ID generator
//! - Cross-cutting error types
//! - Derived view types returned by store queries

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod views;
