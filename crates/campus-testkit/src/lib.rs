//! Campus Testing Infrastructure
//!
//! Shared fixtures for the authorization and guard crates: ready-made actors
//! and records, proptest strategies over roles, schools and actions, and an
//! in-memory [`RecordStore`](campus_guards::RecordStore).

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! campus-testkit = { path = "../campus-testkit" }
//! ```
//!
//! ```rust,no_run
//! use campus_testkit::*;
//! use campus_core::Role;
//!
//! let teacher = actor("T1", Role::Teacher, SCHOOL_A);
//! let record = record_in(SCHOOL_A).owned_by("T1");
//! ```

pub mod fixtures;
pub mod store;
pub mod strategies;

pub use fixtures::*;
pub use store::{InMemoryRecordStore, TestRecord};
