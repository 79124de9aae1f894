//! # Stripboard Backend
//!
//! Scene scheduling and stripboard engine for film production.
//!
//! This crate keeps three stores coherent while users drag scenes between
//! days: the scene records of a script, the shooting-day collection with
//! its ordered schedule blocks, and a materialized scheduled-date index.
//! Users also lock finished days and edit the calendar under the same
//! coherence rules. The backend exposes a REST API via Axum for the
//! production office frontend.
//!
//! ## Features
//!
//! - **Stripboard operations**: assign, unassign, and drag-and-drop with
//!   deterministic displacement of whatever a drop lands on
//! - **Day lifecycle**: creation, date edits with re-sorting and
//!   renumbering, lock/unlock with scene status transitions
//! - **Scheduled-date index**: an always-current date-to-scenes projection
//!   for calendars, call sheets, and reports, with a reconcile repair path
//! - **Async persistence**: optimistic per-table writes with sync guards
//!   and debounced remote-change reloads
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Identifier and summary types shared across layers
//! - [`models`]: Scene records, shooting days, and schedule blocks
//! - [`engine`]: The scheduling engine and its operation surface
//! - [`db`]: Repository pattern and persistence layer
//! - [`services`]: Orchestration between the engine and the repository
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod api;

pub mod db;
pub mod engine;
pub mod models;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
