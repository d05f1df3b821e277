//! # Connect Four Engine
//!
//! The game engine and minimax AI opponent behind a Connect Four front end.
//! The presentation layer is an external collaborator: it forwards user
//! intents (drop a disc, change player, reset) through the
//! [`service::GameBridge`] operation contract and re-reads the resulting
//! state snapshot. Everything here is synchronous and in-memory; transport
//! and rendering live on the other side of the bridge.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: grid, player roster, state machine, rules
//! - [`ai`] — Evaluator, minimax search with alpha-beta pruning, agents
//! - [`service`] — `GameService` implementing the bridge operation contract
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod service;
