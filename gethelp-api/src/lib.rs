/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! GetHelp submission backend library.
//!
//! This crate provides the Axum router, application state, and configuration
//! for the service behind the GetHelp landing page: a visitor's problem is
//! forwarded to an external responder, the reply is normalized into plain
//! text, and the latest results feed the page's "recent solutions" list.
//! The binary entry point (`main.rs`) is a thin wrapper around this library.

pub mod config;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod routes;
pub mod state;
pub mod store;
pub mod webhook;
