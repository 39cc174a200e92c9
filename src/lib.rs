//! A2A UI Export Demo
//!
//! A thin client that starts one chat turn on the A2A UI server and downloads
//! the resulting conversation as a session archive.
//!
//! # Modules
//!
//! - [`config`]: CLI flags, environment defaults and the timeout policy
//! - [`client`]: HTTP client for `/api/chat` and `/export/session`
//! - [`export`]: The chat-then-export workflow
//! - [`types`]: Request and response bodies

pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod types;

pub use client::Client;
pub use config::{DemoConfig, Timeout};
pub use error::{Error, Result};
pub use export::{RunOutcome, run};
pub use types::{ChatRequest, ChatResponse};
