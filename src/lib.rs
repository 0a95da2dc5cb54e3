//! Stagehand - add stages to the Applicants pipeline through a Bitrix24 webhook
//!
//! This library provides:
//! - Status code and status id derivation for stage names (no network needed)
//! - A webhook transport trait with a blocking reqwest implementation
//! - The stage adder that submits `crm.status.add` and interprets the reply
//! - Webhook configuration resolution and the CLI
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use stagehand::bitrix::{HttpTransport, StageAdder};
//!
//! let transport = HttpTransport::new(
//!     "https://example.bitrix24.com/rest/1/token",
//!     Duration::from_secs(30),
//! ).unwrap();
//! let adder = StageAdder::new(transport);
//! let added = adder.add_stage("Phone Screen", 25, Some("#2FC6F6")).unwrap();
//! println!("added: {}", added);
//! ```

pub mod models;
pub mod bitrix;
pub mod config;
pub mod cli;
