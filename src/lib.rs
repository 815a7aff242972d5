//! A bank ATM simulator: account registration, login, deposit, withdrawal
//! and balance inquiry over an in-memory set of accounts, with standard and
//! premium (2% withdrawal fee) account tiers.
//!
//! The core is [`worker::processor::Atm`], which turns each
//! [`common::event::AtmRequest`] into an [`common::event::AtmReply`]. The
//! `io` layer parses CSV operation scripts and renders replies; `app` wires
//! both into the interactive menu and the batch runner.

pub mod app;
pub mod common;
pub mod domain;
pub mod io;
pub mod worker;
