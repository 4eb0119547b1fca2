//! cronspell CLI library.
//!
//! This crate provides the command implementations for the cronspell CLI:
//! expanding cron expressions into per-field value reports and checking
//! expressions for validity.

pub mod commands;
