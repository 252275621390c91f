//! Underwriting Intake - adaptive medical and lifestyle interview engine
//!
//! This crate collects a structured risk-underwriting dossier one question at
//! a time, adapting the path to earlier answers.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
