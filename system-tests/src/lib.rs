// system-tests/src/lib.rs
// ============================================================================
// Module: Stellar Burgers System Tests Library
// Description: Shared configuration for the API contract system tests.
// Purpose: Provide typed environment settings to the system-test binaries.
// Dependencies: stellar-burgers-api, url
// ============================================================================

//! ## Overview
//! This crate hosts configuration shared by the system-test binaries in
//! `system-tests/tests`. Live suites run against the remote service and are
//! gated by the `system-tests` feature; the offline suite drives the same
//! scenarios against an in-process stub.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
