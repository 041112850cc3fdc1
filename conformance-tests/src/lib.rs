// conformance-tests/src/lib.rs
// ============================================================================
// Module: Pet Store Conformance Tests Library
// Description: Shared configuration for the conformance test suites.
// Purpose: Provide common utilities for the conformance-test binaries.
// Dependencies: std
// ============================================================================

//! ## Overview
//! This crate hosts the shared configuration utilities used by the Pet Store
//! conformance suites in `conformance-tests/tests`. The suites drive an
//! external Pet Store service named by the environment, or an in-process
//! reference stub when no target is configured.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
