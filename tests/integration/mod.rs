//! Integration tests for item-service
//!
//! These tests verify the interaction between multiple components
//! against real stores, without mocking.

pub mod api_tests;
pub mod database_store_tests;
