//! Tests for the token service

mod cleanup_tests;
mod service_tests;
