//! Tests for the delegating validation service

mod mocks;
