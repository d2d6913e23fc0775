//! Tests for the user service
