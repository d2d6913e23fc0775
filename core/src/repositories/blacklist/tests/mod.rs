//! Tests for the blacklist store
