//! Tests for per-subject batch evaluation.
