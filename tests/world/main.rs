//! Integration tests for Layer 1: World
//!
//! Tests for Exit, Direction, and Command value models.

mod commands;
