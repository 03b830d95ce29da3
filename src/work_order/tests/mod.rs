//! Unit tests for the work order context.
