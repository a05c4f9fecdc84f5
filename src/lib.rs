//! Workspace-level integration tests for fibsvc live in `tests/`.
