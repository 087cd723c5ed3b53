//! Workspace-level integration tests for ArithSeq (see `tests/`).
