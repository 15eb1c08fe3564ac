//! Adapters for external dependencies.

pub mod memberships_sea;
