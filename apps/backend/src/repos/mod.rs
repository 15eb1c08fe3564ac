//! Membership store seam and its in-process implementation.

pub mod memberships;
pub mod memberships_memory;
