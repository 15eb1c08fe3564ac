//! Domain layer: pure authorization types.

pub mod roles;

pub use roles::ProjectRole;
