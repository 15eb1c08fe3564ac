pub mod access_guard;
pub mod access_resolver;

pub use access_guard::AccessGuard;
pub use access_resolver::AccessResolver;
