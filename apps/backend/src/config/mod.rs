pub mod env;

pub use env::AppConfig;
