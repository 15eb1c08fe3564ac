//! Infrastructure: database connectivity.

pub mod db;
