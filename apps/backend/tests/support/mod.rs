#![allow(dead_code, unused_imports)]

pub mod app_builder;
pub mod auth;
pub mod db;
pub mod stores;

pub use app_builder::create_test_app;
