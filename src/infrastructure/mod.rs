pub mod database;
pub mod repositories_impl;
