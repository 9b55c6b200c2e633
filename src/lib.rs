// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;

#[macro_use]
pub mod log;

pub mod aggregate;
pub mod csv;
pub mod data;
pub mod file;
pub mod gen;
pub mod gui;
pub mod loader;
pub mod records;
pub mod registry;
pub mod store;
