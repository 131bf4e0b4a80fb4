//! Utility modules: file locations and JSON loading.

pub mod persistence;
