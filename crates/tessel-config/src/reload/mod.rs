//! Live config reload manager.
//!
//! Combines the file watcher with config loading so that edits to the
//! settings file reach the sync loop without a restart.

mod manager;


pub use manager::ReloadManager;
