//! Command handlers

pub mod classify;
pub mod info;
pub mod list;
