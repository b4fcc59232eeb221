//! HTTP handlers

pub mod chat;
pub mod health;
pub mod home;
pub mod predict;
pub mod samples;
