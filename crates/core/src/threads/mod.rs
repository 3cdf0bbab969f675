//! Conversation threads attached to tickets and projects

pub mod ports;
pub mod service;

pub use service::ThreadService;
