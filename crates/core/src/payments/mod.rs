//! Invoice payment flow

pub mod ports;
pub mod service;

pub use service::PaymentService;
