//! Typed operation wrappers over the task protocol
//!
//! Each operation is a fixed (endpoint variant, model ID, settings template)
//! triple funnelled through [`create_task`](crate::EnhancerClient::create_task)
//! and [`poll_task`](crate::EnhancerClient::poll_task).

pub mod enhance;

pub use enhance::EnhanceApi;
