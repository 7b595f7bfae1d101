//! Task client for the AI image-enhancement provider.
//!
//! This crate owns the create-then-poll task protocol: it builds the
//! encrypted settings payload, submits a task-creation request, and
//! repeatedly checks status until success, failure, or timeout.
//!
//! # Example
//!
//! ```rust,no_run
//! use pixelift_client::EnhancerClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create client with environment configuration
//!     let client = EnhancerClient::new()?;
//!
//!     // Remove the background from an image
//!     let image = std::fs::read("photo.jpg")?;
//!     let result = client.enhance().remove_background(&image).await?;
//!     println!("Output: {}", result.output);
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod action;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod presets;
pub mod task;

pub use action::{Action, UnknownAction};
pub use client::EnhancerClient;
pub use config::ClientConfig;
pub use error::{EnhanceError, Result};
pub use task::{EndpointVariant, SettingsPayload, TaskResult, SUCCESS_CODE};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::action::Action;
    pub use crate::client::EnhancerClient;
    pub use crate::config::ClientConfig;
    pub use crate::endpoints::EnhanceApi;
    pub use crate::error::{EnhanceError, Result};
    pub use crate::task::{EndpointVariant, SettingsPayload, TaskResult};
}
