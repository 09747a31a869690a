//! `YouTube` Data API v3 client supplying raw comment batches.

pub mod client;
pub mod error;
mod retry;
pub mod types;

pub use client::YoutubeClient;
pub use error::YoutubeError;
