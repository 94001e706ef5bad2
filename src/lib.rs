//! Blocking client for the Convertio file conversion API.
//!
//! ```no_run
//! use std::time::Duration;
//! use convertio::{Client, ConvertOptions};
//!
//! let client = Client::from_env()?;
//! let conversion = client.convert("./novel.epub", "pdf", ConvertOptions::default())?;
//! conversion
//!     .download(Some("./novel.pdf".into()), Some(Duration::from_secs(600)))?
//!     .delete()?;
//! # Ok::<(), convertio::ConvertioError>(())
//! ```

pub mod consts;
mod client;
mod conversion;
mod download;
mod dtos;
mod error;
pub mod models;
mod settings;
mod source;
mod util;

pub use client::Client;
pub use conversion::Conversion;
pub use download::Destination;
pub use error::{ConvertioError, Result};
pub use settings::ClientSettings;
pub use source::{ConvertOptions, Source};
