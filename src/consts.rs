use std::time::Duration;

pub static VERSION: &str = env!("CARGO_PKG_VERSION");
pub static NAME: &str = env!("CARGO_PKG_NAME");

pub static API_HOST: &str = "https://api.convertio.co";

/// Pause between two status requests while waiting for a conversion.
pub const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Size of the buffer used when copying a remote body into a sink.
pub const CHUNK_SIZE: usize = 4096;

/// The only step the remote service reports for a completed conversion.
pub static FINISH_STEP: &str = "finish";

pub const DEFAULT_LIST_COUNT: u32 = 10;
pub static DEFAULT_LIST_STATUS: &str = "all";
