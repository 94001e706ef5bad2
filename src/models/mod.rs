mod conversion;
pub use conversion::*;

mod envelope;
pub use envelope::*;
