mod convert;
pub use convert::*;
