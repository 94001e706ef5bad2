pub mod mime;
pub mod random;
pub mod routes;
