//! Page acquisition: the HTTP transport behind the tracker lookup.

pub mod http_client;

pub use http_client::{HttpClient, HttpResponse};
