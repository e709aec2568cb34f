//! HTTP layer: header construction, reqwest client setup and the
//! [`transport::HttpTransport`] seam the adapters send requests through.

pub mod client;
pub mod headers;
pub mod transport;
