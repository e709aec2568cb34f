//! Request execution plumbing shared by the backend adapters.

pub mod http;
