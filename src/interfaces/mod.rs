//! Interface layer: the HTTP surface

pub mod http;
