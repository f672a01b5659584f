//! HTTP layer: `XblHttp` request pipeline over a pluggable transport.

pub mod client;
pub mod page;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{Collection, XblHttp};
pub use page::{Page, PageEnvelope};
#[cfg(feature = "http")]
pub use transport::ReqwestTransport;
pub use transport::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
