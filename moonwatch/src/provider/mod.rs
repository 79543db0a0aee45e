//! Moon-phase provider abstraction.
//!
//! The [`PhaseProvider`] trait is the network boundary: one invocation, one
//! outbound call, no retries. [`ApiverveProvider`] is the concrete
//! implementation over an injectable [`HttpClient`].

mod apiverve;
mod http;
mod types;

pub use apiverve::{ApiverveProvider, APIVERVE_BASE_URL};
pub use http::{HttpClient, HttpError, ReqwestClient};
pub use types::{PhaseProvider, ProviderError};

#[cfg(test)]
pub use http::tests::MockHttpClient;
