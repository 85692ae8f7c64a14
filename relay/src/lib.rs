//! Image relay service: fetches an externally hosted image on behalf of
//! the browser client and re-serves its bytes with CORS and cache headers,
//! so the editor can load hosts that do not permit cross-origin access.

pub mod fetch;
pub mod http;

pub use fetch::{fetch_external_image, FetchError, FetchedImage, RelayConfig};
pub use http::{routes, serve, RelayState, RELAY_USER_AGENT};
