//! Request-derived claim augmentation for access-token issuance.
//!
//! This crate sits between an upstream token issuer and the wire: given the
//! claim set the issuer already assembled and the inbound request that
//! triggered issuance, it conditionally attaches caller-supplied metadata
//! (a client channel identifier and a client version string) when present,
//! and leaves the base claims untouched otherwise.
//!
//! # Core Types
//!
//! - [`ClaimSet`]: immutable, ordered claim-name → claim-value mapping
//! - [`RequestContext`]: which of the possible inbound requests is active
//! - [`ParameterSource`]: the one capability needed from a request
//! - [`RecognizedParam`] / [`ExtractedValue`]: the closed parameter set and
//!   the outcome of reading one
//! - [`augment`]: the single exposed operation
//!
//! # Design
//!
//! [`augment`] never fails and never panics: any problem resolving the
//! context, reading parameters, or building the new set is logged through
//! [`tracing`] and the original claim set is returned unchanged. Issuing a
//! token with correct base claims always takes priority over enriching it.
//!
//! # Examples
//!
//! ```
//! use claims_augment::{augment, ClaimSet, ParamMap};
//!
//! // Claims assembled by the upstream issuer
//! let base = ClaimSet::builder()
//!     .claim("sub", "alice")
//!     .claim("aud", "api")
//!     .build();
//!
//! // Parameters from the token-endpoint request
//! let token_request = ParamMap::from_query("clientChannel=mobile&clientVersion=2.4.1");
//!
//! let claims = augment(base, Some(&token_request), None);
//!
//! assert_eq!(claims.get_str("sub"), Some("alice"));
//! assert_eq!(claims.get_str("clientChannel"), Some("mobile"));
//! assert_eq!(claims.get_str("clientVersion"), Some("2.4.1"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod augment;
mod claims;
mod context;
mod error;
mod extract;
mod request;

pub use augment::augment;
pub use claims::{ClaimSet, ClaimSetBuilder};
pub use context::RequestContext;
pub use error::AugmentError;
pub use extract::{extract, ExtractedValue, RecognizedParam, CLIENT_CHANNEL, CLIENT_VERSION};
pub use request::{ParamMap, ParameterError, ParameterSource};
