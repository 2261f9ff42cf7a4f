use crate::claims::ClaimSet;
use crate::context::RequestContext;
use crate::error::AugmentError;
use crate::extract::{extract, ExtractedValue, RecognizedParam};
use crate::request::ParameterSource;

/// Augments a base claim set with recognized parameters from the inbound
/// request.
///
/// This is the single operation the crate exposes to the issuance
/// pipeline. It resolves which request context is active, reads each
/// recognized parameter once, and merges the present ones into a new claim
/// set. The base set is never mutated; when there is nothing to add (or
/// anything goes wrong) the base set is returned as-is.
///
/// This function is infallible by contract: no failure inside resolution,
/// extraction, or merging ever reaches the caller. Failures are logged and
/// the unmodified base claims are returned, so token issuance proceeds
/// with correct (if unenriched) claims.
///
/// # Examples
///
/// ```
/// use claims_augment::{augment, ClaimSet, ParamMap};
///
/// let base = ClaimSet::builder().claim("sub", "alice").build();
/// let token_request = ParamMap::from_query("clientChannel=mobile&clientVersion=");
///
/// let claims = augment(base, Some(&token_request), None);
///
/// assert_eq!(claims.get_str("sub"), Some("alice"));
/// assert_eq!(claims.get_str("clientChannel"), Some("mobile"));
/// assert!(!claims.contains("clientVersion")); // blank, so not added
/// ```
pub fn augment(
    base: ClaimSet,
    token_request: Option<&dyn ParameterSource>,
    authorization_request: Option<&dyn ParameterSource>,
) -> ClaimSet {
    let context = RequestContext::resolve(token_request, authorization_request);

    match augmented_claims(&base, &context) {
        Ok(Some(augmented)) => augmented,
        Ok(None) => base,
        Err(err) => {
            tracing::error!(error = %err, "claim augmentation failed; returning base claims unchanged");
            base
        }
    }
}

/// Builds the augmented claim set, or `None` when the base set should be
/// returned untouched (no context, or no recognized parameter present).
fn augmented_claims(
    base: &ClaimSet,
    context: &RequestContext<'_>,
) -> Result<Option<ClaimSet>, AugmentError> {
    let Some(source) = context.parameter_source() else {
        return Ok(None);
    };

    // Read every recognized parameter exactly once, up front. A present
    // value is committed here; nothing is re-extracted during the merge.
    let mut extracted = Vec::with_capacity(RecognizedParam::ALL.len());
    for param in RecognizedParam::ALL {
        extracted.push((param, extract(source, param)?));
    }

    if !extracted.iter().any(|(_, value)| value.is_present()) {
        tracing::warn!("no recognized request parameters present; claim set left unchanged");
        return Ok(None);
    }

    let mut builder = base.to_builder();
    for (param, value) in extracted {
        match value {
            ExtractedValue::Present(value) => {
                builder = builder.claim(param.name(), value);
            }
            ExtractedValue::Blank => {
                tracing::warn!(
                    parameter = param.name(),
                    "parameter is blank; not added to claim set"
                );
            }
            ExtractedValue::Absent => {
                tracing::warn!(
                    parameter = param.name(),
                    "parameter not present in request; not added to claim set"
                );
            }
        }
    }

    Ok(Some(builder.build()))
}
