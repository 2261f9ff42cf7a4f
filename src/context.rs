use crate::request::ParameterSource;

/// The request context available to one issuance call.
///
/// Exactly one variant is active per call. The two request-bearing variants
/// wrap the handle supplied by the serving stack; `Absent` means neither
/// endpoint supplied a request, in which case augmentation is skipped.
///
/// The variant is selected by [`RequestContext::resolve`], never inferred
/// elsewhere, so the "exactly one or none" invariant is checkable in one
/// place.
#[derive(Clone, Copy)]
pub enum RequestContext<'a> {
    /// The inbound token-endpoint request (the primary, expected path)
    Token(&'a dyn ParameterSource),
    /// The inbound authorization-endpoint request
    Authorization(&'a dyn ParameterSource),
    /// Neither request was supplied
    Absent,
}

impl<'a> RequestContext<'a> {
    /// Selects the active context for this call.
    ///
    /// The token-endpoint request wins when supplied. The
    /// authorization-endpoint request is a secondary path; issuance rarely
    /// reaches this code during authorization, but the branch is kept so a
    /// context supplied there is still honored. When neither is supplied,
    /// the condition is logged as a defect and `Absent` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use claims_augment::{ParamMap, RequestContext};
    ///
    /// let token_request = ParamMap::from_query("clientChannel=mobile");
    /// let context = RequestContext::resolve(Some(&token_request), None);
    /// assert!(!context.is_absent());
    ///
    /// let context = RequestContext::resolve(None, None);
    /// assert!(context.is_absent());
    /// ```
    pub fn resolve(
        token_request: Option<&'a dyn ParameterSource>,
        authorization_request: Option<&'a dyn ParameterSource>,
    ) -> Self {
        if let Some(request) = token_request {
            RequestContext::Token(request)
        } else if let Some(request) = authorization_request {
            RequestContext::Authorization(request)
        } else {
            tracing::error!(
                "unable to resolve a request context; claim augmentation will be skipped"
            );
            RequestContext::Absent
        }
    }

    /// Returns the parameter source of the active request, or `None` for
    /// `Absent`.
    pub fn parameter_source(&self) -> Option<&'a dyn ParameterSource> {
        match self {
            RequestContext::Token(request) => Some(*request),
            RequestContext::Authorization(request) => Some(*request),
            RequestContext::Absent => None,
        }
    }

    /// Returns `true` if no request was supplied.
    pub fn is_absent(&self) -> bool {
        matches!(self, RequestContext::Absent)
    }
}

impl std::fmt::Debug for RequestContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestContext::Token(_) => f.write_str("Token"),
            RequestContext::Authorization(_) => f.write_str("Authorization"),
            RequestContext::Absent => f.write_str("Absent"),
        }
    }
}
