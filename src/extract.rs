use crate::error::AugmentError;
use crate::request::ParameterSource;

/// Wire name of the client channel parameter and claim.
pub const CLIENT_CHANNEL: &str = "clientChannel";
/// Wire name of the client version parameter and claim.
pub const CLIENT_VERSION: &str = "clientVersion";

/// A request parameter this crate knows how to promote into a claim.
///
/// The set is closed and compile-time fixed. Each variant carries its exact
/// wire string, which doubles as the claim name; matching is case-sensitive.
/// Adding a parameter means adding a variant, its name, and an `ALL` entry;
/// the extraction and merge logic is shape-independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecognizedParam {
    /// The caller's channel identifier (`clientChannel`)
    ClientChannel,
    /// The caller's client version string (`clientVersion`)
    ClientVersion,
}

impl RecognizedParam {
    /// Every recognized parameter, in the order claims are merged.
    pub const ALL: [RecognizedParam; 2] =
        [RecognizedParam::ClientChannel, RecognizedParam::ClientVersion];

    /// Returns the exact query/form parameter name, which is also the claim
    /// name added to the token.
    pub fn name(self) -> &'static str {
        match self {
            RecognizedParam::ClientChannel => CLIENT_CHANNEL,
            RecognizedParam::ClientVersion => CLIENT_VERSION,
        }
    }
}

/// The outcome of reading one recognized parameter from a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractedValue {
    /// Present with a non-blank value, passed through unmodified
    Present(String),
    /// Present but empty or whitespace-only
    Blank,
    /// Not in the request at all
    Absent,
}

impl ExtractedValue {
    /// Classifies a raw parameter read.
    ///
    /// `None` is absent; a value that trims to nothing is blank; anything
    /// else is present with the raw, untrimmed string.
    pub fn from_raw(raw: Option<String>) -> Self {
        match raw {
            None => ExtractedValue::Absent,
            Some(value) if value.trim().is_empty() => ExtractedValue::Blank,
            Some(value) => ExtractedValue::Present(value),
        }
    }

    /// Returns `true` for a present, non-blank value.
    pub fn is_present(&self) -> bool {
        matches!(self, ExtractedValue::Present(_))
    }
}

/// Reads one recognized parameter from the given source.
///
/// # Errors
///
/// Returns [`AugmentError`] when the source itself fails. A parameter that
/// is merely missing or blank is not an error; it is reported through
/// [`ExtractedValue`].
pub fn extract(
    source: &dyn ParameterSource,
    param: RecognizedParam,
) -> Result<ExtractedValue, AugmentError> {
    let raw = source
        .parameter(param.name())
        .map_err(|err| AugmentError::parameter_read(param.name(), err))?;
    Ok(ExtractedValue::from_raw(raw))
}
