use std::collections::HashMap;
use std::fmt;

/// A source of named request parameters.
///
/// This is the entire request boundary of the crate: one capability,
/// "get parameter value by name, or absent if not present." Richer request
/// semantics (headers, body, auth state) are deliberately out of reach.
///
/// Implementations wrap whatever the serving stack hands the issuance
/// pipeline — a parsed query string, a form body, a framework request
/// extractor. [`ParamMap`] is a ready-made map-backed implementation.
///
/// # Errors
///
/// `parameter` returns `Ok(None)` when the parameter is simply not in the
/// request. `Err(ParameterError)` is reserved for the handle itself failing
/// (a dropped or malformed underlying request); the augmentation step
/// treats that as a whole-step failure, not a missing parameter.
pub trait ParameterSource {
    /// Returns the value of the named parameter, or `None` if absent.
    fn parameter(&self, name: &str) -> Result<Option<String>, ParameterError>;
}

/// Failure raised by a [`ParameterSource`] whose underlying request could
/// not be read.
#[derive(Debug)]
pub struct ParameterError {
    message: String,
}

impl ParameterError {
    /// Creates a new error with a human-readable message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ParameterError {}

/// A map-backed [`ParameterSource`].
///
/// Useful both for callers whose framework has already parsed the request
/// parameters into key/value pairs and for tests.
///
/// # Examples
///
/// ```
/// use claims_augment::{ParamMap, ParameterSource};
///
/// let mut params = ParamMap::new();
/// params.insert("clientChannel", "mobile");
///
/// let value = params.parameter("clientChannel").unwrap();
/// assert_eq!(value.as_deref(), Some("mobile"));
/// assert!(params.parameter("missing").unwrap().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParamMap {
    params: HashMap<String, String>,
}

impl ParamMap {
    /// Creates an empty parameter map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a map from `(name, value)` pairs.
    ///
    /// Later duplicates of a name are ignored; the first occurrence wins,
    /// matching servlet-style `getParameter` behavior.
    pub fn from_pairs<N, V>(pairs: impl IntoIterator<Item = (N, V)>) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        let mut map = Self::new();
        for (name, value) in pairs {
            map.params.entry(name.into()).or_insert_with(|| value.into());
        }
        map
    }

    /// Parses an `application/x-www-form-urlencoded` query string.
    ///
    /// Handles percent-escapes and `+` as space. A segment without `=`
    /// becomes a parameter with an empty value. The first occurrence of a
    /// duplicated name wins. Malformed percent-escapes are kept verbatim
    /// rather than dropping the parameter.
    ///
    /// # Examples
    ///
    /// ```
    /// use claims_augment::{ParamMap, ParameterSource};
    ///
    /// let params = ParamMap::from_query("clientChannel=mobile&clientVersion=2.4.1");
    /// assert_eq!(
    ///     params.parameter("clientVersion").unwrap().as_deref(),
    ///     Some("2.4.1"),
    /// );
    /// ```
    pub fn from_query(query: &str) -> Self {
        let mut map = Self::new();
        for segment in query.split('&') {
            if segment.is_empty() {
                continue;
            }
            let (name, value) = match segment.split_once('=') {
                Some((name, value)) => (name, value),
                None => (segment, ""),
            };
            map.params
                .entry(decode_component(name))
                .or_insert_with(|| decode_component(value));
        }
        map
    }

    /// Sets a parameter, overwriting any previous value for the name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.params.insert(name.into(), value.into());
    }

    /// Returns the number of parameters held.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns `true` if no parameters are held.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl ParameterSource for ParamMap {
    fn parameter(&self, name: &str) -> Result<Option<String>, ParameterError> {
        Ok(self.params.get(name).cloned())
    }
}

/// Decodes one form-encoded component: `+` means space, then percent-escapes.
fn decode_component(raw: &str) -> String {
    let plus_decoded = raw.replace('+', " ");
    match urlencoding::decode(&plus_decoded) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => plus_decoded,
    }
}
