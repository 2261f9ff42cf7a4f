use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An immutable, ordered set of token claims.
///
/// `ClaimSet` is the payload-shaped view of an access token: an ordered
/// mapping from claim name to JSON claim value. Instances are never mutated
/// in place; all construction goes through [`ClaimSetBuilder`], and
/// augmentation produces a new set while the original stays intact.
///
/// The set serializes transparently as a bare JSON object, so the enclosing
/// issuer can embed it directly as a JWT payload.
///
/// # Examples
///
/// ```
/// use claims_augment::ClaimSet;
///
/// let claims = ClaimSet::builder()
///     .claim("sub", "alice")
///     .claim("iss", "https://issuer.example.com")
///     .build();
///
/// assert_eq!(claims.get_str("sub"), Some("alice"));
/// assert_eq!(claims.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimSet {
    claims: serde_json::Map<String, Value>,
}

impl ClaimSet {
    /// Creates an empty claim set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a builder for constructing a claim set from scratch.
    pub fn builder() -> ClaimSetBuilder {
        ClaimSetBuilder::new()
    }

    /// Returns a builder seeded with every entry of this set.
    ///
    /// This is how augmentation extends a set without touching the
    /// original: copy everything out, add to the copy, build a new set.
    pub fn to_builder(&self) -> ClaimSetBuilder {
        ClaimSetBuilder {
            claims: self.claims.clone(),
        }
    }

    /// Returns the value of the named claim, if present.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.claims.get(name)
    }

    /// Returns the named claim as a string slice, if present and a string.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.claims.get(name).and_then(Value::as_str)
    }

    /// Returns `true` if the named claim exists.
    pub fn contains(&self, name: &str) -> bool {
        self.claims.contains_key(name)
    }

    /// Returns the number of claims in the set.
    pub fn len(&self) -> usize {
        self.claims.len()
    }

    /// Returns `true` if the set holds no claims.
    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.claims.iter()
    }
}

impl From<serde_json::Map<String, Value>> for ClaimSet {
    fn from(claims: serde_json::Map<String, Value>) -> Self {
        Self { claims }
    }
}

/// Builder for [`ClaimSet`].
///
/// Claims are kept in insertion order. Setting a name that is already
/// present overwrites the previous value.
///
/// # Examples
///
/// ```
/// use claims_augment::ClaimSet;
///
/// let claims = ClaimSet::builder()
///     .claim("sub", "alice")
///     .claim("admin", true)
///     .build();
///
/// assert!(claims.contains("admin"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClaimSetBuilder {
    claims: serde_json::Map<String, Value>,
}

impl ClaimSetBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the named claim, returning the builder for chaining.
    pub fn claim(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.claims.insert(name.into(), value.into());
        self
    }

    /// Finalizes the builder into an immutable [`ClaimSet`].
    pub fn build(self) -> ClaimSet {
        ClaimSet {
            claims: self.claims,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_claims_in_order() {
        let claims = ClaimSet::builder()
            .claim("sub", "alice")
            .claim("aud", "api")
            .claim("scope", "read")
            .build();

        let names: Vec<&str> = claims.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["sub", "aud", "scope"]);
    }

    #[test]
    fn to_builder_seeds_existing_entries() {
        let base = ClaimSet::builder().claim("sub", "alice").build();
        let extended = base.to_builder().claim("clientChannel", "mobile").build();

        assert_eq!(extended.get_str("sub"), Some("alice"));
        assert_eq!(extended.get_str("clientChannel"), Some("mobile"));

        // The original set is untouched
        assert_eq!(base.len(), 1);
        assert!(!base.contains("clientChannel"));
    }

    #[test]
    fn claim_overwrites_existing_name() {
        let claims = ClaimSet::builder()
            .claim("sub", "alice")
            .claim("sub", "bob")
            .build();

        assert_eq!(claims.get_str("sub"), Some("bob"));
        assert_eq!(claims.len(), 1);
    }

    #[test]
    fn non_string_values_are_supported() {
        let claims = ClaimSet::builder()
            .claim("exp", 1735689600u64)
            .claim("admin", false)
            .build();

        assert_eq!(claims.get("exp").and_then(Value::as_u64), Some(1735689600));
        assert_eq!(claims.get("admin").and_then(Value::as_bool), Some(false));
    }

    #[test]
    fn serializes_as_bare_json_object() {
        let claims = ClaimSet::builder()
            .claim("sub", "alice")
            .claim("clientChannel", "mobile")
            .build();

        let json = serde_json::to_string(&claims).unwrap();
        assert_eq!(json, r#"{"sub":"alice","clientChannel":"mobile"}"#);

        let parsed: ClaimSet = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, claims);
    }

    #[test]
    fn empty_set_reports_empty() {
        let claims = ClaimSet::new();
        assert!(claims.is_empty());
        assert_eq!(claims.len(), 0);
        assert!(claims.get("sub").is_none());
    }
}
