use std::fmt;

/// Tag copied verbatim into the outgoing message so consumers can pick a decoder.
///
/// Producers and consumers must agree on the convention: either a short name
/// (`short_of`) or the full type path (`of`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeDiscriminator(String);

impl TypeDiscriminator {
    pub fn new<S: Into<String>>(value: S) -> Self {
        Self(value.into())
    }

    /// Full type path, e.g. `my_app::messages::OrderPlaced`
    pub fn of<T: ?Sized>() -> Self {
        Self(std::any::type_name::<T>().to_string())
    }

    /// Last path segment of the type name, generics included.
    pub fn short_of<T: ?Sized>() -> Self {
        let full = std::any::type_name::<T>();
        let base = full.split('<').next().unwrap_or(full);
        let start = base.rfind("::").map(|index| index + 2).unwrap_or(0);
        Self(full[start..].to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for TypeDiscriminator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeDiscriminator {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for TypeDiscriminator {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for TypeDiscriminator {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
