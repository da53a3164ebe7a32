//! Array namespace tokens
//!
//! A namespace identifies the array backend a cosmology is bound to, at an
//! optional array-API version. Tokens only support equality and hashing;
//! nothing else about their structure is part of the contract.

use std::borrow::Cow;
use std::fmt;

use crate::Array;

/// Opaque identifier of an array backend (and API version)
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Namespace {
    backend: Cow<'static, str>,
    api_version: Option<String>,
}

impl Namespace {
    pub fn new(backend: impl Into<Cow<'static, str>>, api_version: Option<&str>) -> Self {
        Namespace {
            backend: backend.into(),
            api_version: api_version.map(str::to_owned),
        }
    }

    /// Namespace of the backend `A` belongs to
    #[inline]
    pub fn of<A: Array>(api_version: Option<&str>) -> Self {
        Namespace::new(A::BACKEND, api_version)
    }

    #[inline]
    pub fn backend(&self) -> &str {
        &self.backend
    }

    #[inline]
    pub fn api_version(&self) -> Option<&str> {
        self.api_version.as_deref()
    }
}

impl fmt::Debug for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Namespace({})", self)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.api_version() {
            Some(version) => write!(f, "{}@{}", self.backend, version),
            None => f.write_str(&self.backend),
        }
    }
}
