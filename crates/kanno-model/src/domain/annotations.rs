use std::{
    collections::{BTreeMap, HashMap},
    hash::BuildHasher,
};

use serde::{Deserialize, Serialize};

/// Read-only lookup over string annotations attached to a resource.
///
/// Resolvers only ever read through this trait, so any caller-owned mapping can be passed in as-is.
/// A missing mapping (`None`) behaves exactly like an empty one.
pub trait AnnotationSource {
    /// Returns the raw value stored under `key`, if any.
    fn annotation(&self, key: &str) -> Option<&str>;
}

impl AnnotationSource for BTreeMap<String, String> {
    fn annotation(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl<S: BuildHasher> AnnotationSource for HashMap<String, String, S> {
    fn annotation(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl<T: AnnotationSource> AnnotationSource for Option<T> {
    fn annotation(&self, key: &str) -> Option<&str> {
        self.as_ref().and_then(|inner| inner.annotation(key))
    }
}

impl<T: AnnotationSource + ?Sized> AnnotationSource for &T {
    fn annotation(&self, key: &str) -> Option<&str> {
        (**self).annotation(key)
    }
}

/// Annotation set of a resource, keyed by annotation name.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Annotations(pub BTreeMap<String, String>);

impl Annotations {
    /// Create an empty annotation set.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Create an annotation set containing a single entry.
    pub fn single<K, V>(key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut out = Self::new();
        out.insert(key, value);
        out
    }

    /// Returns `true` if no annotations are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Insert or overwrite an annotation.
    ///
    /// Returns `self` for chaining.
    pub fn insert<K, V>(&mut self, key: K, val: V) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.0.insert(key.into(), val.into());
        self
    }

    /// Get the raw value for a key, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|s| s.as_str())
    }

    /// Iterate through all annotations as `(&str, &str)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl AnnotationSource for Annotations {
    fn annotation(&self, key: &str) -> Option<&str> {
        self.get(key)
    }
}

impl From<BTreeMap<String, String>> for Annotations {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

impl<K, V> FromIterator<(K, V)> for Annotations
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
