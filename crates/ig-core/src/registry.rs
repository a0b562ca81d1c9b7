//! Immutable name → value registries.
//!
//! A registry is assembled once (typically at process start), then frozen and
//! handed around by reference.  There is no global instance and no interior
//! mutability, so concurrent lookups need no synchronisation.

use crate::errors::{Error, Result};
use std::collections::BTreeMap;

/// A frozen map from names to conventions or generator templates.
#[derive(Debug, Clone, PartialEq)]
pub struct Registry<T> {
    kind: &'static str,
    entries: BTreeMap<String, T>,
}

impl<T> Registry<T> {
    /// Build a registry of `kind` entries.  Later duplicates replace earlier
    /// ones.
    pub fn from_entries<I, S>(kind: &'static str, entries: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
    {
        Self {
            kind,
            entries: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Build a registry from fallibly constructed entries.
    ///
    /// # Errors
    /// The first failed entry is returned as is; a name given twice is an
    /// argument error.
    pub fn try_from_entries<I, S>(kind: &'static str, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = Result<(S, T)>>,
        S: Into<String>,
    {
        let mut map = BTreeMap::new();
        for entry in entries {
            let (name, value) = entry?;
            let name = name.into();
            if map.contains_key(&name) {
                return Err(Error::InvalidArgument(format!(
                    "{kind} '{name}' is registered twice"
                )));
            }
            map.insert(name, value);
        }
        Ok(Self { kind, entries: map })
    }

    /// What this registry holds (used in lookup errors).
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Look up `name`, failing with [`Error::NotFound`] when absent.
    pub fn get(&self, name: &str) -> Result<&T> {
        self.entries
            .get(name)
            .ok_or_else(|| Error::not_found(self.kind, name))
    }

    /// Whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_hit_and_miss() {
        let reg = Registry::from_entries("tenor", [("3M", 3), ("6M", 6)]);
        assert_eq!(*reg.get("6M").unwrap(), 6);
        let err = reg.get("9M").unwrap_err();
        assert!(err.is_lookup_error());
        assert!(!err.is_argument_error());
        assert_eq!(reg.kind(), "tenor");
    }

    #[test]
    fn fallible_build_fails_loudly() {
        let ok: Vec<Result<(&str, i32)>> = vec![Ok(("3M", 3)), Ok(("6M", 6))];
        assert_eq!(Registry::try_from_entries("tenor", ok).unwrap().len(), 2);

        let failed = vec![Ok(("3M", 3)), Err(Error::InvalidArgument("bad tenor".into()))];
        let err = Registry::try_from_entries("tenor", failed).unwrap_err();
        assert_eq!(err, Error::InvalidArgument("bad tenor".into()));

        let twice: Vec<Result<(&str, i32)>> = vec![Ok(("3M", 3)), Ok(("3M", 4))];
        let err = Registry::try_from_entries("tenor", twice).unwrap_err();
        assert!(err.is_argument_error());
        assert!(err.to_string().contains("registered twice"));
    }

    #[test]
    fn names_sorted() {
        let reg = Registry::from_entries("x", [("b", 1), ("a", 2), ("c", 3)]);
        assert_eq!(reg.names().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(reg.len(), 3);
        assert!(reg.contains("a"));
        assert!(!reg.is_empty());
    }
}
