//! Foreign-key lookups that make the missing case explicit.

use crate::collection::Record;

/// Result of resolving a foreign key against a collection.
#[derive(Debug, PartialEq)]
pub enum Lookup<'a, T> {
    Found(&'a T),
    Missing,
}

impl<T> Clone for Lookup<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Lookup<'_, T> {}

impl<'a, T> From<Option<&'a T>> for Lookup<'a, T> {
    fn from(value: Option<&'a T>) -> Self {
        value.map_or(Self::Missing, Self::Found)
    }
}

impl<'a, T> Lookup<'a, T> {
    /// Chain a second lookup off the found record.
    pub fn and_then<U>(self, f: impl FnOnce(&'a T) -> Lookup<'a, U>) -> Lookup<'a, U> {
        match self {
            Self::Found(record) => f(record),
            Self::Missing => Lookup::Missing,
        }
    }

    /// Project a field, yielding `None` when the record is missing.
    pub fn field<U>(self, f: impl FnOnce(&'a T) -> U) -> Option<U> {
        match self {
            Self::Found(record) => Some(f(record)),
            Self::Missing => None,
        }
    }

    /// Project a text field, substituting `placeholder` when missing.
    pub fn label_or(self, f: impl FnOnce(&'a T) -> &'a str, placeholder: &str) -> String {
        match self {
            Self::Found(record) => f(record).to_string(),
            Self::Missing => placeholder.to_string(),
        }
    }
}

/// Resolve `id` against `records` with a linear scan.
pub fn lookup<R: Record>(records: &[R], id: R::Id) -> Lookup<'_, R> {
    records.iter().find(|record| record.id() == id).into()
}
