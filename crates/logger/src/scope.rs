//! Accumulated attributes and groups of derived loggers

use crate::{Attr, Record};
use std::borrow::Cow;

/// Attributes and group prefix bound to a logger
///
/// [`Logger::with_attrs`](crate::Logger::with_attrs) and
/// [`Logger::with_group`](crate::Logger::with_group) only accumulate state here;
/// backends read it back through [`Scope::resolve`] when they render, so every backend
/// qualifies keys the same way.
///
/// Keys are qualified with the groups open at the time they were bound: attributes
/// bound before a group keep their bare key, later ones become `group.key`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scope {
    prefix: String,
    attrs: Vec<Attr>,
}

impl Scope {
    /// Empty scope
    pub fn new() -> Self {
        Self::default()
    }

    /// Child scope with `attrs` appended under the current group prefix
    #[must_use]
    pub fn with_attrs(&self, attrs: impl IntoIterator<Item = Attr>) -> Self {
        let mut scope = self.clone();
        for attr in attrs {
            let attr = scope.qualify(attr);
            scope.attrs.push(attr);
        }
        scope
    }

    /// Child scope that qualifies subsequent keys with `name`
    ///
    /// An empty name leaves the scope unchanged.
    #[must_use]
    pub fn with_group(&self, name: &str) -> Self {
        let mut scope = self.clone();
        if !name.is_empty() {
            scope.prefix.push_str(name);
            scope.prefix.push('.');
        }
        scope
    }

    /// Pre-bound attributes, already qualified
    pub fn attrs(&self) -> &[Attr] {
        &self.attrs
    }

    /// Current group prefix, `""` or `a.b.`
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Apply the current group prefix to an attribute key
    pub fn qualify(&self, mut attr: Attr) -> Attr {
        if !self.prefix.is_empty() {
            attr.key = Cow::Owned(format!("{}{}", self.prefix, attr.key));
        }
        attr
    }

    /// Pre-bound attributes followed by the record's own, in order
    pub fn resolve<'r>(&'r self, record: &'r Record<'_>) -> impl Iterator<Item = Cow<'r, Attr>> {
        let bound = self.attrs.iter().map(Cow::Borrowed);
        let own = record.attrs.iter().map(move |attr| {
            if self.prefix.is_empty() {
                Cow::Borrowed(attr)
            } else {
                Cow::Owned(self.qualify(attr.clone()))
            }
        });
        bound.chain(own)
    }
}
