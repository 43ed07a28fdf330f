use std::slice;

use crate::ErrorDescriptor;

/// Ordered collection of expected errors.
///
/// Descriptors keep their declaration order and are never deduplicated: two
/// equal descriptors expect two distinct actual errors.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ExpectationSet {
    descriptors: Vec<ErrorDescriptor>,
}

impl ExpectationSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            descriptors: Vec::new(),
        }
    }

    /// Appends a descriptor.
    pub fn push(&mut self, descriptor: ErrorDescriptor) {
        self.descriptors.push(descriptor);
    }

    /// Returns the number of descriptors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Returns `true` if no error is expected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Iterates over the descriptors in declaration order.
    pub fn iter(&self) -> slice::Iter<'_, ErrorDescriptor> {
        self.descriptors.iter()
    }

    /// Returns the descriptors as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[ErrorDescriptor] {
        &self.descriptors
    }
}

impl FromIterator<ErrorDescriptor> for ExpectationSet {
    fn from_iter<I: IntoIterator<Item = ErrorDescriptor>>(iter: I) -> Self {
        Self {
            descriptors: iter.into_iter().collect(),
        }
    }
}

impl Extend<ErrorDescriptor> for ExpectationSet {
    fn extend<I: IntoIterator<Item = ErrorDescriptor>>(&mut self, iter: I) {
        self.descriptors.extend(iter);
    }
}

impl<'a> IntoIterator for &'a ExpectationSet {
    type Item = &'a ErrorDescriptor;
    type IntoIter = slice::Iter<'a, ErrorDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_order_and_duplicates() {
        let mut set = ExpectationSet::new();
        set.push(ErrorDescriptor::new(2));
        set.extend([ErrorDescriptor::new(1), ErrorDescriptor::new(2)]);

        let codes: Vec<i32> = set.iter().map(ErrorDescriptor::code).collect();
        assert_eq!(codes, [2, 1, 2]);
        assert_eq!(set.len(), 3);
        assert!(!set.is_empty());
    }

    #[test]
    fn default_set_is_empty() {
        let set = ExpectationSet::default();
        assert!(set.is_empty());
        assert!(set.as_slice().is_empty());
    }
}
