use serde::{Deserialize, Serialize};

/// Labeled, ordered sequence of per-trial values.
///
/// The canonical input form for the summarizer. Any ordered container can be
/// converted into one; conversion preserves values and order. The label is
/// carried for diagnostics only and never affects computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series<T> {
    values: Vec<T>,
    label: Option<String>,
}

impl<T> Series<T> {
    pub fn new(values: Vec<T>) -> Self {
        Self {
            values,
            label: None,
        }
    }

    pub fn labeled(values: Vec<T>, label: impl Into<String>) -> Self {
        Self {
            values,
            label: Some(label.into()),
        }
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.values.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn into_values(self) -> Vec<T> {
        self.values
    }
}

impl<T> From<Vec<T>> for Series<T> {
    fn from(values: Vec<T>) -> Self {
        Self::new(values)
    }
}

impl<T: Clone> From<&[T]> for Series<T> {
    fn from(values: &[T]) -> Self {
        Self::new(values.to_vec())
    }
}

impl<T, const N: usize> From<[T; N]> for Series<T> {
    fn from(values: [T; N]) -> Self {
        Self::new(values.into())
    }
}

impl<T> FromIterator<T> for Series<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Series<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Series<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
