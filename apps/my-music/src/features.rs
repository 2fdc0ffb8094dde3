//! Feature credit entries

/// Ordered feature credit inputs owned by the album form
///
/// Entries may be blank while the user is typing; only non-empty values are
/// submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureEntries {
    entries: Vec<String>,
}

impl FeatureEntries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a blank input and return its index
    pub fn add(&mut self) -> usize {
        self.entries.push(String::new());
        self.entries.len() - 1
    }

    /// Replace the value at `index`; returns `false` if there is no such entry
    pub fn set(&mut self, index: usize, value: impl Into<String>) -> bool {
        match self.entries.get_mut(index) {
            Some(entry) => {
                *entry = value.into();
                true
            }
            None => false,
        }
    }

    /// Remove the input at `index`, returning its value
    pub fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }

    /// All inputs, including blank ones
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Non-empty values in input order
    pub fn submitted_values(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|value| !value.is_empty())
            .cloned()
            .collect()
    }
}

impl<S: Into<String>> FromIterator<S> for FeatureEntries {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(Into::into).collect(),
        }
    }
}
