//! Option labels and the ordered, duplicate-free option set.
//!
//! The option set is the source of truth for segment count and identity:
//! segment `i` on the wheel always corresponds to `options.get(i)`.
//!
//! # Example
//!
//! ```
//! use wheelpick_core::option_set::OptionSet;
//!
//! let mut options = OptionSet::new();
//! options.add("Pizza").unwrap();
//! options.add("  Sushi ").unwrap();
//!
//! assert_eq!(options.len(), 2);
//! assert_eq!(options.get(1).unwrap().as_str(), "Sushi");
//! assert!(options.add("Pizza").is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, WheelError};

/// Options offered by [`OptionSet::add_samples`].
pub const SAMPLE_OPTIONS: [&str; 10] = [
    "Pizza", "Sushi", "Burger", "Pasta", "Salad", "Steak", "Chicken", "Fish", "Tacos", "Ramen",
];

/// Marker appended to labels cut short by [`display_label`].
const ELLIPSIS: &str = "...";

/// A non-empty, trimmed option label.
///
/// Equality is exact string match on the trimmed text.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OptionLabel(String);

impl OptionLabel {
    /// Creates a label, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`WheelError::EmptyLabel`] if nothing remains after trimming.
    pub fn new(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(WheelError::EmptyLabel);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the label text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for OptionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OptionLabel({:?})", self.0)
    }
}

impl fmt::Display for OptionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for OptionLabel {
    type Error = WheelError;

    fn try_from(raw: String) -> Result<Self> {
        Self::new(&raw)
    }
}

impl TryFrom<&str> for OptionLabel {
    type Error = WheelError;

    fn try_from(raw: &str) -> Result<Self> {
        Self::new(raw)
    }
}

impl From<OptionLabel> for String {
    fn from(label: OptionLabel) -> Self {
        label.0
    }
}

impl AsRef<str> for OptionLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Shortens a label for on-wheel display.
///
/// Labels longer than `limit` characters keep their first `limit - 2`
/// characters followed by `...`. Counting is by `char`, so multi-byte text is
/// never split mid-character. The result is presentation text only; winners
/// are always identified by index.
///
/// ```
/// use wheelpick_core::option_set::display_label;
///
/// assert_eq!(display_label("Spaghetti", 12), "Spaghetti");
/// assert_eq!(display_label("Chicken Tikka Masala", 12), "Chicken Ti...");
/// ```
#[must_use]
pub fn display_label(label: &str, limit: usize) -> String {
    if label.chars().count() <= limit {
        return label.to_string();
    }
    let keep = limit.saturating_sub(2);
    let mut shortened: String = label.chars().take(keep).collect();
    shortened.push_str(ELLIPSIS);
    shortened
}

/// Ordered, duplicate-free collection of option labels.
///
/// Insertion order is preserved. Deserialization re-checks uniqueness, so a
/// set read from JSON upholds the same invariants as one built in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<OptionLabel>", into = "Vec<OptionLabel>")]
pub struct OptionSet {
    labels: Vec<OptionLabel>,
}

impl OptionSet {
    /// Creates an empty option set.
    #[must_use]
    pub fn new() -> Self {
        Self { labels: Vec::new() }
    }

    /// Appends a label, returning its index.
    ///
    /// # Errors
    ///
    /// - [`WheelError::EmptyLabel`] if the label is blank
    /// - [`WheelError::DuplicateOption`] if the trimmed label already exists
    pub fn add(&mut self, raw: &str) -> Result<usize> {
        let label = OptionLabel::new(raw)?;
        self.push(label)
    }

    /// Appends an already-validated label, returning its index.
    ///
    /// # Errors
    ///
    /// Returns [`WheelError::DuplicateOption`] if the label already exists.
    pub fn push(&mut self, label: OptionLabel) -> Result<usize> {
        if self.contains(label.as_str()) {
            return Err(WheelError::DuplicateOption { label: label.0 });
        }
        self.labels.push(label);
        Ok(self.labels.len() - 1)
    }

    /// Removes and returns the label at `index`. Later labels shift down.
    ///
    /// # Errors
    ///
    /// Returns [`WheelError::IndexOutOfRange`] if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> Result<OptionLabel> {
        if index >= self.labels.len() {
            return Err(WheelError::IndexOutOfRange {
                index,
                len: self.labels.len(),
            });
        }
        Ok(self.labels.remove(index))
    }

    /// Removes every label.
    pub fn clear(&mut self) {
        self.labels.clear();
    }

    /// Appends each of [`SAMPLE_OPTIONS`] not already present.
    ///
    /// Returns how many labels were added.
    pub fn add_samples(&mut self) -> usize {
        let mut added = 0;
        for sample in SAMPLE_OPTIONS {
            if self.contains(sample) {
                continue;
            }
            self.labels.push(OptionLabel(sample.to_string()));
            added += 1;
        }
        added
    }

    /// Returns true if a label with exactly this (trimmed) text exists.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        let label = label.trim();
        self.labels.iter().any(|l| l.as_str() == label)
    }

    /// Returns the position of a label, if present.
    #[must_use]
    pub fn position(&self, label: &str) -> Option<usize> {
        let label = label.trim();
        self.labels.iter().position(|l| l.as_str() == label)
    }

    /// Returns the label at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&OptionLabel> {
        self.labels.get(index)
    }

    /// Number of labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns true if the set has no labels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterates labels in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &OptionLabel> {
        self.labels.iter()
    }

    /// Returns the labels as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[OptionLabel] {
        &self.labels
    }
}

impl TryFrom<Vec<OptionLabel>> for OptionSet {
    type Error = WheelError;

    fn try_from(labels: Vec<OptionLabel>) -> Result<Self> {
        let mut set = Self::new();
        for label in labels {
            set.push(label)?;
        }
        Ok(set)
    }
}

impl From<OptionSet> for Vec<OptionLabel> {
    fn from(set: OptionSet) -> Self {
        set.labels
    }
}

impl<'a> IntoIterator for &'a OptionSet {
    type Item = &'a OptionLabel;
    type IntoIter = std::slice::Iter<'a, OptionLabel>;

    fn into_iter(self) -> Self::IntoIter {
        self.labels.iter()
    }
}
