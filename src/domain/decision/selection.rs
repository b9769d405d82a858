//! Selection - ordered, duplicate-free set of chosen option ids.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::OptionId;

/// Ordered set of option ids.
///
/// Keeps first-insertion order, which matters because per-risk feedback is
/// emitted in the order risks were selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<OptionId>", into = "Vec<OptionId>")]
pub struct Selection(Vec<OptionId>);

impl Selection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Adds an id; returns false if it was already selected.
    pub fn insert(&mut self, id: OptionId) -> bool {
        if self.0.contains(&id) {
            return false;
        }
        self.0.push(id);
        true
    }

    /// Returns true if the id is selected.
    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|existing| existing == id)
    }

    /// Iterates ids in selection order.
    pub fn iter(&self) -> impl Iterator<Item = &OptionId> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<OptionId>> for Selection {
    fn from(ids: Vec<OptionId>) -> Self {
        ids.into_iter().collect()
    }
}

impl From<Selection> for Vec<OptionId> {
    fn from(selection: Selection) -> Self {
        selection.0
    }
}

impl FromIterator<OptionId> for Selection {
    fn from_iter<I: IntoIterator<Item = OptionId>>(iter: I) -> Self {
        let mut selection = Selection::new();
        for id in iter {
            selection.insert(id);
        }
        selection
    }
}

impl<'a> FromIterator<&'a str> for Selection {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(OptionId::from).collect()
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a OptionId;
    type IntoIter = std::slice::Iter<'a, OptionId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collect_drops_duplicates_keeping_first_position() {
        let selection: Selection = ["bias", "bubble", "bias", "dep"].into_iter().collect();
        let ids: Vec<&str> = selection.iter().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["bias", "bubble", "dep"]);
    }

    #[test]
    fn deserialization_deduplicates() {
        let selection: Selection = serde_json::from_str(r#"["a","b","a"]"#).unwrap();
        assert_eq!(selection.len(), 2);
        assert_eq!(serde_json::to_string(&selection).unwrap(), r#"["a","b"]"#);
    }
}
