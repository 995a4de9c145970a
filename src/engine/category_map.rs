use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Category → words, filled additively during one build.
///
/// Nothing is ever removed; `into_lexicon` consumes the builder.
#[derive(Debug, Default, Clone)]
pub struct CategoryMapBuilder {
    categories: BTreeMap<String, BTreeSet<String>>,
}

impl CategoryMapBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, category: &str, word: impl Into<String>) {
        self.categories
            .entry(category.to_string())
            .or_default()
            .insert(word.into());
    }

    pub fn extend<I, W>(&mut self, category: &str, words: I)
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        let entry = self.categories.entry(category.to_string()).or_default();
        entry.extend(words.into_iter().map(Into::into));
    }

    pub fn words(&self, category: &str) -> Option<&BTreeSet<String>> {
        self.categories.get(category)
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Inverts into word → categories. Words are lowercased, so two
    /// spellings differing only in case share one entry.
    pub fn into_lexicon(self) -> Lexicon {
        let mut transposed: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (category, words) in self.categories {
            for word in words {
                transposed
                    .entry(word.to_lowercase())
                    .or_default()
                    .insert(category.clone());
            }
        }

        Lexicon {
            entries: transposed
                .into_iter()
                .map(|(word, categories)| (word, categories.into_iter().collect()))
                .collect(),
        }
    }
}

/// The finished word → sorted categories index.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Lexicon {
    entries: BTreeMap<String, Vec<String>>,
}

impl Lexicon {
    pub fn categories(&self, word: &str) -> Option<&[String]> {
        self.entries.get(word).map(Vec::as_slice)
    }

    pub fn has_category(&self, word: &str, category: &str) -> bool {
        self.categories(word)
            .is_some_and(|cats| cats.binary_search_by(|c| c.as_str().cmp(category)).is_ok())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.entries.iter()
    }
}
