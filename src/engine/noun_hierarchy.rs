//! Transitive noun-class membership over a possibly cyclic inclusion graph.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use tracing::{debug, warn};

use crate::error::{LexiconError, Result};
use crate::types::source_data::NounClassFile;

pub type ResolvedNouns = BTreeMap<String, BTreeSet<String>>;

/// `tools.json` and `tools` name the same class.
pub fn class_name(reference: &str) -> &str {
    reference.strip_suffix(".json").unwrap_or(reference)
}

struct Resolver<'a> {
    classes: &'a BTreeMap<String, NounClassFile>,
    completed: HashMap<&'a str, BTreeSet<String>>,
}

impl<'a> Resolver<'a> {
    /// `visiting` holds the classes on the current path. Re-entering one of
    /// them contributes nothing.
    fn resolve(
        &mut self,
        name: &'a str,
        visiting: &mut HashSet<&'a str>,
    ) -> Result<BTreeSet<String>> {
        let classes = self.classes;
        if let Some(words) = self.completed.get(name) {
            return Ok(words.clone());
        }
        if visiting.contains(name) {
            debug!("Inclusion cycle through noun class '{}' broken", name);
            return Ok(BTreeSet::new());
        }
        let Some(class) = classes.get(name) else {
            warn!("Noun class '{}' is referenced but not defined", name);
            return Ok(BTreeSet::new());
        };

        visiting.insert(name);
        let mut words: BTreeSet<String> = class.words.keys().cloned().collect();

        for reference in &class.classes {
            let included = class_name(reference);
            let included_countable = classes.get(included).and_then(|c| c.countable);
            if let (Some(own), Some(theirs)) = (class.countable, included_countable) {
                if own != theirs {
                    return Err(LexiconError::CountabilityMismatch {
                        class: name.to_string(),
                        class_countable: own,
                        included: included.to_string(),
                        included_countable: theirs,
                    });
                }
            }

            let key = match classes.get_key_value(included) {
                Some((key, _)) => key.as_str(),
                None => {
                    warn!(
                        "Noun class '{}' includes undefined class '{}'",
                        name, included
                    );
                    continue;
                }
            };
            words.extend(self.resolve(key, visiting)?);
        }

        visiting.remove(name);
        self.completed.insert(name, words.clone());
        Ok(words)
    }
}

/// Resolves every class to its own words plus everything it includes.
///
/// Classes are visited in name order. A cycle is cut where it closes, so a
/// class on a cycle holds whatever was reachable before the revisit.
pub fn resolve_nouns(classes: &BTreeMap<String, NounClassFile>) -> Result<ResolvedNouns> {
    let mut resolver = Resolver {
        classes,
        completed: HashMap::new(),
    };

    let mut resolved = ResolvedNouns::new();
    for name in classes.keys() {
        let words = resolver.resolve(name.as_str(), &mut HashSet::new())?;
        resolved.insert(name.clone(), words);
    }
    Ok(resolved)
}
