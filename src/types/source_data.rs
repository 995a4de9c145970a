use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `{word: <anything>}`. Only the keys matter.
pub type WordMap = BTreeMap<String, IgnoredAny>;

#[derive(Deserialize, Debug, Clone)]
pub struct Frame {
    pub primary: Vec<String>,
}

/// One frame-database file: member verbs plus the frames they share.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct VerbClassFile {
    #[serde(default)]
    pub members: Vec<String>,
    #[serde(default)]
    pub frames: Vec<Frame>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct NounClassFile {
    #[serde(default)]
    pub words: WordMap,
    #[serde(default)]
    pub countable: Option<bool>,
    #[serde(default)]
    pub classes: Vec<String>,
}

/// Adjective, adverb and preposition files: a word set and the tags it carries.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct WordClassFile {
    #[serde(default)]
    pub words: WordMap,
    #[serde(default)]
    pub classes: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct IrregularNoun {
    pub plural: String,
}

/// Any form left out falls back to the regular rule for that form.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct IrregularVerb {
    #[serde(rename = "VB", default)]
    pub base: Option<String>,
    #[serde(rename = "VBD", default)]
    pub preterite: Option<String>,
    #[serde(rename = "VBN", default)]
    pub past_participle: Option<String>,
    #[serde(rename = "VBG", default)]
    pub gerund: Option<String>,
    #[serde(rename = "VBZ", default)]
    pub third_singular: Option<String>,
    #[serde(rename = "VBP", default)]
    pub third_plural: Option<String>,
}

pub type IrregularNouns = BTreeMap<String, IrregularNoun>;
pub type IrregularVerbs = BTreeMap<String, IrregularVerb>;
pub type IndeclinableTable = BTreeMap<String, WordMap>;

/// Every input of one build, fully read into memory.
#[derive(Debug, Clone, Default)]
pub struct LexiconSources {
    pub indeclinable: IndeclinableTable,
    pub adjectives: Vec<WordClassFile>,
    pub adverbs: Vec<WordClassFile>,
    pub prepositions: Vec<WordClassFile>,
    /// Keyed by class name (file stem).
    pub nouns: BTreeMap<String, NounClassFile>,
    pub verb_classes: Vec<VerbClassFile>,
    pub irregular_nouns: IrregularNouns,
    pub irregular_verbs: IrregularVerbs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noun_class_file_tolerates_missing_keys() {
        let parsed: NounClassFile = serde_json::from_str("{}").unwrap();
        assert!(parsed.words.is_empty());
        assert_eq!(parsed.countable, None);
        assert!(parsed.classes.is_empty());

        let parsed: NounClassFile =
            serde_json::from_str(r#"{"words": {"Cat": {"gloss": "x"}}, "countable": null}"#)
                .unwrap();
        assert_eq!(parsed.words.keys().collect::<Vec<_>>(), vec!["Cat"]);
        assert_eq!(parsed.countable, None);
    }

    #[test]
    fn verb_class_file_ignores_unknown_frame_fields() {
        let parsed: VerbClassFile = serde_json::from_str(
            r#"{"members": ["give__up"],
                "frames": [{"primary": ["NP", "V"], "example": "x"}],
                "id": "g-1"}"#,
        )
        .unwrap();
        assert_eq!(parsed.members, vec!["give__up"]);
        assert_eq!(parsed.frames[0].primary, vec!["NP", "V"]);
    }

    #[test]
    fn irregular_verb_forms_are_individually_optional() {
        let parsed: IrregularVerbs =
            serde_json::from_str(r#"{"go": {"VBD": "went", "VBN": "gone"}}"#).unwrap();
        let go = &parsed["go"];
        assert_eq!(go.preterite.as_deref(), Some("went"));
        assert_eq!(go.past_participle.as_deref(), Some("gone"));
        assert_eq!(go.gerund, None);
    }
}
