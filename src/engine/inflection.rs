//! Surface-form derivation: noun plurals, verb forms, adverbs from adjectives.
//!
//! Irregular tables always win. Without an entry, a regular suffix rule
//! applies, so every function returns a form for any input.

use crate::types::source_data::{IrregularNouns, IrregularVerb, IrregularVerbs};

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];
const SIBILANT_ENDINGS: &[&str] = &["s", "sh", "ch", "x"];

/// True when `word` ends in `y` with a non-vowel right before it.
fn ends_in_consonant_y(word: &str) -> bool {
    let mut rev = word.chars().rev();
    match (rev.next(), rev.next()) {
        (Some('y'), Some(prev)) => !VOWELS.contains(&prev),
        _ => false,
    }
}

fn strip_last_char(word: &str) -> &str {
    let mut chars = word.chars();
    chars.next_back();
    chars.as_str()
}

/// `s`/`sh`/`ch`/`x` → `+es`, consonant + `y` → `ies`, else `+s`.
/// Shared by noun plurals and the 3rd-person-singular verb form.
pub fn regular_s_form(word: &str) -> String {
    if SIBILANT_ENDINGS.iter().any(|suffix| word.ends_with(suffix)) {
        format!("{}es", word)
    } else if ends_in_consonant_y(word) {
        format!("{}ies", strip_last_char(word))
    } else {
        format!("{}s", word)
    }
}

pub fn regular_preterite(verb: &str) -> String {
    if verb.ends_with('e') {
        format!("{}d", verb)
    } else if ends_in_consonant_y(verb) {
        format!("{}ied", strip_last_char(verb))
    } else {
        format!("{}ed", verb)
    }
}

pub fn regular_gerund(verb: &str) -> String {
    if let Some(stem) = verb.strip_suffix("ie") {
        format!("{}ying", stem)
    } else if verb.ends_with('e') && verb != "be" {
        format!("{}ing", strip_last_char(verb))
    } else {
        format!("{}ing", verb)
    }
}

pub fn adjective_to_adverb(adjective: &str) -> String {
    if adjective.ends_with('y') {
        format!("{}ily", strip_last_char(adjective))
    } else if let Some(stem) = adjective.strip_suffix("le") {
        // also covers -able and -ible
        format!("{}ly", stem)
    } else if adjective.ends_with("ic") {
        format!("{}ally", adjective)
    } else {
        format!("{}ly", adjective)
    }
}

/// The six forms derived for one verb lemma.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbForms {
    pub base: String,
    pub preterite: String,
    pub past_participle: String,
    pub gerund: String,
    pub third_singular: String,
    pub third_plural: String,
}

#[derive(Debug, Clone, Default)]
pub struct Inflector {
    irregular_nouns: IrregularNouns,
    irregular_verbs: IrregularVerbs,
}

impl Inflector {
    pub fn new(irregular_nouns: IrregularNouns, irregular_verbs: IrregularVerbs) -> Self {
        Inflector {
            irregular_nouns,
            irregular_verbs,
        }
    }

    pub fn noun_plural(&self, singular: &str) -> String {
        match self.irregular_nouns.get(singular) {
            Some(irregular) => irregular.plural.clone(),
            None => regular_s_form(singular),
        }
    }

    pub fn verb_forms(&self, verb: &str) -> VerbForms {
        let irregular = self.irregular_verbs.get(verb);
        let table = |form: fn(&IrregularVerb) -> &Option<String>| -> Option<String> {
            irregular.and_then(|entry| form(entry).clone())
        };

        let preterite = table(|i| &i.preterite).unwrap_or_else(|| regular_preterite(verb));
        let past_participle = table(|i| &i.past_participle).unwrap_or_else(|| preterite.clone());
        VerbForms {
            base: table(|i| &i.base).unwrap_or_else(|| verb.to_string()),
            gerund: table(|i| &i.gerund).unwrap_or_else(|| regular_gerund(verb)),
            third_singular: table(|i| &i.third_singular).unwrap_or_else(|| regular_s_form(verb)),
            third_plural: table(|i| &i.third_plural).unwrap_or_else(|| verb.to_string()),
            preterite,
            past_participle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::source_data::IrregularNoun;
    use rstest::rstest;

    fn inflector() -> Inflector {
        let mut nouns = IrregularNouns::new();
        nouns.insert(
            "mouse".to_string(),
            IrregularNoun {
                plural: "mice".to_string(),
            },
        );
        nouns.insert(
            "sheep".to_string(),
            IrregularNoun {
                plural: "sheep".to_string(),
            },
        );

        let mut verbs = IrregularVerbs::new();
        verbs.insert(
            "run".to_string(),
            IrregularVerb {
                base: Some("run".to_string()),
                preterite: Some("ran".to_string()),
                past_participle: Some("run".to_string()),
                gerund: Some("running".to_string()),
                third_singular: Some("runs".to_string()),
                third_plural: Some("run".to_string()),
            },
        );
        verbs.insert(
            "be".to_string(),
            IrregularVerb {
                base: Some("be".to_string()),
                preterite: Some("was".to_string()),
                past_participle: Some("been".to_string()),
                gerund: Some("being".to_string()),
                third_singular: Some("is".to_string()),
                third_plural: Some("are".to_string()),
            },
        );
        verbs.insert(
            "stop".to_string(),
            IrregularVerb {
                preterite: Some("stopped".to_string()),
                gerund: Some("stopping".to_string()),
                ..Default::default()
            },
        );
        Inflector::new(nouns, verbs)
    }

    #[rstest]
    #[case("cat", "cats")]
    #[case("bus", "buses")]
    #[case("dish", "dishes")]
    #[case("church", "churches")]
    #[case("box", "boxes")]
    #[case("baby", "babies")]
    #[case("toy", "toys")]
    #[case("day", "days")]
    #[case("mouse", "mice")]
    #[case("sheep", "sheep")]
    #[case("y", "ys")]
    #[case("", "s")]
    fn pluralizes_nouns(#[case] singular: &str, #[case] plural: &str) {
        assert_eq!(inflector().noun_plural(singular), plural);
    }

    #[test]
    fn irregular_verbs_use_table_for_every_form() {
        let forms = inflector().verb_forms("be");
        assert_eq!(
            forms,
            VerbForms {
                base: "be".to_string(),
                preterite: "was".to_string(),
                past_participle: "been".to_string(),
                gerund: "being".to_string(),
                third_singular: "is".to_string(),
                third_plural: "are".to_string(),
            }
        );
        assert_eq!(inflector().verb_forms("run").preterite, "ran");
        assert_eq!(inflector().verb_forms("run").past_participle, "run");
    }

    #[test]
    fn partial_irregular_entry_falls_back_per_form() {
        let forms = inflector().verb_forms("stop");
        assert_eq!(forms.preterite, "stopped");
        // past participle follows the (irregular) preterite when absent
        assert_eq!(forms.past_participle, "stopped");
        assert_eq!(forms.gerund, "stopping");
        assert_eq!(forms.third_singular, "stops");
        assert_eq!(forms.base, "stop");
        assert_eq!(forms.third_plural, "stop");
    }

    #[rstest]
    #[case("walk", "walked", "walking", "walks")]
    #[case("bake", "baked", "baking", "bakes")]
    #[case("cry", "cried", "crying", "cries")]
    #[case("play", "played", "playing", "plays")]
    #[case("tie", "tied", "tying", "ties")]
    #[case("wash", "washed", "washing", "washes")]
    #[case("fix", "fixed", "fixing", "fixes")]
    fn regular_verb_forms(
        #[case] verb: &str,
        #[case] preterite: &str,
        #[case] gerund: &str,
        #[case] third_singular: &str,
    ) {
        let forms = inflector().verb_forms(verb);
        assert_eq!(forms.base, verb);
        assert_eq!(forms.preterite, preterite);
        assert_eq!(forms.past_participle, preterite);
        assert_eq!(forms.gerund, gerund);
        assert_eq!(forms.third_singular, third_singular);
        assert_eq!(forms.third_plural, verb);
    }

    #[test]
    fn be_keeps_its_e_without_a_table() {
        assert_eq!(regular_gerund("be"), "being");
        assert_eq!(regular_gerund("see"), "seing");
    }

    #[rstest]
    #[case("happy", "happily")]
    #[case("gentle", "gently")]
    #[case("comfortable", "comfortably")]
    #[case("terrible", "terribly")]
    #[case("basic", "basically")]
    #[case("quick", "quickly")]
    #[case("", "ly")]
    fn derives_adverbs(#[case] adjective: &str, #[case] adverb: &str) {
        assert_eq!(adjective_to_adverb(adjective), adverb);
    }
}
