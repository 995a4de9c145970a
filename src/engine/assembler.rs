use std::collections::BTreeSet;
use tracing::info;

use super::category_map::{CategoryMapBuilder, Lexicon};
use super::inflection::{adjective_to_adverb, Inflector};
use super::noun_hierarchy::resolve_nouns;
use super::verb_classifier::{extract_verb_categories, VerbCategories};
use crate::error::Result;
use crate::types::source_data::{LexiconSources, WordClassFile};

pub const NOUN_SG: &str = "noun_sg";
pub const NOUN_PL: &str = "noun_pl";
pub const COUNTABLE_NOUN: &str = "countable_noun";
pub const UNCOUNTABLE_NOUN: &str = "uncountable_noun";
pub const ADV: &str = "adv";
pub const ADV_VP: &str = "adv_vp";

/// Counts gathered while assembling, reported once the build finishes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssemblyStats {
    pub noun_classes: usize,
    pub verb_categories: usize,
    pub categories: usize,
    pub words: usize,
}

/// Swaps the leading `vb` of a verb tag for another family prefix:
/// `vb_prt_up_o` → `vbd_prt_up_o`. A tag without the prefix keeps all of
/// its text after the family.
pub fn family_tag(tag: &str, family: &str) -> String {
    let rest = tag.strip_prefix("vb").unwrap_or(tag);
    format!("{}{}", family, rest)
}

/// Adds each file's words to every class it names. Returns the words of
/// files that named at least one class.
fn merge_word_classes(
    builder: &mut CategoryMapBuilder,
    files: &[WordClassFile],
) -> BTreeSet<String> {
    let mut merged = BTreeSet::new();
    for file in files {
        for class in &file.classes {
            builder.extend(class, file.words.keys().cloned());
            merged.extend(file.words.keys().cloned());
        }
    }
    merged
}

fn merge_verbs(builder: &mut CategoryMapBuilder, verbs: &VerbCategories, inflector: &Inflector) {
    for (tag, lemmas) in verbs {
        let forms: Vec<_> = lemmas.iter().map(|v| inflector.verb_forms(v)).collect();

        builder.extend(
            &family_tag(tag, "inf"),
            forms.iter().map(|f| f.base.clone()),
        );
        builder.extend(
            &family_tag(tag, "vbd"),
            forms.iter().map(|f| f.preterite.clone()),
        );
        builder.extend(
            &family_tag(tag, "vbn"),
            forms.iter().map(|f| f.past_participle.clone()),
        );
        builder.extend(
            &family_tag(tag, "vbg"),
            forms.iter().map(|f| f.gerund.clone()),
        );
        builder.extend(
            &family_tag(tag, "vbz"),
            forms.iter().map(|f| f.third_singular.clone()),
        );
        builder.extend(
            &family_tag(tag, "vbp"),
            forms.iter().map(|f| f.third_plural.clone()),
        );

        // finite forms, merged for convenience
        builder.extend(
            &family_tag(tag, "vbf_sg"),
            forms.iter().flat_map(|f| [f.preterite.clone(), f.third_singular.clone()]),
        );
        builder.extend(
            &family_tag(tag, "vbf_pl"),
            forms.iter().flat_map(|f| [f.preterite.clone(), f.third_plural.clone()]),
        );
    }
}

/// Runs the whole classification pass over loaded sources.
pub fn assemble(sources: &LexiconSources) -> Result<(Lexicon, AssemblyStats)> {
    let inflector = Inflector::new(
        sources.irregular_nouns.clone(),
        sources.irregular_verbs.clone(),
    );
    let mut builder = CategoryMapBuilder::new();

    for (category, words) in &sources.indeclinable {
        builder.extend(category, words.keys().cloned());
    }

    let adjective_words = merge_word_classes(&mut builder, &sources.adjectives);

    let resolved_nouns = resolve_nouns(&sources.nouns)?;
    for (class_name, words) in &resolved_nouns {
        builder.extend(class_name, words.iter().cloned());
        let countable = sources.nouns.get(class_name).and_then(|c| c.countable);

        for word in words {
            let plural = inflector.noun_plural(word);
            builder.insert(NOUN_SG, word.clone());
            builder.insert(NOUN_PL, plural.clone());

            match countable {
                Some(true) => {
                    builder.insert(class_name, plural.clone());
                    builder.insert(COUNTABLE_NOUN, word.clone());
                    builder.insert(COUNTABLE_NOUN, plural);
                }
                Some(false) => builder.insert(UNCOUNTABLE_NOUN, word.clone()),
                None => {}
            }
        }
    }
    info!("Resolved {} noun classes", resolved_nouns.len());

    let verbs = extract_verb_categories(&sources.verb_classes);
    merge_verbs(&mut builder, &verbs, &inflector);
    info!("Classified verbs into {} frame categories", verbs.len());

    merge_word_classes(&mut builder, &sources.adverbs);
    for adjective in &adjective_words {
        let adverb = adjective_to_adverb(adjective);
        builder.insert(ADV, adverb.clone());
        builder.insert(ADV_VP, adverb);
    }

    merge_word_classes(&mut builder, &sources.prepositions);

    let categories = builder.category_count();
    let lexicon = builder.into_lexicon();
    let stats = AssemblyStats {
        noun_classes: resolved_nouns.len(),
        verb_categories: verbs.len(),
        categories,
        words: lexicon.len(),
    };
    Ok((lexicon, stats))
}
