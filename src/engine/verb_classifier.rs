//! Maps a normalized frame plus an optional particle/preposition to a verb
//! category tag, and collects frame members into those categories.

use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

use super::frames::{normalize_primary, PhrasalVerb};
use crate::types::source_data::VerbClassFile;

/// One supported slot sequence and the fragments its tags are built from.
#[derive(Debug, Clone, Copy)]
pub struct FramePattern {
    pub slots: &'static [&'static str],
    /// Tag prefix placed before any `prt_`/`prp_` insertion.
    pub head: &'static str,
    /// Tag suffix placed after any insertion. Empty for the intransitive frame.
    pub tail: &'static str,
    /// Tag used when neither particle nor preposition is present.
    pub base: &'static str,
    /// A preposition needs a complement; the bare intransitive frame has none.
    pub takes_preposition: bool,
}

const fn pattern(
    slots: &'static [&'static str],
    head: &'static str,
    tail: &'static str,
    base: &'static str,
) -> FramePattern {
    FramePattern {
        slots,
        head,
        tail,
        base,
        takes_preposition: true,
    }
}

const fn intransitive(slots: &'static [&'static str]) -> FramePattern {
    FramePattern {
        slots,
        head: "vb",
        tail: "",
        base: "vb",
        takes_preposition: false,
    }
}

pub const FRAME_PATTERNS: &[FramePattern] = &[
    intransitive(&["NP", "V"]),
    intransitive(&["It", "V"]),
    pattern(&["NP", "V", "ADJ"], "vb", "predcomp", "vb_predcomp"),
    pattern(&["NP", "V", "S_INF"], "vb", "to_inf_cl", "vb_to_inf_cl"),
    pattern(
        &["NP", "V", "S_BARE_INF"],
        "vb",
        "bare_inf_cl",
        "vb_bare_inf_cl",
    ),
    pattern(&["NP", "V", "S_ING"], "vb", "vbg_cl", "vb_vbg_cl"),
    pattern(&["NP", "V", "VP_VBN"], "vb", "vbn_cl", "vb_vbn_cl"),
    pattern(
        &["NP", "V", "PASSIVE_CL"],
        "vb",
        "passive_cl",
        "vb_passive_cl",
    ),
    pattern(
        &["NP", "V", "S"],
        "vb",
        "bare_declarative_cl",
        "vb_bare_declarative_cl",
    ),
    pattern(
        &["NP", "V", "that", "S"],
        "vb",
        "that_declarative_cl",
        "vb_that_declarative_cl",
    ),
    pattern(
        &["NP", "V", "what", "S"],
        "vb",
        "interrogative_cl",
        "vb_interrogative_cl",
    ),
    pattern(
        &["NP", "V", "how", "S"],
        "vb",
        "exclamative_cl",
        "vb_exclamative_cl",
    ),
    pattern(&["NP", "V", "S-Quote"], "vb", "quot_cl", "vb_quot_cl"),
    pattern(&["NP", "V", "NP"], "vb", "o", "vb_o"),
    pattern(&["It", "V", "NP"], "vb", "o", "vb_o"),
    pattern(
        &["NP", "V", "NP", "ADJ"],
        "vb_o",
        "predcomp",
        "vb_o_predcomp",
    ),
    pattern(
        &["NP", "V", "NP", "S_INF"],
        "vb_intnp",
        "to_inf_cl",
        "vb_intnp_to_inf_cl",
    ),
    pattern(
        &["NP", "V", "NP", "S_BARE_INF"],
        "vb_intnp",
        "bare_inf_cl",
        "vb_intnp_bare_inf_cl",
    ),
    pattern(
        &["NP", "V", "NP", "S_ING"],
        "vb_io",
        "vbg_cl",
        "vb_io_vbg_cl",
    ),
    pattern(
        &["NP", "V", "NP", "VP_VBN"],
        "vb_io",
        "vbn_cl",
        "vb_io_vbn_cl",
    ),
    pattern(
        &["NP", "V", "NP", "S"],
        "vb_io",
        "bare_declarative_cl",
        "vb_io_bare_declarative_cl",
    ),
    pattern(
        &["NP", "V", "NP", "that", "S"],
        "vb_io",
        "that_declarative_cl",
        "vb_io_that_declarative_cl",
    ),
    pattern(
        &["NP", "V", "NP", "what", "S"],
        "vb_io",
        "interrogative_cl",
        "vb_io_interrogative_cl",
    ),
    pattern(
        &["NP", "V", "NP", "how", "S"],
        "vb_io",
        "exclamative_cl",
        "vb_io_exclamative_cl",
    ),
    pattern(
        &["NP", "V", "NP", "S-Quote"],
        "vb_io",
        "quot_cl",
        "vb_io_quot_cl",
    ),
    pattern(&["NP", "V", "NP", "NP"], "vb_o", "o", "vb_io_do"),
];

impl FramePattern {
    fn matches<S: AsRef<str>>(&self, slots: &[S]) -> bool {
        self.slots.len() == slots.len()
            && self.slots.iter().zip(slots).all(|(a, b)| *a == b.as_ref())
    }

    pub fn tag(&self, particle: Option<&str>, preposition: Option<&str>) -> Option<String> {
        if preposition.is_some() && !self.takes_preposition {
            return None;
        }
        if particle.is_none() && preposition.is_none() {
            return Some(self.base.to_string());
        }

        let mut tag = self.head.to_string();
        if let Some(particle) = particle {
            tag.push_str("_prt_");
            tag.push_str(particle);
        }
        if let Some(preposition) = preposition {
            tag.push_str("_prp_");
            tag.push_str(preposition);
        }
        if !self.tail.is_empty() {
            tag.push('_');
            tag.push_str(self.tail);
        }
        Some(tag)
    }
}

/// Category tag for a normalized slot sequence, or `None` when the frame is
/// not modeled (or a preposition dangles on an intransitive frame).
pub fn classify<S: AsRef<str>>(
    slots: &[S],
    particle: Option<&str>,
    preposition: Option<&str>,
) -> Option<String> {
    FRAME_PATTERNS
        .iter()
        .find(|p| p.matches(slots))
        .and_then(|p| p.tag(particle, preposition))
}

pub type VerbCategories = BTreeMap<String, BTreeSet<String>>;

/// Collects main verbs per category tag over every frame of every file.
pub fn extract_verb_categories(files: &[VerbClassFile]) -> VerbCategories {
    let mut categories = VerbCategories::new();

    for file in files {
        let members: Vec<String> = file.members.iter().map(|m| m.to_lowercase()).collect();
        for frame in &file.frames {
            let slots = normalize_primary(&frame.primary);

            for member in &members {
                let verb = PhrasalVerb::decompose(member);
                let Some(main) = verb.main() else {
                    debug!("Skipping member '{}': unrecognized phrasal shape", member);
                    continue;
                };
                match classify(&slots, verb.particle(), verb.preposition()) {
                    Some(tag) => {
                        categories.entry(tag).or_default().insert(main.to_string());
                    }
                    None => debug!("No category for '{}' in frame {:?}", member, slots),
                }
            }
        }
    }

    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::source_data::Frame;
    use rstest::rstest;

    #[test]
    fn transitive_tags_follow_particle_then_preposition() {
        let slots = ["NP", "V", "NP"];
        assert_eq!(
            classify(&slots, Some("up"), None).as_deref(),
            Some("vb_prt_up_o")
        );
        assert_eq!(
            classify(&slots, Some("up"), Some("with")).as_deref(),
            Some("vb_prt_up_prp_with_o")
        );
        assert_eq!(classify(&slots, None, None).as_deref(), Some("vb_o"));
        assert_eq!(
            classify(&slots, None, Some("on")).as_deref(),
            Some("vb_prp_on_o")
        );
    }

    #[rstest]
    #[case(&["NP", "V"], None, None, Some("vb"))]
    #[case(&["It", "V"], Some("off"), None, Some("vb_prt_off"))]
    #[case(&["NP", "V"], None, Some("on"), None)]
    #[case(&["It", "V"], None, Some("on"), None)]
    #[case(&["NP", "V"], Some("up"), Some("on"), None)]
    #[case(&["It", "V", "NP"], None, None, Some("vb_o"))]
    #[case(&["NP", "V", "ADJ"], None, Some("as"), Some("vb_prp_as_predcomp"))]
    #[case(&["NP", "V", "NP", "ADJ"], Some("up"), None, Some("vb_o_prt_up_predcomp"))]
    #[case(&["NP", "V", "NP", "NP"], None, None, Some("vb_io_do"))]
    #[case(&["NP", "V", "NP", "NP"], Some("out"), None, Some("vb_o_prt_out_o"))]
    #[case(&["NP", "V", "NP", "S_INF"], None, None, Some("vb_intnp_to_inf_cl"))]
    #[case(
        &["NP", "V", "NP", "that", "S"],
        None,
        Some("to"),
        Some("vb_io_prp_to_that_declarative_cl")
    )]
    #[case(&["NP", "V", "what", "S"], None, None, Some("vb_interrogative_cl"))]
    #[case(&["NP", "V", "S-Quote"], Some("back"), None, Some("vb_prt_back_quot_cl"))]
    #[case(&["NP", "V", "PP"], None, None, None)]
    #[case(&[], None, None, None)]
    fn classifies_frames(
        #[case] slots: &[&str],
        #[case] particle: Option<&str>,
        #[case] preposition: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(classify(slots, particle, preposition).as_deref(), expected);
    }

    #[test]
    fn every_pattern_has_a_distinct_slot_sequence() {
        for (i, a) in FRAME_PATTERNS.iter().enumerate() {
            for b in &FRAME_PATTERNS[i + 1..] {
                assert_ne!(a.slots, b.slots);
            }
        }
    }

    fn frame(slots: &[&str]) -> Frame {
        Frame {
            primary: slots.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn extracts_categories_across_files() {
        let files = vec![
            VerbClassFile {
                members: vec![
                    "Give__up".to_string(),
                    "give".to_string(),
                    "a_b_c".to_string(),
                ],
                frames: vec![
                    frame(&["NP.agent", "V", "NP.theme"]),
                    frame(&["NP", "V", "PP"]),
                ],
            },
            VerbClassFile {
                members: vec!["give".to_string(), "rely_on".to_string()],
                frames: vec![frame(&["NP", "V"]), frame(&["NP", "V", "NP-Dative", "NP"])],
            },
        ];

        let categories = extract_verb_categories(&files);
        let names: Vec<&str> = categories.keys().map(String::as_str).collect();
        assert_eq!(
            names,
            vec!["vb", "vb_io_do", "vb_o", "vb_o_prp_on_o", "vb_prt_up_o"]
        );
        assert!(categories["vb_prt_up_o"].contains("give"));
        assert!(categories["vb_o"].contains("give"));
        assert!(categories["vb"].contains("give"));
        assert!(!categories["vb"].contains("rely"));
        assert!(categories["vb_o_prp_on_o"].contains("rely"));
    }
}
