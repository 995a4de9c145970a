use once_cell::sync::Lazy;
use regex::Regex;

/// Strips `.subcategory` suffixes from each slot and folds `NP-Dative` into `NP`.
pub fn normalize_primary<S: AsRef<str>>(primary: &[S]) -> Vec<String> {
    primary
        .iter()
        .map(|descriptor| {
            let slot = descriptor.as_ref().split('.').next().unwrap_or_default();
            if slot == "NP-Dative" {
                "NP".to_string()
            } else {
                slot.to_string()
            }
        })
        .collect()
}

/// A frame member split into its main verb and optional particle/preposition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhrasalVerb<'a> {
    /// `main`
    Plain { main: &'a str },
    /// `main__particle`
    Particle { main: &'a str, particle: &'a str },
    /// `main_preposition`
    Preposition { main: &'a str, preposition: &'a str },
    /// `main__particle_preposition`
    ParticlePreposition {
        main: &'a str,
        particle: &'a str,
        preposition: &'a str,
    },
    Unrecognized,
}

static PHRASAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(?P<main>[^_]+)",
        r"(?:__(?P<particle>[^_]*)(?:_(?P<prep>[^_]*))?|_(?P<bare_prep>[^_]*))?$",
    ))
    .expect("phrasal verb pattern is valid")
});

impl<'a> PhrasalVerb<'a> {
    pub fn decompose(member: &'a str) -> Self {
        let Some(caps) = PHRASAL_RE.captures(member) else {
            return PhrasalVerb::Unrecognized;
        };
        let Some(main) = caps.name("main").map(|m| m.as_str()) else {
            return PhrasalVerb::Unrecognized;
        };

        match (
            caps.name("particle").map(|m| m.as_str()),
            caps.name("prep").map(|m| m.as_str()),
            caps.name("bare_prep").map(|m| m.as_str()),
        ) {
            (None, None, None) => PhrasalVerb::Plain { main },
            (Some(particle), None, None) => PhrasalVerb::Particle { main, particle },
            (Some(particle), Some(preposition), None) => PhrasalVerb::ParticlePreposition {
                main,
                particle,
                preposition,
            },
            (None, None, Some(preposition)) => PhrasalVerb::Preposition { main, preposition },
            _ => PhrasalVerb::Unrecognized,
        }
    }

    pub fn main(&self) -> Option<&'a str> {
        match *self {
            PhrasalVerb::Plain { main }
            | PhrasalVerb::Particle { main, .. }
            | PhrasalVerb::Preposition { main, .. }
            | PhrasalVerb::ParticlePreposition { main, .. } => Some(main),
            PhrasalVerb::Unrecognized => None,
        }
    }

    pub fn particle(&self) -> Option<&'a str> {
        match *self {
            PhrasalVerb::Particle { particle, .. }
            | PhrasalVerb::ParticlePreposition { particle, .. } => Some(particle),
            _ => None,
        }
    }

    pub fn preposition(&self) -> Option<&'a str> {
        match *self {
            PhrasalVerb::Preposition { preposition, .. }
            | PhrasalVerb::ParticlePreposition { preposition, .. } => Some(preposition),
            _ => None,
        }
    }
}
