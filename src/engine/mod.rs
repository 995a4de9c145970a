pub mod assembler;
pub mod category_map;
pub mod frames;
pub mod inflection;
pub mod noun_hierarchy;
pub mod verb_classifier;

pub use assembler::{assemble, AssemblyStats};
pub use category_map::{CategoryMapBuilder, Lexicon};
pub use inflection::{adjective_to_adverb, Inflector, VerbForms};
pub use noun_hierarchy::resolve_nouns;
pub use verb_classifier::{classify, extract_verb_categories};
