use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::engine::Lexicon;
use crate::error::{LexiconError, Result};

/// Writes the lexicon as JSON indented with four spaces.
pub fn save_lexicon(lexicon: &Lexicon, file_path: &Path) -> Result<()> {
    let file = File::create(file_path).map_err(|e| LexiconError::io(file_path, e))?;
    let mut writer = BufWriter::new(file);

    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    lexicon
        .serialize(&mut serializer)
        .map_err(|e| LexiconError::json(file_path, e))?;

    writer.flush().map_err(|e| LexiconError::io(file_path, e))?;
    Ok(())
}

/// Reads back a lexicon written by [`save_lexicon`].
pub fn load_lexicon(file_path: &Path) -> Result<Lexicon> {
    let file = File::open(file_path).map_err(|e| LexiconError::io(file_path, e))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| LexiconError::json(file_path, e))
}
