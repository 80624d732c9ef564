//! Provides the `Vocabulary` structure and the parser that builds one from the
//! text of a label file.
//!
//! A label file is a sequence of lines of the form `<id>:<name>, <name>, ...`.
//! Lines without a `:` are skipped, so blank lines, headers and comments are
//! harmless. Names are trimmed and lowercased before they go into the synonym
//! set for their id.
use anyhow::Result;
use bstr::ByteSlice;
use fxhash::{FxBuildHasher, FxHashMap};
use indexmap::{IndexMap, IndexSet};
use memchr::{memchr, memchr2};
use std::num::ParseIntError;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

use crate::operands::read_label_file;

/// A class id, as written before the `:` of a label line
pub type ClassId = i64;

/// The alternative names of one class id, lowercased and trimmed, in the order
/// they were first written.
pub type SynonymSet = IndexSet<String, FxBuildHasher>;

/// A `Vocabulary` maps each class id of a label file to its `SynonymSet`.
/// * Iteration order is the order in which each id first appeared in the file.
/// * If an id appears on more than one line, the last line's names replace
///   the earlier ones (they are not merged), but the id keeps the position of
///   its first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    entries: IndexMap<ClassId, SynonymSet, FxBuildHasher>,
}

impl Vocabulary {
    /// Number of distinct class ids
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the vocabulary empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The synonyms of `id`, if `id` is present
    #[must_use]
    pub fn get(&self, id: ClassId) -> Option<&SynonymSet> {
        self.entries.get(&id)
    }

    /// The class ids, in file order
    pub fn ids(&self) -> impl Iterator<Item = ClassId> + '_ {
        self.entries.keys().copied()
    }

    /// `(id, synonyms)` pairs, in file order
    pub fn iter(&self) -> impl Iterator<Item = (ClassId, &SynonymSet)> + '_ {
        self.entries.iter().map(|(id, names)| (*id, names))
    }
}

impl FromIterator<(ClassId, SynonymSet)> for Vocabulary {
    /// Last write wins, just as when parsing a file
    fn from_iter<T: IntoIterator<Item = (ClassId, SynonymSet)>>(iter: T) -> Self {
        Vocabulary { entries: iter.into_iter().collect() }
    }
}

/// The error returned when a label line can't be parsed.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The text before the first `:` isn't an integer
    #[error("{source_name}, line {line_number}: can't parse a class id from `{line}`")]
    BadId {
        /// The file (or other source) the line came from
        source_name: String,
        /// 1-based line number
        line_number: usize,
        /// The offending line, trimmed
        line: String,
        /// Why the id didn't parse
        #[source]
        cause: ParseIntError,
    },
}

/// Read the label file at `path` and parse it into a `Vocabulary`. Unreadable
/// files and malformed ids are both fatal.
pub fn load_vocabulary(path: &Path) -> Result<Vocabulary> {
    let contents = read_label_file(path)?;
    let vocabulary = parse_vocabulary(&contents, &path.display().to_string())?;
    Ok(vocabulary)
}

/// Parse the text of a label file. `source_name` is used only in error
/// messages and log events.
pub fn parse_vocabulary(text: &[u8], source_name: &str) -> Result<Vocabulary, FormatError> {
    let mut entries = IndexMap::<ClassId, SynonymSet, FxBuildHasher>::default();
    let mut seen_on = FxHashMap::<ClassId, usize>::default();

    for (index, line) in lines_of(text).enumerate() {
        let line_number = index + 1;
        let line = line.trim();
        let Some(colon) = memchr(b':', line) else { continue };
        let (id_part, names_part) = (&line[..colon], &line[colon + 1..]);

        let id = id_part.to_str_lossy().trim().parse::<ClassId>().map_err(|cause| {
            FormatError::BadId {
                source_name: source_name.to_owned(),
                line_number,
                line: line.to_str_lossy().into_owned(),
                cause,
            }
        })?;
        let names = synonyms_of(names_part);

        if names.is_empty() {
            warn!(id, source = source_name, line_number, "class id has no names and never matches");
        }
        if let Some(earlier) = seen_on.insert(id, line_number) {
            warn!(
                id,
                source = source_name,
                earlier_line = earlier,
                line_number,
                "duplicate class id; the later line replaces the earlier one"
            );
        }
        entries.insert(id, names);
    }

    debug!(source = source_name, entries = entries.len(), "parsed vocabulary");
    Ok(Vocabulary { entries })
}

/// The lines of `text`, each ending at `\n`, `\r\n` or a lone `\r`. The
/// terminator isn't included.
fn lines_of(mut text: &[u8]) -> impl Iterator<Item = &[u8]> {
    std::iter::from_fn(move || {
        if text.is_empty() {
            return None;
        }
        let Some(end) = memchr2(b'\n', b'\r', text) else {
            let line = text;
            text = &[];
            return Some(line);
        };
        let line = &text[..end];
        let crlf = text[end] == b'\r' && text.get(end + 1) == Some(&b'\n');
        text = &text[end + if crlf { 2 } else { 1 }..];
        Some(line)
    })
}

/// Split the text after the `:` on commas, trimming and lowercasing each
/// name. Empty names are dropped.
fn synonyms_of(names_part: &[u8]) -> SynonymSet {
    names_part
        .split_str(",")
        .map(|name| name.to_str_lossy().trim().to_lowercase())
        .filter(|name| !name.is_empty())
        .collect()
}
