//! `vocabmatch` pairs up the class ids of two label vocabularies. The
//! `vocabulary` module parses label files, `reconcile` does the matching, and
//! `report` prints the result. The `args` module parses the command line, and
//! the `operands` module hides file I/O details.
//!
//! Current Limitations:
//! * Only the ids of the first vocabulary are classified. Ids of the second
//!   vocabulary that nothing matched are not reported.
//! * Names must match exactly after trimming and lowercasing. There's no
//!   stemming or fuzzy matching, so `tree` and `trees` are different names.

#![cfg_attr(debug_assertions, allow(dead_code, unused_imports))]
#![deny(unused_must_use)]
#![deny(clippy::all)]
#![allow(clippy::needless_return)]
#![deny(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![deny(missing_docs)]

use anyhow::Result;
use tracing::info;

pub mod args;
pub mod help;
pub mod operands;
pub mod reconcile;
pub mod report;
pub mod styles;
pub mod vocabulary;

use crate::args::Config;
use crate::reconcile::{reconcile, MatchResult};
use crate::vocabulary::load_vocabulary;

/// Loads both vocabularies named in `config` and reconciles the first against
/// the second. Each file is read and closed before matching starts.
pub fn reconcile_files(config: &Config) -> Result<MatchResult> {
    let ade = load_vocabulary(&config.ade_vocabulary_path)?;
    let coco = load_vocabulary(&config.coco_vocabulary_path)?;
    info!(
        ade = %config.ade_vocabulary_path.display(),
        ade_ids = ade.len(),
        coco = %config.coco_vocabulary_path.display(),
        coco_ids = coco.len(),
        "loaded vocabularies"
    );
    Ok(reconcile(&ade, &coco))
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;
    use assert_fs::{prelude::*, TempDir};

    #[test]
    fn reconcile_files_reads_both_vocabularies() {
        let temp = TempDir::new().unwrap();
        let ade = temp.child("ade.txt");
        ade.write_str("0: wall\n1: building, edifice\n2: sky\n").unwrap();
        let coco = temp.child("coco.txt");
        coco.write_str("95: sky-other, sky\n171: wall-other, wall\n").unwrap();
        let config = Config {
            ade_vocabulary_path: ade.path().to_path_buf(),
            coco_vocabulary_path: coco.path().to_path_buf(),
        };
        let result = reconcile_files(&config).unwrap();
        assert_eq!(result.common, [(0, 171), (2, 95)]);
        assert_eq!(result.only, [1]);
    }

    #[test]
    fn a_malformed_second_file_is_fatal() {
        let temp = TempDir::new().unwrap();
        let ade = temp.child("ade.txt");
        ade.write_str("0: wall\n").unwrap();
        let coco = temp.child("coco.txt");
        coco.write_str("wall: 0\n").unwrap();
        let config = Config {
            ade_vocabulary_path: ade.path().to_path_buf(),
            coco_vocabulary_path: coco.path().to_path_buf(),
        };
        let err = reconcile_files(&config).unwrap_err();
        assert!(err.to_string().contains("coco.txt, line 1"), "{err}");
    }
}
