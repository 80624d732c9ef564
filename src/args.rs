//! Code to parse the command line using `clap`, and definitions of the parsed
//! result. Each vocabulary path comes from its named option (`--ade`,
//! `--coco`) or that option's environment variable; positional paths then fill
//! whichever of the two is still missing, ADE20K first.

use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::report::{Format, ReportOptions};
use crate::styles::ColorChoice;

/// Environment variable standing in for `--ade`
pub const ADE_VOCABULARY_ENV: &str = "ADE_VOCABULARY_PATH";
/// Environment variable standing in for `--coco`
pub const COCO_VOCABULARY_ENV: &str = "COCO_VOCABULARY_PATH";

/// Returns the parsed command line.
#[must_use]
pub fn parsed() -> Args {
    Args::from(CliArgs::parse())
}

/// `Args` contains the parsed command line.
#[derive(Debug, Clone)]
pub struct Args {
    /// `--help` was given
    pub help: bool,
    /// `--version` was given
    pub version: bool,
    /// When to color stdout
    pub color: ColorChoice,
    /// How to print the result
    pub report: ReportOptions,
    ade_vocabulary_path: Option<PathBuf>,
    coco_vocabulary_path: Option<PathBuf>,
    files: Vec<PathBuf>,
}

/// Where the two vocabularies live. Vocabulary A is the ADE20K label file and
/// vocabulary B the COCO-Stuff label file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Label file whose ids are classified as common or only
    pub ade_vocabulary_path: PathBuf,
    /// Label file searched for partners
    pub coco_vocabulary_path: PathBuf,
}

impl Args {
    /// The vocabulary paths, or an error naming the one that's missing
    pub fn config(&self) -> Result<Config> {
        let mut files = self.files.iter().cloned();
        let ade = self.ade_vocabulary_path.clone().or_else(|| files.next());
        let coco = self.coco_vocabulary_path.clone().or_else(|| files.next());
        if let Some(extra) = files.next() {
            bail!("Too many paths: {} has no vocabulary left to stand for", extra.display())
        }
        let Some(ade_vocabulary_path) = ade else {
            bail!(
                "No path given for the ADE20K vocabulary \
                 (argument ADE_FILE, --ade or ${ADE_VOCABULARY_ENV})"
            )
        };
        let Some(coco_vocabulary_path) = coco else {
            bail!(
                "No path given for the COCO-Stuff vocabulary \
                 (argument COCO_FILE, --coco or ${COCO_VOCABULARY_ENV})"
            )
        };
        Ok(Config { ade_vocabulary_path, coco_vocabulary_path })
    }
}

impl From<CliArgs> for Args {
    fn from(parsed: CliArgs) -> Self {
        Args {
            help: parsed.help,
            version: parsed.version,
            color: parsed.color,
            report: ReportOptions { format: parsed.format, common_ids: parsed.common_ids },
            ade_vocabulary_path: parsed.ade,
            coco_vocabulary_path: parsed.coco,
            files: parsed.files,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "vocabmatch", disable_help_flag = true, disable_version_flag = true)]
struct CliArgs {
    #[arg(short, long)]
    help: bool,
    #[arg(short = 'V', long)]
    version: bool,
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,
    #[arg(long, value_enum, default_value_t = Format::Lists)]
    format: Format,
    #[arg(long)]
    common_ids: bool,
    #[arg(long, value_name = "ADE_FILE", env = ADE_VOCABULARY_ENV)]
    ade: Option<PathBuf>,
    #[arg(long, value_name = "COCO_FILE", env = COCO_VOCABULARY_ENV)]
    coco: Option<PathBuf>,
    #[arg(value_name = "FILES")]
    files: Vec<PathBuf>,
}
