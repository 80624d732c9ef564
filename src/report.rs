//! Printing a `MatchResult`
use anyhow::Result;
use clap::ValueEnum;
use std::io;

use crate::reconcile::MatchResult;
use crate::styles::{as_item, as_title};
use crate::vocabulary::ClassId;

/// How to lay out the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// `[(0, 1), (3, 7)]`, a blank line, then `[5, 9]`
    #[default]
    Lists,
    /// A `Common:` section with one tab-separated pair per line, a blank line,
    /// then an `Only:` section with one id per line
    Lines,
}

/// What to print, and how
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Layout
    pub format: Format,
    /// Also print the ids of A that found a partner, right after the pairs
    pub common_ids: bool,
}

/// Write `result` to `out`. Ids are styled as items and section names as
/// titles; whether those styles survive is up to `out`.
pub fn write_report(
    result: &MatchResult,
    options: ReportOptions,
    mut out: impl io::Write,
) -> Result<()> {
    match options.format {
        Format::Lists => {
            let pairs = result.common.iter().map(|&(id_a, id_b)| {
                format!("({}, {})", item(id_a), item(id_b))
            });
            writeln!(out, "[{}]", join(pairs))?;
            if options.common_ids {
                writeln!(out, "[{}]", join(result.common_ids().map(item)))?;
            }
            writeln!(out)?;
            writeln!(out, "[{}]", join(result.only.iter().copied().map(item)))?;
        }
        Format::Lines => {
            writeln!(out, "{}", as_title("Common:"))?;
            for &(id_a, id_b) in &result.common {
                writeln!(out, "{}\t{}", item(id_a), item(id_b))?;
            }
            if options.common_ids {
                writeln!(out)?;
                writeln!(out, "{}", as_title("Common ids:"))?;
                for id in result.common_ids() {
                    writeln!(out, "{}", item(id))?;
                }
            }
            writeln!(out)?;
            writeln!(out, "{}", as_title("Only:"))?;
            for &id in &result.only {
                writeln!(out, "{}", item(id))?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

fn item(id: ClassId) -> String {
    as_item(&id.to_string()).to_string()
}

fn join(items: impl Iterator<Item = String>) -> String {
    items.collect::<Vec<_>>().join(", ")
}
