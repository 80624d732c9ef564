//! Our own `--help` output: `help.txt`, styled and wrapped to the terminal
//! width.
use crate::styles::{app_name, as_item, as_title, ColorChoice, StyledStr};
use anyhow::{bail, Result};
use once_cell::sync::Lazy;
use std::io::Write;
use terminal_size::{terminal_size, Height, Width};
use textwrap::{self, wrap};

enum HelpItem<'a> {
    Usage(&'a str),
    Paragraph(&'a str),
    Section(Section<'a>),
}
struct Section<'a> {
    title: &'a str,
    entries: Vec<Entry<'a>>,
}
struct Entry<'a> {
    item: StyledStr<'a>,
    caption: &'a str,
}

fn name() -> StyledStr<'static> {
    app_name("vocabmatch")
}

/// `vocabmatch` and the package version
pub(crate) fn version() -> String {
    let version = std::env!("CARGO_PKG_VERSION");
    let name = name();
    format!("{name} {version}")
}

/// Print the help text to stdout
pub fn print(color_choice: ColorChoice) -> Result<()> {
    let mut stdout = anstream::AutoStream::new(std::io::stdout().lock(), color_choice.into());
    match write_help(&mut stdout, C.line_width) {
        Err(e) => bail!("failed printing to stdout: {e}"),
        Ok(()) => Ok(()),
    }
}

/// Print the version line to stdout
pub fn print_version(color_choice: ColorChoice) -> Result<()> {
    let mut stdout = anstream::AutoStream::new(std::io::stdout().lock(), color_choice.into());
    match writeln!(stdout, "{}", version()) {
        Err(e) => bail!("failed printing to stdout: {e}"),
        Ok(()) => Ok(()),
    }
}

fn write_help(stdout: &mut dyn Write, line_width: usize) -> std::io::Result<()> {
    let input = include_str!("help.txt");
    let help = parse(input);
    let wrap_options = textwrap::Options::new(line_width);
    writeln!(stdout, "{}", version())?;
    for help_item in help {
        match help_item {
            HelpItem::Paragraph(text) => {
                for line in wrap(text, &wrap_options) {
                    writeln!(stdout, "{line}")?;
                }
            }
            HelpItem::Usage(args) => writeln!(stdout, "{}{}{}", as_title("Usage: "), name(), args)?,
            HelpItem::Section(s) => {
                writeln!(stdout, "{}", as_title(s.title))?;
                s.print_entries(stdout, line_width)?;
            }
        };
    }
    Ok(())
}

fn parse(text: &str) -> Vec<HelpItem> {
    const USAGE: &str = "Usage: ";
    let mut help = Vec::new();
    let mut lines = text.lines().fuse();
    while let Some(line) = lines.next() {
        if let Some(rest) = line.strip_prefix(USAGE) {
            let (_, args) = rest.split_at(rest.find(' ').unwrap_or(rest.len()));
            help.push(HelpItem::Usage(args));
        } else if line.ends_with(':') {
            let title = line;
            let mut entries = Vec::new();
            let result = loop {
                let Some(entry) = lines.next() else { break None };
                let entry = entry.trim_end();
                if entry.is_empty() {
                    break Some(HelpItem::Paragraph(""));
                }
                let Some(sp_sp) = entry.rfind("  ") else { panic!("No double space in {entry}") };
                let (item, caption) = entry.split_at(sp_sp + 2);
                entries.push(Entry { item: as_item(item), caption });
            };
            help.push(HelpItem::Section(Section { title, entries }));
            if let Some(part) = result {
                help.push(part);
            }
        } else {
            help.push(HelpItem::Paragraph(line));
        }
    }
    help
}

impl<'a> Section<'a> {
    fn print_entries(self, stdout: &mut dyn Write, line_width: usize) -> std::io::Result<()> {
        let fits_in_line = self.entries.iter().all(|e| e.fits_in(line_width));
        if fits_in_line {
            for entry in &self.entries {
                writeln!(stdout, "{}{}", entry.item, entry.caption)?;
            }
        } else {
            let same_line_help = self.same_line_help_lines(line_width);
            let next_line_help = self.next_line_help_lines(line_width);
            let help = if badness(&same_line_help) <= badness(&next_line_help) {
                &same_line_help
            } else {
                &next_line_help
            };
            for line in help.iter().flatten() {
                writeln!(stdout, "{line}")?;
            }
        }
        fn badness<T>(vv: &[Vec<T>]) -> usize {
            vv.iter().fold(0, |total, v| {
                let m = v.len().saturating_sub(2);
                total + v.len() + m * 2
            })
        }
        Ok(())
    }
    fn next_line_help_indent(&self) -> &'a str {
        let max_indent =
            self.entries.iter().map(|e| e.item.indented_by()).fold(0, std::cmp::Ord::max);
        let indent_len = (max_indent + 4).min(BLANKS.len());
        &BLANKS[..indent_len]
    }
    fn next_line_help_lines(&self, line_width: usize) -> Vec<Vec<String>> {
        let mut result = Vec::new();
        let indent = self.next_line_help_indent();
        for entry in &self.entries {
            result.push(vec![entry.item.to_string()]);
            result.push(entry.next_line_caption(indent, line_width));
        }
        result
    }
    fn same_line_help_lines(&self, line_width: usize) -> Vec<Vec<String>> {
        self.entries.iter().map(|e| e.same_line_help(line_width)).collect()
    }
}

const BLANKS: &str = "                                                        ";
impl<'a> Entry<'a> {
    fn fits_in(&self, line_width: usize) -> bool {
        self.item.len() + self.caption.len() <= line_width
    }
    fn next_line_caption(&self, indent: &str, line_width: usize) -> Vec<String> {
        let options =
            textwrap::Options::new(line_width).initial_indent(indent).subsequent_indent(indent);
        owned(wrap(self.caption, options))
    }
    fn same_line_help(&self, line_width: usize) -> Vec<String> {
        let first = &self.item.to_string();
        let rest = &BLANKS[..(self.item.len() + 4).min(BLANKS.len())];
        let options =
            textwrap::Options::new(line_width).initial_indent(first).subsequent_indent(rest);
        owned(wrap(self.caption, options))
    }
}

// The wrapped lines borrow from the indent as well as the caption, so they
// can't outlive either.
fn owned(lines: Vec<std::borrow::Cow<'_, str>>) -> Vec<String> {
    lines.into_iter().map(std::borrow::Cow::into_owned).collect()
}

struct Constants {
    line_width: usize,
}
static C: Lazy<Constants> = Lazy::new(|| {
    fn from_env() -> Option<usize> {
        std::env::var_os("COLUMNS")?.to_str()?.parse::<usize>().ok()
    }
    let line_width = if let Some((Width(width), Height(_))) = terminal_size() {
        width as usize
    } else {
        from_env().unwrap_or(100)
    };
    Constants { line_width }
});

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;

    fn plain_help(line_width: usize) -> String {
        let mut plain = Vec::new();
        {
            let mut stream = anstream::StripStream::new(&mut plain);
            write_help(&mut stream, line_width).unwrap();
        }
        String::from_utf8(plain).unwrap()
    }

    #[test]
    fn help_text_parses_into_usage_sections_and_paragraphs() {
        let help = parse(include_str!("help.txt"));
        assert!(matches!(help[0], HelpItem::Usage(" [OPTIONS] [ADE_FILE] [COCO_FILE]")));
        let titles: Vec<&str> = help
            .iter()
            .filter_map(|item| match item {
                HelpItem::Section(s) => Some(s.title),
                _ => None,
            })
            .collect();
        assert_eq!(titles, ["Arguments:", "Options:"]);
    }

    #[test]
    fn help_starts_with_the_version_and_mentions_every_option() {
        let help = plain_help(100);
        assert!(help.starts_with(&format!("vocabmatch {}\n", env!("CARGO_PKG_VERSION"))));
        for option in [
            "--ade",
            "--coco",
            "--format",
            "--common-ids",
            "--color",
            "--help",
            "--version",
        ] {
            assert!(help.contains(option), "missing {option}");
        }
    }

    #[test]
    fn narrow_terminals_get_wrapped_help() {
        let help = plain_help(40);
        let wrapped = help.lines().filter(|line| !line.starts_with("Usage: "));
        assert!(wrapped.into_iter().all(|line| line.len() <= 40), "{help}");
    }
}
