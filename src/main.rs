use anyhow::Result;
use is_terminal::IsTerminal;
use std::io;
use tracing_subscriber::EnvFilter;
use vocabmatch::report::write_report;
use vocabmatch::styles::ColorChoice;

const LOG_ENV: &str = "VOCABMATCH_LOG";

fn main() -> Result<()> {
    let args = vocabmatch::args::parsed();
    init_logging(args.color);
    if args.help {
        return vocabmatch::help::print(args.color);
    }
    if args.version {
        return vocabmatch::help::print_version(args.color);
    }

    let config = args.config()?;
    let result = vocabmatch::reconcile_files(&config)?;

    let stdout = anstream::AutoStream::new(io::stdout().lock(), args.color.into());
    if io::stdout().is_terminal() {
        write_report(&result, args.report, stdout)?;
    } else {
        write_report(&result, args.report, io::BufWriter::new(stdout))?;
    };
    Ok(())
}

/// Warnings and errors go to stderr unless `VOCABMATCH_LOG` asks for more (or less).
/// Escape sequences follow `--color`, judged against stderr.
fn init_logging(color: ColorChoice) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_ansi(color.use_ansi(io::stderr().is_terminal()))
        .init();
}
