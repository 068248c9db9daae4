use crate::{
    error::Outcome,
    filter::{self, FilterRequest},
};
use std::{
    ffi::OsStr,
    io::{BufRead, Write},
};

const PATH_PROMPT: &str = "Укажите путь к файлу: ";
const CHARS_PROMPT: &str = "Введите набор символов для удаления: ";

#[derive(Debug)]
enum Action {
    Help(String),
    Filter(FilterArgs),
}

#[derive(Debug)]
struct FilterArgs {
    path: Option<String>,
    forbidden: Option<String>,
    use_config: bool,
}

/// Runs one filter pass. Filter failures are reported on `w` as a status line, not returned;
/// only argument and console errors come back as `Err`.
pub fn run(
    r: &mut impl BufRead,
    w: &mut impl Write,
    args: impl IntoIterator<Item = impl AsRef<OsStr>>,
) -> anyhow::Result<()> {
    let action = parse_args(args)?;
    match action {
        Action::Help(message) => {
            write!(w, "{message}")?;
            Ok(())
        }
        Action::Filter(args) => run_filter(r, w, args),
    }
}

fn run_filter(r: &mut impl BufRead, w: &mut impl Write, args: FilterArgs) -> anyhow::Result<()> {
    let path = match args.path {
        Some(path) => Some(path),
        None => prompt(r, w, PATH_PROMPT)?,
    };
    let forbidden = match args.forbidden {
        Some(forbidden) => Some(forbidden),
        None => prompt(r, w, CHARS_PROMPT)?,
    };

    let request = FilterRequest {
        path: path.as_deref(),
        forbidden: forbidden.as_deref(),
        use_config: args.use_config,
    };
    let outcome = Outcome::from(filter::process(&request));
    log::debug!("outcome: {:?}", outcome);
    writeln!(w, "{}", outcome.message())?;
    Ok(())
}

/// Reads one line after printing `message`. `None` on end of input.
///
/// Bytes that aren't UTF-8 (a legacy console code page) become U+FFFD instead of failing the run.
fn prompt(
    r: &mut impl BufRead,
    w: &mut impl Write,
    message: &str,
) -> anyhow::Result<Option<String>> {
    write!(w, "{message}")?;
    w.flush()?;

    let mut buf = Vec::new();
    if r.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    let line = buf
        .strip_suffix(b"\r\n")
        .or_else(|| buf.strip_suffix(b"\n"))
        .unwrap_or(&buf[..]);
    Ok(Some(String::from_utf8_lossy(line).into_owned()))
}

fn parse_args(args: impl IntoIterator<Item = impl AsRef<OsStr>>) -> anyhow::Result<Action> {
    let args = args.into_iter();
    let options = build_options();

    let matches = options.parse(args.skip(1))?;
    if matches.opt_present("h") {
        let usage = options.usage("Usage: charstrip [options] [path]");
        return Ok(Action::Help(usage));
    }
    if matches.free.len() > 1 {
        anyhow::bail!("only one path can be given, got {}", matches.free.len());
    }

    let filter_args = FilterArgs {
        path: matches.free.first().cloned(),
        forbidden: matches.opt_str("c"),
        use_config: !matches.opt_present("no-config"),
    };
    Ok(Action::Filter(filter_args))
}

fn build_options() -> getopts::Options {
    let mut o = getopts::Options::new();
    o.optflag("h", "help", "print this help message");
    o.optopt("c", "chars", "characters to remove (skips the prompt)", "CHARS");
    o.optflag("", "no-config", "ignore .charstrip.yml files");
    o
}
