//! Command-line parsing.
//!
//! Every option has a compiled-in default, so `blockmap <op>` on its own
//! reproduces the historical fixed invocation against `assets/keep.json`.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use blockmap_engine::transform::{MirrorCutoff, SplitShift, Transform, Translate};

pub const DEFAULT_INPUT: &str = "assets/keep.json";
pub const DEFAULT_MOVED_OUTPUT: &str = "assets/keep_modified.json";
pub const DEFAULT_MIRRORED_OUTPUT: &str = "assets/keep-mirrored.json";

pub const USAGE: &str = "\
Usage: blockmap <translate|extend|mirror> [options]

  translate   shift every block by (dx, dy, dz)
  extend      push z >= 0 forward and z < 0 backward by a gap
  mirror      drop z <= -cutoff, copy z >= cutoff to (-x, y, -z)

Options:
  --input <path>    source document     [default: assets/keep.json]
  --output <path>   destination         [default: assets/keep_modified.json,
                                         assets/keep-mirrored.json for mirror]
  --dx <int>        translate X offset  [default: 1]
  --dy <int>        translate Y offset  [default: 0]
  --dz <int>        translate Z offset  [default: 0]
  --gap <int>       extend gap          [default: 15]
  --cutoff <int>    mirror cutoff       [default: 10]

Log level is taken from RUST_LOG (default: info).";

/// Which transform to run, with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Translate(Translate),
    Extend(SplitShift),
    Mirror(MirrorCutoff),
}

impl Operation {
    pub fn transform(&self) -> &dyn Transform {
        match self {
            Operation::Translate(t) => t,
            Operation::Extend(s) => s,
            Operation::Mirror(m) => m,
        }
    }

    fn default_output(&self) -> &'static str {
        match self {
            Operation::Mirror(_) => DEFAULT_MIRRORED_OUTPUT,
            _ => DEFAULT_MOVED_OUTPUT,
        }
    }

    /// Confirmation printed after a successful run.
    pub fn success_message(&self, output: &std::path::Path) -> String {
        match self {
            Operation::Mirror(_) => {
                format!("Successfully mirrored Z axis! Saved as {}", output.display())
            }
            _ => format!("Map moved successfully! Check {}.", output.display()),
        }
    }
}

/// A fully resolved command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub operation: Operation,
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Parse arguments (program name excluded).
///
/// Returns `Ok(None)` when help was requested.
pub fn parse(args: &[String]) -> Result<Option<Invocation>> {
    let Some(command) = args.first() else {
        bail!("missing operation");
    };
    if command == "-h" || command == "--help" || command == "help" {
        return Ok(None);
    }

    let allowed: &[&str] = match command.as_str() {
        "translate" => &["--dx", "--dy", "--dz"],
        "extend" => &["--gap"],
        "mirror" => &["--cutoff"],
        other => bail!("unknown operation {other:?}"),
    };

    let mut input = None;
    let mut output = None;
    let mut ints: Vec<(&str, i64)> = Vec::new();

    let mut rest = args[1..].iter();
    while let Some(flag) = rest.next() {
        if flag == "-h" || flag == "--help" {
            return Ok(None);
        }
        let value = rest
            .next()
            .with_context(|| format!("{flag} expects a value"))?;
        match flag.as_str() {
            "--input" => input = Some(PathBuf::from(value)),
            "--output" => output = Some(PathBuf::from(value)),
            f if allowed.contains(&f) => {
                let n: i64 = value
                    .parse()
                    .with_context(|| format!("{f} expects an integer, got {value:?}"))?;
                ints.push((f, n));
            }
            f => bail!("unknown option {f:?} for {command}"),
        }
    }

    // Repeated flags: the last one wins.
    let int = |name: &str, default: i64| {
        ints.iter()
            .rev()
            .find(|(f, _)| *f == name)
            .map_or(default, |&(_, n)| n)
    };

    let operation = match command.as_str() {
        "translate" => {
            let d = Translate::default();
            Operation::Translate(Translate::new(
                int("--dx", d.dx),
                int("--dy", d.dy),
                int("--dz", d.dz),
            ))
        }
        "extend" => Operation::Extend(SplitShift::new(int("--gap", SplitShift::DEFAULT_GAP))),
        _ => Operation::Mirror(MirrorCutoff::new(int(
            "--cutoff",
            MirrorCutoff::DEFAULT_CUTOFF,
        ))),
    };

    Ok(Some(Invocation {
        input: input.unwrap_or_else(|| DEFAULT_INPUT.into()),
        output: output.unwrap_or_else(|| operation.default_output().into()),
        operation,
    }))
}
