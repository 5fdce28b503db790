use std::path::PathBuf;

#[derive(Debug, Default)]
pub struct Cli {
    pub inputs: Vec<PathBuf>,       // empty: read stdin
    pub existing: Option<PathBuf>,  // partial record (JSON) to parse into
    pub teams: Option<PathBuf>,     // team dictionary override
    pub config: Option<PathBuf>,    // config.toml override
    pub competition: Option<String>,
    pub week: Option<u32>,
    pub group: Option<String>,
    pub out: Option<PathBuf>,
    pub compact: bool,
    pub verbose: bool,
    pub help: bool,
}

pub fn parse() -> Cli {
    parse_from(std::env::args().skip(1))
}

pub fn parse_from<I: IntoIterator<Item = String>>(args: I) -> Cli {
    let mut cli = Cli::default();

    let mut it = args.into_iter();
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--existing" | "-e" => {
                if let Some(p) = it.next() { cli.existing = Some(PathBuf::from(p)); }
            }
            "--teams" | "-t" => {
                if let Some(p) = it.next() { cli.teams = Some(PathBuf::from(p)); }
            }
            "--config" | "-c" => {
                if let Some(p) = it.next() { cli.config = Some(PathBuf::from(p)); }
            }
            "--competition" => {
                if let Some(c) = it.next() { cli.competition = Some(c); }
            }
            "--week" | "-w" => {
                if let Some(w) = it.next() { cli.week = w.parse().ok(); }
            }
            "--group" | "-g" => {
                if let Some(g) = it.next() { cli.group = Some(g); }
            }
            "--out" | "-o" => {
                if let Some(p) = it.next() { cli.out = Some(PathBuf::from(p)); }
            }
            "--compact" => cli.compact = true,
            "--verbose" | "-v" => cli.verbose = true,
            "--help" | "-h" => cli.help = true,
            s if s.starts_with('-') && s != "-" => {} // unknown flag
            _ => cli.inputs.push(PathBuf::from(arg)),
        }
    }

    cli
}

pub fn print_help() {
    eprintln!(
r#"match-report: turn a pasted match report into a structured match record

Usage:
  match-report [FILE ...] [--existing record.json] [--out PATH] [options]
  pbpaste | match-report --week 12

Inputs:
  FILE ...                    Report text files; *.zst is decompressed.
                              Without FILE the report is read from stdin.

Options:
  --existing, -e PATH         Partial record (JSON) to parse into.
  --competition NAME          Competition key (selects the id prefix).
  --week, -w N                Week number used in the derived id.
  --group, -g NAME            Group used in the derived id.
  --teams, -t PATH            Team dictionary (TOML, [[team]] tables).
  --config, -c PATH           Config file (default: ./config.toml or
                              $MATCH_REPORT_CONFIG).
  --out, -o PATH              Output file, or a directory for one
                              <name>.json per input. Default: stdout.
  --compact                   Single-line JSON.
  -v, --verbose               Debug logging (RUST_LOG overrides).
  -h, --help                  Show this help.

Notes:
  • Several FILEs are parsed in parallel, each on top of --existing.
  • A record id is only regenerated when it is empty or still a
    placeholder (e.g. contains "takim-takim").
"#);
}
