use std::path::Path;

use anyhow::Context;

use match_report::batch::{self, ReportInput};
use match_report::cli;
use match_report::config::Config;
use match_report::logging;
use match_report::model::MatchRecord;
use match_report::report::MatchReportParser;
use match_report::teams::TeamDirectory;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = cli::parse();
    if args.help {
        cli::print_help();
        return Ok(());
    }
    logging::init(args.verbose);

    let cfg = Config::load(args.config.as_deref());
    if let Some(n) = cfg.rayon_threads {
        let _ = rayon::ThreadPoolBuilder::new().num_threads(n).build_global();
    }

    // pick the dictionary: CLI override > config > embedded
    let teams = match args.teams.as_deref().or(cfg.teams_file.as_deref()) {
        Some(path) => TeamDirectory::load(path)?,
        None => TeamDirectory::embedded()?,
    };
    tracing::debug!(teams = teams.len(), "team dictionary ready");

    let mut existing = match args.existing.as_deref() {
        Some(path) => batch::load_existing(path)?,
        None => MatchRecord::default(),
    };
    if args.competition.is_some() {
        existing.competition = args.competition.clone();
    }
    if args.week.is_some() {
        existing.week = args.week;
    }
    if args.group.is_some() {
        existing.group = args.group.clone();
    }

    let inputs: Vec<ReportInput> = if args.inputs.is_empty() {
        vec![batch::read_stdin()?]
    } else {
        args.inputs
            .iter()
            .map(|p| if p == Path::new("-") { batch::read_stdin() } else { batch::read_input(p) })
            .collect::<Result<_, _>>()?
    };

    let parser = MatchReportParser::new(&teams, cfg);
    let parsed = batch::parse_all(&parser, &inputs, &existing);

    let written = batch::write_outputs(&parsed, args.out.as_deref(), args.compact)
        .context("writing records")?;
    for path in written {
        tracing::info!(path = %path.display(), "record written");
    }
    for r in &parsed {
        if r.record.home_team_id.is_none() || r.record.away_team_id.is_none() {
            tracing::info!(report = %r.name, "teams not resolved; check the header lines");
        }
    }
    Ok(())
}
