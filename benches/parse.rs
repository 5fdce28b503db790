use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use match_report::batch::{self, ReportInput};
use match_report::config::Config;
use match_report::{parse_match_report, MatchRecord, MatchReportParser, TeamDirectory, TeamResolver};

const DERBY: &str = include_str!("../tests/fixtures/derby_report.txt");

fn bench_single_report(c: &mut Criterion) {
    let teams = TeamDirectory::embedded().expect("embedded dictionary");
    let existing = MatchRecord { week: Some(37), ..MatchRecord::default() };
    c.bench_function("parse_derby_report", |b| {
        b.iter(|| {
            let rec = parse_match_report(black_box(DERBY), &existing, &teams);
            black_box(rec.events.len());
        })
    });
}

fn bench_team_lookup(c: &mut Criterion) {
    let teams = TeamDirectory::embedded().expect("embedded dictionary");
    c.bench_function("resolve_fuzzy_team", |b| {
        b.iter(|| black_box(teams.resolve(black_box("ÇAYKUR RİZESPOR A.Ş."))))
    });
}

fn bench_batch(c: &mut Criterion) {
    let teams = TeamDirectory::embedded().expect("embedded dictionary");
    let parser = MatchReportParser::new(&teams, Config::default());
    let inputs: Vec<ReportInput> = (0..64)
        .map(|i| ReportInput { name: format!("report-{i}"), text: DERBY.to_string() })
        .collect();
    let existing = MatchRecord::default();
    c.bench_function("parse_all_64", |b| {
        b.iter(|| black_box(batch::parse_all(&parser, &inputs, &existing).len()))
    });
}

criterion_group!(benches, bench_single_report, bench_team_lookup, bench_batch);
criterion_main!(benches);
