// src/batch.rs
// Many pasted reports at once: read (optionally zstd-compressed) inputs,
// parse them in parallel, write one JSON record per input.

use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use rayon::prelude::*;
use serde::Serialize;

use crate::error::InputError;
use crate::model::MatchRecord;
use crate::report::MatchReportParser;

pub struct ReportInput {
    pub name: String, // file stem, or "stdin"
    pub text: String,
}

#[derive(Serialize)]
pub struct ParsedReport {
    pub name: String,
    #[serde(flatten)]
    pub record: MatchRecord,
}

fn is_zst(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("zst"))
        .unwrap_or(false)
}

/// Stem without `.txt`/`.zst` layers: `w12.txt.zst` -> `w12`.
fn report_name(path: &Path) -> String {
    let mut p = path.to_path_buf();
    while let Some(ext) = p.extension().and_then(|e| e.to_str()) {
        if !matches!(ext.to_ascii_lowercase().as_str(), "zst" | "txt") {
            break;
        }
        p.set_extension("");
    }
    p.file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("report")
        .to_string()
}

fn into_text(bytes: Vec<u8>, origin: &str) -> Result<String, InputError> {
    String::from_utf8(bytes).map_err(|_| InputError::NotUtf8(origin.to_string()))
}

pub fn read_input(path: &Path) -> Result<ReportInput, InputError> {
    let origin = path.display().to_string();
    let file = File::open(path)
        .map_err(|source| InputError::ReadFailed { path: origin.clone(), source })?;

    let bytes = if is_zst(path) {
        let t0 = Instant::now();
        let out = zstd::stream::decode_all(io::BufReader::new(file))
            .map_err(|source| InputError::DecompressFailed { path: origin.clone(), source })?;
        tracing::debug!(path = %origin, bytes = out.len(), secs = t0.elapsed().as_secs_f64(), "batch: zstd decoded");
        out
    } else {
        let mut out = Vec::new();
        io::BufReader::new(file)
            .read_to_end(&mut out)
            .map_err(|source| InputError::ReadFailed { path: origin.clone(), source })?;
        out
    };

    Ok(ReportInput { name: report_name(path), text: into_text(bytes, &origin)? })
}

pub fn read_stdin() -> Result<ReportInput, InputError> {
    let mut out = Vec::new();
    io::stdin()
        .lock()
        .read_to_end(&mut out)
        .map_err(|source| InputError::ReadFailed { path: "stdin".into(), source })?;
    Ok(ReportInput { name: "stdin".into(), text: into_text(out, "stdin")? })
}

/// Caller's partial record, as JSON.
pub fn load_existing(path: &Path) -> Result<MatchRecord, InputError> {
    let origin = path.display().to_string();
    let text = fs::read_to_string(path)
        .map_err(|source| InputError::ReadFailed { path: origin.clone(), source })?;
    serde_json::from_str(&text).map_err(|source| InputError::BadRecord { path: origin, source })
}

/// Parse every input on top of the same `existing` record. Output keeps input order.
pub fn parse_all(
    parser: &MatchReportParser<'_>,
    inputs: &[ReportInput],
    existing: &MatchRecord,
) -> Vec<ParsedReport> {
    let t0 = Instant::now();
    let out: Vec<ParsedReport> = inputs
        .par_iter()
        .map(|input| ParsedReport {
            name: input.name.clone(),
            record: parser.parse(&input.text, existing),
        })
        .collect();
    tracing::info!(reports = out.len(), secs = t0.elapsed().as_secs_f64(), "batch: parsed");
    out
}

fn write_json<T: Serialize + ?Sized, W: Write>(w: W, value: &T, compact: bool) -> anyhow::Result<()> {
    if compact {
        serde_json::to_writer(w, value)?;
    } else {
        serde_json::to_writer_pretty(w, value)?;
    }
    Ok(())
}

/// Where records go:
/// - `out` is a directory: one `<name>.json` per report
/// - `out` is a file: the record (one report) or an array of them
/// - no `out`: same, on stdout
pub fn write_outputs(reports: &[ParsedReport], out: Option<&Path>, compact: bool) -> anyhow::Result<Vec<PathBuf>> {
    let Some(out) = out else {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        match reports {
            [single] => write_json(&mut lock, &single.record, compact)?,
            many => write_json(&mut lock, many, compact)?,
        }
        writeln!(lock)?;
        return Ok(Vec::new());
    };

    if out.is_dir() {
        let mut written = Vec::with_capacity(reports.len());
        for r in reports {
            let mut path = out.to_path_buf();
            path.push(format!("{}.json", r.name));
            let f = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
            write_json(BufWriter::new(f), &r.record, compact)
                .with_context(|| format!("writing {}", path.display()))?;
            written.push(path);
        }
        return Ok(written);
    }

    let f = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    let w = BufWriter::new(f);
    let res = match reports {
        [single] => write_json(w, &single.record, compact),
        many => write_json(w, many, compact),
    };
    res.with_context(|| format!("writing {}", out.display()))?;
    Ok(vec![out.to_path_buf()])
}
