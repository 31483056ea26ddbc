// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scan command: parse-only preview, no filesystem writes.

use std::io::Read;
use std::path::Path;

use treeframe::cli::{Cli, OutputFormat, ScanArgs};
use treeframe::detect::find_region;
use treeframe::error::{Error, ExitCode};
use treeframe::fence::scan_fences;
use treeframe::log::BuildLog;
use treeframe::output::{ScanReport, write_json_scan, write_text_scan};
use treeframe::parser;

pub fn run(_cli: &Cli, args: &ScanArgs) -> anyhow::Result<ExitCode> {
    let text = read_document(&args.doc)?;

    let region = find_region(&text);
    let forest = parser::parse(&text, region);
    let mut log = BuildLog::unsinked();
    let fences = scan_fences(&text, &mut log);

    if forest.is_empty() && fences.is_empty() {
        return Err(Error::NoStructure.into());
    }

    let report = ScanReport::new(region, &forest, &fences);
    match args.output {
        OutputFormat::Text => write_text_scan(&report)?,
        OutputFormat::Json => write_json_scan(&report)?,
    }

    Ok(ExitCode::Success)
}

fn read_document(doc: &Path) -> anyhow::Result<String> {
    if doc == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }

    std::fs::read_to_string(doc)
        .map_err(|source| Error::Io {
            path: doc.to_path_buf(),
            source,
        })
        .map_err(Into::into)
}
