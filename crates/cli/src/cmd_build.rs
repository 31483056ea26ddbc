// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Build command implementation.

use std::io::Read;
use std::path::{Path, PathBuf};

use treeframe::builder::{Builder, select_root};
use treeframe::cli::{BuildArgs, Cli, OutputFormat};
use treeframe::color::resolve_color;
use treeframe::config;
use treeframe::detect::find_region;
use treeframe::error::{Error, ExitCode};
use treeframe::fence::scan_fences;
use treeframe::fs::RealFileSystem;
use treeframe::log::BuildLog;
use treeframe::output::{
    BuildSummary, ScanReport, write_json_summary, write_text_scan, write_text_summary,
};
use treeframe::parser;

/// Run the `build` command.
pub fn run(cli: &Cli, args: &BuildArgs) -> anyhow::Result<ExitCode> {
    let (text, doc_dir) = read_document(&args.doc)?;
    if text.trim().is_empty() {
        return Err(Error::Argument("document is empty".into()).into());
    }

    let cwd = std::env::current_dir()?;
    let config_start = doc_dir.clone().unwrap_or_else(|| cwd.clone());
    let (config, config_path) = config::resolve(cli.config.as_deref(), &config_start)?;

    let base = resolve_base(args, &config, config_path.as_deref(), doc_dir, &cwd)?;
    let keep_log = args.keep_log || config.build.keep_logs;

    let mut log = BuildLog::new(&base, keep_log);
    log.section("Tree Detection");
    let region = find_region(&text);
    log.info(
        &format!("tree region: {} .. {:?}", region.start, region.end),
        None,
    );

    log.section("Tree Parsing");
    let forest = parser::parse(&text, region);
    if forest.is_empty() {
        log.error("no valid tree structure found", None);
        let log_path = log.finalize();
        let summary = BuildSummary {
            ok: false,
            root: base,
            stats: Default::default(),
            log_path,
            error: Some(Error::NoStructure.to_string()),
        };
        emit(args, &summary)?;
        return Ok(ExitCode::BuildFailed);
    }
    log.info(&format!("parsed {} root node(s)", forest.roots().len()), None);

    let fences = scan_fences(&text, &mut log);

    let (root, build_set) = select_root(&forest, &base);
    log.info(&format!("effective root: {}", root.display()), None);

    if args.verbose {
        let report = ScanReport::new(region, &forest, &fences);
        write_text_scan(&report)?;
    }

    let mut fs = RealFileSystem;
    let mut builder = Builder::new(root.clone(), &mut fs);
    let result = builder.build(&forest, &build_set, &fences, &mut log);
    let stats = builder.stats().clone();

    match result {
        Ok(()) => {
            log.info("build completed", None);
            let log_path = log.finalize();
            let summary = BuildSummary {
                ok: true,
                root,
                stats,
                log_path,
                error: None,
            };
            emit(args, &summary)?;
            Ok(ExitCode::Success)
        }
        Err(e) => {
            log.error("build aborted", Some(&e.to_string()));
            let log_path = log.finalize();
            let exit = ExitCode::from(&e);
            let summary = BuildSummary {
                ok: false,
                root,
                stats,
                log_path,
                error: Some(e.to_string()),
            };
            emit(args, &summary)?;
            Ok(exit)
        }
    }
}

/// Read the document text; `-` reads stdin.
fn read_document(doc: &Path) -> anyhow::Result<(String, Option<PathBuf>)> {
    if doc == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok((text, None));
    }

    let text = std::fs::read_to_string(doc).map_err(|source| Error::Io {
        path: doc.to_path_buf(),
        source,
    })?;
    let dir = doc
        .canonicalize()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf));
    Ok((text, dir))
}

/// Pick the base directory: flag, then config, then the document's own
/// directory.
fn resolve_base(
    args: &BuildArgs,
    config: &config::Config,
    config_path: Option<&Path>,
    doc_dir: Option<PathBuf>,
    cwd: &Path,
) -> anyhow::Result<PathBuf> {
    if let Some(root) = &args.root {
        let base = if root.is_absolute() {
            root.clone()
        } else {
            cwd.join(root)
        };
        return Ok(base);
    }

    if let Some(root) = &config.build.root {
        if root.is_absolute() {
            return Ok(root.clone());
        }
        // Relative config roots anchor at the config file's directory.
        let anchor = config_path
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .unwrap_or_else(|| cwd.to_path_buf());
        return Ok(anchor.join(root));
    }

    doc_dir.ok_or_else(|| {
        Error::Argument("--root is required when reading from stdin".into()).into()
    })
}

/// Print the summary in the requested format.
fn emit(args: &BuildArgs, summary: &BuildSummary) -> anyhow::Result<()> {
    match args.output {
        OutputFormat::Text => {
            let choice = resolve_color(args.color, args.no_color);
            write_text_summary(summary, choice)?;
        }
        OutputFormat::Json => write_json_summary(summary)?,
    }
    Ok(())
}
