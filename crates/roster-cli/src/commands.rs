use anyhow::{Context, Result, bail};
use roster_cli::directory::StaticDirectory;
use roster_cli::report::{CheckReport, ResolveReport, check_sheet, resolve_sheet};
use roster_ingest::{ReadOptions, SheetConfig, read_sheet};
use roster_model::{CountryCode, Sheet};
use tracing::info_span;

use crate::cli::{CheckArgs, ResolveArgs, SheetArgs, SuggestArgs};

pub fn run_check(args: &CheckArgs) -> Result<CheckReport> {
    let (sheet, config) = load_sheet(&args.sheet)?;
    let _span = info_span!("check", sheet = %sheet.title).entered();
    let country = match &args.country {
        Some(code) => CountryCode::new(code.as_str()).context("parse --country")?,
        None => config.country(),
    };
    check_sheet(&sheet, &country).context("check sheet")
}

pub async fn run_resolve(args: &ResolveArgs) -> Result<ResolveReport> {
    let (sheet, _) = load_sheet(&args.sheet)?;
    let directory = StaticDirectory::load(&args.directory)?;
    resolve_sheet(&sheet, &directory)
        .await
        .context("resolve sheet")
}

pub fn run_suggest(args: &SuggestArgs) -> Result<String> {
    let options = ReadOptions {
        delimiter: delimiter_byte(args.delimiter)?,
        first_row_is_headers: true,
        ..ReadOptions::default()
    };
    let sheet = read_sheet(&args.csv, &options)
        .with_context(|| format!("read {}", args.csv.display()))?;
    let config = SheetConfig::suggest(&sheet);
    serde_json::to_string_pretty(&config).context("serialize configuration")
}

/// Read the CSV and apply its configuration and overrides.
fn load_sheet(args: &SheetArgs) -> Result<(Sheet, SheetConfig)> {
    let options = ReadOptions {
        delimiter: delimiter_byte(args.delimiter)?,
        ..ReadOptions::default()
    };
    let sheet = read_sheet(&args.csv, &options)
        .with_context(|| format!("read {}", args.csv.display()))?;
    let config = SheetConfig::load(&args.config)?;
    let mut sheet = config
        .apply(sheet)
        .with_context(|| format!("apply {}", args.config.display()))?;
    if args.no_headers {
        sheet.first_row_is_headers = false;
    }
    Ok((sheet, config))
}

fn delimiter_byte(delimiter: char) -> Result<u8> {
    if !delimiter.is_ascii() {
        bail!("delimiter must be a single ASCII character, got {delimiter:?}");
    }
    Ok(delimiter as u8)
}
