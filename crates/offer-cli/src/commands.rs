//! Command handlers

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::NaiveDate;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;
use walkdir::WalkDir;

use offer_app::config::Config;
use offer_app::export::{export_local, export_remote, report::format_eur};
use offer_app::providers::{open_catalog, open_price_book};
use offer_domain::model::{OrderForm, SelectionLists};
use offer_domain::repository::PriceSource;
use offer_domain::service::{calculate_quote, normalize_vehicle_input, scan_priced_lines};
use offer_infra::load_order_file;
use offer_types::{Error, ExportFormat, Result};

use crate::cli::{Cli, Commands};
use crate::output::print_parse;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config, then apply CLI overrides
    let mut config = Config::load()?;
    if let Some(ref url) = cli.backend_url {
        config.backend_url = url.clone();
    }

    match cli.command {
        Commands::Export {
            order,
            output,
            format,
            remote,
        } => cmd_export(&config, &order, output, format, remote),
        Commands::Batch {
            folder,
            output,
            format,
            remote,
        } => cmd_batch(&config, &folder, output, format, remote),
        Commands::Parse { order, format } => cmd_parse(&config, &order, format),
        Commands::Price { code, date } => cmd_price(&config, &code, date),
        Commands::Config {
            set_backend_url,
            set_sales_person,
        } => cmd_config(config, set_backend_url, set_sales_person),
    }
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

fn load_form(path: &Path) -> Result<OrderForm> {
    let lists = SelectionLists::default();
    load_order_file(path, &lists, today())
}

fn run_export(
    config: &Config,
    form: &OrderForm,
    format: ExportFormat,
    remote: bool,
    output_dir: &Path,
) -> Result<PathBuf> {
    if remote {
        export_remote(
            form,
            format,
            &config.backend_url,
            Duration::from_secs(config.timeout_secs),
            output_dir,
        )
    } else {
        let catalog = open_catalog(config)?;
        let prices = open_price_book(config)?;
        export_local(
            form,
            format,
            &catalog,
            &prices,
            output_dir,
            &config.sales_person,
        )
    }
}

fn cmd_export(
    config: &Config,
    order: &Path,
    output: Option<PathBuf>,
    format: Option<ExportFormat>,
    remote: bool,
) -> Result<()> {
    let form = load_form(order)?;
    let format = format.unwrap_or(config.default_format);
    let output_dir = output.unwrap_or_else(|| config.output_dir());

    let path = run_export(config, &form, format, remote, &output_dir)?;
    println!("Exported: {}", path.display());
    Ok(())
}

fn cmd_batch(
    config: &Config,
    folder: &Path,
    output: Option<PathBuf>,
    format: Option<ExportFormat>,
    remote: bool,
) -> Result<()> {
    if !folder.is_dir() {
        return Err(Error::FileNotFound(folder.display().to_string()));
    }

    let mut files: Vec<PathBuf> = WalkDir::new(folder)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    files.sort();

    if files.is_empty() {
        println!("No order files found in {}", folder.display());
        return Ok(());
    }

    let format = format.unwrap_or(config.default_format);
    let output_dir = output.unwrap_or_else(|| config.output_dir());

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut exported = 0usize;
    let mut failed = 0usize;

    for file in &files {
        pb.set_message(
            file.file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
        );

        let result = load_form(file).and_then(|form| {
            run_export(config, &form, format, remote, &output_dir)
        });
        match result {
            Ok(_) => exported += 1,
            Err(e) => {
                failed += 1;
                pb.println(format!("{}: {}", file.display(), e));
                warn!(file = %file.display(), error = %e, "batch export failed");
            }
        }
        pb.inc(1);
    }

    pb.finish_and_clear();
    println!(
        "Exported {} of {} order files ({} failed)",
        exported,
        files.len(),
        failed
    );
    Ok(())
}

fn cmd_parse(config: &Config, order: &Path, format: offer_types::OutputFormat) -> Result<()> {
    let form = load_form(order)?;
    let catalog = open_catalog(config)?;
    let prices = open_price_book(config)?;

    let priced_lines = scan_priced_lines(&form.notes);
    let vehicle = normalize_vehicle_input(&form.bulk_tokens(), &priced_lines, &catalog)?;
    let quote = calculate_quote(form.production_date, &form.bulk_codes, &catalog, &prices);

    print_parse(format, &vehicle, &quote)
}

fn cmd_price(config: &Config, code: &str, date: Option<String>) -> Result<()> {
    let date = match date {
        Some(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .map_err(|_| Error::InvalidDate(format!("{} (expected YYYY-MM-DD)", raw)))?,
        None => today(),
    };

    let prices = open_price_book(config)?;
    let price = prices.price_for(code, date);
    println!("{} @ {}: {}", code, date.format("%Y-%m-%d"), format_eur(price));
    Ok(())
}

fn cmd_config(
    mut config: Config,
    set_backend_url: Option<String>,
    set_sales_person: Option<String>,
) -> Result<()> {
    let mut changed = false;

    if let Some(url) = set_backend_url {
        config.backend_url = url;
        changed = true;
    }
    if let Some(name) = set_sales_person {
        config.sales_person = name;
        changed = true;
    }

    if changed {
        config.save()?;
        println!("Configuration saved to {}", Config::config_path()?.display());
    } else {
        println!("{}", serde_json::to_string_pretty(&config)?);
    }
    Ok(())
}
