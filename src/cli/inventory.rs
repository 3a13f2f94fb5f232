//! Inventory command: login, discover, report

use std::io::IsTerminal;
use std::path::Path;

use colored::Colorize;
use dialoguer::{Password, theme::ColorfulTheme};

use crate::cli::Cli;
use crate::cli::console::ConsoleSink;
use crate::client::{CloudAccountApi, Pacer, PrismaClient};
use crate::config::{Config, Settings};
use crate::error::Result;
use crate::events::{EventSink, Stage};
use crate::inventory::{AccountRecord, Discoverer, authenticate};
use crate::output::{InventoryReport, table, writer};

/// Printed when discovery finds nothing to report
pub const NO_ACCOUNTS_MESSAGE: &str = "No accounts were discovered. Exiting.";

/// How an inventory run ended
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The report was written with these records
    Written(Vec<AccountRecord>),
    /// Discovery produced no records; no report was written
    NoAccounts,
}

/// Run the inventory from parsed CLI arguments
pub async fn run(cli: &Cli) -> Result<()> {
    let settings = resolve_settings(cli)?;
    let client = PrismaClient::new(settings.credentials.api_url())?;
    let events = ConsoleSink;

    match execute(&client, &settings, &events).await? {
        Outcome::Written(records) => print_summary(&InventoryReport::new(&records)),
        Outcome::NoAccounts => {}
    }

    Ok(())
}

/// Merge config file and flags, prompting for the secret key if needed.
fn resolve_settings(cli: &Cli) -> Result<Settings> {
    resolve_settings_with(cli, prompt_secret_key)
}

/// Placeholders among the values already set fail before any prompt.
fn resolve_settings_with<F>(cli: &Cli, prompt: F) -> Result<Settings>
where
    F: FnOnce() -> Result<Option<String>>,
{
    let mut config = Config::load_at(cli.config.as_deref())?.overlay(cli.config_layer());
    config.check_placeholders()?;

    if !config.has_secret_key() {
        config.secret_key = prompt()?;
    }

    config.into_settings()
}

fn prompt_secret_key() -> Result<Option<String>> {
    if !std::io::stdin().is_terminal() {
        return Ok(None);
    }

    let secret: String = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("Enter your Prisma Cloud secret key")
        .interact()?;
    Ok(Some(secret))
}

/// Log in, discover accounts, and write the report.
///
/// Login and report I/O failures are returned; discovery failures degrade
/// to fewer records.
pub async fn execute<A, S>(api: &A, settings: &Settings, events: &S) -> Result<Outcome>
where
    A: CloudAccountApi + ?Sized,
    S: EventSink,
{
    let session = authenticate(api, &settings.credentials, events).await?;

    let records = Discoverer::new(api, events, Pacer::new(settings.request_delay))
        .discover(&session)
        .await;
    if records.is_empty() {
        events.warn(Stage::Discovery, NO_ACCOUNTS_MESSAGE);
        return Ok(Outcome::NoAccounts);
    }

    write_report(&records, &settings.output, events)?;
    Ok(Outcome::Written(records))
}

fn write_report<S: EventSink>(records: &[AccountRecord], path: &Path, events: &S) -> Result<()> {
    events.info(
        Stage::Report,
        format!(
            "Writing Account Inventory Report to {}",
            path.display()
        ),
    );

    let report = InventoryReport::new(records);
    writer::write_to_path(&report, path)?;

    events.success(
        Stage::Report,
        format!("Report successfully written to {}", path.display()),
    );
    if report.failed_listings() > 0 {
        events.warn(
            Stage::Report,
            format!(
                "{} organization(s) could not be expanded; see the ERROR rows in the report.",
                report.failed_listings()
            ),
        );
    }

    Ok(())
}

fn print_summary(report: &InventoryReport<'_>) {
    println!();
    println!(
        "Summary: Total Accounts = {}",
        report.total().to_string().bold()
    );
    println!("{}", table::format_breakdown(report));
}
