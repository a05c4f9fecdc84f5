//! Command dispatch.

use std::io::Write;
use std::sync::Arc;

use anyhow::{bail, Result};
use serde_json::json;

use fibsvc_core::{FibService, FileExclusionStore, NoCache};

use crate::config::{BlacklistAction, CliConfig, Command};

/// Run the parsed command, writing results to `out`.
pub fn run(config: &CliConfig, out: &mut impl Write) -> Result<()> {
    let store = FileExclusionStore::open(&config.blacklist_file)?;
    // One-shot process: nothing to gain from caching.
    let service = FibService::new(Arc::new(store), Arc::new(NoCache::new()));

    match &config.command {
        Command::Get { index } => {
            if let Err(limit) = check_limit("index", *index, config.max_index) {
                // A blacklisted index is reported as such even above the limit.
                service.ensure_allowed(*index)?;
                return Err(limit);
            }
            let value = service.fibonacci(*index)?;
            if config.json {
                writeln!(out, "{}", json!({"number": index, "fibonacci": value.to_string()}))?;
            } else {
                writeln!(out, "F({index}) = {value}")?;
            }
        }
        Command::List { n, page, page_size } => {
            check_limit("n", *n, config.max_index)?;
            let page = service.list(*n, *page, *page_size)?;
            if config.json {
                let numbers: Vec<_> = page
                    .numbers
                    .iter()
                    .map(|(number, value)| json!({"number": number, "fibonacci": value.to_string()}))
                    .collect();
                let body = json!({
                    "page": page.page,
                    "page_size": page.page_size,
                    "numbers": numbers,
                    "total_pages": page.total_pages,
                });
                writeln!(out, "{body}")?;
            } else {
                writeln!(
                    out,
                    "Page {}/{} (page size {})",
                    page.page, page.total_pages, page.page_size
                )?;
                for (number, value) in &page.numbers {
                    writeln!(out, "F({number}) = {value}")?;
                }
            }
        }
        Command::Blacklist { action } => run_blacklist(&service, action, config.json, out)?,
    }
    Ok(())
}

/// Reject a positive value above `max`; non-positive values are left for
/// the core to report.
fn check_limit(what: &str, value: i64, max: u64) -> Result<()> {
    if u64::try_from(value).is_ok_and(|value| value > max) {
        bail!("{what} {value} exceeds the configured maximum of {max}");
    }
    Ok(())
}

fn run_blacklist(
    service: &FibService,
    action: &BlacklistAction,
    as_json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let message = match action {
        BlacklistAction::Add { number } => {
            let number = service.blacklist_add(*number)?;
            format!("Number {number} has been blacklisted.")
        }
        BlacklistAction::Remove { number } => {
            let number = service.blacklist_remove(*number)?;
            format!("Number {number} has been removed from the blacklist.")
        }
        BlacklistAction::Show => {
            let numbers = service.blacklist()?;
            if as_json {
                writeln!(out, "{}", json!({ "numbers": numbers }))?;
            } else if numbers.is_empty() {
                writeln!(out, "Blacklist is empty.")?;
            } else {
                for number in numbers {
                    writeln!(out, "{number}")?;
                }
            }
            return Ok(());
        }
    };

    if as_json {
        writeln!(out, "{}", json!({ "message": message }))?;
    } else {
        writeln!(out, "{message}")?;
    }
    Ok(())
}
