mod context;

pub mod config;
pub mod dashboard;
pub mod leases;
pub mod payments;
pub mod session;
pub mod status;
pub mod tenants;
pub mod units;

pub use context::HandlerContext;

use crate::args::ListArgs;
use anyhow::{Result, anyhow, bail};
use is_terminal::IsTerminal;
use leasedesk_engine::{ColumnKey, SortSpec, ValidationErrors};
use leasedesk_runtime::{Error, LeaseDesk};
use serde::de::DeserializeOwned;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// "Failed to fetch tenants: <reason>"
pub(crate) fn failed(action: &str, err: Error) -> anyhow::Error {
    anyhow!("Failed to {}: {}", action, err.user_message())
}

pub(crate) fn invalid(noun: &str, errors: ValidationErrors) -> anyhow::Error {
    anyhow!("Invalid {}: {}", noun.to_lowercase(), errors)
}

/// Parse a column name, listing the accepted ones on failure.
pub(crate) fn parse_sort_key<K>(raw: &str) -> Result<K>
where
    K: ColumnKey + FromStr<Err = leasedesk_types::Error>,
{
    raw.parse::<K>()
        .map_err(|e| anyhow!("{} (choose from: {})", e, K::names()))
}

/// `--sort`/`--desc` win; otherwise the remembered sort of the screen applies.
pub(crate) fn resolve_sort<K>(desk: &LeaseDesk, list: &ListArgs) -> Result<Option<SortSpec<K>>>
where
    K: ColumnKey + FromStr<Err = leasedesk_types::Error> + DeserializeOwned,
{
    let Some(raw) = list.sort.as_deref() else {
        let remembered = desk.preferences().sort::<K>();
        if list.desc {
            return Ok(remembered.map(|spec| SortSpec::descending(spec.key)));
        }
        return Ok(remembered);
    };

    let key = parse_sort_key::<K>(raw)?;
    Ok(Some(if list.desc {
        SortSpec::descending(key)
    } else {
        SortSpec::ascending(key)
    }))
}

/// Ask before deleting. Without a terminal on stdin the answer is never
/// assumed, so scripts must pass `--yes`.
pub(crate) fn confirm_delete(noun: &str, id: i64, assume_yes: bool) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    if !io::stdin().is_terminal() {
        bail!(
            "Refusing to delete {} #{} without confirmation (pass --yes)",
            noun.to_lowercase(),
            id
        );
    }

    eprint!(
        "Are you sure you want to delete {} #{}? [y/N] ",
        noun.to_lowercase(),
        id
    );
    io::stderr().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
