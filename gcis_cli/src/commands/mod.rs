//! CLI subcommand implementations.

pub mod business;
pub mod company;

use anyhow::{bail, Result};
use gcis_api::{CancellationToken, Client, Endpoint, Query};

use crate::output::OutputFormat;

/// Everything a subcommand needs besides its own arguments.
pub struct Context {
    pub client: Client,
    pub format: OutputFormat,
    pub raw: bool,
    pub cancel: CancellationToken,
}

impl Context {
    /// Streams the upstream body for `input` on `endpoint` to stdout as-is.
    pub async fn print_raw<Q: Query>(&self, endpoint: Endpoint, input: &Q) -> Result<()> {
        let path = input.descriptor(endpoint).to_path();
        let mut stdout = tokio::io::stdout();
        let meta = self
            .client
            .execute_raw(&path, &self.cancel, &mut stdout)
            .await?;
        println!();
        eprintln!(
            "{} {} ({})",
            meta.status,
            meta.url,
            meta.content_type().unwrap_or("no content-type")
        );
        Ok(())
    }
}

/// Checks a filter value before it is spliced into `$filter`.
///
/// The upstream filter syntax has no quoting, so characters that would end
/// the clause or the query string are rejected here.
pub fn validate_filter_value(name: &str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        bail!("{} must not be empty", name);
    }
    if value.contains(&['&', '#', '\''][..]) || value.to_ascii_lowercase().contains(" and ") {
        bail!("{} contains characters the registry filter cannot express: {:?}", name, value);
    }
    Ok(value.to_string())
}

/// Checks an 8-digit 統一編號.
pub fn validate_accounting_no(value: &str) -> Result<String> {
    let value = value.trim();
    if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
        bail!("expected an 8-digit unified business number, got {:?}", value);
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_eight_digit_numbers() {
        assert_eq!(validate_accounting_no(" 20828393 ").unwrap(), "20828393");
    }

    #[test]
    fn rejects_bad_numbers() {
        assert!(validate_accounting_no("2082839").is_err());
        assert!(validate_accounting_no("2082839a").is_err());
        assert!(validate_accounting_no("").is_err());
    }

    #[test]
    fn rejects_filter_breaking_values() {
        assert!(validate_filter_value("name", "A&B").is_err());
        assert!(validate_filter_value("name", "x and Company_Status eq 01").is_err());
        assert!(validate_filter_value("name", "O'Brien").is_err());
        assert!(validate_filter_value("name", "  ").is_err());
        assert_eq!(validate_filter_value("name", " 宏碁 ").unwrap(), "宏碁");
    }
}
