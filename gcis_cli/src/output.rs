use anyhow::Result;
use gcis_api::types::{
    parse_roc_date, BusinessBasicInformation, BusinessItem, CompanyBasicInformation,
    CompanyByKeyword, CompanyByResponsibleName,
};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

#[derive(Tabled, Serialize)]
struct CompanyRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Capital")]
    #[serde(rename = "Capital")]
    capital: String,
    #[tabled(rename = "Responsible")]
    #[serde(rename = "Responsible")]
    responsible: String,
    #[tabled(rename = "Setup")]
    #[serde(rename = "Setup")]
    setup: String,
    #[tabled(rename = "Location")]
    #[serde(rename = "Location")]
    location: String,
}

#[derive(Tabled, Serialize)]
struct CompanyNameRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
}

#[derive(Tabled, Serialize)]
struct BusinessRow {
    #[tabled(rename = "No")]
    #[serde(rename = "No")]
    president_no: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Funds")]
    #[serde(rename = "Funds")]
    funds: String,
    #[tabled(rename = "Responsible")]
    #[serde(rename = "Responsible")]
    responsible: String,
    #[tabled(rename = "Agency")]
    #[serde(rename = "Agency")]
    agency: String,
    #[tabled(rename = "Setup")]
    #[serde(rename = "Setup")]
    setup: String,
    #[tabled(rename = "Address")]
    #[serde(rename = "Address")]
    address: String,
}

#[derive(Tabled, Serialize)]
struct BusinessItemRow {
    #[tabled(rename = "Seq")]
    #[serde(rename = "Seq")]
    seq: String,
    #[tabled(rename = "Code")]
    #[serde(rename = "Code")]
    code: String,
    #[tabled(rename = "Description")]
    #[serde(rename = "Description")]
    description: String,
}

// -- Row builders --

fn build_company_rows(companies: &[CompanyBasicInformation]) -> Vec<CompanyRow> {
    companies
        .iter()
        .map(|c| CompanyRow {
            id: c.business_accounting_no.clone(),
            name: c.company_name.clone(),
            status: c.company_status_desc.clone(),
            capital: format_ntd(c.capital_stock_amount),
            responsible: c.responsible_name.clone(),
            setup: format_roc_date(&c.company_setup_date),
            location: c.company_location.clone(),
        })
        .collect()
}

fn build_keyword_rows(companies: &[CompanyByKeyword]) -> Vec<CompanyRow> {
    companies
        .iter()
        .map(|c| CompanyRow {
            id: c.business_accounting_no.clone(),
            name: c.company_name.clone(),
            status: c.company_status_desc.clone(),
            capital: format_ntd(c.capital_stock_amount),
            responsible: c.responsible_name.clone(),
            setup: format_roc_date(&c.company_setup_date),
            location: c.company_location.clone(),
        })
        .collect()
}

fn build_company_name_rows(companies: &[CompanyByResponsibleName]) -> Vec<CompanyNameRow> {
    companies
        .iter()
        .map(|c| CompanyNameRow {
            id: c.business_accounting_no.clone(),
            name: c.company_name.clone(),
        })
        .collect()
}

fn build_business_rows(businesses: &[BusinessBasicInformation]) -> Vec<BusinessRow> {
    businesses
        .iter()
        .map(|b| BusinessRow {
            president_no: b.president_no.clone(),
            name: b.business_name.clone(),
            status: b.business_current_status_desc.clone(),
            funds: format_ntd(b.business_register_funds),
            responsible: b.responsible_name.clone(),
            agency: b.agency_desc.clone(),
            setup: format_roc_date(&b.business_setup_approve_date),
            address: b.business_address.clone(),
        })
        .collect()
}

fn build_business_item_rows(items: &[BusinessItem]) -> Vec<BusinessItemRow> {
    items
        .iter()
        .map(|i| BusinessItemRow {
            seq: i.business_seq_no.clone(),
            code: i.business_item.clone(),
            description: i.business_item_desc.clone(),
        })
        .collect()
}

// -- Public printers --

pub fn print_companies(companies: &[CompanyBasicInformation], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&companies),
        _ => print_rows(build_company_rows(companies), format)?,
    }
    Ok(())
}

pub fn print_keyword_matches(companies: &[CompanyByKeyword], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&companies),
        _ => print_rows(build_keyword_rows(companies), format)?,
    }
    Ok(())
}

pub fn print_company_names(
    companies: &[CompanyByResponsibleName],
    format: &OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&companies),
        _ => print_rows(build_company_name_rows(companies), format)?,
    }
    Ok(())
}

pub fn print_businesses(businesses: &[BusinessBasicInformation], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&businesses),
        _ => print_rows(build_business_rows(businesses), format)?,
    }
    Ok(())
}

/// Prints registered business items. JSON output is handled by the caller,
/// which prints the whole record instead.
pub fn print_business_items(items: &[BusinessItem], format: &OutputFormat) -> Result<()> {
    print_rows(build_business_item_rows(items), format)
}

fn print_rows<R: Tabled + Serialize>(rows: Vec<R>, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for row in rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
        OutputFormat::Markdown => {
            let mut table = Table::new(rows);
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Table | OutputFormat::Json => println!("{}", Table::new(rows)),
    }
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

/// Formats an NTD amount with thousands separators, e.g. `NT$35,000,000,000`.
fn format_ntd(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let sign = if value < 0 { "-" } else { "" };
    format!("{}NT${}", sign, grouped)
}

/// Shows an ROC date as ISO, falling back to the raw value.
fn format_roc_date(raw: &str) -> String {
    parse_roc_date(raw)
        .map(|d| d.to_string())
        .unwrap_or_else(|| raw.to_string())
}
