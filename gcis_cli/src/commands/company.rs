use anyhow::Result;
use clap::{Args, Subcommand};
use gcis_api::{BasicInformationInput, CompanyByKeywordInput, CompanyByResponsibleNameInput, Endpoint};

use super::{validate_accounting_no, validate_filter_value, Context};
use crate::output::{
    print_business_items, print_companies, print_company_names, print_json,
    print_keyword_matches, OutputFormat,
};

#[derive(Args)]
pub struct CompanyArgs {
    #[command(subcommand)]
    pub command: CompanyCommand,
}

#[derive(Subcommand)]
pub enum CompanyCommand {
    /// Basic registration record by unified business number (統一編號)
    Info {
        #[arg(long)]
        id: String,
    },
    /// Registered business items (營業項目) by unified business number
    Items {
        #[arg(long)]
        id: String,
    },
    /// Search companies by name keyword
    Search {
        /// Keyword matched against the company name
        #[arg(long)]
        name: String,

        /// Status code, e.g. 01 for 核准設立
        #[arg(long)]
        status: Option<String>,

        /// Rows to skip
        #[arg(long)]
        skip: Option<u32>,

        /// Page size (upstream default 50)
        #[arg(long)]
        top: Option<u32>,
    },
    /// Search companies by responsible person
    ByResponsible {
        #[arg(long)]
        name: String,

        #[arg(long)]
        skip: Option<u32>,

        #[arg(long)]
        top: Option<u32>,
    },
}

pub async fn run(args: &CompanyArgs, ctx: &Context) -> Result<()> {
    match &args.command {
        CompanyCommand::Info { id } => {
            let input = BasicInformationInput::new(&validate_accounting_no(id)?);
            if ctx.raw {
                return ctx.print_raw(Endpoint::CompanyBasicInformation, &input).await;
            }
            let resp = ctx
                .client
                .get_company_basic_information(&ctx.cancel, &input)
                .await?;
            match resp.data {
                Some(company) => print_companies(&[company], &ctx.format)?,
                None => eprintln!("No company registered under {}", input.business_accounting_no),
            }
        }
        CompanyCommand::Items { id } => {
            let input = BasicInformationInput::new(&validate_accounting_no(id)?);
            if ctx.raw {
                return ctx
                    .print_raw(Endpoint::CompanyBasicInformationAndBusiness, &input)
                    .await;
            }
            let resp = ctx
                .client
                .get_company_basic_information_and_business(&ctx.cancel, &input)
                .await?;
            match resp.data {
                Some(company) => match ctx.format {
                    OutputFormat::Json => print_json(&company),
                    _ => {
                        eprintln!(
                            "{} {} ({})",
                            company.business_accounting_no,
                            company.company_name,
                            company.company_status_desc
                        );
                        print_business_items(&company.cmp_business, &ctx.format)?;
                    }
                },
                None => eprintln!("No company registered under {}", input.business_accounting_no),
            }
        }
        CompanyCommand::Search {
            name,
            status,
            skip,
            top,
        } => {
            let mut input = CompanyByKeywordInput::default()
                .with_company_name(&validate_filter_value("name", name)?);
            if let Some(status) = status {
                input = input.with_company_status(&validate_filter_value("status", status)?);
            }
            input.skip = *skip;
            input.top = *top;

            if ctx.raw {
                return ctx.print_raw(Endpoint::CompanyByKeyword, &input).await;
            }
            let resp = ctx
                .client
                .search_companies_by_keyword(&ctx.cancel, &input)
                .await?;
            eprintln!("{} companies matched", resp.data.len());
            print_keyword_matches(&resp.data, &ctx.format)?;
        }
        CompanyCommand::ByResponsible { name, skip, top } => {
            let mut input = CompanyByResponsibleNameInput::default()
                .with_responsible_name(&validate_filter_value("name", name)?);
            input.skip = *skip;
            input.top = *top;

            if ctx.raw {
                return ctx.print_raw(Endpoint::CompanyByResponsibleName, &input).await;
            }
            let resp = ctx
                .client
                .search_companies_by_responsible_name(&ctx.cancel, &input)
                .await?;
            eprintln!("{} companies matched", resp.data.len());
            print_company_names(&resp.data, &ctx.format)?;
        }
    }

    Ok(())
}
