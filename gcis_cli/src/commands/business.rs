use anyhow::Result;
use clap::{Args, Subcommand};
use gcis_api::{BusinessBasicInformationInput, Endpoint};

use super::{validate_accounting_no, validate_filter_value, Context};
use crate::output::{print_business_items, print_businesses, print_json, OutputFormat};

#[derive(Args)]
pub struct BusinessArgs {
    #[command(subcommand)]
    pub command: BusinessCommand,
}

#[derive(Args)]
pub struct BusinessKey {
    /// Unified business number (統一編號)
    #[arg(long)]
    pub president_no: String,

    /// Registering agency code, e.g. 376610000A
    #[arg(long)]
    pub agency: String,
}

impl BusinessKey {
    fn to_input(&self) -> Result<BusinessBasicInformationInput> {
        Ok(BusinessBasicInformationInput::new(
            &validate_accounting_no(&self.president_no)?,
            &validate_filter_value("agency", &self.agency)?,
        ))
    }
}

#[derive(Subcommand)]
pub enum BusinessCommand {
    /// Basic registration record
    Info(BusinessKey),
    /// Registered business items (營業項目)
    Items(BusinessKey),
}

pub async fn run(args: &BusinessArgs, ctx: &Context) -> Result<()> {
    match &args.command {
        BusinessCommand::Info(key) => {
            let input = key.to_input()?;
            if ctx.raw {
                return ctx.print_raw(Endpoint::BusinessBasicInformation, &input).await;
            }
            let resp = ctx
                .client
                .get_business_basic_information(&ctx.cancel, &input)
                .await?;
            match resp.data {
                Some(business) => print_businesses(&[business], &ctx.format)?,
                None => eprintln!(
                    "No business registered under {} at {}",
                    input.president_no, input.agency
                ),
            }
        }
        BusinessCommand::Items(key) => {
            let input = key.to_input()?;
            if ctx.raw {
                return ctx
                    .print_raw(Endpoint::BusinessBasicInformationAndBusiness, &input)
                    .await;
            }
            let resp = ctx
                .client
                .get_business_basic_information_and_business(&ctx.cancel, &input)
                .await?;
            match resp.data {
                Some(business) => match ctx.format {
                    OutputFormat::Json => print_json(&business),
                    _ => {
                        eprintln!(
                            "{} {} ({})",
                            business.president_no,
                            business.business_name,
                            business.business_current_status_desc
                        );
                        print_business_items(&business.business_item_old, &ctx.format)?;
                    }
                },
                None => eprintln!(
                    "No business registered under {} at {}",
                    input.president_no, input.agency
                ),
            }
        }
    }

    Ok(())
}
