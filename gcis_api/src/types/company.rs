//! Company (公司) registry records.
//!
//! Field names follow the upstream schema exactly, including the one
//! lowercase field in [`BusinessItem`]. Missing and `null` fields decode to
//! defaults.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{null_as_default, roc_date::parse_roc_date};

/// Basic registration record of one company.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct CompanyBasicInformation {
    /// 統一編號.
    #[serde(rename = "Business_Accounting_NO", deserialize_with = "null_as_default")]
    pub business_accounting_no: String,

    #[serde(rename = "Company_Status_Desc", deserialize_with = "null_as_default")]
    pub company_status_desc: String,

    #[serde(rename = "Company_Name", deserialize_with = "null_as_default")]
    pub company_name: String,

    /// Authorized capital in NTD.
    #[serde(rename = "Capital_Stock_Amount", deserialize_with = "null_as_default")]
    pub capital_stock_amount: i64,

    /// Paid-in capital in NTD.
    #[serde(rename = "Paid_In_Capital_Amount", deserialize_with = "null_as_default")]
    pub paid_in_capital_amount: i64,

    #[serde(rename = "Responsible_Name", deserialize_with = "null_as_default")]
    pub responsible_name: String,

    #[serde(rename = "Company_Location", deserialize_with = "null_as_default")]
    pub company_location: String,

    #[serde(rename = "Register_Organization_Desc", deserialize_with = "null_as_default")]
    pub register_organization_desc: String,

    /// ROC date, see [`parse_roc_date`].
    #[serde(rename = "Company_Setup_Date", deserialize_with = "null_as_default")]
    pub company_setup_date: String,

    #[serde(rename = "Change_Of_Approval_Data", deserialize_with = "null_as_default")]
    pub change_of_approval_data: String,

    #[serde(rename = "Revoke_App_Date", deserialize_with = "null_as_default")]
    pub revoke_app_date: String,

    #[serde(rename = "Case_Status", deserialize_with = "null_as_default")]
    pub case_status: String,

    #[serde(rename = "Case_Status_Desc", deserialize_with = "null_as_default")]
    pub case_status_desc: String,

    #[serde(rename = "Sus_App_Date", deserialize_with = "null_as_default")]
    pub sus_app_date: String,

    #[serde(rename = "Sus_Beg_Date", deserialize_with = "null_as_default")]
    pub sus_beg_date: String,

    #[serde(rename = "Sus_End_Date", deserialize_with = "null_as_default")]
    pub sus_end_date: String,
}

impl CompanyBasicInformation {
    pub fn setup_date(&self) -> Option<NaiveDate> {
        parse_roc_date(&self.company_setup_date)
    }

    pub fn last_change_date(&self) -> Option<NaiveDate> {
        parse_roc_date(&self.change_of_approval_data)
    }

    pub fn revoke_date(&self) -> Option<NaiveDate> {
        parse_roc_date(&self.revoke_app_date)
    }
}

/// One registered line of business (營業項目).
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct BusinessItem {
    #[serde(rename = "Business_Seq_NO", deserialize_with = "null_as_default")]
    pub business_seq_no: String,

    /// Item code, e.g. `CC01110`.
    #[serde(rename = "Business_Item", deserialize_with = "null_as_default")]
    pub business_item: String,

    #[serde(rename = "business_item_desc", deserialize_with = "null_as_default")]
    pub business_item_desc: String,
}

/// Company basic record plus its registered business items.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct CompanyBasicInformationAndBusiness {
    #[serde(rename = "Business_Accounting_NO", deserialize_with = "null_as_default")]
    pub business_accounting_no: String,

    #[serde(rename = "Company_Name", deserialize_with = "null_as_default")]
    pub company_name: String,

    #[serde(rename = "Company_Status", deserialize_with = "null_as_default")]
    pub company_status: String,

    #[serde(rename = "Company_Status_Desc", deserialize_with = "null_as_default")]
    pub company_status_desc: String,

    #[serde(rename = "Company_Setup_Date", deserialize_with = "null_as_default")]
    pub company_setup_date: String,

    #[serde(rename = "Cmp_Business", deserialize_with = "null_as_default")]
    pub cmp_business: Vec<BusinessItem>,
}

impl CompanyBasicInformationAndBusiness {
    pub fn setup_date(&self) -> Option<NaiveDate> {
        parse_roc_date(&self.company_setup_date)
    }
}

/// One match of a company keyword search.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct CompanyByKeyword {
    #[serde(rename = "Business_Accounting_NO", deserialize_with = "null_as_default")]
    pub business_accounting_no: String,

    #[serde(rename = "Company_Name", deserialize_with = "null_as_default")]
    pub company_name: String,

    /// Status code; see https://data.gcis.nat.gov.tw/od/cmpStatusCodeData?type=xls
    #[serde(rename = "Company_Status", deserialize_with = "null_as_default")]
    pub company_status: String,

    #[serde(rename = "Company_Status_Desc", deserialize_with = "null_as_default")]
    pub company_status_desc: String,

    #[serde(rename = "Capital_Stock_Amount", deserialize_with = "null_as_default")]
    pub capital_stock_amount: i64,

    #[serde(rename = "Paid_In_Capital_Amount", deserialize_with = "null_as_default")]
    pub paid_in_capital_amount: i64,

    #[serde(rename = "Responsible_Name", deserialize_with = "null_as_default")]
    pub responsible_name: String,

    #[serde(rename = "Register_Organization", deserialize_with = "null_as_default")]
    pub register_organization: String,

    #[serde(rename = "Register_Organization_Desc", deserialize_with = "null_as_default")]
    pub register_organization_desc: String,

    #[serde(rename = "Company_Location", deserialize_with = "null_as_default")]
    pub company_location: String,

    #[serde(rename = "Company_Setup_Date", deserialize_with = "null_as_default")]
    pub company_setup_date: String,

    #[serde(rename = "Change_Of_Approval_Data", deserialize_with = "null_as_default")]
    pub change_of_approval_data: String,
}

impl CompanyByKeyword {
    pub fn setup_date(&self) -> Option<NaiveDate> {
        parse_roc_date(&self.company_setup_date)
    }
}

/// One match of a responsible-person search.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct CompanyByResponsibleName {
    #[serde(rename = "Business_Accounting_NO", deserialize_with = "null_as_default")]
    pub business_accounting_no: String,

    #[serde(rename = "Company_Name", deserialize_with = "null_as_default")]
    pub company_name: String,
}
