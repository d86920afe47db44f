//! Business (商業, sole proprietorships and partnerships) registry records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{company::BusinessItem, null_as_default, roc_date::parse_roc_date};

/// Basic registration record of one business.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct BusinessBasicInformation {
    #[serde(rename = "President_No", deserialize_with = "null_as_default")]
    pub president_no: String,

    #[serde(rename = "Business_Name", deserialize_with = "null_as_default")]
    pub business_name: String,

    #[serde(rename = "Business_Current_Status", deserialize_with = "null_as_default")]
    pub business_current_status: String,

    #[serde(rename = "Business_Current_Status_Desc", deserialize_with = "null_as_default")]
    pub business_current_status_desc: String,

    /// Registered funds in NTD.
    #[serde(rename = "Business_Register_Funds", deserialize_with = "null_as_default")]
    pub business_register_funds: i64,

    // Documented lowercase; the live API has also served it capitalized.
    #[serde(rename = "responsible_name", alias = "Responsible_Name", deserialize_with = "null_as_default")]
    pub responsible_name: String,

    #[serde(rename = "Business_Organization_Type", deserialize_with = "null_as_default")]
    pub business_organization_type: String,

    #[serde(rename = "Business_Organization_Type_Desc", deserialize_with = "null_as_default")]
    pub business_organization_type_desc: String,

    #[serde(rename = "Agency", deserialize_with = "null_as_default")]
    pub agency: String,

    #[serde(rename = "Agency_Desc", deserialize_with = "null_as_default")]
    pub agency_desc: String,

    #[serde(rename = "Business_Address", deserialize_with = "null_as_default")]
    pub business_address: String,

    #[serde(rename = "Business_Setup_Approve_Date", deserialize_with = "null_as_default")]
    pub business_setup_approve_date: String,

    #[serde(rename = "Business_Last_Change_Date", deserialize_with = "null_as_default")]
    pub business_last_change_date: String,
}

impl BusinessBasicInformation {
    pub fn setup_date(&self) -> Option<NaiveDate> {
        parse_roc_date(&self.business_setup_approve_date)
    }

    pub fn last_change_date(&self) -> Option<NaiveDate> {
        parse_roc_date(&self.business_last_change_date)
    }
}

/// Business basic record plus its registered business items.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct BusinessBasicInformationAndBusiness {
    #[serde(rename = "President_No", deserialize_with = "null_as_default")]
    pub president_no: String,

    #[serde(rename = "Business_Name", deserialize_with = "null_as_default")]
    pub business_name: String,

    #[serde(rename = "Business_Current_Status", deserialize_with = "null_as_default")]
    pub business_current_status: String,

    #[serde(rename = "Business_Current_Status_Desc", deserialize_with = "null_as_default")]
    pub business_current_status_desc: String,

    #[serde(rename = "Agency", deserialize_with = "null_as_default")]
    pub agency: String,

    #[serde(rename = "Agency_Desc", deserialize_with = "null_as_default")]
    pub agency_desc: String,

    #[serde(rename = "Business_Setup_Approve_Date", deserialize_with = "null_as_default")]
    pub business_setup_approve_date: String,

    #[serde(rename = "Business_Item_Old", deserialize_with = "null_as_default")]
    pub business_item_old: Vec<BusinessItem>,
}

impl BusinessBasicInformationAndBusiness {
    pub fn setup_date(&self) -> Option<NaiveDate> {
        parse_roc_date(&self.business_setup_approve_date)
    }
}
