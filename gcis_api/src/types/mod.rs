mod roc_date;
pub use self::roc_date::parse_roc_date;

mod company;
pub use self::company::{
    BusinessItem, CompanyBasicInformation, CompanyBasicInformationAndBusiness, CompanyByKeyword,
    CompanyByResponsibleName,
};

mod business;
pub use self::business::{BusinessBasicInformation, BusinessBasicInformationAndBusiness};

use serde::{Deserialize, Deserializer};

/// Decodes an explicit `null` as the field's default; upstream serves `null`
/// for unset columns in some records.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
