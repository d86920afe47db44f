mod common;
pub use self::common::{
    Filter, Operator, Paging, Query, QueryDescriptor, DEFAULT_SKIP, DEFAULT_TOP,
};

mod company;
pub use self::company::{
    BasicInformationInput, CompanyByKeywordInput, CompanyByResponsibleNameInput,
};

mod business;
pub use self::business::BusinessBasicInformationInput;
