use crate::endpoint::Endpoint;

use super::{
    common::{Operator, QueryDescriptor},
    Query,
};

/// Lookup of one company by its 統一編號 (unified business number).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BasicInformationInput {
    pub business_accounting_no: String,
}

impl BasicInformationInput {
    pub fn new(business_accounting_no: &str) -> Self {
        Self {
            business_accounting_no: business_accounting_no.to_string(),
        }
    }
}

impl Query for BasicInformationInput {
    const ENDPOINTS: &'static [Endpoint] = &[
        Endpoint::CompanyBasicInformation,
        Endpoint::CompanyBasicInformationAndBusiness,
    ];

    fn add_to_descriptor(&self, descriptor: QueryDescriptor) -> QueryDescriptor {
        descriptor.with_filter(
            "Business_Accounting_NO",
            Operator::Eq,
            &self.business_accounting_no,
        )
    }
}

/// Company search by name keyword, optionally narrowed by status code.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompanyByKeywordInput {
    pub company_name: String,
    /// Status code, e.g. `01` for 核准設立. Empty matches any status.
    pub company_status: String,
    pub skip: Option<u32>,
    pub top: Option<u32>,
}

impl Query for CompanyByKeywordInput {
    const ENDPOINTS: &'static [Endpoint] = &[Endpoint::CompanyByKeyword];

    fn add_to_descriptor(&self, descriptor: QueryDescriptor) -> QueryDescriptor {
        descriptor
            .with_filter("Company_Name", Operator::Like, &self.company_name)
            .with_filter("Company_Status", Operator::Eq, &self.company_status)
            .with_paging(self.skip, self.top)
    }
}

impl CompanyByKeywordInput {
    pub fn with_company_name(mut self, company_name: &str) -> Self {
        self.company_name = company_name.to_string();
        self
    }

    pub fn with_company_status(mut self, company_status: &str) -> Self {
        self.company_status = company_status.to_string();
        self
    }

    pub fn with_skip(mut self, skip: u32) -> Self {
        self.skip = Some(skip);
        self
    }

    pub fn with_top(mut self, top: u32) -> Self {
        self.top = Some(top);
        self
    }
}

/// Company search by the name of the responsible person.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompanyByResponsibleNameInput {
    pub responsible_name: String,
    pub skip: Option<u32>,
    pub top: Option<u32>,
}

impl Query for CompanyByResponsibleNameInput {
    const ENDPOINTS: &'static [Endpoint] = &[Endpoint::CompanyByResponsibleName];

    fn add_to_descriptor(&self, descriptor: QueryDescriptor) -> QueryDescriptor {
        descriptor
            .with_filter("Responsible_Name", Operator::Eq, &self.responsible_name)
            .with_paging(self.skip, self.top)
    }
}

impl CompanyByResponsibleNameInput {
    pub fn with_responsible_name(mut self, responsible_name: &str) -> Self {
        self.responsible_name = responsible_name.to_string();
        self
    }

    pub fn with_skip(mut self, skip: u32) -> Self {
        self.skip = Some(skip);
        self
    }

    pub fn with_top(mut self, top: u32) -> Self {
        self.top = Some(top);
        self
    }
}
