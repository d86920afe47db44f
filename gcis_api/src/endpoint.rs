//! Static table of the upstream datasets this client knows about.

/// Path prefix shared by every dataset, relative to the base URL.
pub const API_PATH_PREFIX: &str = "od/data/api/";

/// How a decoded array is turned into the caller's result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultPolicy {
    /// Lookup by a unique key: zero or one record, first element wins.
    Singular,
    /// Bounded page of matches, possibly empty.
    Plural,
}

/// One upstream dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// 公司登記基本資料 by 統一編號.
    CompanyBasicInformation,
    /// 公司登記基本資料 with registered business items.
    CompanyBasicInformationAndBusiness,
    /// Company search by name keyword and status.
    CompanyByKeyword,
    /// Company search by responsible person.
    CompanyByResponsibleName,
    /// 商業登記基本資料 by 統一編號 and registering agency.
    BusinessBasicInformation,
    /// 商業登記基本資料 with registered business items.
    BusinessBasicInformationAndBusiness,
}

impl Endpoint {
    pub const ALL: [Endpoint; 6] = [
        Endpoint::CompanyBasicInformation,
        Endpoint::CompanyBasicInformationAndBusiness,
        Endpoint::CompanyByKeyword,
        Endpoint::CompanyByResponsibleName,
        Endpoint::BusinessBasicInformation,
        Endpoint::BusinessBasicInformationAndBusiness,
    ];

    const fn entry(self) -> (&'static str, ResultPolicy) {
        match self {
            Endpoint::CompanyBasicInformation => (
                "5F64D864-61CB-4D0D-8AD9-492047CC1EA6",
                ResultPolicy::Singular,
            ),
            Endpoint::CompanyBasicInformationAndBusiness => (
                "236EE382-4942-41A9-BD03-CA0709025E7C",
                ResultPolicy::Singular,
            ),
            Endpoint::CompanyByKeyword => (
                "6BBA2268-1367-4B42-9CCA-BC17499EBE8C",
                ResultPolicy::Plural,
            ),
            Endpoint::CompanyByResponsibleName => (
                "4B61A0F1-458C-43F9-93F3-9FD6DA5E1B08",
                ResultPolicy::Plural,
            ),
            Endpoint::BusinessBasicInformation => (
                "7E6AFA72-AD6A-46D3-8681-ED77951D912D",
                ResultPolicy::Singular,
            ),
            Endpoint::BusinessBasicInformationAndBusiness => (
                "F570BC9A-DA4C-4813-8087-FB9CE95F9D38",
                ResultPolicy::Singular,
            ),
        }
    }

    /// The stable dataset identifier used as the last path segment.
    pub const fn resource_id(self) -> &'static str {
        self.entry().0
    }

    pub const fn policy(self) -> ResultPolicy {
        self.entry().1
    }

    /// Path of this dataset relative to the base URL, without a query string.
    pub fn path(self) -> String {
        format!("{}{}", API_PATH_PREFIX, self.resource_id())
    }
}
