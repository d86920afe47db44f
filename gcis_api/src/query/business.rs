use crate::endpoint::Endpoint;

use super::{
    common::{Operator, QueryDescriptor},
    Query,
};

/// Lookup of one registered business (商業) by number and registering agency.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BusinessBasicInformationInput {
    pub president_no: String,
    /// Agency code, e.g. `376610000A` for 臺南市政府.
    pub agency: String,
}

impl BusinessBasicInformationInput {
    pub fn new(president_no: &str, agency: &str) -> Self {
        Self {
            president_no: president_no.to_string(),
            agency: agency.to_string(),
        }
    }
}

impl Query for BusinessBasicInformationInput {
    const ENDPOINTS: &'static [Endpoint] = &[
        Endpoint::BusinessBasicInformation,
        Endpoint::BusinessBasicInformationAndBusiness,
    ];

    fn add_to_descriptor(&self, descriptor: QueryDescriptor) -> QueryDescriptor {
        descriptor
            .with_filter("President_No", Operator::Eq, &self.president_no)
            .with_filter("Agency", Operator::Eq, &self.agency)
    }
}

#[cfg(test)]
mod tests {
    use crate::{endpoint::Endpoint, query::BusinessBasicInformationInput, query::Query};

    #[test]
    fn test_business_query() {
        let descriptor = BusinessBasicInformationInput::new("26459190", "376610000A")
            .descriptor(Endpoint::BusinessBasicInformationAndBusiness);
        assert!(descriptor.paging().is_none());
        insta::assert_snapshot!(
            descriptor.to_path(),
            @"od/data/api/F570BC9A-DA4C-4813-8087-FB9CE95F9D38?$format=json&$filter=President_No%20eq%2026459190%20and%20Agency%20eq%20376610000A"
        );

        insta::assert_snapshot!(
            BusinessBasicInformationInput::new("", "376610000A")
                .descriptor(Endpoint::BusinessBasicInformation)
                .to_path(),
            @"od/data/api/7E6AFA72-AD6A-46D3-8681-ED77951D912D?$format=json&$filter=Agency%20eq%20376610000A"
        );
    }
}
