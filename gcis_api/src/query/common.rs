//! Shared query infrastructure: the [`Query`] trait, [`QueryDescriptor`] and filter clauses.

use std::fmt;

use crate::endpoint::Endpoint;

/// Rows skipped when the caller does not say otherwise.
pub const DEFAULT_SKIP: u32 = 0;
/// Page size when the caller does not say otherwise.
pub const DEFAULT_TOP: u32 = 50;

/// Trait implemented by all typed inputs. Adds the input's filter clauses
/// (and paging, for searches) to a descriptor for a given endpoint.
pub trait Query {
    /// Endpoints whose filter fields match this input.
    const ENDPOINTS: &'static [Endpoint];

    /// Appends this input's clauses to the descriptor, returning it.
    fn add_to_descriptor(&self, descriptor: QueryDescriptor) -> QueryDescriptor;

    /// Builds the complete descriptor for `endpoint`, which must be one of
    /// [`Query::ENDPOINTS`].
    fn descriptor(&self, endpoint: Endpoint) -> QueryDescriptor
    where
        Self: Sized,
    {
        debug_assert!(
            Self::ENDPOINTS.contains(&endpoint),
            "{:?} does not take this input",
            endpoint
        );
        self.add_to_descriptor(QueryDescriptor::new(endpoint))
    }
}

/// Comparison operator of one filter clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Exact match.
    Eq,
    /// Keyword (substring) match.
    Like,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operator::Eq => "eq",
            Operator::Like => "like",
        })
    }
}

/// One `<Field> <operator> <value>` condition.
///
/// The value is written verbatim. Values containing `'`, `&`, `#` or the
/// word ` and ` change the meaning of the whole `$filter`; the upstream
/// parser offers no quoting, so none is attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub field: &'static str,
    pub operator: Operator,
    pub value: String,
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.field, self.operator, self.value)
    }
}

/// `$skip`/`$top` pair with defaults already applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
    pub skip: u32,
    pub top: u32,
}

impl Paging {
    pub fn resolve(skip: Option<u32>, top: Option<u32>) -> Self {
        Self {
            skip: skip.unwrap_or(DEFAULT_SKIP),
            top: top.unwrap_or(DEFAULT_TOP),
        }
    }
}

impl Default for Paging {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}

/// Everything needed to render the relative request path of one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDescriptor {
    endpoint: Endpoint,
    filters: Vec<Filter>,
    paging: Option<Paging>,
}

impl QueryDescriptor {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            filters: Vec::new(),
            paging: None,
        }
    }

    /// Adds a clause. Empty values add nothing.
    pub fn with_filter(mut self, field: &'static str, operator: Operator, value: &str) -> Self {
        if !value.is_empty() {
            self.filters.push(Filter {
                field,
                operator,
                value: value.to_string(),
            });
        }
        self
    }

    /// Adds `$skip`/`$top`, defaulting absent values to 0 and 50.
    pub fn with_paging(mut self, skip: Option<u32>, top: Option<u32>) -> Self {
        self.paging = Some(Paging::resolve(skip, top));
        self
    }

    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn paging(&self) -> Option<Paging> {
        self.paging
    }

    /// Renders `od/data/api/<id>?$format=json[&$filter=..][&$skip=..&$top=..]`
    /// with spaces percent-encoded and nothing else escaped.
    pub fn to_path(&self) -> String {
        let mut path = format!("{}?$format=json", self.endpoint.path());
        if !self.filters.is_empty() {
            let clauses: Vec<String> = self.filters.iter().map(|f| f.to_string()).collect();
            path.push_str("&$filter=");
            path.push_str(&clauses.join(" and "));
        }
        if let Some(paging) = self.paging {
            path.push_str(&format!("&$skip={}&$top={}", paging.skip, paging.top));
        }
        path.replace(' ', "%20")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_are_joined_with_and() {
        let path = QueryDescriptor::new(Endpoint::BusinessBasicInformation)
            .with_filter("President_No", Operator::Eq, "26459190")
            .with_filter("Agency", Operator::Eq, "376610000A")
            .to_path();
        insta::assert_snapshot!(path, @"od/data/api/7E6AFA72-AD6A-46D3-8681-ED77951D912D?$format=json&$filter=President_No%20eq%2026459190%20and%20Agency%20eq%20376610000A");
    }

    #[test]
    fn no_filters_omits_filter_segment() {
        let path = QueryDescriptor::new(Endpoint::CompanyByKeyword)
            .with_paging(None, None)
            .to_path();
        insta::assert_snapshot!(path, @"od/data/api/6BBA2268-1367-4B42-9CCA-BC17499EBE8C?$format=json&$skip=0&$top=50");
    }

    #[test]
    fn empty_values_add_no_clause() {
        let descriptor = QueryDescriptor::new(Endpoint::CompanyByKeyword)
            .with_filter("Company_Name", Operator::Like, "台積電")
            .with_filter("Company_Status", Operator::Eq, "");
        assert_eq!(descriptor.filters().len(), 1);
        assert_eq!(descriptor.filters()[0].to_string(), "Company_Name like 台積電");
    }

    #[test]
    fn paging_defaults_and_passthrough() {
        assert_eq!(Paging::default(), Paging { skip: 0, top: 50 });
        assert_eq!(Paging::resolve(Some(100), Some(10)), Paging { skip: 100, top: 10 });
        assert_eq!(Paging::resolve(Some(5), None), Paging { skip: 5, top: 50 });
    }

    #[test]
    fn operator_display() {
        assert_eq!(Operator::Eq.to_string(), "eq");
        assert_eq!(Operator::Like.to_string(), "like");
    }

    #[test]
    fn every_endpoint_takes_exactly_one_input() {
        use crate::query::{
            BasicInformationInput, BusinessBasicInformationInput, CompanyByKeywordInput,
            CompanyByResponsibleNameInput,
        };

        let accepted = [
            BasicInformationInput::ENDPOINTS,
            CompanyByKeywordInput::ENDPOINTS,
            CompanyByResponsibleNameInput::ENDPOINTS,
            BusinessBasicInformationInput::ENDPOINTS,
        ];
        for endpoint in Endpoint::ALL {
            let takers = accepted.iter().filter(|e| e.contains(&endpoint)).count();
            assert_eq!(takers, 1, "{:?}", endpoint);
        }
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "does not take this input")]
    fn mismatched_endpoint_is_rejected() {
        crate::query::BasicInformationInput::new("20828393").descriptor(Endpoint::CompanyByKeyword);
    }
}
