//! Typed client for the GCIS (商工行政資料開放平臺) company and business
//! registry open-data API.
//!
//! ```no_run
//! # async fn run() -> Result<(), gcis_api::Error> {
//! use gcis_api::{BasicInformationInput, CancellationToken, Client};
//!
//! let client = Client::new();
//! let resp = client
//!     .get_company_basic_information(
//!         &CancellationToken::new(),
//!         &BasicInformationInput::new("20828393"),
//!     )
//!     .await?;
//! if let Some(company) = resp.data {
//!     println!("{}", company.company_name);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod endpoint;
mod errors;
mod query;
mod response;
pub mod transport;
pub mod types;
mod user_agent;
pub use self::client::{Client, ClientBuilder, DEFAULT_BASE_URL};
pub use self::endpoint::{Endpoint, ResultPolicy, API_PATH_PREFIX};
pub use self::errors::Error;
pub use self::query::{
    BasicInformationInput, BusinessBasicInformationInput, CompanyByKeywordInput,
    CompanyByResponsibleNameInput, Filter, Operator, Paging, Query, QueryDescriptor, DEFAULT_SKIP,
    DEFAULT_TOP,
};
pub use self::response::{Response, ResponseMeta};
pub use tokio_util::sync::CancellationToken;
