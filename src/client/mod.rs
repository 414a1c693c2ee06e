//! monday.com API client

pub mod api;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod monday;
pub mod pagination;

pub use api::{GraphQlApi, ScimApi};
#[cfg(test)]
pub use mock::{MockCall, MockMondayClient};
pub use monday::{DEFAULT_API_URL, MondayClient, scim_url_for_domain};
pub use pagination::{ScimPageParams, fetch_all_scim};
