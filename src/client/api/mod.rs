//! API trait definitions split by protocol
//!
//! - [`GraphQlApi`] - account data through the GraphQL endpoint
//! - [`ScimApi`] - provisioning resources through the SCIM endpoints
//!
//! Command logic is written against these traits so it can run against
//! [`MondayClient`](super::MondayClient) or the in-memory mock in tests.

mod graphql;
mod scim;

pub use graphql::GraphQlApi;
pub use scim::ScimApi;
