//! HTTP access to the API under test

pub mod client;
pub mod lookup;

pub use client::ApiClient;
pub use lookup::{resolve_country_id, resolve_first_employer_id, resolve_region_id};
