//! Sleeve Site
//!
//! Public pages of the Sleeve catalog site: the per-tenant album catalog,
//! the filterable blog index, single post pages, and the subscribe and
//! inquiry forms. Everything reads the hosted data API anonymously; the
//! service's row rules keep private rows private.
//!
//! # Features
//!
//! - **Tenant Catalog**: hostname rules pick whose albums a deployment
//!   shows; tracks open per album into a modal
//! - **Blog Filters**: category, tag, and debounced text search with
//!   sequence-checked fetches, so a slow response never wins over a new one
//! - **Cards**: pure render functions producing the fragments the page
//!   shells inject
//!
//! # Example
//!
//! ```rust,ignore
//! use sleeve_client::SleeveClient;
//! use sleeve_site::{CatalogPage, SiteConfig};
//!
//! let config = SiteConfig::load()?;
//! config.validate()?;
//! let client = SleeveClient::new(config.service_config())?;
//!
//! let mut catalog = CatalogPage::for_host(&config, hostname);
//! catalog.load(&client).await?;
//! ```

#![forbid(unsafe_code)]

mod blog;
mod catalog;
mod config;
mod error;
mod forms;
mod post;
pub mod render;

// Public exports
pub use blog::{BlogPage, FetchPlan, PageEvent, DEFAULT_DEBOUNCE_MS, DEFAULT_PAGE_SIZE};
pub use catalog::{CatalogPage, TracksModal};
pub use config::{BlogSettings, ServiceSettings, SiteConfig, TenantRule};
pub use error::{Result, SiteError};
pub use forms::{InquiryForm, SubmitOutcome, SubscribeForm};
pub use post::{PostBody, PostPage};
