// Affiliate module: link rewriting and the partner table it reads from.

pub mod link;
pub mod partners;
pub mod query;

pub use link::{parse_affiliate_data, rewrite_url};
pub use partners::{PARTNERS, PartnerSpec, partner_spec};
pub use query::{QueryParamMap, extract_host, parse_query_params};
