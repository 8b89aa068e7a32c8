mod adapter;
mod allowed_origins;
mod config;
pub mod constants;
mod context;
mod headers;
mod layer;
mod normalized_request;
mod options;
mod policy;
mod result;
mod token_list;
mod util;

pub use adapter::OwnedRequestContext;
pub use allowed_origins::AllowedOrigins;
pub use config::{ConfigError, CorsConfig};
pub use context::RequestContext;
pub use headers::Headers;
pub use layer::{CorsLayer, CorsService};
pub use options::{CorsOptions, ValidationError};
pub use policy::CorsPolicy;
pub use result::{CorsDecision, CorsRejection, RejectionReason};
pub use token_list::TokenList;
