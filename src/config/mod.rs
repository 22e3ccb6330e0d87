//! Configuration module

mod site;

pub use site::ListingConfig;
pub use site::ShareConfig;
pub use site::SiteConfig;
