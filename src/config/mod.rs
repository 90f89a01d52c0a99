//! Configuration module

mod site;

pub use site::Author;
pub use site::BlogConfig;
pub use site::HighlightConfig;
pub use site::NavItem;
pub use site::PagesConfig;
pub use site::SiteConfig;
pub use site::SiteMetadata;
pub use site::SlugConfig;
pub use site::Social;
pub use site::SourceConfig;
