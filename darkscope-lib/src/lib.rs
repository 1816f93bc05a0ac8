pub mod dark_generate;
pub mod error;
pub mod style;

pub use error::ScopeError;
pub use style::dark_css::{scope, scope_with_report};
pub use style::scope_class::ScopeClass;
pub use style::scope_report::ScopeReport;
