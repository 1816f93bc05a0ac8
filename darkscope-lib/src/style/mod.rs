pub mod dark_css;
pub mod line_state;
pub mod scope_audit;
pub mod scope_class;
pub mod scope_report;
pub mod selector_scope;
