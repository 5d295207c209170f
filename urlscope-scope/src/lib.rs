mod config;
mod error;
mod scope;

pub use config::{ScopeConfig, ScopeRule, ScopeRuleType};
pub use error::ScopeError;
pub use scope::{ScopeEvaluation, evaluate_scope, is_in_scope};
