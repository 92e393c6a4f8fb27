//! Application state shared across handlers

use crate::config::Settings;
use crate::query::Operator;
use crate::search::Search;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// Search executor
    pub search: Arc<Search>,
    /// Template renderer
    pub templates: Arc<super::Templates>,
}

impl AppState {
    /// Create new application state
    pub fn new(settings: Settings, search: Search) -> anyhow::Result<Self> {
        let settings = Arc::new(settings);
        let search = Arc::new(search);
        let templates = Arc::new(super::Templates::new()?);

        Ok(Self {
            settings,
            search,
            templates,
        })
    }

    /// Get instance name
    pub fn instance_name(&self) -> &str {
        &self.settings.general.instance_name
    }

    /// Limit used when a request does not carry one
    pub fn default_limit(&self) -> u64 {
        self.settings.search.web_limit
    }

    /// Resolve a request operator, falling back to the configured default
    pub fn operator(&self, requested: Option<&str>) -> Operator {
        Operator::parse(requested.or(Some(self.settings.search.default_operator.as_str())))
    }
}
