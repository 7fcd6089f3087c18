use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use slog_scope::debug;

use super::Accessor;
use crate::dsl::{build_bool_should, build_multi_match, build_simple_query_string};
use crate::request::{SearchRequest, SelectedFilter};
use crate::state::{UiState, ValueState};

lazy_static! {
    static ref DEFAULT_QUERY_FIELDS: Vec<String> = vec!["_all".to_string()];
}

fn default_query_fields() -> Vec<String> {
    DEFAULT_QUERY_FIELDS.clone()
}

/// Replacement for the clause builder used on the query string, see
/// [`SearchOptions::query_builder`].
pub type QueryBuilderFn = fn(&str, Map<String, Value>) -> Value;

/// Configuration of a [`QueryAccessor`].
///
/// The option maps are free-form entries copied into the generated clauses
/// (operators, boosts, analyzers, ...). They are kept untyped so that a new
/// Elasticsearch option does not require a new release.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Document fields targeted by the main clause.
    #[serde(default = "default_query_fields")]
    pub query_fields: Vec<String>,
    /// Extra entries for the main clause. May override `fields`.
    #[serde(default)]
    pub query_options: Map<String, Value>,
    /// Fields targeted by an extra phrase prefix clause. The clause is only
    /// generated when this is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix_query_fields: Option<Vec<String>>,
    /// Extra entries for the prefix clause. `type` and `fields` are imposed.
    #[serde(default)]
    pub prefix_query_options: Map<String, Value>,
    /// Display name recorded on the selected filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Registers the query as a removable filter instead of setting the
    /// request query string.
    #[serde(default)]
    pub add_to_filters: bool,
    /// Replaces [`build_simple_query_string`] for the main clause.
    #[serde(skip)]
    pub query_builder: Option<QueryBuilderFn>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            query_fields: default_query_fields(),
            query_options: Map::new(),
            prefix_query_fields: None,
            prefix_query_options: Map::new(),
            title: None,
            add_to_filters: false,
            query_builder: None,
        }
    }
}

/// Translates the query string typed by the user into clauses on the shared
/// search request.
pub struct QueryAccessor {
    key: String,
    state: ValueState,
    options: SearchOptions,
    on_change: Option<Box<dyn Fn()>>,
}

impl QueryAccessor {
    pub fn new<K: Into<String>>(key: K, options: SearchOptions) -> Self {
        QueryAccessor {
            key: key.into(),
            state: ValueState::new(),
            options,
            on_change: None,
        }
    }

    /// Registers a hook fired when [`Accessor::apply_state`] changes the
    /// value.
    pub fn with_on_change<F: Fn() + 'static>(mut self, on_change: F) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Handle on the underlying state, shared with the filters created by
    /// this accessor.
    pub fn state(&self) -> ValueState {
        self.state.clone()
    }

    pub fn set_query_string<S: Into<String>>(&self, query_string: S) {
        self.state.set_value(query_string);
    }

    pub fn query_string(&self) -> Option<String> {
        self.state.get_value()
    }

    // Options for the main clause: the configured fields first, then the
    // free-form entries, which may override them.
    fn simple_query_options(&self) -> Map<String, Value> {
        let mut options = Map::new();
        options.insert("fields".to_string(), json!(self.options.query_fields));
        options.extend(self.options.query_options.clone());
        options
    }

    // Options for the prefix clause: here the free-form entries come first,
    // the match type and the fields always win.
    fn prefix_query_options(&self, fields: &[String]) -> Map<String, Value> {
        let mut options = self.options.prefix_query_options.clone();
        options.insert("type".to_string(), json!("phrase_prefix"));
        options.insert("fields".to_string(), json!(fields));
        options
    }
}

impl Accessor for QueryAccessor {
    fn key(&self) -> &str {
        &self.key
    }

    fn build_shared_query(&self, request: SearchRequest) -> SearchRequest {
        let query_string = match self.state.get_value() {
            Some(query_string) => query_string,
            None => return request,
        };

        let query_builder = self
            .options
            .query_builder
            .unwrap_or(build_simple_query_string);
        let mut queries = vec![query_builder(&query_string, self.simple_query_options())];
        if let Some(fields) = &self.options.prefix_query_fields {
            queries.push(build_multi_match(
                &query_string,
                self.prefix_query_options(fields),
            ));
        }
        let request = request.add_query(build_bool_should(queries));

        if self.options.add_to_filters {
            request.add_selected_filter(SelectedFilter::new(
                self.options.title.clone(),
                query_string,
                self.key.clone(),
                self.state.clone(),
            ))
        } else {
            request.set_query_string(query_string)
        }
    }

    fn apply_state(&mut self, state: &UiState) {
        let old = self.state.get_value();
        match state.get(&self.key) {
            Some(value) => self.state.set_value(value.clone()),
            None => self.state.clear(),
        }
        if old != self.state.get_value() {
            debug!("query accessor {} state changed", self.key);
            if let Some(on_change) = &self.on_change {
                on_change();
            }
        }
    }

    fn record_state(&self, state: &mut UiState) {
        match self.state.get_value() {
            Some(value) => {
                state.insert(self.key.clone(), value);
            }
            None => {
                state.remove(&self.key);
            }
        }
    }
}
