use serde::Serialize;
use serde_json::{json, Value};

use crate::dsl::build_bool_must;
use crate::state::ValueState;

/// An active constraint registered on the request. The ui displays it and
/// lets the user remove it.
#[derive(Debug, Clone, Serialize)]
pub struct SelectedFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub value: String,
    pub id: String,
    #[serde(skip_serializing)]
    state: ValueState,
}

impl SelectedFilter {
    pub fn new<V, I>(name: Option<String>, value: V, id: I, state: ValueState) -> Self
    where
        V: Into<String>,
        I: Into<String>,
    {
        SelectedFilter {
            name,
            value: value.into(),
            id: id.into(),
            state,
        }
    }

    /// Clears the state that produced this filter, so the next build pass
    /// does not reproduce the constraint.
    pub fn remove(&self) {
        self.state.clear();
    }
}

/// The search request under construction. Accessors write into it through
/// the consuming builder methods, and the Elasticsearch body is read back
/// with [`SearchRequest::body`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    query: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    query_string: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    selected_filters: Vec<SelectedFilter>,
}

impl SearchRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a query fragment to the request. A second fragment is combined
    /// with the one already in place, and both must then match. Null
    /// fragments are ignored.
    pub fn add_query(mut self, fragment: Value) -> Self {
        if fragment.is_null() {
            return self;
        }
        self.query = match self.query.take() {
            Some(current) => Some(build_bool_must(vec![current, fragment])),
            None => Some(fragment),
        };
        self
    }

    /// Sets the primary query string. This is request metadata echoed back
    /// to the ui, not a clause of the body.
    pub fn set_query_string<S: Into<String>>(mut self, query_string: S) -> Self {
        self.query_string = Some(query_string.into());
        self
    }

    pub fn add_selected_filter(mut self, filter: SelectedFilter) -> Self {
        self.selected_filters.push(filter);
        self
    }

    pub fn query(&self) -> Option<&Value> {
        self.query.as_ref()
    }

    pub fn query_string(&self) -> Option<&str> {
        self.query_string.as_deref()
    }

    pub fn selected_filters(&self) -> &[SelectedFilter] {
        &self.selected_filters
    }

    /// The Elasticsearch request body for this request.
    pub fn body(&self) -> Value {
        match &self.query {
            Some(query) => json!({ "query": query }),
            None => json!({}),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_query_combines_fragments() {
        let request = SearchRequest::new().add_query(json!({ "term": { "type": "admin" } }));
        assert_eq!(
            request.body(),
            json!({ "query": { "term": { "type": "admin" } } })
        );

        // a second fragment wraps both in a must
        let request = request.add_query(json!({ "term": { "zip_code": "75013" } }));
        assert_eq!(
            request.body(),
            json!({
                "query": {
                    "bool": {
                        "must": [
                            { "term": { "type": "admin" } },
                            { "term": { "zip_code": "75013" } }
                        ]
                    }
                }
            })
        );
    }

    #[test]
    fn test_add_query_ignores_null_fragments() {
        let request = SearchRequest::new().add_query(Value::Null);
        assert!(request.query().is_none());
        assert_eq!(request.body(), json!({}));
    }

    #[test]
    fn test_set_query_string_overwrites() {
        let request = SearchRequest::new()
            .set_query_string("tour")
            .set_query_string("tour eiffel");
        assert_eq!(request.query_string(), Some("tour eiffel"));
        // the query string is not part of the body
        assert_eq!(request.body(), json!({}));
    }

    #[test]
    fn test_selected_filters_do_not_serialize_their_state() {
        let filter = SelectedFilter::new(
            Some("Search".to_string()),
            "bastille",
            "q",
            ValueState::new(),
        );
        let request = SearchRequest::new().add_selected_filter(filter);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "selected_filters": [
                    { "name": "Search", "value": "bastille", "id": "q" }
                ]
            })
        );
    }
}
