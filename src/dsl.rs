use serde_json::{json, Map, Value};

// Builders for the query fragments the accessors compose. They all return
// plain json so that callers can combine them freely before handing the
// result to Elasticsearch.

/// Builds a `simple_query_string` clause from raw user input. We should end
/// up with something like
/// {
///     "simple_query_string": {
///         "query": "tour eiffel",
///         "fields": ["label", "name"]
///     }
/// }
/// Entries from `options` are written over the clause after the query, so an
/// explicit "query" entry takes precedence over the user input.
pub fn build_simple_query_string(query: &str, options: Map<String, Value>) -> Value {
    let mut clause = Map::new();
    clause.insert("query".to_string(), json!(query));
    clause.extend(options);
    json!({ "simple_query_string": clause })
}

/// Builds a `multi_match` clause, same layout and same precedence rules as
/// [`build_simple_query_string`]:
/// {
///     "multi_match": {
///         "query": "tour ei",
///         "type": "phrase_prefix",
///         "fields": ["label.prefix"]
///     }
/// }
pub fn build_multi_match(query: &str, options: Map<String, Value>) -> Value {
    let mut clause = Map::new();
    clause.insert("query".to_string(), json!(query));
    clause.extend(options);
    json!({ "multi_match": clause })
}

/// Combines clauses so that at least one of them must match. Null clauses
/// are dropped.
pub fn build_bool_should(queries: Vec<Value>) -> Value {
    json!({
        "bool": {
            "should": compact(queries)
        }
    })
}

/// Combines clauses so that all of them must match. Null clauses are
/// dropped.
pub fn build_bool_must(queries: Vec<Value>) -> Value {
    json!({
        "bool": {
            "must": compact(queries)
        }
    })
}

fn compact(queries: Vec<Value>) -> Vec<Value> {
    queries.into_iter().filter(|query| !query.is_null()).collect()
}
