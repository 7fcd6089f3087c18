pub mod query;

pub use query::{QueryAccessor, QueryBuilderFn, SearchOptions};

use crate::request::SearchRequest;
use crate::state::UiState;

/// Behavior shared by every accessor: an accessor owns one piece of
/// ui-controlled state, identified by its key, and knows how to express that
/// state on the shared search request.
pub trait Accessor {
    /// Key under which this accessor appears in the url state.
    fn key(&self) -> &str;

    /// Expresses the accessor state on the request. Leaves the request
    /// untouched when the accessor holds no state.
    fn build_shared_query(&self, request: SearchRequest) -> SearchRequest;

    /// Loads the accessor state from a deserialized url state.
    fn apply_state(&mut self, state: &UiState);

    /// Writes the accessor state into the url state.
    fn record_state(&self, state: &mut UiState);
}
