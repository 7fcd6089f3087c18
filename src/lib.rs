//! Accessors turn the state of a search ui (the text of the search box, the
//! active filters) into an Elasticsearch request, and serialize that state
//! to and from the browser url so searches can be shared and replayed.

pub mod accessors;
pub mod dsl;
pub mod error;
pub mod history;
pub mod logger;
pub mod request;
pub mod settings;
pub mod state;
pub mod utils;

pub use crate::accessors::{Accessor, QueryAccessor, SearchOptions};
pub use crate::error::HuginnError;
pub use crate::history::{parse_query_string, stringify_query};
pub use crate::logger::logger_init;
pub use crate::request::{SearchRequest, SelectedFilter};
pub use crate::settings::Settings;
pub use crate::state::{UiState, ValueState};

pub use failure::Error;
