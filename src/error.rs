use failure::Fail;

/// Errors reported at the url state boundary.
#[derive(Debug, Fail)]
pub enum HuginnError {
    #[fail(display = "unable to encode ui state: {}", _0)]
    StateEncoding(String),
    #[fail(display = "invalid url query string: {}", _0)]
    StateParsing(String),
}
