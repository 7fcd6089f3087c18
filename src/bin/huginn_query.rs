use std::path::PathBuf;
use structopt::StructOpt;

use huginn::accessors::{Accessor, QueryAccessor};
use huginn::request::SearchRequest;
use huginn::settings::Settings;
use huginn::state::UiState;
use huginn::Error;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");

#[derive(Debug, StructOpt)]
#[structopt(
    name = "huginn_query",
    about = "Prints the Elasticsearch query generated for a query string",
    version = VERSION,
    author = AUTHORS
)]
struct Args {
    /// Defines the config directory
    #[structopt(parse(from_os_str), short = "c", long = "config-dir")]
    config_dir: Option<PathBuf>,

    /// Defines the settings to load from the config directory {testing, dev, prod, ...}
    #[structopt(short = "s", long = "settings")]
    settings: Option<String>,

    /// Registers the query as a selected filter instead of the query string
    #[structopt(short = "f", long = "filter")]
    filter: bool,

    /// The query string, as typed in the search box
    query: String,
}

fn run(args: Args) -> Result<(), Error> {
    let settings = Settings::new(&args.config_dir, &args.settings)?;
    let mut options = settings.query;
    if args.filter {
        options.add_to_filters = true;
    }

    let accessor = QueryAccessor::new("q", options);
    accessor.set_query_string(args.query.as_str());

    let request = accessor.build_shared_query(SearchRequest::new());
    println!("{}", serde_json::to_string_pretty(&request.body())?);
    for filter in request.selected_filters() {
        println!("filter: {}", serde_json::to_string(filter)?);
    }

    let mut ui_state = UiState::new();
    accessor.record_state(&mut ui_state);
    println!("url state: {}", huginn::stringify_query(&ui_state)?);

    Ok(())
}

fn main() {
    huginn::utils::launch_run(run);
}
