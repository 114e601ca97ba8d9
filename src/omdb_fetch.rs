use anyhow::Error;
use clap::Parser;
use stack_string::{format_sstr, StackString};
use stdout_channel::StdoutChannel;

use omdb_fetch::{config::Config, omdb_utils::OmdbConnection};

#[derive(Parser, Debug)]
/// Query the OMDb movie database
struct OmdbFetchOpts {
    /// Print parsed movie fields instead of the raw json response
    #[clap(long, short)]
    parse: bool,

    /// Movie title
    #[clap(default_value = "Over the Hedge")]
    title: StackString,
}

async fn omdb_fetch() -> Result<(), Error> {
    let opts = OmdbFetchOpts::parse();
    let config = Config::with_config()?;
    let stdout: StdoutChannel<StackString> = StdoutChannel::new();
    let conn = OmdbConnection::new(config);

    if opts.parse {
        let movie = conn.find_movie(&opts.title).await?;
        stdout.send(format_sstr!("{movie}"));
    } else {
        let result = conn.search_title(&opts.title).await?;
        stdout.send(format_sstr!("{result}"));
    }

    stdout.close().await.map_err(Into::into)
}

#[tokio::main]
async fn main() {
    env_logger::init();

    match omdb_fetch().await {
        Ok(()) => (),
        Err(e) => {
            if e.to_string().contains("Broken pipe") {
            } else {
                panic!("{}", e)
            }
        }
    }
}
