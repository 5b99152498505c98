use std::env;
use std::process;

use clap::Parser;
use log::{debug, error};
use tokio::io::{self, BufReader};

use poc_stats::config::Config;
use poc_stats::session;

fn init_logger(config: &Config) {
    let mut builder = pretty_env_logger::formatted_builder();
    match env::var("RUST_LOG") {
        Ok(filters) => {
            builder.parse_filters(&filters);
        }
        Err(_) => {
            builder.filter_level(config.log_level());
        }
    }
    builder.init();
}

#[tokio::main]
async fn main() {
    let config = Config::parse();
    init_logger(&config);

    let stdin = BufReader::new(io::stdin());
    match session::run(stdin, io::stdout(), &config).await {
        Ok(reported) => debug!("reported {} datasets", reported),
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    }
}
