#![allow(clippy::type_complexity)]

mod access;
mod body;
mod err;
mod http;
mod opt;
mod routes;
mod server;
mod table;

#[tokio::main]
async fn main() -> Result<(), err::DisplayError> {
    let opt::Options {
        verbose,
        host,
        port,
        config,
        code,
    } = clap::Parser::parse();

    env_logger::Builder::new()
        .filter_level(match verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        })
        .init();

    server::run(&host, port, &config, code).await?;

    Ok(())
}
