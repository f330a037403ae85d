use crate::err::Error;
use crate::http::run_server;
use crate::routes::{respond_to_request, State};
use crate::table::RedirectTable;
use hyper::StatusCode;
use std::path::Path;
use tokio::net::TcpListener;

pub async fn run(host: &str, port: u16, config: &Path, code: StatusCode) -> Result<(), Error> {
    let table = RedirectTable::new(code);
    let loaded = table.load_file(config).await?;
    log::info!("{}: {} redirections loaded", config.display(), loaded);

    log::info!("Binding to: {}:{}", host, port);
    let listener = TcpListener::bind((host, port)).await?;

    run_server(listener, State { table }, respond_to_request).await?;

    Ok(())
}
