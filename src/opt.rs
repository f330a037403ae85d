use clap::{ArgAction, Parser};
use hyper::StatusCode;
use std::path::PathBuf;
use std::str::FromStr;

/// Fallback HTTP redirect server
///
/// Answers GET requests with a redirect when the path is found in the
/// redirection table, and 404 otherwise. The table can be edited at runtime
/// by local callers: PUT/DELETE on a path edit one redirection, and
/// GET/PUT/DELETE on /_config read, merge, or clear the whole table.
#[derive(Parser, Debug)]
#[clap(version, about)]
pub struct Options {
    /// Logging verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Host to listen on
    #[arg(long, default_value = "localhost")]
    pub host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 4404)]
    pub port: u16,

    #[arg(
        help = "JSON configuration file specifying the redirections (--help for more)",
        long_help = r#"JSON configuration file specifying the redirections:
    - read once at startup; an unreadable file or invalid JSON is fatal
    - runtime changes are not written back
Format:
    {
      "redirections": {
        "/source": "/destination",
        "/another source": "/another destination"
      }
    }"#
    )]
    #[arg(long, default_value = "config.json")]
    pub config: PathBuf,

    /// Redirection status code sent to clients
    #[arg(long, default_value = "302", value_parser = redirect_code)]
    pub code: StatusCode,
}

fn redirect_code(arg: &str) -> Result<StatusCode, String> {
    let code = StatusCode::from_str(arg).map_err(|e| e.to_string())?;
    if code.is_redirection() {
        Ok(code)
    } else {
        Err(format!("{} is not a redirection status code", code))
    }
}
