use crate::access;
use crate::body::BytesBody;
use crate::table::RedirectTable;
use hyper::body::Incoming;
use hyper::{Method, Request, Response, StatusCode};
use std::net::SocketAddr;

mod config;
mod data;

pub struct State {
    pub table: RedirectTable,
}

/// Dispatch a request: `/_config` manages the whole table, every other path
/// is a data path. Reads on data paths are public; everything else is
/// restricted to local callers.
pub async fn respond_to_request(
    (req, remote): (Request<Incoming>, SocketAddr),
    state: &State,
) -> Response<BytesBody> {
    let addr = access::real_addr(req.headers(), remote);

    if req.uri().path() == "/_config" {
        if !access::is_local(&addr) {
            return unauthorized(&req, &addr);
        }
        match *req.method() {
            Method::GET => config::get(req, &addr, state).await,
            Method::PUT => config::put(req, &addr, state).await,
            Method::DELETE => config::delete(req, &addr, state).await,
            _ => method_not_allowed(&req, &addr),
        }
    } else {
        match *req.method() {
            Method::GET => data::get(req, &addr, state).await,
            Method::PUT | Method::DELETE if !access::is_local(&addr) => unauthorized(&req, &addr),
            Method::PUT => data::put(req, &addr, state).await,
            Method::DELETE => data::delete(req, &addr, state).await,
            _ => method_not_allowed(&req, &addr),
        }
    }
}

fn unauthorized(req: &Request<Incoming>, addr: &str) -> Response<BytesBody> {
    log::warn!("{} {} {} -> [unauthorized]", addr, req.method(), req.uri());
    let mut resp = Response::new(BytesBody::empty());
    *resp.status_mut() = StatusCode::UNAUTHORIZED;
    resp
}

fn method_not_allowed(req: &Request<Incoming>, addr: &str) -> Response<BytesBody> {
    log::warn!("{} {} {} -> [method not allowed]", addr, req.method(), req.uri());
    let mut resp = Response::new(BytesBody::empty());
    *resp.status_mut() = StatusCode::METHOD_NOT_ALLOWED;
    resp
}
