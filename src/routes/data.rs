use crate::body::BytesBody;
use crate::routes::State;
use http_body_util::BodyExt;
use hyper::body::Incoming;
use hyper::header::{HeaderValue, LOCATION};
use hyper::{Request, Response, StatusCode};

pub async fn get(req: Request<Incoming>, addr: &str, state: &State) -> Response<BytesBody> {
    let path = req.uri().path();
    match state.table.lookup(path).await {
        Some(destination) => match HeaderValue::from_str(&destination) {
            Ok(location) => {
                log::info!("{} GET {} -> [redirect] {}", addr, path, destination);
                let mut resp = Response::new(BytesBody::empty());
                *resp.status_mut() = state.table.code();
                resp.headers_mut().insert(LOCATION, location);
                resp
            }
            // the table stores anything; a destination that can't be a
            // header value only fails here, at redirect time
            Err(e) => {
                log::error!("{} GET {} -> [bad destination] {}", addr, path, e);
                let mut resp = Response::new(BytesBody::empty());
                *resp.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
                resp
            }
        },
        None => {
            log::info!("{} GET {} -> [not found]", addr, path);
            let mut resp = Response::new(BytesBody::empty());
            *resp.status_mut() = StatusCode::NOT_FOUND;
            resp
        }
    }
}

/// The raw request body becomes the destination for the request's path.
pub async fn put(req: Request<Incoming>, addr: &str, state: &State) -> Response<BytesBody> {
    let (parts, body) = req.into_parts();
    let path = parts.uri.path();
    let destination = match body.collect().await {
        Ok(collected) => String::from_utf8_lossy(&collected.to_bytes()).into_owned(),
        Err(e) => {
            log::warn!("{} PUT {} -> [body error] {}", addr, path, e);
            let mut resp = Response::new(BytesBody::empty());
            *resp.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            return resp;
        }
    };

    log::info!("{} PUT {} -> [added] {}", addr, path, destination);
    state.table.put(path.to_string(), destination).await;
    Response::new(BytesBody::empty())
}

pub async fn delete(req: Request<Incoming>, addr: &str, state: &State) -> Response<BytesBody> {
    let path = req.uri().path();
    match state.table.delete(path).await {
        Some(destination) => log::info!("{} DELETE {} -> [removed] {}", addr, path, destination),
        None => log::info!("{} DELETE {} -> [not found]", addr, path),
    }
    // removing an absent redirection is a no-op, not an error
    Response::new(BytesBody::empty())
}
