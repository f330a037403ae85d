use crate::body::BytesBody;
use crate::routes::State;
use headers::{ContentType, HeaderMapExt};
use http_body_util::BodyExt;
use hyper::body::Incoming;
use hyper::{Request, Response, StatusCode};

/// The whole table as a JSON document, suitable for storing as the
/// configuration file.
pub async fn get(req: Request<Incoming>, addr: &str, state: &State) -> Response<BytesBody> {
    match state.table.serialize().await {
        Ok(document) => {
            log::info!("{} GET {} -> [config, {} bytes]", addr, req.uri(), document.len());
            let mut resp = Response::new(BytesBody::from(document));
            resp.headers_mut().typed_insert(ContentType::json());
            resp
        }
        Err(e) => {
            log::error!("{} GET {} -> [encode error] {}", addr, req.uri(), e);
            let mut resp = Response::new(BytesBody::from("Error encoding JSON config\n"));
            *resp.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            resp
        }
    }
}

/// Merge the request body into the table: named entries are overwritten,
/// everything else is preserved.
pub async fn put(req: Request<Incoming>, addr: &str, state: &State) -> Response<BytesBody> {
    let (parts, body) = req.into_parts();
    let document = match body.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            log::warn!("{} PUT {} -> [body error] {}", addr, parts.uri, e);
            let mut resp = Response::new(BytesBody::empty());
            *resp.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            return resp;
        }
    };

    match state.table.load_merge(&document).await {
        Ok(count) => {
            log::info!("{} PUT {} -> [{} redirections loaded]", addr, parts.uri, count);
            Response::new(BytesBody::from("Configuration successfully loaded.\n"))
        }
        Err(e) => {
            log::warn!("{} PUT {} -> [config error] {}", addr, parts.uri, e);
            let mut resp = Response::new(BytesBody::from(format!(
                "Error decoding JSON config: {}\n",
                e
            )));
            *resp.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            resp
        }
    }
}

pub async fn delete(req: Request<Incoming>, addr: &str, state: &State) -> Response<BytesBody> {
    state.table.clear().await;
    log::info!("{} DELETE {} -> [cleared]", addr, req.uri());
    Response::new(BytesBody::empty())
}
