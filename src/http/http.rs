use std::fs::File;
use std::future::Future;
use std::io::BufReader;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use actix_web::cookie::time::OffsetDateTime;
use actix_web::cookie::{Cookie, SameSite};
use actix_web::dev::ServerHandle;
use actix_web::http::header::{ContentType, AUTHORIZATION, LOCATION, USER_AGENT};
use actix_web::middleware::Compress;
use actix_web::web::{Data, ServiceConfig};
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer, ResponseError};
use base64::prelude::*;
use log::{debug, info};
use crate::common::structs::custom_error::CustomError;
use crate::config::structs::tracking_config::TrackingConfig;
use crate::http::errors::BoardError;
use crate::http::structs::board_service_data::BoardServiceData;
use crate::http::structs::posts_form::PostsForm;
use crate::http::structs::posts_query::PostsQuery;
use crate::posts::structs::new_post::NewPost;
use crate::render::render::{render_posts_page, DELETE_PATH, POSTS_PATH};
use crate::security::security::{validate_user_name, MAX_FORM_BODY_SIZE};
use crate::tracking::structs::tracking_outcome::TrackingOutcome;
use crate::tracking::tracking::TRACKING_COOKIE_NAME;

pub fn http_service_routes(data: Arc<BoardServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        cfg.app_data(web::FormConfig::default().limit(MAX_FORM_BODY_SIZE));
        cfg.app_data(web::PayloadConfig::new(MAX_FORM_BODY_SIZE));
        cfg.service(web::resource("/").route(web::get().to(http_service_root)));
        cfg.service(web::resource(POSTS_PATH)
            .route(web::get().to(http_service_posts_list))
            .route(web::post().to(http_service_posts_post))
            .default_service(web::to(http_service_bad_request)));
        cfg.service(web::resource(DELETE_PATH)
            .route(web::post().to(http_service_posts_delete))
            .default_service(web::to(http_service_bad_request)));
        cfg.default_service(web::route().to(http_service_not_found));
    })
}

fn http_service_load_tls(ssl_key: &str, ssl_cert: &str) -> Result<rustls::ServerConfig, CustomError>
{
    let key_file = &mut BufReader::new(File::open(ssl_key)
        .map_err(|error| CustomError::new(&format!("Unable to open SSL key {ssl_key}: {error}")))?);
    let certs_file = &mut BufReader::new(File::open(ssl_cert)
        .map_err(|error| CustomError::new(&format!("Unable to open SSL certificate {ssl_cert}: {error}")))?);

    let tls_certs = rustls_pemfile::certs(certs_file)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|error| CustomError::new(&format!("Unable to parse SSL certificate: {error}")))?;
    let tls_key = rustls_pemfile::private_key(key_file)
        .map_err(|error| CustomError::new(&format!("Unable to parse SSL key: {error}")))?
        .ok_or_else(|| CustomError::new("No private key found in SSL key file"))?;

    rustls::ServerConfig::builder()
        .with_no_client_auth()
        .with_single_cert(tls_certs, tls_key)
        .map_err(|error| CustomError::new(&format!("Invalid SSL key or certificate: {error}")))
}

pub async fn http_service(
    addr: SocketAddr,
    data: Arc<BoardServiceData>
) -> Result<(ServerHandle, impl Future<Output=Result<(), std::io::Error>>), CustomError>
{
    let http_server_config = data.http_server_config.clone();
    let app_data = data.clone();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(sentry_actix::Sentry::new())
            .wrap(Compress::default())
            .configure(http_service_routes(app_data.clone()))
    })
        .keep_alive(Duration::from_secs(http_server_config.keep_alive))
        .client_request_timeout(Duration::from_secs(http_server_config.request_timeout))
        .client_disconnect_timeout(Duration::from_secs(http_server_config.disconnect_timeout))
        .max_connections(http_server_config.max_connections as usize)
        .workers(http_server_config.threads as usize);

    let bound = if http_server_config.ssl {
        info!("[HTTP] Starting server listener with SSL on {}", addr);
        let tls_config = http_service_load_tls(&http_server_config.ssl_key, &http_server_config.ssl_cert)?;
        server
            .max_connection_rate(http_server_config.tls_connection_rate as usize)
            .bind_rustls_0_23((addr.ip(), addr.port()), tls_config)
    } else {
        info!("[HTTP] Starting server listener on {}", addr);
        server.bind((addr.ip(), addr.port()))
    };
    let server = bound
        .map_err(|error| CustomError::new(&format!("Unable to bind to {addr}: {error}")))?
        .disable_signals()
        .run();

    Ok((server.handle(), server))
}

pub async fn http_service_root() -> HttpResponse
{
    http_service_redirect_posts()
}

pub async fn http_service_posts_list(request: HttpRequest, data: Data<Arc<BoardServiceData>>) -> Result<HttpResponse, BoardError>
{
    let user_name = http_service_resolve_user(&request, &data)?;
    let outcome = http_service_ensure_tracking(&request, &data, &user_name)?;
    let result = http_service_posts_list_page(&request, &data, &user_name, &outcome).await;
    http_service_respond_with_tracking(result, &outcome, &data.config.tracking)
}

async fn http_service_posts_list_page(request: &HttpRequest, data: &BoardServiceData, user_name: &str, outcome: &TrackingOutcome) -> Result<HttpResponse, BoardError>
{
    let posts = data.database.list_posts().await?;
    let html = render_posts_page(&posts, user_name, &data.config.board);

    info!(
        "[POSTS] Viewed user: {}, tracking_id: {}, ip: {}, user_agent: {}",
        user_name,
        outcome.tracking_id,
        http_service_remote_ip_label(request, data),
        http_service_user_agent(request)
    );

    Ok(HttpResponse::Ok().content_type(ContentType::html()).body(html))
}

/// `POST /posts` creates a post, or deletes one when `?delete=1` is given.
pub async fn http_service_posts_post(
    request: HttpRequest,
    query: web::Query<PostsQuery>,
    form: web::Form<PostsForm>,
    data: Data<Arc<BoardServiceData>>
) -> Result<HttpResponse, BoardError>
{
    if query.is_delete() {
        return http_service_posts_delete(request, form, data).await;
    }

    let user_name = http_service_resolve_user(&request, &data)?;
    let outcome = http_service_ensure_tracking(&request, &data, &user_name)?;
    let result = http_service_posts_create(&request, &form, &data, &user_name, &outcome).await;
    http_service_respond_with_tracking(result, &outcome, &data.config.tracking)
}

async fn http_service_posts_create(
    request: &HttpRequest,
    form: &PostsForm,
    data: &BoardServiceData,
    user_name: &str,
    outcome: &TrackingOutcome
) -> Result<HttpResponse, BoardError>
{
    let Some(content) = form.content() else {
        debug!("[POSTS] Ignoring empty post from user: {}", user_name);
        return Ok(http_service_redirect_posts());
    };

    let max_content_length = data.config.board.max_content_length;
    if content.chars().count() > max_content_length {
        return Err(BoardError::BadRequest(format!(
            "content exceeds {max_content_length} characters"
        )));
    }
    let post = data.database.create_post(NewPost {
        content: content.to_string(),
        tracking_cookie: outcome.tracking_id.clone(),
        posted_by: user_name.to_string(),
    }).await?;
    info!(
        "[POSTS] Created id: {}, user: {}, tracking_id: {}, ip: {}",
        post.id,
        user_name,
        outcome.tracking_id,
        http_service_remote_ip_label(request, data)
    );

    Ok(http_service_redirect_posts())
}

pub async fn http_service_posts_delete(
    request: HttpRequest,
    form: web::Form<PostsForm>,
    data: Data<Arc<BoardServiceData>>
) -> Result<HttpResponse, BoardError>
{
    let user_name = http_service_resolve_user(&request, &data)?;
    let outcome = http_service_ensure_tracking(&request, &data, &user_name)?;
    let result = http_service_posts_remove(&request, &form, &data, &user_name).await;
    http_service_respond_with_tracking(result, &outcome, &data.config.tracking)
}

async fn http_service_posts_remove(request: &HttpRequest, form: &PostsForm, data: &BoardServiceData, user_name: &str) -> Result<HttpResponse, BoardError>
{
    let id = form.post_id()?;
    let post = data.database.find_post(id).await?.ok_or(BoardError::NotFound)?;
    if !post.is_deletable_by(user_name, &data.config.board.admin_user) {
        return Err(BoardError::Forbidden);
    }
    if !data.database.delete_post(id).await? {
        return Err(BoardError::NotFound);
    }

    info!(
        "[POSTS] Deleted id: {}, user: {}, ip: {}, user_agent: {}",
        id,
        user_name,
        http_service_remote_ip_label(request, data),
        http_service_user_agent(request)
    );

    Ok(http_service_redirect_posts())
}

pub async fn http_service_bad_request() -> Result<HttpResponse, BoardError>
{
    Err(BoardError::BadRequest(String::from("method not supported")))
}

pub async fn http_service_not_found() -> HttpResponse
{
    HttpResponse::NotFound()
        .content_type(ContentType::plaintext())
        .body("not found")
}

fn http_service_redirect_posts() -> HttpResponse
{
    HttpResponse::SeeOther().insert_header((LOCATION, POSTS_PATH)).finish()
}

/// User name from the trusted proxy header, then HTTP Basic credentials,
/// otherwise anonymous (empty).
pub fn http_service_resolve_user(request: &HttpRequest, data: &BoardServiceData) -> Result<String, BoardError>
{
    let user_header = &data.http_server_config.user_header;
    let from_header = match request.headers().get(user_header.as_str()) {
        Some(value) if !user_header.is_empty() => {
            let value = std::str::from_utf8(value.as_bytes())
                .map_err(|_| BoardError::BadRequest(format!("{user_header} is not valid UTF-8")))?
                .trim();
            (!value.is_empty()).then(|| value.to_string())
        }
        _ => None,
    };

    let user_name = match from_header {
        Some(user_name) => user_name,
        None => request.headers().get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(http_service_basic_auth_user)
            .unwrap_or_default(),
    };

    validate_user_name(&user_name).map_err(|error| BoardError::BadRequest(error.to_string()))?;
    Ok(user_name)
}

/// User part of an HTTP Basic `Authorization` header value.
pub fn http_service_basic_auth_user(authorization: &str) -> Option<String>
{
    let (scheme, credentials) = authorization.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }
    let decoded = BASE64_STANDARD.decode(credentials.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let user_name = match decoded.split_once(':') {
        Some((user_name, _)) => user_name,
        None => decoded.as_str(),
    };
    match user_name.is_empty() {
        true => None,
        false => Some(user_name.to_string()),
    }
}

fn http_service_ensure_tracking(request: &HttpRequest, data: &BoardServiceData, user_name: &str) -> Result<TrackingOutcome, BoardError>
{
    let presented = request.cookie(TRACKING_COOKIE_NAME);
    let outcome = data.tracking.ensure_tracking_id(presented.as_ref().map(|cookie| cookie.value()), user_name)?;
    if outcome.should_set_cookie {
        debug!("[TRACKING] Issued tracking_id: {} for user: {}", outcome.tracking_id, user_name);
    }
    Ok(outcome)
}

pub fn http_service_tracking_cookie(outcome: &TrackingOutcome, config: &TrackingConfig) -> Result<Option<Cookie<'static>>, BoardError>
{
    if !outcome.should_set_cookie {
        return Ok(None);
    }
    let mut cookie = Cookie::build(TRACKING_COOKIE_NAME, outcome.tracking_id.as_str().to_string())
        .path("/")
        .http_only(config.cookie_http_only)
        .secure(config.cookie_secure)
        .same_site(SameSite::Lax)
        .finish();
    if let Some(expires) = outcome.expires {
        let expires = OffsetDateTime::from_unix_timestamp(expires.timestamp())
            .map_err(|error| BoardError::Cookie(error.to_string()))?;
        cookie.set_expires(expires);
    }
    Ok(Some(cookie))
}

/// Turns a handler result into a response and writes a freshly issued
/// identifier on it, error responses included.
fn http_service_respond_with_tracking(result: Result<HttpResponse, BoardError>, outcome: &TrackingOutcome, config: &TrackingConfig) -> Result<HttpResponse, BoardError>
{
    let mut response = result.unwrap_or_else(|error| error.error_response());
    if let Some(cookie) = http_service_tracking_cookie(outcome, config)? {
        response.add_cookie(&cookie)
            .map_err(|error| BoardError::Cookie(error.to_string()))?;
    }
    Ok(response)
}

pub fn http_service_retrieve_remote_ip(request: &HttpRequest, real_ip: &str) -> Option<IpAddr>
{
    if !real_ip.is_empty() {
        if let Some(header) = request.headers().get(real_ip) {
            return header.to_str().ok().and_then(|value| IpAddr::from_str(value.trim()).ok());
        }
    }
    request.peer_addr().map(|addr| addr.ip())
}

fn http_service_remote_ip_label(request: &HttpRequest, data: &BoardServiceData) -> String
{
    match http_service_retrieve_remote_ip(request, &data.http_server_config.real_ip) {
        Some(ip) => ip.to_string(),
        None => String::from("unknown"),
    }
}

fn http_service_user_agent(request: &HttpRequest) -> &str
{
    request.headers().get(USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
}
