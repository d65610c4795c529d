use actix_web::{
    delete, get,
    http::header::{self, ContentType},
    post, put,
    web::{self, Either, Form, Json},
    HttpResponse, Responder,
};
use log::{debug, info, warn};

use crate::{
    error::DirectoryError,
    models::{FormAction, UserForm},
    views, AppState,
};

type UserBody = Either<Json<UserForm>, Form<UserForm>>;

/// A request without a usable body carries no name and no `_method`.
fn form(input: Option<UserBody>) -> UserForm {
    input.map(|body| body.into_inner()).unwrap_or_default()
}

/// Ids that do not parse never match a user.
fn parse_id(raw: &str) -> Result<u64, DirectoryError> {
    raw.parse::<u64>()
        .map_err(|_| DirectoryError::NotFound(raw.to_owned()))
}

fn redirect_home() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/"))
        .finish()
}

fn update(state: &AppState, raw_id: &str, name: String) -> Result<HttpResponse, DirectoryError> {
    let user = state.users.update(parse_id(raw_id)?, name)?;
    debug!("Updated user {}", user.id);
    Ok(redirect_home())
}

fn delete(state: &AppState, raw_id: &str) -> Result<HttpResponse, DirectoryError> {
    let user = state.users.delete(parse_id(raw_id)?)?;
    debug!("Deleted user {}", user.id);
    Ok(redirect_home())
}

#[get("/")]
async fn index(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(views::index(&state.users.list()))
}

#[post("/users")]
async fn create_user(state: web::Data<AppState>, input: Option<UserBody>) -> impl Responder {
    let input = form(input);
    let user = state.users.create(input.name());
    debug!("Created user {}", user.id);
    redirect_home()
}

#[get("/users/{id}/edit")]
async fn edit_user(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, DirectoryError> {
    let raw_id = path.into_inner();
    info!("Requested user ID: {}", raw_id);
    let user = match parse_id(&raw_id).and_then(|id| state.users.find(id)) {
        Ok(u) => u,
        Err(why) => {
            warn!("User not found: {}", raw_id);
            return Err(why);
        }
    };

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(views::edit(&user)))
}

/// Forms can only POST, so `_method` decides between update and delete.
#[post("/users/{id}")]
async fn update_or_delete_user(
    state: web::Data<AppState>,
    path: web::Path<String>,
    input: Option<UserBody>,
) -> Result<HttpResponse, DirectoryError> {
    let input = form(input);
    match input.action() {
        FormAction::Update => update(&state, &path, input.name()),
        FormAction::Delete => delete(&state, &path),
    }
}

#[post("/users/{id}/delete")]
async fn delete_user_form(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, DirectoryError> {
    delete(&state, &path)
}

#[put("/users/{id}")]
async fn put_user(
    state: web::Data<AppState>,
    path: web::Path<String>,
    input: Option<UserBody>,
) -> Result<HttpResponse, DirectoryError> {
    update(&state, &path, form(input).name())
}

#[delete("/users/{id}")]
async fn delete_user(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, DirectoryError> {
    delete(&state, &path)
}
