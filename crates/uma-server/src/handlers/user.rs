//! User CRUD routes
//!
//! Every route here requires the authentication guard; mutations also
//! consult the permission table before touching the service.

use crate::dto::{
    self, RegisterRequest, ReplaceUserRequest, UpdateUserRequest, UserResponse,
};
use crate::error::ApiError;
use crate::guard::AuthenticatedUser;
use crate::permissions::{authorize, Operation};
use crate::state::AppState;
use rocket::response::status;
use rocket::serde::json::Json;
use rocket::{delete, get, patch, post, put, State};
use uma_application::CreateUser;
use uma_domain::error::Error;

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_PAGE_SIZE: u32 = 10;

/// `POST /user` - create a user record directly (staff only).
#[post("/", format = "json", data = "<body>")]
pub async fn create(
    auth: AuthenticatedUser,
    state: &State<AppState>,
    body: Json<RegisterRequest>,
) -> Result<status::Created<Json<UserResponse>>, ApiError> {
    authorize(&auth.user, Operation::UserCreate)?;
    dto::check(&*body)?;
    dto::check_password_strength(&body.password)?;

    let body = body.into_inner();
    let user = state
        .user_service
        .create(CreateUser {
            name: body.name,
            email: body.email,
            permission: body.permission,
            password: body.password,
            email_verified: None,
            image: body.image,
        })
        .await?;
    Ok(status::Created::new(format!("/user/{}", user.id)).body(Json(user.into())))
}

/// `GET /user?page&page_size` - paginated listing.
#[get("/?<page>&<page_size>")]
pub async fn list(
    _auth: AuthenticatedUser,
    state: &State<AppState>,
    page: Option<u32>,
    page_size: Option<u32>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = state
        .user_service
        .find_all(
            page.unwrap_or(DEFAULT_PAGE),
            page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
        .await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// `GET /user/<id>` - fetch one user.
#[get("/<id>")]
pub async fn find(
    _auth: AuthenticatedUser,
    state: &State<AppState>,
    id: &str,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.user_service.find_by_id(id).await?;
    Ok(Json(user.into()))
}

/// `GET /user/name/<name>?page&page_size` - exact display-name search.
#[get("/name/<name>?<page>&<page_size>")]
pub async fn search(
    _auth: AuthenticatedUser,
    state: &State<AppState>,
    name: &str,
    page: Option<u32>,
    page_size: Option<u32>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = state
        .user_service
        .find_by_name(
            page.unwrap_or(DEFAULT_PAGE),
            page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            name,
        )
        .await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// `PUT /user/<id>` - replace every mutable field (staff only).
#[put("/<id>", format = "json", data = "<body>")]
pub async fn replace(
    auth: AuthenticatedUser,
    state: &State<AppState>,
    id: &str,
    body: Json<ReplaceUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    authorize(&auth.user, Operation::UserReplace)?;
    dto::check(&*body)?;
    let user = state.user_service.replace(id, body.into_inner().into()).await?;
    Ok(Json(user.into()))
}

/// `PATCH /user/<id>` - partial update (staff only).
#[patch("/<id>", format = "json", data = "<body>")]
pub async fn update(
    auth: AuthenticatedUser,
    state: &State<AppState>,
    id: &str,
    body: Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    authorize(&auth.user, Operation::UserUpdate)?;
    dto::check(&*body)?;
    let user = state.user_service.update(id, body.into_inner().into()).await?;
    Ok(Json(user.into()))
}

/// `DELETE /user/<id>` - remove a user (boss only).
#[delete("/<id>")]
pub async fn remove(
    auth: AuthenticatedUser,
    state: &State<AppState>,
    id: &str,
) -> Result<(), ApiError> {
    authorize(&auth.user, Operation::UserDelete)?;
    if !state.user_service.delete(id).await? {
        return Err(Error::not_found(format!("user '{id}'")).into());
    }
    Ok(())
}
