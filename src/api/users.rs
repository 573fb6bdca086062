//! User Calls

use serde::{Deserialize, Serialize};

use super::http::{HttpApi, Method, Resource};
use super::ApiResult;
use crate::models::User;

#[derive(Deserialize)]
struct UserEnvelope {
    user: User,
}

#[derive(Serialize)]
struct CreateUserBody<'a> {
    telegram_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<&'a str>,
}

#[derive(Serialize)]
struct UpdateUserBody {
    user_id: i64,
    xp_increment: u32,
    complete_task: bool,
}

pub(super) async fn get(api: &HttpApi, telegram_id: i64) -> ApiResult<User> {
    let url = api.url(Resource::Users, None, &[("telegram_id", telegram_id.to_string())]);
    let envelope: UserEnvelope = api.get(url).await?;
    Ok(envelope.user)
}

pub(super) async fn create(api: &HttpApi, telegram_id: i64, username: Option<&str>) -> ApiResult<User> {
    let url = api.url(Resource::Users, None, &[]);
    let body = CreateUserBody { telegram_id, username };
    let envelope: UserEnvelope = api.send(Method::Post, url, &body).await?;
    Ok(envelope.user)
}

pub(super) async fn update(api: &HttpApi, user_id: i64, xp_increment: u32, complete_task: bool) -> ApiResult<User> {
    let url = api.url(Resource::Users, None, &[]);
    let body = UpdateUserBody { user_id, xp_increment, complete_task };
    let envelope: UserEnvelope = api.send(Method::Put, url, &body).await?;
    Ok(envelope.user)
}
