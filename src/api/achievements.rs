//! Achievement Calls

use serde::{Deserialize, Serialize};

use super::http::{HttpApi, Method, Resource};
use super::ApiResult;
use crate::models::{Achievement, AchievementProgress};

#[derive(Deserialize)]
struct AchievementListEnvelope {
    achievements: Vec<Achievement>,
}

#[derive(Serialize)]
struct ProgressBody {
    user_id: i64,
    achievement_id: i64,
    progress_increment: u32,
}

pub(super) async fn list(api: &HttpApi, user_id: i64) -> ApiResult<Vec<Achievement>> {
    let url = api.url(Resource::Achievements, None, &[("user_id", user_id.to_string())]);
    let envelope: AchievementListEnvelope = api.get(url).await?;
    Ok(envelope.achievements)
}

/// The response is not wrapped in an envelope
pub(super) async fn bump_progress(
    api: &HttpApi,
    user_id: i64,
    achievement_id: i64,
    increment: u32,
) -> ApiResult<AchievementProgress> {
    let url = api.url(Resource::Achievements, None, &[]);
    let body = ProgressBody { user_id, achievement_id, progress_increment: increment };
    api.send(Method::Post, url, &body).await
}
