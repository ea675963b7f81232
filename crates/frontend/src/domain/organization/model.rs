//! Запросы к основному сервису организаций.

use contracts::domain::organization::{Organization, OrganizationDraft, OrganizationType};
use contracts::shared::page::Page;
use contracts::shared::query::ListQuery;
use contracts::shared::responses::{AverageTurnover, DeletedCount, TypeCount};

use crate::shared::api::{self, ApiError};

/// Страница списка по текущим фильтрам/сортировке.
pub async fn fetch_page(query: &ListQuery) -> Result<Page<Organization>, ApiError> {
    let url = api::organizations_url(&format!("?{}", query.to_query_string()));
    api::get_json(&url).await
}

/// Одна запись; 404 различается как [`ApiError::NotFound`].
pub async fn fetch_by_id(id: i64) -> Result<Organization, ApiError> {
    let url = api::organizations_url(&format!("/{}", id));
    api::get_json::<Organization>(&url)
        .await
        .map_err(ApiError::single_fetch)
}

pub async fn create(draft: &OrganizationDraft) -> Result<Organization, ApiError> {
    let url = api::organizations_url("");
    api::post_json(&url, draft)
        .await
        .map_err(|e| e.rejection("Ошибка создания"))
}

pub async fn delete(id: i64) -> Result<(), ApiError> {
    let url = api::organizations_url(&format!("/{}", id));
    api::delete(&url).await
}

/// Массовое удаление по точному полному имени, возвращает счётчик.
pub async fn delete_by_full_name(full_name: &str) -> Result<DeletedCount, ApiError> {
    let url = api::organizations_url(&format!(
        "/by-full-name/{}",
        urlencoding::encode(full_name)
    ));
    api::delete_json(&url).await
}

pub async fn fetch_average_turnover() -> Result<AverageTurnover, ApiError> {
    api::get_json(&api::organizations_url("/average-turnover")).await
}

pub async fn fetch_count_by_type_greater(org_type: OrganizationType) -> Result<TypeCount, ApiError> {
    let url = api::organizations_url(&format!(
        "/count-by-type-greater/{}",
        org_type.as_param()
    ));
    api::get_json(&url).await
}
