//! Оргдействия вспомогательного сервиса.
//!
//! Обе операции не трогают отображаемый список: перезагрузка,
//! если нужна, остаётся на вызывающей стороне.

use contracts::shared::responses::{HireResult, MergeResult};

use crate::shared::api::{self, ApiError};

/// Объединяет две организации; возвращает id новой.
pub async fn merge(
    id1: i64,
    id2: i64,
    new_name: &str,
    new_address: &str,
) -> Result<MergeResult, ApiError> {
    let url = api::orgmanager_url(&format!(
        "/merge/{}/{}/{}/{}",
        id1,
        id2,
        urlencoding::encode(new_name),
        urlencoding::encode(new_address)
    ));
    api::post_empty(&url)
        .await
        .map_err(|e| e.rejection("Ошибка объединения"))
}

/// Нанимает сотрудника; возвращает новое количество.
pub async fn hire(id: i64) -> Result<HireResult, ApiError> {
    let url = api::orgmanager_url(&format!("/hire/{}", id));
    api::post_empty(&url)
        .await
        .map_err(|e| e.rejection("Ошибка найма"))
}
