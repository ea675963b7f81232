//! Доступ к REST-сервисам.
//!
//! Базовые адреса строятся от текущего window.location; типовые
//! JSON-запросы и единая классификация ошибок.

use contracts::shared::responses::ApiMessage;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Классы ошибок обращения к сервисам.
///
/// Ошибки не ретраятся; на границе действия каждая превращается
/// в транзиентное уведомление, и UI возвращается в Idle.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// Транспортный сбой (сеть, CORS, оборванное соединение)
    #[error("сеть недоступна: {0}")]
    Network(String),

    /// Ответ не 2xx; сообщение сервера, если оно было в теле
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// 404 на точечном запросе записи
    #[error("запись не найдена")]
    NotFound,

    /// 4xx на создании/оргдействии с сообщением сервера
    #[error("{0}")]
    Rejected(String),
}

impl ApiError {
    /// Переквалифицирует 404 точечного запроса в `NotFound`.
    pub fn single_fetch(self) -> Self {
        match self {
            ApiError::Http { status: 404, .. } => ApiError::NotFound,
            other => other,
        }
    }

    /// Переквалифицирует 4xx в отказ с сообщением сервера
    /// либо с запасным текстом, если сервер его не прислал.
    pub fn rejection(self, fallback: &str) -> Self {
        match self {
            ApiError::Http { status, message } if (400..500).contains(&status) => {
                if message.is_empty() {
                    ApiError::Rejected(fallback.to_string())
                } else {
                    ApiError::Rejected(message)
                }
            }
            other => other,
        }
    }
}

// Базовый адрес сервиса на текущем хосте с заданным портом.
fn service_base(port: u16) -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "https:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "localhost".to_string());
    format!("{}//{}:{}", protocol, hostname, port)
}

/// URL основного сервиса организаций.
pub fn organizations_url(path: &str) -> String {
    format!("{}/api/v1/organizations{}", service_base(8081), path)
}

/// URL вспомогательного сервиса оргдействий.
pub fn orgmanager_url(path: &str) -> String {
    format!("{}/orgmanager{}", service_base(8082), path)
}

async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();
    let message = response
        .json::<ApiMessage>()
        .await
        .map(|body| body.message)
        .unwrap_or_default();
    ApiError::Http { status, message }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(error_from_response(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Network(format!("некорректный ответ: {e}")))
}

pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    url: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = Request::post(url)
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

/// POST без тела: все аргументы уже в пути.
pub async fn post_empty<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = Request::post(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

pub async fn delete(url: &str) -> Result<(), ApiError> {
    let response = Request::delete(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(error_from_response(response).await);
    }
    Ok(())
}

/// DELETE, возвращающий тело (например счётчик удалённых).
pub async fn delete_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = Request::delete(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_fetch_maps_404() {
        let err = ApiError::Http {
            status: 404,
            message: "not found".to_string(),
        };
        assert_eq!(err.single_fetch(), ApiError::NotFound);
    }

    #[test]
    fn test_single_fetch_keeps_other_statuses() {
        let err = ApiError::Http {
            status: 500,
            message: String::new(),
        };
        assert_eq!(
            err.clone().single_fetch(),
            ApiError::Http {
                status: 500,
                message: String::new()
            }
        );
    }

    #[test]
    fn test_rejection_uses_server_message() {
        let err = ApiError::Http {
            status: 422,
            message: "имя занято".to_string(),
        };
        assert_eq!(
            err.rejection("Ошибка создания"),
            ApiError::Rejected("имя занято".to_string())
        );
    }

    #[test]
    fn test_rejection_falls_back_without_message() {
        let err = ApiError::Http {
            status: 400,
            message: String::new(),
        };
        assert_eq!(
            err.rejection("Ошибка создания"),
            ApiError::Rejected("Ошибка создания".to_string())
        );
    }

    #[test]
    fn test_rejection_ignores_server_errors() {
        let err = ApiError::Http {
            status: 503,
            message: String::new(),
        };
        assert!(matches!(
            err.rejection("Ошибка"),
            ApiError::Http { status: 503, .. }
        ));
    }
}
