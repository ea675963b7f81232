//! Контракты обмена с REST-сервисами организаций.
//!
//! DTO уровня провода (serde, camelCase-имена полей как у бэкенда)
//! и типы запроса страницы. Никаких UI-зависимостей.

pub mod domain;
pub mod shared;
