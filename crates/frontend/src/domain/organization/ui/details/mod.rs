use crate::domain::organization::model;
use crate::shared::api::ApiError;
use crate::shared::format::{format_datetime, format_money};
use crate::shared::icons::icon;
use contracts::domain::organization::Organization;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Панель деталей организации (только чтение).
///
/// Запись загружается при открытии; 404 показывается отдельным
/// сообщением, прочие ошибки — общим текстом.
#[component]
pub fn OrganizationDetails(id: i64, on_close: Callback<()>) -> impl IntoView {
    let (org, set_org) = signal::<Option<Organization>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    spawn_local(async move {
        match model::fetch_by_id(id).await {
            Ok(record) => set_org.set(Some(record)),
            Err(ApiError::NotFound) => {
                set_error.set(Some("Организация не найдена".to_string()))
            }
            Err(e) => set_error.set(Some(format!("Ошибка загрузки: {}", e))),
        }
    });

    let detail = |label: &'static str, value: String| {
        view! {
            <div class="detail-item">
                <div class="detail-label">{label}</div>
                <div class="detail-value">{value}</div>
            </div>
        }
    };

    view! {
        <div class="org-details">
            <div class="org-details__header">
                <h3>{format!("Детали организации #{}", id)}</h3>
                <button class="button button--small" title="Закрыть" on:click=move |_| on_close.run(())>
                    {icon("x")}
                </button>
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            {move || {
                org.get()
                    .map(|record| {
                        view! {
                            <div class="org-details-grid">
                                {detail("Название", record.name.clone())}
                                {detail(
                                    "Полное название",
                                    record
                                        .full_name
                                        .clone()
                                        .unwrap_or_else(|| "Не указано".to_string()),
                                )}
                                {detail("Тип", record.org_type.label().to_string())}
                                {detail(
                                    "Количество сотрудников",
                                    record.employees_count.to_string(),
                                )}
                                {detail("Годовой оборот", format_money(record.annual_turnover))}
                                {detail(
                                    "Координаты",
                                    format!(
                                        "X: {}, Y: {}",
                                        record.coordinates.x,
                                        record.coordinates.y,
                                    ),
                                )}
                                {detail("Адрес", record.official_address.street.clone())}
                                {detail("Дата создания", format_datetime(&record.creation_date))}
                            </div>
                        }
                    })
            }}
        </div>
    }
}
