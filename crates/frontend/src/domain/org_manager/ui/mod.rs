use crate::domain::org_manager::model;
use crate::domain::organization::model as org_model;
use crate::shared::notifications::NotificationService;
use leptos::prelude::*;
use leptos::task::spawn_local;

fn parse_id(raw: &str, field: &str) -> Result<i64, String> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| format!("{} должен быть целым числом", field))
}

/// Вкладка "Управление": объединение, найм и удаление организаций.
///
/// Результат каждой операции уходит в уведомление; список на своей
/// вкладке перезагрузится при следующей активации.
#[component]
pub fn ManageTab() -> impl IntoView {
    let notifications =
        use_context::<NotificationService>().expect("NotificationService not found in context");

    // --- Объединение ---
    let merge_id1 = RwSignal::new(String::new());
    let merge_id2 = RwSignal::new(String::new());
    let merge_name = RwSignal::new(String::new());
    let merge_address = RwSignal::new(String::new());

    let submit_merge = move || {
        let id1 = match parse_id(&merge_id1.get_untracked(), "ID первой организации") {
            Ok(id) => id,
            Err(e) => return notifications.error(e),
        };
        let id2 = match parse_id(&merge_id2.get_untracked(), "ID второй организации") {
            Ok(id) => id,
            Err(e) => return notifications.error(e),
        };
        let new_name = merge_name.get_untracked();
        let new_address = merge_address.get_untracked();

        spawn_local(async move {
            match model::merge(id1, id2, new_name.trim(), new_address.trim()).await {
                Ok(result) => {
                    notifications.success(format!(
                        "Организации объединены! Новый ID: {}",
                        result.id
                    ));
                    merge_id1.set(String::new());
                    merge_id2.set(String::new());
                    merge_name.set(String::new());
                    merge_address.set(String::new());
                }
                Err(e) => notifications.error(format!("Ошибка: {}", e)),
            }
        });
    };

    // --- Найм ---
    let hire_id = RwSignal::new(String::new());

    let submit_hire = move || {
        let id = match parse_id(&hire_id.get_untracked(), "ID организации") {
            Ok(id) => id,
            Err(e) => return notifications.error(e),
        };
        spawn_local(async move {
            match model::hire(id).await {
                Ok(result) => {
                    notifications.success(format!(
                        "Сотрудник нанят! Новое количество: {}",
                        result.employees_count
                    ));
                    hire_id.set(String::new());
                }
                Err(e) => notifications.error(format!("Ошибка: {}", e)),
            }
        });
    };

    // --- Удаление по ID ---
    let delete_id = RwSignal::new(String::new());

    let submit_delete = move || {
        let id = match parse_id(&delete_id.get_untracked(), "ID организации") {
            Ok(id) => id,
            Err(e) => return notifications.error(e),
        };
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!(
                    "Вы уверены, что хотите удалить организацию #{}?",
                    id
                ))
                .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match org_model::delete(id).await {
                Ok(()) => {
                    notifications.success("Организация удалена");
                    delete_id.set(String::new());
                }
                Err(e) => notifications.error(format!("Ошибка: {}", e)),
            }
        });
    };

    // --- Удаление по полному имени ---
    let delete_full_name = RwSignal::new(String::new());

    let submit_delete_by_full_name = move || {
        let full_name = delete_full_name.get_untracked().trim().to_string();
        if full_name.is_empty() {
            return notifications.error("Укажите полное имя");
        }
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!(
                    "Удалить все организации с полным именем \"{}\"?",
                    full_name
                ))
                .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match org_model::delete_by_full_name(&full_name).await {
                Ok(result) => {
                    notifications.success(format!(
                        "Удалено организаций: {}",
                        result.deleted_count
                    ));
                    delete_full_name.set(String::new());
                }
                Err(e) => notifications.error(format!("Ошибка: {}", e)),
            }
        });
    };

    let text_field = |label: &'static str, value: RwSignal<String>, placeholder: &'static str| {
        view! {
            <div class="form-group">
                <label>{label}</label>
                <input
                    type="text"
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                    placeholder=placeholder
                />
            </div>
        }
    };

    view! {
        <div class="page">
            <div class="manage-grid">
                <div class="manage-card">
                    <h3>"Объединить организации"</h3>
                    {text_field("ID первой", merge_id1, "Целое число")}
                    {text_field("ID второй", merge_id2, "Целое число")}
                    {text_field("Новое название", merge_name, "Название объединённой")}
                    {text_field("Новый адрес", merge_address, "Улица")}
                    <button class="btn btn-primary" on:click=move |_| submit_merge()>
                        "Объединить"
                    </button>
                </div>

                <div class="manage-card">
                    <h3>"Нанять сотрудника"</h3>
                    {text_field("ID организации", hire_id, "Целое число")}
                    <button class="btn btn-primary" on:click=move |_| submit_hire()>
                        "Нанять"
                    </button>
                </div>

                <div class="manage-card">
                    <h3>"Удалить организацию"</h3>
                    {text_field("ID организации", delete_id, "Целое число")}
                    <button class="btn btn-danger" on:click=move |_| submit_delete()>
                        "Удалить"
                    </button>
                </div>

                <div class="manage-card">
                    <h3>"Удалить по полному имени"</h3>
                    {text_field("Полное имя", delete_full_name, "Точное совпадение")}
                    <button class="btn btn-danger" on:click=move |_| submit_delete_by_full_name()>
                        "Удалить все"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id(" 42 ", "ID"), Ok(42));
        assert_eq!(
            parse_id("abc", "ID организации"),
            Err("ID организации должен быть целым числом".to_string())
        );
        assert!(parse_id("", "ID").is_err());
    }
}
