use crate::domain::organization::model;
use crate::shared::icons::icon;
use crate::shared::notifications::NotificationService;
use contracts::domain::organization::{
    Address, Coordinates, OrganizationDraft, OrganizationType,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Сырые значения полей формы до нормализации.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CreateFormValues {
    pub name: String,
    pub coordinates_x: String,
    pub coordinates_y: String,
    pub full_name: String,
    pub employees_count: String,
    pub annual_turnover: String,
    pub org_type: String,
    pub street: String,
}

/// Нормализация формы в полезную нагрузку POST: числовая коэрция
/// обязательных полей, пустые необязательные — `None`.
/// Остальную валидацию выполняет сервер.
pub fn build_draft(values: &CreateFormValues) -> Result<OrganizationDraft, String> {
    let x = values
        .coordinates_x
        .trim()
        .parse::<f64>()
        .map_err(|_| "Координата X должна быть числом".to_string())?;
    let y = values
        .coordinates_y
        .trim()
        .parse::<i64>()
        .map_err(|_| "Координата Y должна быть целым числом".to_string())?;
    let employees_count = values
        .employees_count
        .trim()
        .parse::<i64>()
        .map_err(|_| "Количество сотрудников должно быть целым числом".to_string())?;
    let annual_turnover = match values.annual_turnover.trim() {
        "" => None,
        raw => Some(
            raw.parse::<f64>()
                .map_err(|_| "Годовой оборот должен быть числом".to_string())?,
        ),
    };
    let org_type = OrganizationType::from_param(values.org_type.trim())
        .ok_or_else(|| "Выберите тип организации".to_string())?;

    let full_name = values.full_name.trim();
    let full_name = if full_name.is_empty() {
        None
    } else {
        Some(full_name.to_string())
    };

    Ok(OrganizationDraft {
        name: values.name.trim().to_string(),
        coordinates: Coordinates { x, y },
        full_name,
        employees_count,
        annual_turnover,
        org_type,
        official_address: Address {
            street: values.street.trim().to_string(),
        },
    })
}

#[component]
pub fn OrganizationCreate(on_created: Callback<()>) -> impl IntoView {
    let notifications =
        use_context::<NotificationService>().expect("NotificationService not found in context");

    let name = RwSignal::new(String::new());
    let coordinates_x = RwSignal::new(String::new());
    let coordinates_y = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let employees_count = RwSignal::new(String::new());
    let annual_turnover = RwSignal::new(String::new());
    let org_type = RwSignal::new(String::new());
    let street = RwSignal::new(String::new());

    let (error, set_error) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    let reset_form = move || {
        name.set(String::new());
        coordinates_x.set(String::new());
        coordinates_y.set(String::new());
        full_name.set(String::new());
        employees_count.set(String::new());
        annual_turnover.set(String::new());
        org_type.set(String::new());
        street.set(String::new());
    };

    let submit = move || {
        let values = CreateFormValues {
            name: name.get_untracked(),
            coordinates_x: coordinates_x.get_untracked(),
            coordinates_y: coordinates_y.get_untracked(),
            full_name: full_name.get_untracked(),
            employees_count: employees_count.get_untracked(),
            annual_turnover: annual_turnover.get_untracked(),
            org_type: org_type.get_untracked(),
            street: street.get_untracked(),
        };
        let draft = match build_draft(&values) {
            Ok(draft) => draft,
            Err(message) => {
                set_error.set(Some(message));
                return;
            }
        };
        set_error.set(None);

        spawn_local(async move {
            set_submitting.set(true);
            match model::create(&draft).await {
                Ok(created) => {
                    notifications.success(format!("Организация #{} создана", created.id));
                    reset_form();
                    on_created.run(());
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_submitting.set(false);
        });
    };

    let text_field = |label: &'static str,
                      value: RwSignal<String>,
                      placeholder: &'static str| {
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
        <div class="details-container">
            <div class="details-header">
                <h3>"Новая организация"</h3>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                {text_field("Название", name, "Название организации")}
                {text_field("Полное название", full_name, "Необязательно")}
                {text_field("Координата X", coordinates_x, "Число")}
                {text_field("Координата Y", coordinates_y, "Целое число")}
                {text_field("Количество сотрудников", employees_count, "Целое число")}
                {text_field("Годовой оборот", annual_turnover, "Необязательно")}

                <div class="form-group">
                    <label>"Тип"</label>
                    <select
                        on:change=move |ev| org_type.set(event_target_value(&ev))
                        prop:value=move || org_type.get()
                    >
                        <option value="">"— выберите тип —"</option>
                        {OrganizationType::ALL
                            .iter()
                            .map(|t| view! { <option value=t.as_param()>{t.label()}</option> })
                            .collect_view()}
                    </select>
                </div>

                {text_field("Улица", street, "Официальный адрес")}
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click=move |_| submit()
                    disabled=move || submitting.get()
                >
                    {icon("plus")}
                    {move || if submitting.get() { "Создание..." } else { "Создать" }}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_values() -> CreateFormValues {
        CreateFormValues {
            name: "Acme".to_string(),
            coordinates_x: "10.5".to_string(),
            coordinates_y: "-3".to_string(),
            full_name: String::new(),
            employees_count: "5".to_string(),
            annual_turnover: String::new(),
            org_type: "PUBLIC".to_string(),
            street: "Main St".to_string(),
        }
    }

    #[test]
    fn test_build_draft_coerces_numbers() {
        let draft = build_draft(&valid_values()).unwrap();
        assert_eq!(draft.coordinates.x, 10.5);
        assert_eq!(draft.coordinates.y, -3);
        assert_eq!(draft.employees_count, 5);
        assert_eq!(draft.org_type, OrganizationType::Public);
        assert_eq!(draft.official_address.street, "Main St");
    }

    #[test]
    fn test_build_draft_nulls_absent_optionals() {
        let draft = build_draft(&valid_values()).unwrap();
        assert_eq!(draft.full_name, None);
        assert_eq!(draft.annual_turnover, None);

        let mut values = valid_values();
        values.full_name = " ООО Acme ".to_string();
        values.annual_turnover = "1000".to_string();
        let draft = build_draft(&values).unwrap();
        assert_eq!(draft.full_name.as_deref(), Some("ООО Acme"));
        assert_eq!(draft.annual_turnover, Some(1000.0));
    }

    #[test]
    fn test_build_draft_rejects_bad_numbers() {
        let mut values = valid_values();
        values.coordinates_x = "abc".to_string();
        assert_eq!(
            build_draft(&values).unwrap_err(),
            "Координата X должна быть числом"
        );

        let mut values = valid_values();
        values.employees_count = "1.5".to_string();
        assert_eq!(
            build_draft(&values).unwrap_err(),
            "Количество сотрудников должно быть целым числом"
        );

        let mut values = valid_values();
        values.annual_turnover = "x".to_string();
        assert_eq!(
            build_draft(&values).unwrap_err(),
            "Годовой оборот должен быть числом"
        );
    }

    #[test]
    fn test_build_draft_requires_type() {
        let mut values = valid_values();
        values.org_type = String::new();
        assert_eq!(build_draft(&values).unwrap_err(), "Выберите тип организации");
    }
}
