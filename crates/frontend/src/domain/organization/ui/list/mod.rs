pub mod state;

use self::state::create_state;
use super::details::OrganizationDetails;
use crate::domain::organization::model;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::format::format_money;
use crate::shared::icons::icon;
use crate::shared::notifications::NotificationService;
use contracts::domain::organization::{Organization, OrganizationType};
use contracts::shared::query::SortField;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Строка таблицы: значения, подготовленные к отображению.
#[derive(Clone, Debug, PartialEq)]
pub struct OrganizationRow {
    pub id: i64,
    pub name: String,
    pub type_label: &'static str,
    pub employees: String,
    pub turnover: String,
    pub street: String,
}

impl From<&Organization> for OrganizationRow {
    fn from(org: &Organization) -> Self {
        Self {
            id: org.id,
            name: org.name.clone(),
            type_label: org.org_type.label(),
            employees: org.employees_count.to_string(),
            turnover: format_money(org.annual_turnover),
            street: org.official_address.street.clone(),
        }
    }
}

fn sort_indicator(state_field: SortField, ascending: bool, field: SortField) -> &'static str {
    if state_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

#[component]
pub fn OrganizationList() -> impl IntoView {
    let notifications =
        use_context::<NotificationService>().expect("NotificationService not found in context");
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (is_filter_expanded, set_is_filter_expanded) = signal(false);
    let (details_id, set_details_id) = signal::<Option<i64>>(None);

    let load_items = move || {
        let token = state
            .try_update(|s| s.begin_request())
            .expect("list state disposed");
        let query = state.with_untracked(|s| s.query());
        spawn_local(async move {
            set_loading.set(true);
            match model::fetch_page(&query).await {
                Ok(page) => {
                    // Устаревший ответ (не последний выданный токен) не применяется.
                    state.update(|s| {
                        s.commit(token, page);
                    });
                }
                Err(e) => {
                    notifications.error(format!("Ошибка загрузки: {}", e));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            log!("Loading organizations...");
            load_items();
        }
    });

    let filter_name = RwSignal::new(String::new());
    let filter_employees_min = RwSignal::new(String::new());
    let filter_employees_max = RwSignal::new(String::new());

    let apply_filters = move || {
        state.update(|s| {
            s.filter_name = filter_name.get_untracked();
            s.filter_employees_min = filter_employees_min.get_untracked();
            s.filter_employees_max = filter_employees_max.get_untracked();
            s.page = 0;
        });
        load_items();
    };

    let clear_filters = move || {
        filter_name.set(String::new());
        filter_employees_min.set(String::new());
        filter_employees_max.set(String::new());
        state.update(|s| s.clear_filters());
        load_items();
    };

    let set_filter_type = move |raw: String| {
        state.update(|s| {
            s.filter_type = OrganizationType::from_param(&raw);
            s.page = 0;
        });
    };

    let toggle_sort = move |field: SortField| {
        state.update(|s| s.toggle_sort(field));
        load_items();
    };

    let go_to_page = move |new_page: usize| {
        if state
            .try_update(|s| s.go_to_page(new_page))
            .unwrap_or(false)
        {
            load_items();
        }
    };

    let change_page_size = move |new_size: usize| {
        state.update(|s| s.set_page_size(new_size));
        load_items();
    };

    let delete_org = move |id: i64| {
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
            match model::delete(id).await {
                Ok(()) => {
                    notifications.success("Организация удалена");
                    load_items();
                }
                Err(e) => notifications.error(format!("Ошибка удаления: {}", e)),
            }
        });
    };

    let active_filters_count = Signal::derive(move || state.get().active_filters_count());

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Организации"</h1>
                    <span class="badge badge--primary">
                        {move || state.get().total_count.to_string()}
                    </span>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div
                            class="filter-panel-header__left"
                            on:click=move |_| set_is_filter_expanded.update(|e| *e = !*e)
                        >
                            <span class="filter-panel__title">"Фильтры"</span>
                            {move || {
                                let count = active_filters_count.get();
                                if count > 0 {
                                    view! { <span class="filter-panel__badge">{count}</span> }.into_any()
                                } else {
                                    view! { <></> }.into_any()
                                }
                            }}
                        </div>

                        <div class="filter-panel-header__center">
                            <PaginationControls
                                current_page=Signal::derive(move || state.get().page)
                                total_pages=Signal::derive(move || state.get().total_pages)
                                total_count=Signal::derive(move || state.get().total_count)
                                page_size=Signal::derive(move || state.get().page_size)
                                on_page_change=Callback::new(go_to_page)
                                on_page_size_change=Callback::new(change_page_size)
                            />
                        </div>

                        <div class="filter-panel-header__right">
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| load_items()
                                disabled=Signal::derive(move || loading.get())
                            >
                                {icon("refresh")}
                                {move || if loading.get() { "Загрузка..." } else { "Обновить" }}
                            </Button>
                        </div>
                    </div>

                    <Show when=move || is_filter_expanded.get()>
                        <div class="filter-panel-content">
                            <Flex gap=FlexGap::Small align=FlexAlign::End>
                                <Flex vertical=true gap=FlexGap::Small>
                                    <Label>"Название:"</Label>
                                    <Input value=filter_name placeholder="Подстрока названия" />
                                </Flex>
                                <Flex vertical=true gap=FlexGap::Small>
                                    <Label>"Тип:"</Label>
                                    <select
                                        class="filter-select"
                                        on:change=move |ev| set_filter_type(event_target_value(&ev))
                                        prop:value=move || {
                                            state
                                                .get()
                                                .filter_type
                                                .map(|t| t.as_param().to_string())
                                                .unwrap_or_default()
                                        }
                                    >
                                        <option value="">"Все типы"</option>
                                        {OrganizationType::ALL
                                            .iter()
                                            .map(|t| {
                                                view! {
                                                    <option value=t.as_param()>{t.label()}</option>
                                                }
                                            })
                                            .collect_view()}
                                    </select>
                                </Flex>
                                <Flex vertical=true gap=FlexGap::Small>
                                    <Label>"Сотрудников от:"</Label>
                                    <Input value=filter_employees_min placeholder="min" />
                                </Flex>
                                <Flex vertical=true gap=FlexGap::Small>
                                    <Label>"до:"</Label>
                                    <Input value=filter_employees_max placeholder="max" />
                                </Flex>
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    on_click=move |_| apply_filters()
                                    disabled=Signal::derive(move || loading.get())
                                >
                                    "Найти"
                                </Button>
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    on_click=move |_| clear_filters()
                                >
                                    {icon("x")}
                                    "Сбросить"
                                </Button>
                            </Flex>
                        </div>
                    </Show>
                </div>

                {move || {
                    details_id
                        .get()
                        .map(|id| {
                            view! {
                                <OrganizationDetails
                                    id=id
                                    on_close=Callback::new(move |_| set_details_id.set(None))
                                />
                            }
                        })
                }}

                {move || {
                    if state.get().is_loaded && state.get().items.is_empty() {
                        view! { <p class="text-muted">"Организации не найдены"</p> }.into_any()
                    } else {
                        view! { <></> }.into_any()
                    }
                }}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 800px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>
                                    <div
                                        class="table__sortable-header"
                                        style="cursor: pointer;"
                                        on:click=move |_| toggle_sort(SortField::Id)
                                    >
                                        "ID"
                                        {move || {
                                            let s = state.get();
                                            sort_indicator(s.sort_field, s.sort_ascending, SortField::Id)
                                        }}
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell>
                                    <div
                                        class="table__sortable-header"
                                        style="cursor: pointer;"
                                        on:click=move |_| toggle_sort(SortField::Name)
                                    >
                                        "Название"
                                        {move || {
                                            let s = state.get();
                                            sort_indicator(s.sort_field, s.sort_ascending, SortField::Name)
                                        }}
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell>"Тип"</TableHeaderCell>
                                <TableHeaderCell>
                                    <div
                                        class="table__sortable-header"
                                        style="cursor: pointer;"
                                        on:click=move |_| toggle_sort(SortField::EmployeesCount)
                                    >
                                        "Сотрудники"
                                        {move || {
                                            let s = state.get();
                                            sort_indicator(
                                                s.sort_field,
                                                s.sort_ascending,
                                                SortField::EmployeesCount,
                                            )
                                        }}
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell>
                                    <div
                                        class="table__sortable-header"
                                        style="cursor: pointer;"
                                        on:click=move |_| toggle_sort(SortField::AnnualTurnover)
                                    >
                                        "Оборот"
                                        {move || {
                                            let s = state.get();
                                            sort_indicator(
                                                s.sort_field,
                                                s.sort_ascending,
                                                SortField::AnnualTurnover,
                                            )
                                        }}
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell>"Адрес"</TableHeaderCell>
                                <TableHeaderCell>"Действия"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || {
                                    state.get().items.iter().map(OrganizationRow::from).collect::<Vec<_>>()
                                }
                                key=|row| row.id
                                children=move |row| {
                                    let id = row.id;
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span style="font-family: monospace; font-size: var(--font-size-xs);">
                                                        {id.to_string()}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <strong>{row.name.clone()}</strong>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{row.type_label}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{row.employees.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{row.turnover.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{row.street.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <button
                                                        class="button button--small"
                                                        title="Детали"
                                                        on:click=move |_| set_details_id.set(Some(id))
                                                    >
                                                        {icon("eye")}
                                                    </button>
                                                    <button
                                                        class="button button--small button--danger"
                                                        title="Удалить"
                                                        on:click=move |_| delete_org(id)
                                                    >
                                                        {icon("delete")}
                                                    </button>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
            </div>
        </div>
    }
}
