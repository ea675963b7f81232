use crate::dashboards::statistics::StatisticsTab;
use crate::domain::org_manager::ui::ManageTab;
use crate::domain::organization::ui::create::OrganizationCreate;
use crate::domain::organization::ui::list::OrganizationList;
use crate::shared::notifications::{NotificationHost, NotificationService};
use leptos::prelude::*;

/// Вкладки приложения: список, создание, оргдействия, статистика.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppTab {
    List,
    Create,
    Manage,
    Statistics,
}

impl AppTab {
    pub const ALL: [AppTab; 4] = [
        AppTab::List,
        AppTab::Create,
        AppTab::Manage,
        AppTab::Statistics,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            AppTab::List => "Список",
            AppTab::Create => "Создать",
            AppTab::Manage => "Управление",
            AppTab::Statistics => "Статистика",
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Сервис уведомлений доступен всем вкладкам через context.
    provide_context(NotificationService::new());

    let (active_tab, set_active_tab) = signal(AppTab::List);

    view! {
        <div class="app">
            <NotificationHost />

            <div class="tab-bar">
                {AppTab::ALL
                    .iter()
                    .copied()
                    .map(|tab| {
                        view! {
                            <button
                                class="tab-button"
                                class:tab-button--active=move || active_tab.get() == tab
                                on:click=move |_| set_active_tab.set(tab)
                            >
                                {tab.title()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            // Компонент вкладки пересоздаётся при каждой активации, поэтому
            // возврат на "Список" всегда перезагружает данные.
            <div class="tab-content">
                {move || match active_tab.get() {
                    AppTab::List => view! { <OrganizationList /> }.into_any(),
                    AppTab::Create => {
                        view! {
                            <OrganizationCreate on_created=Callback::new(move |_| {
                                set_active_tab.set(AppTab::List)
                            }) />
                        }
                            .into_any()
                    }
                    AppTab::Manage => view! { <ManageTab /> }.into_any(),
                    AppTab::Statistics => view! { <StatisticsTab /> }.into_any(),
                }}
            </div>
        </div>
    }
}
