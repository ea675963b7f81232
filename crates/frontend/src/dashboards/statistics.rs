use crate::domain::organization::model;
use crate::shared::components::stat_card::StatCard;
use crate::shared::format::format_money;
use crate::shared::notifications::NotificationService;
use contracts::domain::organization::OrganizationType;
use contracts::shared::query::ListQuery;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Вкладка "Статистика": сводные показатели основного сервиса.
#[component]
pub fn StatisticsTab() -> impl IntoView {
    let notifications =
        use_context::<NotificationService>().expect("NotificationService not found in context");

    let (total, set_total) = signal::<Option<String>>(None);
    let (average, set_average) = signal::<Option<String>>(None);
    let (average_subtitle, set_average_subtitle) = signal::<Option<String>>(None);
    let (above_public, set_above_public) = signal::<Option<String>>(None);
    let (above_trust, set_above_trust) = signal::<Option<String>>(None);

    spawn_local(async move {
        // Общее количество: страница размером 1 ради totalElements.
        let query = ListQuery {
            size: 1,
            ..ListQuery::default()
        };
        match model::fetch_page(&query).await {
            Ok(page) => set_total.set(Some(page.total_elements.to_string())),
            Err(e) => notifications.error(format!("Ошибка загрузки статистики: {}", e)),
        }

        match model::fetch_average_turnover().await {
            Ok(avg) => {
                set_average.set(Some(format_money(avg.average_annual_turnover)));
                set_average_subtitle.set(Some(format!("Из {} организаций", avg.count)));
            }
            Err(e) => notifications.error(format!("Ошибка загрузки статистики: {}", e)),
        }

        match model::fetch_count_by_type_greater(OrganizationType::Public).await {
            Ok(result) => set_above_public.set(Some(result.count.to_string())),
            Err(e) => notifications.error(format!("Ошибка загрузки статистики: {}", e)),
        }

        match model::fetch_count_by_type_greater(OrganizationType::Trust).await {
            Ok(result) => set_above_trust.set(Some(result.count.to_string())),
            Err(e) => notifications.error(format!("Ошибка загрузки статистики: {}", e)),
        }
    });

    view! {
        <div class="page">
            <div class="stats-grid">
                <StatCard
                    label="Всего организаций".to_string()
                    icon_name="chart".to_string()
                    value=total
                />
                <StatCard
                    label="Средний оборот".to_string()
                    icon_name="chart".to_string()
                    value=average
                    subtitle=average_subtitle
                />
                <StatCard
                    label="Типов больше PUBLIC".to_string()
                    icon_name="chart".to_string()
                    value=above_public
                />
                <StatCard
                    label="Типов больше TRUST".to_string()
                    icon_name="chart".to_string()
                    value=above_trust
                />
            </div>
        </div>
    }
}
