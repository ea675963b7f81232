use crate::shared::icons::icon;
use leptos::prelude::*;

/// Размеры страницы, которые принимает сервис списка.
pub const PAGE_SIZES: [usize; 4] = [10, 20, 50, 100];

fn page_info_label(page: usize, total_pages: usize, total_count: usize) -> String {
    format!("{} / {} ({})", page + 1, total_pages.max(1), total_count)
}

/// Значение селектора размера; всё вне списка сводится к минимальному.
fn selected_page_size(raw: &str) -> usize {
    raw.parse()
        .ok()
        .filter(|size| PAGE_SIZES.contains(size))
        .unwrap_or(PAGE_SIZES[0])
}

/// Пейджер списка: первая/предыдущая/следующая/последняя,
/// позиция и селектор размера страницы.
#[component]
pub fn PaginationControls(
    /// Текущая страница (с нуля)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Всего страниц
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Всего записей
    #[prop(into)]
    total_count: Signal<usize>,

    /// Текущий размер страницы
    #[prop(into)]
    page_size: Signal<usize>,

    on_page_change: Callback<usize>,
    on_page_size_change: Callback<usize>,
) -> impl IntoView {
    let has_previous = Signal::derive(move || current_page.get() > 0);
    let has_next = Signal::derive(move || current_page.get() + 1 < total_pages.get());

    let go_first = move |_| {
        if has_previous.get_untracked() {
            on_page_change.run(0);
        }
    };
    let go_previous = move |_| {
        if has_previous.get_untracked() {
            on_page_change.run(current_page.get_untracked() - 1);
        }
    };
    let go_next = move |_| {
        if has_next.get_untracked() {
            on_page_change.run(current_page.get_untracked() + 1);
        }
    };
    let go_last = move |_| {
        if has_next.get_untracked() {
            on_page_change.run(total_pages.get_untracked() - 1);
        }
    };

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=go_first
                disabled=move || !has_previous.get()
                title="Первая страница"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=go_previous
                disabled=move || !has_previous.get()
                title="Предыдущая страница"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || page_info_label(current_page.get(), total_pages.get(), total_count.get())}
            </span>
            <button
                class="pagination-btn"
                on:click=go_next
                disabled=move || !has_next.get()
                title="Следующая страница"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=go_last
                disabled=move || !has_next.get()
                title="Последняя страница"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    on_page_size_change.run(selected_page_size(&event_target_value(&ev)));
                }
                prop:value=move || page_size.get().to_string()
            >
                {PAGE_SIZES
                    .iter()
                    .map(|&size| {
                        view! {
                            <option value=size.to_string() selected=move || page_size.get() == size>
                                {size.to_string()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_info_label() {
        assert_eq!(page_info_label(0, 3, 25), "1 / 3 (25)");
        // Пустой список показывает одну страницу, а не нулевую.
        assert_eq!(page_info_label(0, 0, 0), "1 / 1 (0)");
    }

    #[test]
    fn test_selected_page_size_accepts_known_values() {
        for size in PAGE_SIZES {
            assert_eq!(selected_page_size(&size.to_string()), size);
        }
    }

    #[test]
    fn test_selected_page_size_falls_back_to_minimum() {
        assert_eq!(selected_page_size("abc"), 10);
        assert_eq!(selected_page_size(""), 10);
        assert_eq!(selected_page_size("500"), 10);
    }
}
