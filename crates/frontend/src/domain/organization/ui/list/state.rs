use contracts::domain::organization::{Organization, OrganizationType};
use contracts::shared::page::Page;
use contracts::shared::query::{ListQuery, SortDirection, SortField};
use leptos::prelude::*;

/// Состояние списка организаций: данные, пагинация, сортировка, фильтры.
///
/// Поля пагинации меняются только при успешном ответе (`commit`);
/// ответ с устаревшим токеном (не последний выданный) отбрасывается.
#[derive(Clone, Debug)]
pub struct OrganizationListState {
    pub items: Vec<Organization>,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_count: usize,
    pub sort_field: SortField,
    pub sort_ascending: bool,
    pub filter_name: String,
    pub filter_type: Option<OrganizationType>,
    pub filter_employees_min: String,
    pub filter_employees_max: String,
    pub is_loaded: bool,
    request_seq: u64,
}

impl Default for OrganizationListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page: 0,
            page_size: 10,
            total_pages: 0,
            total_count: 0,
            sort_field: SortField::Name,
            sort_ascending: true,
            filter_name: String::new(),
            filter_type: None,
            filter_employees_min: String::new(),
            filter_employees_max: String::new(),
            is_loaded: false,
            request_seq: 0,
        }
    }
}

impl OrganizationListState {
    /// Выдаёт токен нового запроса; применить ответ сможет только
    /// носитель последнего токена.
    pub fn begin_request(&mut self) -> u64 {
        self.request_seq += 1;
        self.request_seq
    }

    /// Применяет страницу ответа, если токен всё ещё актуален.
    pub fn commit(&mut self, token: u64, page: Page<Organization>) -> bool {
        if token != self.request_seq {
            return false;
        }
        self.page = page.page;
        self.total_pages = page.total_pages;
        self.total_count = page.total_elements;
        self.items = page.content;
        self.is_loaded = true;
        true
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages
    }

    /// Шаг вперёд; на последней странице ничего не делает.
    pub fn next_page(&mut self) -> bool {
        if self.has_next() {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Шаг назад; на нулевой странице ничего не делает.
    pub fn previous_page(&mut self) -> bool {
        if self.has_previous() {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    pub fn go_to_page(&mut self, page: usize) -> bool {
        if page < self.total_pages && page != self.page {
            self.page = page;
            true
        } else {
            false
        }
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size;
        self.page = 0;
    }

    /// Повторный клик по полю меняет направление, новое поле
    /// сортируется по возрастанию; страница сбрасывается.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = field;
            self.sort_ascending = true;
        }
        self.page = 0;
    }

    pub fn clear_filters(&mut self) {
        self.filter_name.clear();
        self.filter_type = None;
        self.filter_employees_min.clear();
        self.filter_employees_max.clear();
        self.page = 0;
    }

    pub fn active_filters_count(&self) -> usize {
        let mut count = 0;
        if !self.filter_name.trim().is_empty() {
            count += 1;
        }
        if self.filter_type.is_some() {
            count += 1;
        }
        if !self.filter_employees_min.trim().is_empty() {
            count += 1;
        }
        if !self.filter_employees_max.trim().is_empty() {
            count += 1;
        }
        count
    }

    /// Параметры запроса из текущего состояния; пустые фильтры опускаются,
    /// нечисловые границы по сотрудникам игнорируются.
    pub fn query(&self) -> ListQuery {
        ListQuery {
            page: self.page,
            size: self.page_size,
            sort_field: self.sort_field,
            sort_direction: if self.sort_ascending {
                SortDirection::Asc
            } else {
                SortDirection::Desc
            },
            name: some_trimmed(&self.filter_name),
            org_type: self.filter_type,
            employees_min: self.filter_employees_min.trim().parse().ok(),
            employees_max: self.filter_employees_max.trim().parse().ok(),
        }
    }
}

fn some_trimmed(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn create_state() -> RwSignal<OrganizationListState> {
    RwSignal::new(OrganizationListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_of(page: usize, total_pages: usize, total_elements: usize) -> Page<Organization> {
        Page {
            content: Vec::new(),
            page,
            total_pages,
            total_elements,
        }
    }

    #[test]
    fn test_commit_applies_latest_token() {
        let mut state = OrganizationListState::default();
        let token = state.begin_request();
        assert!(state.commit(token, page_of(0, 3, 25)));
        assert_eq!(state.total_pages, 3);
        assert_eq!(state.total_count, 25);
        assert!(state.is_loaded);
    }

    #[test]
    fn test_stale_commit_is_discarded() {
        let mut state = OrganizationListState::default();
        let stale = state.begin_request();
        let fresh = state.begin_request();
        assert!(!state.commit(stale, page_of(5, 9, 90)));
        assert_eq!(state.total_pages, 0);
        assert!(!state.is_loaded);
        assert!(state.commit(fresh, page_of(0, 2, 11)));
        assert_eq!(state.total_pages, 2);
    }

    #[test]
    fn test_next_page_noop_on_last() {
        let mut state = OrganizationListState::default();
        let token = state.begin_request();
        state.commit(token, page_of(2, 3, 30));
        assert!(!state.next_page());
        assert_eq!(state.page, 2);
    }

    #[test]
    fn test_previous_page_noop_on_first() {
        let mut state = OrganizationListState::default();
        assert!(!state.previous_page());
        assert_eq!(state.page, 0);
    }

    #[test]
    fn test_page_navigation_within_bounds() {
        let mut state = OrganizationListState::default();
        let token = state.begin_request();
        state.commit(token, page_of(0, 3, 30));
        assert!(state.next_page());
        assert_eq!(state.page, 1);
        assert!(state.previous_page());
        assert_eq!(state.page, 0);
        assert!(state.go_to_page(2));
        assert!(!state.go_to_page(3));
        assert_eq!(state.page, 2);
    }

    #[test]
    fn test_empty_result_disables_both_directions() {
        let mut state = OrganizationListState::default();
        let token = state.begin_request();
        state.commit(token, page_of(0, 0, 0));
        assert!(!state.has_previous());
        assert!(!state.has_next());
    }

    #[test]
    fn test_clear_filters_resets_page() {
        let mut state = OrganizationListState {
            page: 4,
            filter_name: "Acme".to_string(),
            filter_type: Some(OrganizationType::Trust),
            filter_employees_min: "5".to_string(),
            filter_employees_max: "10".to_string(),
            ..OrganizationListState::default()
        };
        assert_eq!(state.active_filters_count(), 4);
        state.clear_filters();
        assert_eq!(state.page, 0);
        assert_eq!(state.active_filters_count(), 0);
        assert_eq!(state.query().to_query_string(), "page=0&size=10&sort=name,asc");
    }

    #[test]
    fn test_toggle_sort() {
        let mut state = OrganizationListState::default();
        state.page = 2;
        state.toggle_sort(SortField::Name);
        assert!(!state.sort_ascending);
        assert_eq!(state.page, 0);
        state.toggle_sort(SortField::EmployeesCount);
        assert_eq!(state.sort_field, SortField::EmployeesCount);
        assert!(state.sort_ascending);
    }

    #[test]
    fn test_set_page_size_resets_page() {
        let mut state = OrganizationListState::default();
        state.page = 3;
        state.set_page_size(50);
        assert_eq!(state.page_size, 50);
        assert_eq!(state.page, 0);
    }

    #[test]
    fn test_query_ignores_non_numeric_bounds() {
        let state = OrganizationListState {
            filter_employees_min: "abc".to_string(),
            filter_employees_max: " 15 ".to_string(),
            ..OrganizationListState::default()
        };
        let query = state.query();
        assert_eq!(query.employees_min, None);
        assert_eq!(query.employees_max, Some(15));
    }
}
