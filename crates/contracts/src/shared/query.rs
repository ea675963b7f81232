use crate::domain::organization::OrganizationType;

/// Поле сортировки списка организаций
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Name,
    EmployeesCount,
    AnnualTurnover,
    CreationDate,
}

impl SortField {
    pub const ALL: [SortField; 5] = [
        SortField::Id,
        SortField::Name,
        SortField::EmployeesCount,
        SortField::AnnualTurnover,
        SortField::CreationDate,
    ];

    /// Имя поля в параметре `sort=<field>,<dir>`
    pub fn as_param(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Name => "name",
            SortField::EmployeesCount => "employeesCount",
            SortField::AnnualTurnover => "annualTurnover",
            SortField::CreationDate => "creationDate",
        }
    }

    pub fn from_param(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.as_param() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortField::Id => "ID",
            SortField::Name => "Название",
            SortField::EmployeesCount => "Сотрудники",
            SortField::AnnualTurnover => "Оборот",
            SortField::CreationDate => "Дата создания",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_param(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Параметры запрошенной страницы списка.
///
/// Собираются заново из состояния UI перед каждым запросом,
/// нигде не сохраняются.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub page: usize,
    pub size: usize,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    pub name: Option<String>,
    pub org_type: Option<OrganizationType>,
    pub employees_min: Option<i64>,
    pub employees_max: Option<i64>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 0,
            size: 10,
            sort_field: SortField::Name,
            sort_direction: SortDirection::Asc,
            name: None,
            org_type: None,
            employees_min: None,
            employees_max: None,
        }
    }
}

impl ListQuery {
    /// Строка параметров для `GET /organizations`.
    ///
    /// Пустые фильтры опускаются, свободный текст процент-кодируется.
    pub fn to_query_string(&self) -> String {
        let mut query = format!(
            "page={}&size={}&sort={},{}",
            self.page,
            self.size,
            self.sort_field.as_param(),
            self.sort_direction.as_param()
        );

        if let Some(name) = self.name.as_deref().filter(|n| !n.trim().is_empty()) {
            query.push_str(&format!("&name={}", urlencoding::encode(name)));
        }
        if let Some(org_type) = self.org_type {
            query.push_str(&format!("&type={}", org_type.as_param()));
        }
        if let Some(min) = self.employees_min {
            query.push_str(&format!("&employeesCountMin={}", min));
        }
        if let Some(max) = self.employees_max {
            query.push_str(&format!("&employeesCountMax={}", max));
        }

        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_string() {
        assert_eq!(
            ListQuery::default().to_query_string(),
            "page=0&size=10&sort=name,asc"
        );
    }

    #[test]
    fn test_all_filters_present() {
        let query = ListQuery {
            page: 2,
            size: 20,
            sort_field: SortField::EmployeesCount,
            sort_direction: SortDirection::Desc,
            name: Some("Acme".to_string()),
            org_type: Some(OrganizationType::Trust),
            employees_min: Some(5),
            employees_max: Some(100),
        };
        assert_eq!(
            query.to_query_string(),
            "page=2&size=20&sort=employeesCount,desc&name=Acme&type=TRUST\
             &employeesCountMin=5&employeesCountMax=100"
        );
    }

    #[test]
    fn test_blank_name_is_omitted() {
        let query = ListQuery {
            name: Some("   ".to_string()),
            ..ListQuery::default()
        };
        assert_eq!(query.to_query_string(), "page=0&size=10&sort=name,asc");
    }

    #[test]
    fn test_name_is_percent_encoded() {
        let query = ListQuery {
            name: Some("ООО Ромашка".to_string()),
            ..ListQuery::default()
        };
        let qs = query.to_query_string();
        assert!(qs.contains("&name=%D0%9E%D0%9E%D0%9E%20%D0%A0"), "{qs}");
        assert!(!qs.contains(' '));
    }

    #[test]
    fn test_sort_field_round_trip() {
        for f in SortField::ALL {
            assert_eq!(SortField::from_param(f.as_param()), Some(f));
        }
        assert_eq!(SortField::from_param("unknown"), None);
    }
}
