use serde::{Deserialize, Serialize};

// ============================================================================
// Organization Type
// ============================================================================

/// Организационно-правовая форма
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrganizationType {
    #[serde(rename = "PUBLIC")]
    Public,
    #[serde(rename = "TRUST")]
    Trust,
    #[serde(rename = "PRIVATE_LIMITED_COMPANY")]
    PrivateLimitedCompany,
}

impl OrganizationType {
    pub const ALL: [OrganizationType; 3] = [
        OrganizationType::Public,
        OrganizationType::Trust,
        OrganizationType::PrivateLimitedCompany,
    ];

    /// Значение в URL-параметрах и сегментах пути
    pub fn as_param(&self) -> &'static str {
        match self {
            OrganizationType::Public => "PUBLIC",
            OrganizationType::Trust => "TRUST",
            OrganizationType::PrivateLimitedCompany => "PRIVATE_LIMITED_COMPANY",
        }
    }

    pub fn from_param(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_param() == s)
    }

    /// Отображаемое название типа
    pub fn label(&self) -> &'static str {
        match self {
            OrganizationType::Public => "Публичная",
            OrganizationType::Trust => "Траст",
            OrganizationType::PrivateLimitedCompany => "Частная ООО",
        }
    }
}

// ============================================================================
// Value objects
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: f64,
    pub y: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
}

// ============================================================================
// Record + Draft
// ============================================================================

/// Организация, как её отдаёт основной сервис.
///
/// Запись только для чтения на стороне клиента; все мутации идут
/// через отдельные операции сервиса.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub id: i64,
    pub name: String,

    #[serde(default)]
    pub coordinates: Coordinates,

    /// ISO-метка без зоны, форматируется на клиенте
    #[serde(rename = "creationDate", default)]
    pub creation_date: String,

    #[serde(rename = "fullName", default)]
    pub full_name: Option<String>,

    #[serde(rename = "employeesCount")]
    pub employees_count: i64,

    #[serde(rename = "annualTurnover", default)]
    pub annual_turnover: Option<f64>,

    #[serde(rename = "type")]
    pub org_type: OrganizationType,

    #[serde(rename = "officialAddress")]
    pub official_address: Address,
}

/// Полезная нагрузка `POST /organizations`.
///
/// Отсутствующие необязательные поля сериализуются как `null` —
/// окончательная валидация остаётся за сервером.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationDraft {
    pub name: String,
    pub coordinates: Coordinates,

    #[serde(rename = "fullName")]
    pub full_name: Option<String>,

    #[serde(rename = "employeesCount")]
    pub employees_count: i64,

    #[serde(rename = "annualTurnover")]
    pub annual_turnover: Option<f64>,

    #[serde(rename = "type")]
    pub org_type: OrganizationType,

    #[serde(rename = "officialAddress")]
    pub official_address: Address,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_labels() {
        assert_eq!(OrganizationType::Public.label(), "Публичная");
        assert_eq!(OrganizationType::Trust.label(), "Траст");
        assert_eq!(OrganizationType::PrivateLimitedCompany.label(), "Частная ООО");
    }

    #[test]
    fn test_type_param_round_trip() {
        for t in OrganizationType::ALL {
            assert_eq!(OrganizationType::from_param(t.as_param()), Some(t));
        }
        assert_eq!(OrganizationType::from_param(""), None);
        assert_eq!(OrganizationType::from_param("public"), None);
    }

    #[test]
    fn test_deserialize_summary_without_optional_fields() {
        let json = r#"{
            "id": 1,
            "name": "Acme",
            "type": "PUBLIC",
            "employeesCount": 5,
            "annualTurnover": 1000,
            "officialAddress": {"street": "Main St"}
        }"#;
        let org: Organization = serde_json::from_str(json).unwrap();
        assert_eq!(org.id, 1);
        assert_eq!(org.name, "Acme");
        assert_eq!(org.org_type, OrganizationType::Public);
        assert_eq!(org.employees_count, 5);
        assert_eq!(org.annual_turnover, Some(1000.0));
        assert_eq!(org.official_address.street, "Main St");
        assert_eq!(org.full_name, None);
        assert_eq!(org.creation_date, "");
    }

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "id": 7,
            "name": "Ромашка",
            "coordinates": {"x": 10.5, "y": -3},
            "creationDate": "2024-03-15T14:02:26",
            "fullName": "ООО Ромашка",
            "employeesCount": 42,
            "annualTurnover": null,
            "type": "PRIVATE_LIMITED_COMPANY",
            "officialAddress": {"street": "Тверская, 1"}
        }"#;
        let org: Organization = serde_json::from_str(json).unwrap();
        assert_eq!(org.coordinates.x, 10.5);
        assert_eq!(org.coordinates.y, -3);
        assert_eq!(org.creation_date, "2024-03-15T14:02:26");
        assert_eq!(org.full_name.as_deref(), Some("ООО Ромашка"));
        assert_eq!(org.annual_turnover, None);
    }

    #[test]
    fn test_draft_serializes_absent_optionals_as_null() {
        let draft = OrganizationDraft {
            name: "Acme".to_string(),
            coordinates: Coordinates { x: 1.0, y: 2 },
            full_name: None,
            employees_count: 5,
            annual_turnover: None,
            org_type: OrganizationType::Trust,
            official_address: Address {
                street: "Main St".to_string(),
            },
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["fullName"], serde_json::Value::Null);
        assert_eq!(value["annualTurnover"], serde_json::Value::Null);
        assert_eq!(value["type"], "TRUST");
        assert_eq!(value["employeesCount"], 5);
        assert_eq!(value["officialAddress"]["street"], "Main St");
    }
}
