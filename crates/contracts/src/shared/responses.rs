use serde::{Deserialize, Serialize};

/// Тело ошибки сервиса: `{"message": "..."}`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: String,
}

/// Ответ `DELETE /organizations/by-full-name/{name}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeletedCount {
    #[serde(rename = "deletedCount")]
    pub deleted_count: u64,
}

/// Ответ `GET /organizations/average-turnover`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AverageTurnover {
    #[serde(rename = "averageAnnualTurnover", default)]
    pub average_annual_turnover: Option<f64>,
    pub count: u64,
}

/// Ответ `GET /organizations/count-by-type-greater/{type}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeCount {
    pub count: u64,
}

/// Ответ `POST /orgmanager/merge/{id1}/{id2}/{name}/{address}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeResult {
    pub id: i64,
}

/// Ответ `POST /orgmanager/hire/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HireResult {
    #[serde(rename = "employeesCount")]
    pub employees_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_with_message() {
        let msg: ApiMessage = serde_json::from_str(r#"{"message":"not found"}"#).unwrap();
        assert_eq!(msg.message, "not found");
    }

    #[test]
    fn test_error_body_without_message() {
        let msg: ApiMessage = serde_json::from_str("{}").unwrap();
        assert_eq!(msg.message, "");
    }

    #[test]
    fn test_action_responses() {
        let merged: MergeResult = serde_json::from_str(r#"{"id":99}"#).unwrap();
        assert_eq!(merged.id, 99);

        let hired: HireResult = serde_json::from_str(r#"{"employeesCount":6}"#).unwrap();
        assert_eq!(hired.employees_count, 6);

        let deleted: DeletedCount = serde_json::from_str(r#"{"deletedCount":3}"#).unwrap();
        assert_eq!(deleted.deleted_count, 3);

        let avg: AverageTurnover =
            serde_json::from_str(r#"{"averageAnnualTurnover":1500.5,"count":4}"#).unwrap();
        assert_eq!(avg.average_annual_turnover, Some(1500.5));
        assert_eq!(avg.count, 4);
    }
}
