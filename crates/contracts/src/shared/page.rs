use serde::{Deserialize, Serialize};

/// Срез результата с метаданными об общем размере и позиции.
///
/// Инвариант сервера: при `total_elements > 0` выполняется
/// `page < total_pages`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: usize,

    #[serde(rename = "totalPages")]
    pub total_pages: usize,

    #[serde(rename = "totalElements")]
    pub total_elements: usize,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_page_has_no_neighbours() {
        let page = Page::<i32> {
            content: Vec::new(),
            page: 0,
            total_pages: 0,
            total_elements: 0,
        };
        assert!(page.is_empty());
        assert!(!page.has_previous());
        assert!(!page.has_next());
    }

    #[test]
    fn test_single_page() {
        let page = Page {
            content: vec![1],
            page: 0,
            total_pages: 1,
            total_elements: 1,
        };
        assert!(!page.has_previous());
        assert!(!page.has_next());
    }

    #[test]
    fn test_middle_page() {
        let page = Page {
            content: vec![1, 2],
            page: 1,
            total_pages: 3,
            total_elements: 6,
        };
        assert!(page.has_previous());
        assert!(page.has_next());
    }

    #[test]
    fn test_deserialize_wire_names() {
        let json = r#"{"content":[1,2,3],"page":0,"totalPages":2,"totalElements":5}"#;
        let page: Page<i32> = serde_json::from_str(json).unwrap();
        assert_eq!(page.content, vec![1, 2, 3]);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.total_elements, 5);
        assert!(page.has_next());
    }
}
