//! Integration tests for the Extractor

#[cfg(test)]
mod tests {
    use crate::{guard_input, output_schema, Extractor, ExtractorConfig, ExtractorError};
    use notice2do_domain::Priority;
    use notice2do_llm::MockProvider;

    const NOTICE: &str = "Operating Systems - Homework 2 is due 2025-03-10 09:00 (KST). \
                          Submit a single PDF through the course portal. Late submissions are not accepted.";

    const VALID_RESPONSE: &str = r#"{
        "title": "Operating Systems Homework 2",
        "summary": [
            "Homework 2 is due March 10, 09:00",
            "Submit one PDF on the course portal",
            "No late submissions"
        ],
        "tasks": [
            {
                "task": "Submit Homework 2 as a PDF",
                "due_local": "2025-03-10T09:00",
                "priority": "high",
                "source_quote": "Homework 2 is due 2025-03-10 09:00 (KST)"
            },
            {
                "task": "Check the portal upload works",
                "due_local": null,
                "priority": "low",
                "source_quote": ""
            }
        ],
        "uncertainties": ["Page limit not stated"]
    }"#;

    fn extractor_with(llm: &MockProvider) -> Extractor<MockProvider> {
        Extractor::new(llm.clone(), ExtractorConfig::default())
    }

    #[tokio::test]
    async fn test_full_extraction_flow() {
        let llm = MockProvider::new(VALID_RESPONSE);
        let extractor = extractor_with(&llm);

        guard_input(NOTICE, extractor.config().min_input_chars).unwrap();
        let record = extractor.extract(NOTICE, Some("sk-test-key")).await.unwrap();

        assert_eq!(record.title, "Operating Systems Homework 2");
        assert_eq!(record.tasks.len(), 2);
        assert_eq!(record.tasks[0].due_local.as_deref(), Some("2025-03-10T09:00"));
        assert_eq!(record.tasks[1].priority, Priority::Low);
        assert_eq!(llm.call_count(), 1);
    }

    #[tokio::test]
    async fn test_request_carries_notice_and_schema() {
        let llm = MockProvider::new(VALID_RESPONSE);
        let extractor = extractor_with(&llm);

        extractor.extract(NOTICE, Some("sk-test-key")).await.unwrap();

        let request = llm.last_request().unwrap();
        assert_eq!(request.schema_name, "notice2do");
        assert!(request.user.contains(NOTICE));
        assert_eq!(request.schema, output_schema());
        assert!(!request.user.contains("sk-test-key"));
    }

    #[tokio::test]
    async fn test_missing_credential_makes_no_call() {
        let llm = MockProvider::new(VALID_RESPONSE);
        let extractor = extractor_with(&llm);

        for credential in [None, Some(""), Some("  \n")] {
            let result = extractor.extract(NOTICE, credential).await;
            assert!(matches!(result, Err(ExtractorError::Config(_))));
        }
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_non_ascii_credential_makes_no_call() {
        let llm = MockProvider::new(VALID_RESPONSE);
        let extractor = extractor_with(&llm);

        let result = extractor.extract(NOTICE, Some("\u{feff}sk-test-key")).await;

        match result {
            Err(ExtractorError::Config(msg)) => {
                assert!(msg.contains("65279"));
                assert!(!msg.contains("sk-test-key"));
            }
            other => panic!("Expected Config error, got {:?}", other),
        }
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_wrong_prefix_makes_no_call() {
        let llm = MockProvider::new(VALID_RESPONSE);
        let extractor = extractor_with(&llm);

        let result = extractor.extract(NOTICE, Some("api-key-123")).await;
        assert!(matches!(result, Err(ExtractorError::Config(_))));
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_backend_failure_is_upstream_error() {
        let mut llm = MockProvider::new(VALID_RESPONSE);
        llm.add_error(format!("[Notice]\n{}\n", NOTICE));
        let extractor = extractor_with(&llm);

        let result = extractor.extract(NOTICE, Some("sk-test-key")).await;
        assert!(matches!(result, Err(ExtractorError::Upstream(_))));
        assert_eq!(llm.call_count(), 1);
    }

    #[tokio::test]
    async fn test_extraction_with_invalid_json() {
        let llm = MockProvider::new("This is not JSON");
        let extractor = extractor_with(&llm);

        let result = extractor.extract(NOTICE, Some("sk-test-key")).await;
        assert!(matches!(result, Err(ExtractorError::Upstream(_))));
    }

    #[tokio::test]
    async fn test_fourth_priority_is_upstream_error() {
        let llm = MockProvider::new(VALID_RESPONSE.replace("\"low\"", "\"someday\""));
        let extractor = extractor_with(&llm);

        let result = extractor.extract(NOTICE, Some("sk-test-key")).await;
        assert!(matches!(result, Err(ExtractorError::Upstream(_))));
    }

    #[tokio::test]
    async fn test_bounds_violation_is_upstream_error() {
        let response = serde_json::json!({
            "title": "Too many tasks",
            "summary": ["a", "b", "c"],
            "tasks": (0..11).map(|i| serde_json::json!({
                "task": format!("task {}", i),
                "due_local": null,
                "priority": "mid",
                "source_quote": ""
            })).collect::<Vec<_>>(),
            "uncertainties": []
        });
        let llm = MockProvider::new(response.to_string());
        let extractor = extractor_with(&llm);

        let result = extractor.extract(NOTICE, Some("sk-test-key")).await;
        match result {
            Err(ExtractorError::Upstream(msg)) => assert!(msg.contains("tasks has 11 items")),
            other => panic!("Expected Upstream error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_each_extraction_is_one_call() {
        let llm = MockProvider::new(VALID_RESPONSE);
        let extractor = extractor_with(&llm);

        extractor.extract(NOTICE, Some("sk-test-key")).await.unwrap();
        extractor.extract(NOTICE, Some("sk-test-key")).await.unwrap();
        assert_eq!(llm.call_count(), 2);
    }

    #[tokio::test]
    async fn test_guard_rejects_short_input() {
        let config = ExtractorConfig::default();
        let result = guard_input("Quiz Friday", config.min_input_chars);
        assert!(matches!(result, Err(ExtractorError::InputTooShort { .. })));
    }
}
