#[cfg(test)]
mod image_fetch_service {

    use std::path::PathBuf;
    use std::sync::Arc;

    use serde_json::json;
    use uuid::Uuid;

    use image_fetch::image_client::reqwest_image_client::ReqwestImageClient;
    use image_fetch::image_fetch_service::fetch_outcome::FetchOutcome;
    use image_fetch::image_fetch_service::fetch_settings::FetchSettings;
    use image_fetch::image_fetch_service::image_fetch_service::ImageFetchService;
    use image_fetch::image_fetch_service::image_fetch_service_error::ImageFetchServiceError;

    use wiremock::matchers::{body_json, header, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF, 0xFE, 0x00, 0x03, 0x21, 0xFF, 0xD9];

    fn output_path() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("image-fetch-it-{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        dir.join("output.jpg")
    }

    fn service(endpoint: String, prompt: &str, output: PathBuf) -> ImageFetchService {
        ImageFetchService::new(
            Arc::new(ReqwestImageClient::default()),
            FetchSettings {
                endpoint,
                api_key: "123456789".to_string(),
                prompt: prompt.to_string(),
                output,
            },
        )
    }

    #[tokio::test]
    async fn should_write_the_returned_image_to_the_output_file() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(header("Authorization", "Bearer 123456789"))
            .and(header("Content-Type", "application/json"))
            .and(body_json(json!({ "prompt": "a lighthouse at dusk" })))
            .respond_with(ResponseTemplate::new(200).set_body_raw(JPEG, "image/jpeg"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let output = output_path();
        let outcome = service(mock_server.uri(), "a lighthouse at dusk", output.clone())
            .fetch()
            .await
            .unwrap();

        assert_eq!(std::fs::read(&output).unwrap(), JPEG);
        assert_eq!(outcome.to_string(), format!("Image saved as {}", output.display()));
    }

    #[tokio::test]
    async fn should_print_a_diagnostic_for_a_missing_endpoint() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
            .mount(&mock_server)
            .await;

        let output = output_path();
        let outcome = service(mock_server.uri(), "a cat", output.clone())
            .fetch()
            .await
            .unwrap();

        assert!(!output.exists());
        assert_eq!(
            outcome,
            FetchOutcome::Rejected {
                status: 404,
                text: "not found".to_string(),
            }
        );
        assert_eq!(outcome.to_string(), "Error: 404, not found");
    }

    #[tokio::test]
    async fn should_produce_the_same_file_when_run_twice() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(JPEG, "image/jpeg"))
            .expect(2)
            .mount(&mock_server)
            .await;

        let output = output_path();
        let service = service(mock_server.uri(), "a cat", output.clone());

        service.fetch().await.unwrap();
        let first = std::fs::read(&output).unwrap();

        service.fetch().await.unwrap();
        let second = std::fs::read(&output).unwrap();

        assert_eq!(first, JPEG);
        assert_eq!(second, JPEG);
    }

    #[tokio::test]
    async fn should_fail_without_writing_when_the_endpoint_is_unreachable() {
        let output = output_path();

        let result = service("http://127.0.0.1:1/".to_string(), "a cat", output.clone())
            .fetch()
            .await;

        assert!(matches!(result, Err(ImageFetchServiceError::Client(_))));
        assert!(!output.exists());
    }
}
