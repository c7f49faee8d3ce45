use quiz_service::config::QuizConfig;
use quiz_service::services::providers::mock::{MockEmbedder, MockTextGenerator};
use quiz_service::services::providers::TextGenerator;
use quiz_service::services::InMemorySessionStore;
use quiz_service::startup::Application;
use reqwest::multipart;
use std::sync::Arc;

/// A plain-text study document long enough to clear the minimum-length check
/// and wide enough to produce several chunks.
pub const SAMPLE_DOCUMENT: &str = "Photosynthesis is the process by which green plants, algae, and certain bacteria convert light energy into chemical energy stored as glucose. The process takes place in chloroplasts, specialized organelles that contain the light-absorbing pigment chlorophyll. Photosynthesis proceeds in two coupled stages: the light-dependent reactions and the Calvin cycle.

In the light-dependent reactions, photons strike chlorophyll molecules embedded in the thylakoid membranes. The absorbed energy splits water molecules, releasing oxygen as a by-product and driving the synthesis of ATP and NADPH. These energy carriers power the second stage.

The Calvin cycle operates in the stroma, where the enzyme RuBisCO fixes atmospheric carbon dioxide into an organic molecule. Through a series of reduction steps fueled by ATP and NADPH, the cycle produces glyceraldehyde-3-phosphate, a three-carbon sugar that the plant later assembles into glucose, starch, and cellulose.

Environmental factors influence the rate of photosynthesis. Light intensity, carbon dioxide concentration, and temperature each act as limiting factors; increasing one raises the rate only until another becomes scarce. Farmers exploit this by enriching greenhouse air with carbon dioxide to accelerate crop growth.";

pub struct TestApp {
    pub address: String,
}

impl TestApp {
    /// Spawn the app with mock providers and a default canned quiz response.
    pub async fn spawn() -> Self {
        Self::spawn_with_generator(Arc::new(MockTextGenerator::default())).await
    }

    /// Spawn the app with a specific canned text generator.
    pub async fn spawn_with_generator(generator: Arc<dyn TextGenerator>) -> Self {
        let mut config = QuizConfig::load().expect("Failed to load configuration");
        config.common.port = 0; // Random port for testing

        let app = Application::build_with_providers(
            config,
            Arc::new(InMemorySessionStore::new()),
            Arc::new(MockEmbedder::default()),
            generator,
        )
        .await
        .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address }
    }

    /// Upload `content` as a plain-text file and return the raw response.
    pub async fn upload_text(&self, content: &str, filename: &str) -> reqwest::Response {
        let form = multipart::Form::new().part(
            "file",
            multipart::Part::bytes(content.as_bytes().to_vec())
                .file_name(filename.to_string())
                .mime_str("text/plain")
                .unwrap(),
        );

        reqwest::Client::new()
            .post(format!("{}/api/upload", self.address))
            .multipart(form)
            .send()
            .await
            .expect("Failed to execute upload request")
    }

    /// Upload the sample document and return its session id.
    pub async fn upload_session(&self) -> String {
        let response = self.upload_text(SAMPLE_DOCUMENT, "sample.txt").await;
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
        body["session_id"]
            .as_str()
            .expect("missing session_id")
            .to_string()
    }

    /// POST the given JSON body to /api/generate.
    pub async fn generate(&self, body: serde_json::Value) -> reqwest::Response {
        reqwest::Client::new()
            .post(format!("{}/api/generate", self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute generate request")
    }
}
