use once_cell::sync::Lazy;
use seat_leads::configuration;
use seat_leads::lead_form::LeadClient;
use seat_leads::startup::Application;
use seat_leads::telemetry;
use std::time::Duration;
use wiremock::MockServer;

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    // The sinks have different types, hence the duplicated branches
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber =
            telemetry::get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        telemetry::init_subscriber(subscriber).expect("Failed to init tracing");
    } else {
        let subscriber =
            telemetry::get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        telemetry::init_subscriber(subscriber).expect("Failed to init tracing");
    }
});

pub struct TestApp {
    pub address: String,
    // Stands in for the transactional email provider
    pub email_server: MockServer,
    pub recipient: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spin up an instance of our application on a random port, wired to a
    /// fresh mock email provider.
    pub async fn spawn_app() -> TestApp {
        Lazy::force(&TRACING);

        let email_server = MockServer::start().await;

        let config = {
            let mut c = configuration::get_configuration().expect("Failed to read configuration");
            // Use a random OS port
            c.application.port = 0;
            c.email_client.base_url = email_server.uri();
            c.email_client.timeout_milliseconds = 500;
            c
        };
        let recipient = config
            .email_client
            .recipient()
            .expect("Invalid recipient email address")
            .address()
            .to_string();

        let application = Application::build(config).expect("Failed to build application.");
        let port = application.port();
        // Launch the server as a background task
        let _ = tokio::spawn(application.run_until_stopped());

        TestApp {
            address: format!("http://127.0.0.1:{}", port),
            email_server,
            recipient,
            api_client: reqwest::Client::new(),
        }
    }

    pub async fn get_health_check(&self) -> reqwest::Response {
        self.api_client
            .get(&format!("{}/health_check", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(&format!("{}{}", &self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_contact(&self, body: &serde_json::Value) -> reqwest::Response {
        self.post_json("/api/contact", body).await
    }

    pub async fn post_raw_contact(&self, body: &'static str) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/api/contact", &self.address))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub fn lead_client(&self) -> LeadClient {
        LeadClient::with_timeout(&self.address, Duration::from_secs(5))
            .expect("Failed to build lead client")
    }

    /// The JSON bodies the mock provider received, in arrival order.
    pub async fn sent_emails(&self) -> Vec<serde_json::Value> {
        self.email_server
            .received_requests()
            .await
            .unwrap()
            .iter()
            .map(|request| serde_json::from_slice(&request.body).unwrap())
            .collect()
    }
}

pub fn full_lead() -> serde_json::Value {
    serde_json::json!({
        "name": "Ada Lovelace",
        "company": "Analytical Bistro",
        "email": "ada@bistro.example",
        "phone": "5551234567",
        "message": "We get 200 calls a night."
    })
}
