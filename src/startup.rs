use crate::configuration::Settings;
use crate::constant::{CONTACT_PATH, LEAD_PATH};
use crate::domain::Mailbox;
use crate::email_client::EmailClient;
use crate::error::BizErrorEnum;
use crate::routes;
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

// A new type to hold the newly built server and its port
pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub fn build(config: Settings) -> Result<Self, BizErrorEnum> {
        let sender = config.email_client.sender()?;
        let recipient = config.email_client.recipient()?;
        let timeout = config.email_client.timeout();
        let email_client = EmailClient::new(
            config.email_client.base_url,
            sender,
            config.email_client.authorization_token,
            timeout,
        )?;

        let address = format!("{}:{}", config.application.host, config.application.port);
        let listener = TcpListener::bind(address).map_err(|e| {
            tracing::error!("Failed to bind to TcpListener");
            BizErrorEnum::BindTcpListenerError(e)
        })?;
        let port = listener
            .local_addr()
            .map_err(BizErrorEnum::BindTcpListenerError)?
            .port();

        let server = run(listener, email_client, recipient)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Only returns when the application is stopped.
    pub async fn run_until_stopped(self) -> Result<(), BizErrorEnum> {
        self.server.await.map_err(|e| {
            tracing::error!("Failed to run server.");
            BizErrorEnum::RunServerError(e)
        })
    }
}

// Retrieval from the context, in actix-web, is type-based: a bare `Mailbox`
// would be ambiguous once a second one is registered.
#[derive(Debug)]
pub struct LeadRecipient(pub Mailbox);

fn run(
    listener: TcpListener,
    email_client: EmailClient,
    recipient: Mailbox,
) -> Result<Server, BizErrorEnum> {
    // Re-use the same HTTP client across multiple requests
    let email_client = web::Data::new(email_client);
    let recipient = web::Data::new(LeadRecipient(recipient));

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(email_client.clone())
            .app_data(recipient.clone())
            .route("/health_check", web::get().to(routes::health_check))
            .route(CONTACT_PATH, web::post().to(routes::submit_lead))
            .route(LEAD_PATH, web::post().to(routes::submit_lead))
    })
    .listen(listener)
    .map_err(|e| {
        tracing::error!("Failed to listen to TcpListener");
        BizErrorEnum::ListenTcpListenerError(e)
    })?
    .run();

    // No .await here!
    Ok(server)
}
