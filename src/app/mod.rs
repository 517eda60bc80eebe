use std::{
    io,
    net::{IpAddr, SocketAddr},
};

use axum::{http::Request, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::{airtable::AirtableClient, config::Settings};

mod api;
mod error;
mod ui;

#[derive(Clone)]
pub struct AppState {
    airtable_client: AirtableClient,
}

fn app_router() -> Router<AppState> {
    api::router()
        .merge(ui::router())
        .fallback(ui::not_found::not_found_page)
}

pub struct App {
    listener: TcpListener,
    address: SocketAddr,
    airtable_client: AirtableClient,
}

impl App {
    pub async fn with(config: Settings) -> io::Result<Self> {
        let airtable_client = AirtableClient::new(
            config.airtable.api_base_url.clone(),
            config.airtable.credentials(),
            config.airtable.timeout(),
        );
        if !airtable_client.has_credentials() {
            tracing::warn!("Airtable credentials are incomplete, RSVP submissions will be rejected");
        }

        let listener = TcpListener::bind(format!(
            "{}:{}",
            config.application.host, config.application.port
        ))
        .await?;
        let address = listener.local_addr()?;

        Ok(Self {
            listener,
            address,
            airtable_client,
        })
    }

    pub fn host(&self) -> IpAddr {
        self.address.ip()
    }

    pub fn port(&self) -> u16 {
        self.address.port()
    }

    pub async fn serve(self) -> Result<(), io::Error> {
        let app = app_router()
            .with_state(AppState {
                airtable_client: self.airtable_client,
            })
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                    let id = uuid::Uuid::new_v4();
                    tracing::info_span!(
                        "request",
                        method = ?request.method(),
                        uri = ?request.uri(),
                        %id,
                    )
                }),
            );

        axum::serve(self.listener, app.into_make_service()).await
    }
}
