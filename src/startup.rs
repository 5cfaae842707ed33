use std::net::SocketAddr;

use anyhow::Result;
use axum::{
    routing::{get, IntoMakeService},
    Router, Server,
};
use hyper::server::conn::AddrIncoming;

use crate::{
    configuration::Settings,
    routes::{health_check, hello},
};

pub struct App {
    server: Server<AddrIncoming, IntoMakeService<Router>>,
}

impl App {
    pub async fn build(config: &Settings) -> Result<Self> {
        // The hosting layer owns routing; the function itself never looks at
        // method or path, so it backs every route except the liveness probe.
        let app = Router::new()
            .route("/health_check", get(health_check))
            .fallback(hello);

        let address = format!("{}:{}", config.application.host, config.application.port);
        let server = Server::bind(&address.parse()?).serve(app.into_make_service());

        Ok(Self { server })
    }

    pub async fn run(self) -> Result<()> {
        self.server.await?;

        Ok(())
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.server.local_addr()
    }
}
