use apikey_gate::{router::build_router, state::AppState};
use std::time::Duration;
use tokio::task::JoinHandle;

use super::test_config;

pub struct TestServer {
    pub base_url: String,
    handle: JoinHandle<()>,
}

impl TestServer {
    pub async fn start() -> Result<Self, Box<dyn std::error::Error>> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let app = build_router(AppState::new(&test_config(addr.port())));

        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Server failed to start");
        });

        tokio::time::sleep(Duration::from_millis(50)).await;

        Ok(TestServer {
            base_url: format!("http://127.0.0.1:{}", addr.port()),
            handle,
        })
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
