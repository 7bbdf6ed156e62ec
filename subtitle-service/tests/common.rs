use std::net::TcpListener;
use std::time::Duration;

use reqwest::Client;

use subtitle_configuration::AppConfig;
use subtitle_setup::build_and_run;

pub async fn setup_test_server() -> Result<(String, Client), Box<dyn std::error::Error>> {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        listener.local_addr()?.port()
    };

    let mut config = AppConfig::default();
    config.server.host = "127.0.0.1".to_string();
    config.server.port = port;
    let server_config = config.server.clone();

    tokio::spawn(async move {
        if let Err(error) = build_and_run(config, server_config).await {
            eprintln!("test server exited: {error}");
        }
    });

    let base_url = format!("http://127.0.0.1:{port}");
    let client = Client::new();
    for _ in 0..50 {
        if let Ok(response) = client.get(format!("{base_url}/health")).send().await {
            if response.status().is_success() {
                return Ok((base_url, client));
            }
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }

    Err("test server did not become ready".into())
}
