#![allow(dead_code, clippy::similar_names)]
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
mod console;
mod http_handler;
mod logger;

use crate::console::Console;
use crate::http_handler::http_client::{DEFAULT_BASE_URL, HTTPClient, shared_client};
use std::{env, sync::Arc};

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() {
    let base_url_var = env::var("SITEGEN_BASE_URL");
    let base_url = base_url_var.as_ref().map_or(DEFAULT_BASE_URL, |v| v.as_str());
    let client = if base_url == DEFAULT_BASE_URL {
        shared_client()
    } else {
        Arc::new(HTTPClient::new(base_url))
    };
    info!("Using site generation backend at {}", client.url());
    Console::new(client).run().await;
    info!("Console session closed.");
}
