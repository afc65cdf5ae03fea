use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_request::generate_post::GenerateRequest;
use crate::http_handler::http_request::request_common::{
    JSONBodyHTTPRequestType, NoBodyHTTPRequestType,
};
use crate::http_handler::http_request::reset_post::ResetRequest;
use crate::{error, info, log, warn};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

/// File the generated site markup is written to, next to the executable.
const OUTPUT_FILE: &str = "output.html";
const RESET_COMMAND: &str = ":reset";
const QUIT_COMMAND: &str = ":quit";

/// Interactive console driving the generation backend: every line is a
/// website prompt, with two commands for session control. The generated
/// markup lands in [`OUTPUT_FILE`] after each successful prompt.
pub(crate) struct Console {
    /// The HTTP client for performing network requests.
    client: Arc<HTTPClient>,
    /// Where generated markup is persisted.
    output_path: PathBuf,
}

impl Console {
    pub(crate) fn new(client: Arc<HTTPClient>) -> Self {
        Self::with_output_path(client, OUTPUT_FILE)
    }

    fn with_output_path(client: Arc<HTTPClient>, path: impl Into<PathBuf>) -> Self {
        Self { client, output_path: path.into() }
    }

    /// Runs the console until `:quit`, end of input, or a broken stdin.
    pub(crate) async fn run(&self) {
        log!(
            "Type a website prompt to generate a site, {RESET_COMMAND} to start over, {QUIT_COMMAND} to exit."
        );
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            print!("> ");
            std::io::stdout().flush().ok();
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if !self.handle_line(line.trim()).await {
                        break;
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    error!("Failed to read console input: {e}");
                    break;
                }
            }
        }
    }

    /// Dispatches one console line. Returns `false` when the session
    /// should end.
    async fn handle_line(&self, line: &str) -> bool {
        match line {
            "" => {}
            QUIT_COMMAND => return false,
            RESET_COMMAND => self.reset().await,
            prompt => self.generate(prompt).await,
        }
        true
    }

    async fn generate(&self, prompt: &str) {
        let req = match GenerateRequest::new(prompt) {
            Ok(req) => req,
            Err(e) => {
                warn!("Ignoring prompt: {e}");
                return;
            }
        };
        info!("Requesting a site for the current prompt...");
        match req.send_request(&self.client).await {
            Ok(resp) => self.persist_markup(resp.markup()).await,
            Err(e) => error!("Generation failed: {e}"),
        }
    }

    async fn persist_markup(&self, markup: &str) {
        match tokio::fs::write(&self.output_path, markup).await {
            Ok(()) => {
                info!("Wrote {} bytes to {}", markup.len(), self.output_path.display());
            }
            Err(e) => error!("Could not write {}: {e}", self.output_path.display()),
        }
    }

    async fn reset(&self) {
        match (ResetRequest {}).send_request(&self.client).await {
            Ok(resp) => info!("Backend confirmed: {}", resp.message()),
            Err(e) => error!("Session reset failed: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_generate_persists_markup() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/generate");
            then.status(200)
                .json_body(serde_json::json!({"response": "<html><body>ok</body></html>"}));
        });
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("output.html");
        let console =
            Console::with_output_path(Arc::new(HTTPClient::new(&server.base_url())), &out);
        console.generate("a plain page").await;
        mock.assert();
        let written = std::fs::read_to_string(&out).unwrap();
        assert_eq!(written, "<html><body>ok</body></html>");
    }

    #[tokio::test]
    async fn test_quit_command_ends_session() {
        let console = Console::new(Arc::new(HTTPClient::default()));
        assert!(!console.handle_line(QUIT_COMMAND).await);
        assert!(console.handle_line("").await);
    }
}
