use anyhow::{Context, Result};
use serde_json::Value;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

/// Canned HTTP response served by [`StubAnkiConnect`]
#[derive(Debug, Clone)]
pub struct StubResponse {
    pub status: u16,
    pub body: String,
}

impl StubResponse {
    pub fn ok(body: Value) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
        }
    }

    pub fn raw(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }
}

/// One-shot local HTTP server answering AnkiConnect requests from a script
///
/// Each scripted response serves exactly one connection. Once the script is
/// exhausted the listener closes and further requests are refused.
pub struct StubAnkiConnect {
    url: String,
    requests: Arc<Mutex<Vec<Value>>>,
    handle: Option<JoinHandle<()>>,
}

impl StubAnkiConnect {
    pub fn start(responses: Vec<StubResponse>) -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").context("Failed to bind stub server")?;
        let url = format!("http://{}", listener.local_addr()?);
        let requests = Arc::new(Mutex::new(Vec::new()));

        let recorded = Arc::clone(&requests);
        let handle = thread::spawn(move || {
            for response in responses {
                let Ok((stream, _)) = listener.accept() else {
                    return;
                };
                if let Err(e) = serve(stream, &response, &recorded) {
                    eprintln!("stub server error: {e:#}");
                }
            }
        });

        Ok(Self {
            url,
            requests,
            handle: Some(handle),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// JSON bodies received so far, in arrival order
    #[allow(dead_code)]
    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// Wait for the script to finish and return every request received
    pub fn finish(mut self) -> Vec<Value> {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
        self.requests()
    }
}

fn serve(stream: TcpStream, response: &StubResponse, recorded: &Mutex<Vec<Value>>) -> Result<()> {
    let mut reader = BufReader::new(stream.try_clone()?);

    let mut content_length = 0usize;
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse()?;
            }
        }
    }

    let mut body = vec![0u8; content_length];
    reader.read_exact(&mut body)?;
    let request: Value = serde_json::from_slice(&body).context("Request body is not JSON")?;
    if let Ok(mut requests) = recorded.lock() {
        requests.push(request);
    }

    let reason = match response.status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    };
    let mut stream = stream;
    write!(
        stream,
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        response.status,
        reason,
        response.body.len(),
        response.body
    )?;
    stream.flush()?;
    Ok(())
}

/// URL of a local port with nothing listening on it
#[allow(dead_code)]
pub fn closed_port_url() -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{addr}"))
}
