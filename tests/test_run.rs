mod helpers;

use ankiwords::cli::args::Args;
use anyhow::Result;
use helpers::{closed_port_url, StubAnkiConnect, StubResponse};
use serde_json::json;
use std::io::Write;
use tempfile::NamedTempFile;

fn args_for(url: &str) -> Args {
    Args {
        config: None,
        url: Some(url.to_string()),
        verbose: 0,
    }
}

#[test]
fn given_running_anki_without_reviews_when_running_then_succeeds() -> Result<()> {
    // Arrange
    let stub = StubAnkiConnect::start(vec![
        StubResponse::ok(json!({"result": [], "error": null})),
        StubResponse::ok(json!({"result": [], "error": null})),
    ])?;

    // Act
    let result = ankiwords::run(args_for(stub.url()));

    // Assert
    assert!(result.is_ok());
    let queries: Vec<_> = stub
        .finish()
        .into_iter()
        .map(|request| request["params"]["query"].clone())
        .collect();
    assert_eq!(
        queries,
        vec![
            json!(r#"deck:"Refold JP1K v3" is:review"#),
            json!(r#"deck:"Japanese Core 6000 Full" is:review"#)
        ]
    );
    Ok(())
}

#[test]
fn given_anki_not_running_when_running_then_fails() -> Result<()> {
    let result = ankiwords::run(args_for(&closed_port_url()?));

    let err = result.expect_err("Unreachable endpoint must fail");
    assert!(format!("{err:#}").contains("AnkiConnect request failed"));
    Ok(())
}

fn config_file(content: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    write!(file, "{content}")?;
    Ok(file)
}

#[test]
fn given_url_flag_and_config_url_when_running_then_flag_wins() -> Result<()> {
    // Arrange
    let file = config_file(&format!(
        "[anki_connect]\nurl = \"{}\"\n",
        closed_port_url()?
    ))?;
    let stub = StubAnkiConnect::start(vec![
        StubResponse::ok(json!({"result": [], "error": null})),
        StubResponse::ok(json!({"result": [], "error": null})),
    ])?;
    let args = Args {
        config: Some(file.path().to_path_buf()),
        url: Some(stub.url().to_string()),
        verbose: 0,
    };

    // Act
    let result = ankiwords::run(args);

    // Assert
    assert!(result.is_ok(), "{result:?}");
    assert_eq!(stub.finish().len(), 2);
    Ok(())
}

#[test]
fn given_config_decks_when_running_then_queries_only_those_decks() -> Result<()> {
    // Arrange
    let stub = StubAnkiConnect::start(vec![
        StubResponse::ok(json!({"result": [3], "error": null})),
        StubResponse::ok(json!({"result": [
            {"noteId": 3, "fields": {"Word": {"value": "先生", "order": 0}}}
        ], "error": null})),
    ])?;
    let file = config_file(&format!(
        r#"
[anki_connect]
url = "{}"

[[decks]]
name = "Kaishi 1.5k"
layout = "direct-field"
"#,
        stub.url()
    ))?;
    let args = Args {
        config: Some(file.path().to_path_buf()),
        url: None,
        verbose: 0,
    };

    // Act
    let result = ankiwords::run(args);

    // Assert
    assert!(result.is_ok(), "{result:?}");
    let requests = stub.finish();
    assert_eq!(requests.len(), 2);
    assert_eq!(
        requests[0]["params"]["query"],
        r#"deck:"Kaishi 1.5k" is:review"#
    );
    assert_eq!(requests[1]["params"]["notes"], json!([3]));
    Ok(())
}
