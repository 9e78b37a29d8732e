//! Wiremock payload builders for the repository view BDD tests.

use serde_json::{Value, json};
use wiremock::ResponseTemplate;

/// Repository payload as returned by `GET /repos/{owner}/{name}`.
pub(crate) fn repository_payload(owner: &str, name: &str) -> Value {
    json!({
        "name": name,
        "description": format!("Tools maintained by {owner}"),
        "owner": {
            "login": owner,
            "avatar_url": format!("https://avatars.example.test/{owner}.png"),
        }
    })
}

/// Issue page payload whose titles are prefixed with `title_prefix`.
pub(crate) fn issue_payloads(title_prefix: &str, first_id: u64, count: u64) -> Value {
    let issues: Vec<Value> = (first_id..first_id + count)
        .map(|id| {
            json!({
                "id": id,
                "title": format!("{title_prefix} {id}"),
                "html_url": format!("https://github.com/octo/tools/issues/{id}"),
                "user": {
                    "login": "alice",
                    "avatar_url": "https://avatars.example.test/alice.png",
                },
                "labels": [{ "id": 1, "name": "bug" }]
            })
        })
        .collect();
    Value::Array(issues)
}

/// JSON response with `status` and `body`.
pub(crate) fn json_response(status: u16, body: &Value) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(body)
}
