//! Unit tests for the github_client crate.

use super::*; // Import items from lib.rs
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TEST_TOKEN: &str = "ghp_test_token_123";

fn create_test_client(mock_server: &MockServer) -> GitHubClient {
    let token = SecretString::from(TEST_TOKEN.to_string());
    let octocrab = create_token_client(Some(&token), Some(&mock_server.uri()))
        .expect("Failed to create test client");
    GitHubClient::new(octocrab)
}

fn not_found_body() -> serde_json::Value {
    json!({
        "message": "Not Found",
        "documentation_url": "https://docs.github.com/rest"
    })
}

#[tokio::test]
async fn test_get_account_success() {
    let mock_server = MockServer::start().await;
    let username = "octocat";

    Mock::given(method("GET"))
        .and(path(format!("/users/{username}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "login": username,
            "id": 583231,
            "node_id": "MDQ6VXNlcjU4MzIzMQ==",
            "html_url": "https://github.com/octocat",
            "type": "User",
            "name": "The Octocat",
            "public_repos": 8
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);

    let result = client.get_account(username).await;

    if let Err(e) = &result {
        eprintln!("get_account error: {e:?}");
    }
    let profile = result.unwrap();
    assert_eq!(profile.login(), Some(username));
    assert_eq!(profile.fields()["public_repos"], 8);
}

#[tokio::test]
async fn test_get_account_sends_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/octocat"))
        .and(header("authorization", format!("Bearer {TEST_TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "login": "octocat" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);

    assert!(client.get_account("octocat").await.is_ok());
}

#[tokio::test]
async fn test_get_account_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/ghost-account"))
        .respond_with(ResponseTemplate::new(404).set_body_json(not_found_body()))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);

    let result = client.get_account("ghost-account").await;

    assert!(matches!(result, Err(Error::NotFound)));
}

#[tokio::test]
async fn test_get_account_bad_credentials() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/octocat"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Bad credentials",
            "documentation_url": "https://docs.github.com/rest"
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);

    let result = client.get_account("octocat").await;

    match result {
        Err(Error::AuthError(message)) => assert_eq!(message, "Bad credentials"),
        other => panic!("Expected AuthError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_account_rate_limited() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/octocat"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "message": "API rate limit exceeded for 127.0.0.1.",
            "documentation_url": "https://docs.github.com/rest/overview/resources-in-the-rest-api#rate-limiting"
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);

    let result = client.get_account("octocat").await;

    assert!(matches!(result, Err(Error::RateLimitExceeded)));
}

#[tokio::test]
async fn test_get_account_forbidden_without_rate_limit() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/octocat"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "message": "Resource not accessible by integration"
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);

    let result = client.get_account("octocat").await;

    assert!(matches!(result, Err(Error::ApiError { status: 403, .. })));
}

#[tokio::test]
async fn test_list_repositories_success() {
    let mock_server = MockServer::start().await;
    let username = "octocat";

    Mock::given(method("GET"))
        .and(path(format!("/users/{username}/repos")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 1296269,
                "name": "Hello-World",
                "full_name": "octocat/Hello-World",
                "html_url": "https://github.com/octocat/Hello-World",
                "description": "My first repository on GitHub!",
                "created_at": "2011-01-26T19:01:12Z",
                "updated_at": "2011-01-26T19:14:43Z",
                "pushed_at": "2011-01-26T19:06:43Z"
            },
            {
                "id": 1300192,
                "name": "Spoon-Knife",
                "full_name": "octocat/Spoon-Knife",
                "html_url": "https://github.com/octocat/Spoon-Knife",
                "description": null,
                "created_at": "2011-01-27T19:30:43Z",
                "updated_at": "2011-01-27T19:30:43Z",
                "pushed_at": null
            }
        ])))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);

    let result = client.list_repositories(username).await;

    if let Err(e) = &result {
        eprintln!("list_repositories error: {e:?}");
    }
    let repositories = result.unwrap();
    assert_eq!(repositories.len(), 2);
    assert_eq!(repositories[0].name, "Hello-World");
    assert_eq!(repositories[1].name, "Spoon-Knife");
    assert!(repositories[1].description.is_none());
    assert!(repositories[1].pushed_at.is_none());
}

#[tokio::test]
async fn test_list_repositories_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/new-user/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);

    let repositories = client.list_repositories("new-user").await.unwrap();

    assert!(repositories.is_empty());
}

#[tokio::test]
async fn test_list_repositories_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/ghost-account/repos"))
        .respond_with(ResponseTemplate::new(404).set_body_json(not_found_body()))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);

    let result = client.list_repositories("ghost-account").await;

    assert!(matches!(result, Err(Error::NotFound)));
}

#[tokio::test]
async fn test_get_repository_success() {
    let mock_server = MockServer::start().await;
    let owner = "test-owner";
    let repo = "test-repo";

    Mock::given(method("GET"))
        .and(path(format!("/repos/{owner}/{repo}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 123456,
            "name": repo,
            "full_name": format!("{owner}/{repo}"),
            "owner": {
                "login": owner,
                "id": 78910,
                "type": "User",
                "site_admin": false
            },
            "private": false,
            "url": "https://api.github.com/repos/test-owner/test-repo",
            "stargazers_count": 42
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);

    let result = client.get_repository(owner, repo).await;

    if let Err(e) = &result {
        eprintln!("get_repository error: {e:?}");
    }
    let details = result.unwrap();
    assert_eq!(details.name(), Some(repo));
    assert_eq!(details.full_name(), Some("test-owner/test-repo"));
    assert_eq!(details.fields()["stargazers_count"], 42);
    assert_eq!(details.fields()["owner"]["login"], owner);
}

#[tokio::test]
async fn test_get_repository_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/does-not-exist"))
        .respond_with(ResponseTemplate::new(404).set_body_json(not_found_body()))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);

    let result = client.get_repository("octocat", "does-not-exist").await;

    assert!(matches!(result, Err(Error::NotFound)));
}

#[tokio::test]
async fn test_get_repository_unprocessable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/Hello-World"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "Validation Failed"
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);

    let result = client.get_repository("octocat", "Hello-World").await;

    match result {
        Err(Error::ApiError { status, message }) => {
            assert_eq!(status, 422);
            assert_eq!(message, "Validation Failed");
        }
        other => panic!("Expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_anonymous_client_does_not_send_authorization() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/octocat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "login": "octocat" })))
        .mount(&mock_server)
        .await;

    let octocrab = create_token_client(None, Some(&mock_server.uri())).unwrap();
    let client = GitHubClient::new(octocrab);

    let result = client.get_account("octocat").await;
    assert!(result.is_ok());

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[test]
fn test_create_token_client_rejects_invalid_base_uri() {
    let result = create_token_client(None, Some("not a uri"));

    assert!(matches!(result, Err(Error::AuthError(_))));
}
