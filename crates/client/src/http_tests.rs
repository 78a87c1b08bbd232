use super::*;
use tf_core::{HostId, ResultId};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sample_host_json() -> serde_json::Value {
    serde_json::json!({
        "Id": 7, "GridId": 1, "Type": "tests", "Status": "Waiting for tests...",
        "Hostname": "agent-1", "Cores": 8, "RAM": 16,
        "CreationTimestamp": "2026-01-01T00:00:00Z", "LastUpdateTimestamp": "2026-01-01T00:00:00Z"
    })
}

#[tokio::test]
async fn register_host_sends_pascal_case_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/register-host"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_host_json()))
        .mount(&server)
        .await;

    let client = FarmClient::new(server.uri(), std::time::Duration::from_secs(5));
    let info = SystemInfo {
        hostname: "agent-1".to_string(),
        ram_gib: 16,
        cores: 8,
        host_type: "tests",
    };
    let host = client.register_host("linux-x64", &info).await.expect("register");
    assert_eq!(host.id, HostId::new(7));
}

#[tokio::test]
async fn get_next_job_returns_none_on_empty_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get-next-job"))
        .and(query_param("GridName", "linux-x64"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(Vec::new()))
        .mount(&server)
        .await;

    let client = FarmClient::new(server.uri(), std::time::Duration::from_secs(5));
    let job = client.get_next_job("linux-x64").await.expect("get_next_job");
    assert!(job.is_none());
}

#[tokio::test]
async fn get_next_job_returns_job_when_present() {
    let server = MockServer::start().await;
    let job_json = serde_json::json!({
        "Id": 1, "Type": "test", "Status": "scheduled",
        "GridName": "linux-x64", "RunId": 2, "ResultId": 3
    });
    Mock::given(method("GET"))
        .and(path("/get-next-job"))
        .respond_with(ResponseTemplate::new(200).set_body_json(job_json))
        .mount(&server)
        .await;

    let client = FarmClient::new(server.uri(), std::time::Duration::from_secs(5));
    let job = client.get_next_job("linux-x64").await.expect("get_next_job").expect("some job");
    assert_eq!(job.result_id, ResultId::new(3));
}

#[tokio::test]
async fn non_2xx_response_yields_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/unregister-host"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = FarmClient::new(server.uri(), std::time::Duration::from_secs(5));
    let err = client.unregister_host(HostId::new(1)).await.expect_err("should fail");
    assert!(matches!(err, FarmApiError::Status { status: 500, .. }));
}

#[tokio::test]
async fn upload_diff_sends_multipart_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload-diff"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = FarmClient::new(server.uri(), std::time::Duration::from_secs(5));
    client
        .upload_diff(ResultId::new(1), "widget_basic", "passed", None)
        .await
        .expect("upload_diff");
}

#[tokio::test]
async fn upload_diff_attaches_report_file_when_present() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload-diff"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let report_path = dir.path().join("report.html");
    std::fs::write(&report_path, "<html></html>").expect("write report");

    let client = FarmClient::new(server.uri(), std::time::Duration::from_secs(5));
    client
        .upload_diff(ResultId::new(1), "widget_basic", "failed", Some(&report_path))
        .await
        .expect("upload_diff");
}

#[tokio::test]
async fn complete_test_posts_pascal_case_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/complete-test"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = FarmClient::new(server.uri(), std::time::Duration::from_secs(5));
    client
        .complete_test(CompleteTestRequest {
            test_result_id: ResultId::new(1),
            status: "passed".to_string(),
            execution_output: "ok".to_string(),
            atomic_results: None,
        })
        .await
        .expect("complete_test");
}
