use super::*;
use chrono::Utc;
use tf_adapters::{FakeArchiver, FakeRepoSync};
use tf_client::{FakeFarmClient, RecordedCall};
use tf_core::{
    DefinitionId, Host, HostId, Job, JobDefinition, JobId, MagicVars, Repository, RepositoryId, ResultId, Run, TestResult,
};

fn sample_info() -> SystemInfo {
    SystemInfo {
        hostname: "agent-host-1".to_string(),
        ram_gib: 16,
        cores: 4,
        host_type: "tests",
    }
}

fn sample_ctx(root: &std::path::Path, farm: Arc<FakeFarmClient>) -> JobContext<FakeFarmClient, FakeRepoSync, FakeArchiver> {
    JobContext {
        farm,
        repo_sync: Arc::new(FakeRepoSync::new()),
        archiver: Arc::new(FakeArchiver::new()),
        vars: MagicVars::new(root.join("repos"), root.join("work"), root.join("temp")),
        hostname: "agent-host-1".to_string(),
        pythonpath_var: "PYTHONPATH".to_string(),
    }
}

fn sample_repository() -> Repository {
    Repository {
        id: RepositoryId::new(1),
        name: "widgets".to_string(),
        url: "https://git.example.test/widgets.git".to_string(),
        user: "svc".to_string(),
        token: "tok".to_string(),
        is_active: true,
    }
}

#[tokio::test]
async fn registration_failure_terminates_immediately() {
    let root = tempfile::tempdir().expect("tempdir");
    let farm = Arc::new(FakeFarmClient::new());
    // No host seeded: register_host will fail.
    let loop_ = AgentLoop::new(sample_ctx(root.path(), farm.clone()), farm, "default", StopSignal::new());

    let result = loop_.run(&sample_info()).await;
    assert!(result.is_err());
}

#[tokio::test(start_paused = true)]
async fn runs_a_job_then_stops_on_signal() {
    let root = tempfile::tempdir().expect("tempdir");
    let farm = Arc::new(FakeFarmClient::new());
    farm.set_registered_host(Host {
        id: HostId::new(1),
        grid_id: 1,
        host_type: "tests".to_string(),
        status: "Waiting for tests...".to_string(),
        hostname: "agent-host-1".to_string(),
        cores: 4,
        ram: Some(16),
        created: Utc::now(),
        updated: Utc::now(),
    });

    let spec_dir = root.path().join("repos").join("widgets").join("suite1");
    std::fs::create_dir_all(&spec_dir).expect("create spec dir");
    let case = tf_jobspec::TestCase {
        name: "t1".to_string(),
        description: String::new(),
        owner: "team".to_string(),
        r#type: "native".to_string(),
        command: "echo done > output.txt".to_string(),
        output: "output.txt".to_string(),
        pre_steps: Vec::new(),
        post_steps: Vec::new(),
        diffs: Vec::new(),
        atomic_results: None,
    };
    std::fs::write(spec_dir.join("test.testfarm"), serde_json::to_string(&case).expect("serialize")).expect("write spec");

    farm.push_next_job(Some(Job {
        id: JobId::new(1),
        kind: tf_core::JobKind::Test,
        status: "scheduled".to_string(),
        grid_name: "default".to_string(),
        run_id: RunId::new(7),
        result_id: ResultId::new(42),
    }));
    farm.push_scheduled_test(TestResult {
        id: ResultId::new(42),
        status: "scheduled".to_string(),
        execution_start: None,
        execution_end: None,
        execution_output: None,
        run: Run {
            id: RunId::new(7),
            repository_name: "widgets".to_string(),
            suite_name: "suite1".to_string(),
            name: "run-7".to_string(),
            grid_name: "default".to_string(),
            created: Utc::now(),
            artifacts: Vec::new(),
        },
        test: JobDefinition {
            id: DefinitionId::new(1),
            repository_name: "widgets".to_string(),
            suite_name: "suite1".to_string(),
            path: "suite1".to_string(),
            name: "t1".to_string(),
            owner: "team".to_string(),
            created: Utc::now(),
        },
        repository: sample_repository(),
    });

    let stop = StopSignal::new();
    let loop_ = AgentLoop::new(sample_ctx(root.path(), farm.clone()), farm.clone(), "default", stop.clone());

    let handle = tokio::spawn(async move { loop_.run(&sample_info()).await });

    // Let the spawned task register and dispatch the single queued job
    // before we signal it to stop. The job runs a real subprocess, so poll
    // for its completion rather than assuming a fixed number of yields.
    for _ in 0..5000 {
        if farm.calls().iter().any(|c| matches!(c, RecordedCall::CompleteTest(_))) {
            break;
        }
        tokio::task::yield_now().await;
    }
    stop.signal();

    let result = tokio::time::timeout(Duration::from_secs(5), handle).await.expect("loop did not stop in time").expect("join");
    assert!(result.is_ok());

    let calls = farm.calls();
    assert!(calls.iter().any(|c| matches!(c, RecordedCall::CompleteTest(req) if req.status == "passed")));
    assert!(calls.iter().any(|c| matches!(c, RecordedCall::UnregisterHost { .. })));
    assert!(calls.iter().any(|c| matches!(c,
        RecordedCall::UpdateHostStatus { status, .. } if status == HostStatus::Offline.as_str()
    )));
}
