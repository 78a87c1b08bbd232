use super::*;
use tf_adapters::{FakeArchiver, FakeRepoSync};
use tf_client::FakeFarmClient;
use tf_core::{Repository, RepositoryId};

fn sample_repo() -> Repository {
    Repository {
        id: RepositoryId::new(1),
        name: "widgets".to_string(),
        url: "https://git.example.test/widgets.git".to_string(),
        user: "svc".to_string(),
        token: "tok".to_string(),
        is_active: true,
    }
}

fn sample_ctx(root: &std::path::Path) -> JobContext<FakeFarmClient, FakeRepoSync, FakeArchiver> {
    JobContext {
        farm: Arc::new(FakeFarmClient::new()),
        repo_sync: Arc::new(FakeRepoSync::new()),
        archiver: Arc::new(FakeArchiver::new()),
        vars: MagicVars::new(root.join("repos"), root.join("work"), root.join("temp")),
        hostname: "agent-host-1".to_string(),
        pythonpath_var: "PYTHONPATH".to_string(),
    }
}

#[tokio::test]
async fn clean_and_clone_cleans_work_dir_and_syncs_repository() {
    let root = tempfile::tempdir().expect("tempdir");
    std::fs::create_dir_all(root.path().join("work")).expect("create");
    std::fs::write(root.path().join("work").join("stale.txt"), b"old").expect("write");
    let ctx = sample_ctx(root.path());

    let local_repo = clean_and_clone(&ctx, &sample_repo()).await.expect("clean_and_clone");

    assert_eq!(local_repo, root.path().join("repos").join("widgets"));
    assert!(local_repo.exists());
    assert!(!root.path().join("work").join("stale.txt").exists());
    assert_eq!(ctx.repo_sync.calls(), vec!["widgets".to_string()]);
}

#[test]
fn build_step_env_prepends_local_repo() {
    let env = build_step_env("PYTHONPATH", Path::new("/opt/checkout"));
    let value = env.get("PYTHONPATH").expect("pythonpath present");
    let parts: Vec<_> = std::env::split_paths(value).collect();
    assert_eq!(parts[0], Path::new("/opt/checkout"));
}

#[tokio::test]
async fn read_text_lossy_reads_utf8_file_contents() {
    let root = tempfile::tempdir().expect("tempdir");
    let path = root.path().join("out.txt");
    std::fs::write(&path, "hello\n").expect("write");

    let content = read_text_lossy(&path).await.expect("read");
    assert_eq!(content, "hello\n");
}

#[tokio::test]
async fn read_text_lossy_fails_on_missing_file() {
    let root = tempfile::tempdir().expect("tempdir");
    let path = root.path().join("missing.txt");

    let result = read_text_lossy(&path).await;
    assert!(result.is_err());
}
