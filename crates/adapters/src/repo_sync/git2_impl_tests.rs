use super::*;

fn commit_file(repo: &git2::Repository, name: &str, content: &str) {
    std::fs::write(repo.path().parent().expect("workdir").join(name), content).expect("write");
    let mut index = repo.index().expect("index");
    index.add_path(std::path::Path::new(name)).expect("add");
    index.write().expect("write index");
    let tree_id = index.write_tree().expect("write tree");
    let tree = repo.find_tree(tree_id).expect("find tree");
    let sig = git2::Signature::now("tester", "tester@example.test").expect("sig");
    let parents: Vec<git2::Commit> = match repo.head().ok().and_then(|h| h.peel_to_commit().ok()) {
        Some(c) => vec![c],
        None => vec![],
    };
    let parent_refs: Vec<&git2::Commit> = parents.iter().collect();
    repo.commit(Some("HEAD"), &sig, &sig, "commit", &tree, &parent_refs)
        .expect("commit");
}

#[test]
fn pull_fast_forwards_to_new_upstream_commit() {
    let origin_dir = tempfile::tempdir().expect("tempdir");
    let origin = git2::Repository::init(origin_dir.path()).expect("init origin");
    commit_file(&origin, "a.txt", "v1");

    let clone_dir = tempfile::tempdir().expect("tempdir");
    let origin_url = format!("file://{}", origin_dir.path().display());
    let _clone = git2::Repository::clone(&origin_url, clone_dir.path()).expect("clone");

    commit_file(&origin, "a.txt", "v2");

    pull(&origin_url, clone_dir.path()).expect("pull");

    let content = std::fs::read_to_string(clone_dir.path().join("a.txt")).expect("read");
    assert_eq!(content, "v2");
}

#[test]
fn pull_is_a_noop_when_already_up_to_date() {
    let origin_dir = tempfile::tempdir().expect("tempdir");
    let origin = git2::Repository::init(origin_dir.path()).expect("init origin");
    commit_file(&origin, "a.txt", "v1");

    let clone_dir = tempfile::tempdir().expect("tempdir");
    let origin_url = format!("file://{}", origin_dir.path().display());
    git2::Repository::clone(&origin_url, clone_dir.path()).expect("clone");

    pull(&origin_url, clone_dir.path()).expect("pull should be a no-op");
    let content = std::fs::read_to_string(clone_dir.path().join("a.txt")).expect("read");
    assert_eq!(content, "v1");
}
