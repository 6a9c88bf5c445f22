#![allow(dead_code)]

use git2::{Oid, Repository, Signature};
use std::path::Path;
use tempfile::TempDir;

/// Temporary git repository with a configured user
pub fn init_repo() -> (TempDir, Repository) {
    let temp_dir = TempDir::new().expect("Could not create temp dir");
    let repo = Repository::init(temp_dir.path()).expect("Could not init git repo");

    {
        let mut config = repo.config().expect("Could not get config");
        config
            .set_str("user.name", "Test User")
            .expect("Could not set user.name");
        config
            .set_str("user.email", "test@example.com")
            .expect("Could not set user.email");
    }

    (temp_dir, repo)
}

/// Commit an empty tree on HEAD, returning the new commit id
pub fn commit(repo: &Repository, message: &str) -> Oid {
    let signature = Signature::now("Test User", "test@example.com").expect("Could not get sig");
    let tree_id = repo
        .index()
        .expect("Could not get index")
        .write_tree()
        .expect("Could not write tree");
    let tree = repo.find_tree(tree_id).expect("Could not find tree");

    let parents = match repo.head() {
        Ok(head) => vec![head.peel_to_commit().expect("HEAD is a commit")],
        Err(_) => Vec::new(),
    };
    let parent_refs: Vec<_> = parents.iter().collect();

    repo.commit(
        Some("HEAD"),
        &signature,
        &signature,
        message,
        &tree,
        &parent_refs,
    )
    .expect("Could not create commit")
}

/// Lightweight tag at a commit
pub fn tag(repo: &Repository, name: &str, oid: Oid) {
    let object = repo.find_object(oid, None).expect("Could not find object");
    repo.tag_lightweight(name, &object, false)
        .expect("Could not create tag");
}

/// Commit the tag name resolves to
pub fn tag_target(repo: &Repository, name: &str) -> Option<Oid> {
    repo.find_reference(&format!("refs/tags/{}", name))
        .ok()
        .and_then(|r| r.peel_to_commit().ok())
        .map(|c| c.id())
}

/// Sorted tag names in the repository
pub fn tag_names(repo_path: &Path) -> Vec<String> {
    let repo = Repository::open(repo_path).expect("Could not open repo");
    let names = repo.tag_names(None).expect("Could not list tags");
    let mut names: Vec<String> = names.iter().flatten().map(String::from).collect();
    names.sort();
    names
}

/// Repository with v0.1.3, v0.2.1, v1.2.3 and a foreign tag on older
/// commits, plus one untagged commit at HEAD
pub fn scenario_repo() -> (TempDir, Repository, Oid) {
    let (dir, repo) = init_repo();

    let first = commit(&repo, "first");
    tag(&repo, "v0.1.3", first);
    let second = commit(&repo, "second");
    tag(&repo, "v0.2.1", second);
    tag(&repo, "release-candidate", second);
    let third = commit(&repo, "third");
    tag(&repo, "v1.2.3", third);
    let head = commit(&repo, "fourth");

    (dir, repo, head)
}
