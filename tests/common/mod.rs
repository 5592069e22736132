#![allow(dead_code)]

use assert_cmd::Command;
use git2::{Oid, Repository, Signature, Time};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Throwaway git repository in a temp directory
pub struct TestRepo {
    pub dir: TempDir,
    pub repo: Repository,
    counter: u32,
}

impl TestRepo {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Could not create temp dir");
        let repo = Repository::init(dir.path()).expect("Could not init git repo");
        {
            let mut config = repo.config().expect("Could not get config");
            config.set_str("user.name", "Test User").unwrap();
            config.set_str("user.email", "test@example.com").unwrap();
        }

        TestRepo {
            dir,
            repo,
            counter: 0,
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Commit a file change as the default test user
    pub fn commit(&mut self, message: &str) -> Oid {
        let sig = self.repo.signature().unwrap();
        self.commit_with(&sig, &sig, message)
    }

    /// Commit with explicit author identity and times (seconds since epoch)
    pub fn commit_as(&mut self, name: &str, email: &str, authored: i64, committed: i64) -> Oid {
        let author = Signature::new(name, email, &Time::new(authored, 0)).unwrap();
        let committer = Signature::new("Committer", "ci@example.com", &Time::new(committed, 0))
            .unwrap();
        self.commit_with(&author, &committer, "change")
    }

    fn commit_with(&mut self, author: &Signature, committer: &Signature, message: &str) -> Oid {
        self.counter += 1;
        let file = self.path().join("README.md");
        fs::write(&file, format!("revision {}\n", self.counter)).unwrap();

        let mut index = self.repo.index().unwrap();
        index.add_path(Path::new("README.md")).unwrap();
        index.write().unwrap();
        let tree_id = index.write_tree().unwrap();
        let tree = self.repo.find_tree(tree_id).unwrap();

        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), author, committer, message, &tree, &parents)
            .expect("Could not create commit")
    }

    pub fn tag(&self, name: &str, oid: Oid) {
        let object = self.repo.find_object(oid, None).unwrap();
        self.repo
            .tag_lightweight(name, &object, false)
            .expect("Could not create tag");
    }

    pub fn tag_annotated(&self, name: &str, oid: Oid) {
        let object = self.repo.find_object(oid, None).unwrap();
        let sig = self.repo.signature().unwrap();
        self.repo
            .tag(name, &object, &sig, name, false)
            .expect("Could not create annotated tag");
    }

    pub fn tag_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .repo
            .tag_names(None)
            .unwrap()
            .iter()
            .flatten()
            .map(str::to_string)
            .collect();
        names.sort();
        names
    }

    pub fn tag_target(&self, name: &str) -> Oid {
        self.repo
            .find_reference(&format!("refs/tags/{}", name))
            .unwrap()
            .peel_to_commit()
            .unwrap()
            .id()
    }
}

/// `gt` invocation isolated from the user's configuration
pub fn gt_cmd(repo: &TestRepo) -> Command {
    let mut cmd = Command::cargo_bin("gt").unwrap();
    cmd.current_dir(repo.path());
    cmd.env("HOME", repo.path());
    cmd.env("XDG_CONFIG_HOME", repo.path().join(".config"));
    cmd.env_remove("RUST_LOG");
    cmd
}
