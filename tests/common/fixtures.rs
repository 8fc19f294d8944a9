//! Test fixtures: a bare remote with an upstream working copy

use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::git::{configure_identity, create_test_commit, git_output, setup_git_repo};

/// A bare `origin` plus a working copy used to push new upstream commits
pub struct TestRemote {
    pub temp_dir: TempDir,
    pub remote: PathBuf,
    pub upstream: PathBuf,
    commits: usize,
}

impl TestRemote {
    /// Creates a bare remote on `main` holding a single commit
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let seed = temp_dir.path().join("seed");
        std::fs::create_dir(&seed)?;
        setup_git_repo(&seed)?;
        create_test_commit(&seed, "README.md", "# Test Repo", "Initial commit")?;

        let remote = temp_dir.path().join("remote.git");
        git_output(
            temp_dir.path(),
            &["clone", "-q", "--bare", path_str(&seed)?, path_str(&remote)?],
        )?;

        let upstream = temp_dir.path().join("upstream");
        clone_into(&remote, &upstream)?;

        Ok(Self {
            temp_dir,
            remote,
            upstream,
            commits: 1,
        })
    }

    /// Clones the remote into `dest`, ready for commits
    pub fn clone_to(&self, dest: &Path) -> Result<()> {
        clone_into(&self.remote, dest)
    }

    /// Pushes `count` new commits to the remote from the upstream copy
    pub fn advance(&mut self, count: usize) -> Result<()> {
        for _ in 0..count {
            self.commits += 1;
            create_test_commit(
                &self.upstream,
                &format!("upstream{}.txt", self.commits),
                &format!("Content {}", self.commits),
                &format!("Upstream commit {}", self.commits),
            )?;
        }
        git_output(&self.upstream, &["push", "-q", "origin", "main"])?;
        Ok(())
    }
}

fn clone_into(remote: &Path, dest: &Path) -> Result<()> {
    let parent = dest
        .parent()
        .ok_or_else(|| anyhow::anyhow!("clone destination has no parent"))?;
    git_output(parent, &["clone", "-q", path_str(remote)?, path_str(dest)?])?;
    configure_identity(dest)
}

fn path_str(path: &Path) -> Result<&str> {
    path.to_str()
        .ok_or_else(|| anyhow::anyhow!("non UTF-8 path: {}", path.display()))
}

/// Adds `count` local-only commits to a checkout
pub fn commit_locally(path: &Path, prefix: &str, count: usize) -> Result<()> {
    for i in 1..=count {
        create_test_commit(
            path,
            &format!("{prefix}{i}.txt"),
            &format!("{prefix} {i}"),
            &format!("{prefix} commit {i}"),
        )?;
    }
    Ok(())
}
