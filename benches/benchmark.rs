use criterion::{criterion_group, criterion_main, Criterion};
use repos_review::core::{list_candidates, FleetScanner, ReviewConfig};
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn setup_many_repos(count: usize) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    for i in 0..count {
        let repo_path = root.join(format!("repo-{}", i));
        fs::create_dir(&repo_path).unwrap();
        Command::new("git")
            .arg("init")
            .arg("-q")
            .current_dir(&repo_path)
            .output()
            .unwrap();
    }

    // Plain directories are listed but skipped
    for i in 0..count {
        fs::create_dir(root.join(format!("plain-{}", i))).unwrap();
    }

    temp_dir
}

fn bench_discovery(c: &mut Criterion) {
    let temp_dir = setup_many_repos(100);
    let path = temp_dir.path().to_path_buf();

    c.bench_function("list_candidates_200_dirs", |b| {
        b.iter(|| list_candidates(&path).unwrap())
    });
}

fn bench_scan(c: &mut Criterion) {
    let temp_dir = setup_many_repos(10);
    let path = temp_dir.path().to_path_buf();
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let scanner = FleetScanner::from_config(&ReviewConfig::default());

    let mut group = c.benchmark_group("scan");
    group.sample_size(10);
    group.bench_function("scan_10_repos_without_remote", |b| {
        b.to_async(&runtime).iter(|| async { scanner.scan(&path).await.unwrap() })
    });
    group.finish();
}

criterion_group!(benches, bench_discovery, bench_scan);
criterion_main!(benches);
