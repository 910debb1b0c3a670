//! End-to-end runs over the local transport. The pointer swap relies on GNU
//! `mv -T`, so these only run on Linux.
#![cfg(target_os = "linux")]

use std::fs;

mod common;
use common::*;

#[test]
fn test_deploy_switches_current_to_new_release() {
    let env = TestEnv::new();

    let result = env.run(&["deploy"]);
    assert!(result.is_success(), "{}", result.combined_output());

    let current = env.project_path("srv/current");
    assert!(fs::symlink_metadata(&current).unwrap().file_type().is_symlink());
    assert_eq!(
        fs::read_to_string(current.join("index.html")).unwrap(),
        INDEX_HTML
    );
    assert!(fs::read_to_string(current.join("my_index.html"))
        .unwrap()
        .contains("New version deployed!"));

    // flattened: no wrapper directory left inside the release
    assert!(!current.join("web_static").exists());
    // staged pointer was renamed, upload was removed
    assert!(!env.project_path("srv/current.staged").exists());
    assert_eq!(fs::read_dir(env.project_path("upload")).unwrap().count(), 0);
}

#[test]
fn test_deployed_release_matches_packed_content() {
    let env = TestEnv::new();
    assert!(env.run(&["do_pack"]).is_success());
    let archive = env.archives().pop().unwrap();

    let result = env.run(&["do_deploy", archive.to_str().unwrap()]);
    assert!(result.is_success(), "{}", result.combined_output());

    let base = archive
        .file_name()
        .unwrap()
        .to_str()
        .unwrap()
        .trim_end_matches(".tgz")
        .to_string();
    let release = env.project_path(&format!("srv/releases/{base}"));
    assert!(release.is_dir());

    assert_eq!(
        tree_snapshot(&release),
        tree_snapshot(&env.project_path("web_static"))
    );
    assert_eq!(
        fs::canonicalize(env.project_path("srv/current")).unwrap(),
        fs::canonicalize(&release).unwrap()
    );
}

#[test]
fn test_redeploy_moves_pointer_and_keeps_old_release() {
    let env = TestEnv::new();
    assert!(env.run(&["do_pack"]).is_success());
    let first = env.archives().pop().unwrap();
    assert!(env.run(&["do_deploy", first.to_str().unwrap()]).is_success());

    // a second archive with a different name, as if packed a second later
    let second = env.project_path("versions/web_static_29991231235959.tgz");
    fs::copy(&first, &second).unwrap();
    let result = env.run(&["do_deploy", second.to_str().unwrap()]);
    assert!(result.is_success(), "{}", result.combined_output());

    let releases = env.project_path("srv/releases");
    assert!(releases
        .join(first.file_stem().unwrap())
        .join("index.html")
        .is_file());
    assert_eq!(
        fs::canonicalize(env.project_path("srv/current")).unwrap(),
        fs::canonicalize(releases.join("web_static_29991231235959")).unwrap()
    );
}

#[test]
fn test_failed_step_reports_host_and_exits_nonzero() {
    let env = TestEnv::new();
    assert!(env.run(&["do_pack"]).is_success());
    let archive = env.archives().pop().unwrap();
    // upload target directory is missing, so the first step fails
    fs::remove_dir(env.project_path("upload")).unwrap();

    let result = env.run(&["do_deploy", archive.to_str().unwrap()]);

    assert_eq!(result.exit_code, 1);
    assert!(
        result.stdout.contains("[localhost] upload failed"),
        "{}",
        result.stdout
    );
    assert!(!env.project_path("srv/current").exists());
}

#[test]
fn test_dotted_content_dir_gets_one_release_per_deploy() {
    let env = TestEnv::new();
    env.write_project_file("example.com/index.html", INDEX_HTML);
    let vars = [("WEBSHIP_CONTENT_DIR", "example.com")];

    let first = env.run_with_env(&["deploy"], &vars);
    assert!(first.is_success(), "{}", first.combined_output());
    // archive names have one-second resolution
    std::thread::sleep(std::time::Duration::from_millis(1100));
    let second = env.run_with_env(&["deploy"], &vars);
    assert!(second.is_success(), "{}", second.combined_output());

    let archives = env.archives();
    assert_eq!(archives.len(), 2);
    assert!(archives
        .iter()
        .all(|a| a.file_name().unwrap().to_str().unwrap().starts_with("example_com_")));

    let mut releases: Vec<String> = fs::read_dir(env.project_path("srv/releases"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    releases.sort();
    let expected: Vec<String> = archives
        .iter()
        .map(|a| a.file_stem().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(releases, expected);

    let current = env.project_path("srv/current");
    assert_eq!(
        fs::read_to_string(current.join("index.html")).unwrap(),
        INDEX_HTML
    );
    assert!(!current.join("example.com").exists());
}
