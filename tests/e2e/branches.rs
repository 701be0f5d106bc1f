//! Inspector and operator against real repositories

use branchpick::git::{GitStore, Head, Inspector, Operator};
use branchpick::workflow::prepare;
use branchpick::BranchError;

use super::helpers::*;

#[test]
fn test_check_repository_reports_current_branch() {
    let repo = create_repo_with_branches(&["feature-a"]).unwrap();
    let store = GitStore::new(repo.path());

    let head = Inspector::new(&store).check_repository().unwrap();
    assert_eq!(head, Some(Head::Branch("main".to_string())));
}

#[test]
fn test_check_repository_from_subdirectory() {
    let repo = create_temp_git_repo().unwrap();
    let nested = repo.path().join("src").join("deep");
    std::fs::create_dir_all(&nested).unwrap();

    let store = GitStore::new(&nested);
    let head = Inspector::new(&store).check_repository().unwrap();
    assert_eq!(head, Some(Head::Branch("main".to_string())));
}

#[test]
fn test_repository_without_commits_is_not_usable() {
    let repo = create_empty_git_repo().unwrap();
    let store = GitStore::new(repo.path());

    assert_eq!(Inspector::new(&store).check_repository().unwrap(), None);
    let err = prepare(&Inspector::new(&store)).unwrap_err();
    assert!(matches!(err, BranchError::NoRepository));
}

#[test]
fn test_list_branches_excludes_current_and_keeps_store_order() {
    let repo = create_repo_with_branches(&["feature-b", "feature-a", "bugfix/x"]).unwrap();
    let store = GitStore::new(repo.path());
    let inspector = Inspector::new(&store);

    let head = inspector.check_repository().unwrap().unwrap();
    let names = inspector.list_branches(&head).unwrap();

    // for-each-ref lists in refname order
    assert_eq!(names, vec!["bugfix/x", "feature-a", "feature-b"]);
    assert_eq!(names.len(), local_branches(repo.path()).unwrap().len() - 1);
}

#[test]
fn test_single_branch_has_no_others() {
    let repo = create_temp_git_repo().unwrap();
    let store = GitStore::new(repo.path());

    let err = prepare(&Inspector::new(&store)).unwrap_err();
    assert!(matches!(err, BranchError::NoOtherBranches));
}

#[test]
fn test_detached_head_lists_every_branch() {
    let repo = create_repo_with_branches(&["feature-a"]).unwrap();
    git(repo.path(), &["checkout", "--quiet", "--detach"]).unwrap();
    let store = GitStore::new(repo.path());
    let inspector = Inspector::new(&store);

    let head = inspector.check_repository().unwrap().unwrap();
    assert_eq!(head, Head::Detached);
    assert_eq!(
        inspector.list_branches(&head).unwrap(),
        vec!["feature-a", "main"]
    );
}

#[test]
fn test_checkout_switches_branch() {
    let repo = create_repo_with_branches(&["feature-a", "feature-b"]).unwrap();
    let store = GitStore::new(repo.path());

    Operator::new(&store).checkout("feature-a").unwrap();

    assert_eq!(current_branch(repo.path()).unwrap(), "feature-a");
}

#[test]
fn test_checkout_current_branch_twice_is_noop() {
    let repo = create_repo_with_branches(&["feature-a"]).unwrap();
    let store = GitStore::new(repo.path());
    let operator = Operator::new(&store);

    operator.checkout("main").unwrap();
    operator.checkout("main").unwrap();

    assert_eq!(current_branch(repo.path()).unwrap(), "main");
}

#[test]
fn test_checkout_missing_branch_is_checkout_error() {
    let repo = create_repo_with_branches(&["feature-a"]).unwrap();
    let store = GitStore::new(repo.path());

    let err = Operator::new(&store).checkout("vanished").unwrap_err();
    assert!(matches!(err, BranchError::Checkout { ref branch, .. } if branch == "vanished"));
    assert_eq!(current_branch(repo.path()).unwrap(), "main");
}

#[test]
fn test_checkout_blocked_by_dirty_tree() {
    let repo = create_repo_with_branches(&["feature-a"]).unwrap();
    commit_on_branch(repo.path(), "feature-a", "README.md", "# Changed\n").unwrap();
    std::fs::write(repo.path().join("README.md"), "# Local edit\n").unwrap();
    let store = GitStore::new(repo.path());

    let err = Operator::new(&store).checkout("feature-a").unwrap_err();

    let BranchError::Checkout { message, .. } = err else {
        panic!("expected Checkout error");
    };
    assert!(message.contains("README.md"), "message: {message}");
    assert_eq!(current_branch(repo.path()).unwrap(), "main");
    assert_eq!(
        std::fs::read_to_string(repo.path().join("README.md")).unwrap(),
        "# Local edit\n"
    );
}

#[test]
fn test_delete_selected_branches() {
    let repo = create_repo_with_branches(&["feature-a", "feature-b", "feature-c"]).unwrap();
    let store = GitStore::new(repo.path());

    let report = Operator::new(&store)
        .delete_branches(&["feature-a".to_string(), "feature-c".to_string()])
        .unwrap();

    assert_eq!(report.deleted, vec!["feature-a", "feature-c"]);
    assert_eq!(
        local_branches(repo.path()).unwrap(),
        vec!["feature-b", "main"]
    );
}

#[test]
fn test_delete_unmerged_branch_fails_without_stopping_others() {
    let repo = create_repo_with_branches(&["feature-a", "wip", "feature-c"]).unwrap();
    commit_on_branch(repo.path(), "wip", "wip.txt", "unfinished\n").unwrap();
    let store = GitStore::new(repo.path());

    let selection: Vec<String> = ["feature-a", "wip", "feature-c"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let err = Operator::new(&store).delete_branches(&selection).unwrap_err();

    let BranchError::Delete(report) = err else {
        panic!("expected Delete error");
    };
    assert_eq!(report.deleted, vec!["feature-a", "feature-c"]);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].branch, "wip");

    let inspector = Inspector::new(&store);
    let head = inspector.check_repository().unwrap().unwrap();
    assert_eq!(inspector.list_branches(&head).unwrap(), vec!["wip"]);
}

#[test]
fn test_force_delete_removes_unmerged_branch() {
    let repo = create_repo_with_branches(&["wip"]).unwrap();
    commit_on_branch(repo.path(), "wip", "wip.txt", "unfinished\n").unwrap();
    let store = GitStore::new(repo.path());

    Operator::new(&store)
        .force_delete(true)
        .delete_branches(&["wip".to_string()])
        .unwrap();

    assert_eq!(local_branches(repo.path()).unwrap(), vec!["main"]);
}

#[test]
fn test_main_feature_scenario() {
    let repo = create_repo_with_branches(&["feature-a", "feature-b"]).unwrap();
    let store = GitStore::new(repo.path());
    let inspector = Inspector::new(&store);

    let prepared = prepare(&inspector).unwrap();
    assert_eq!(prepared.head, Head::Branch("main".to_string()));
    assert_eq!(prepared.branches, vec!["feature-a", "feature-b"]);

    Operator::new(&store)
        .delete_branches(&["feature-b".to_string()])
        .unwrap();
    assert_eq!(inspector.list_branches(&prepared.head).unwrap(), vec!["feature-a"]);

    Operator::new(&store).checkout("feature-a").unwrap();
    assert_eq!(current_branch(repo.path()).unwrap(), "feature-a");
}
