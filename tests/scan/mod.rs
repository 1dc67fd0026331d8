mod report_auto_commit_repository_with_pending_changes;
mod repository_without_commits_is_not_a_repository;
mod scan_explicit_root_path;
mod summarize_repository_states;
