#[path = "../common/mod.rs"]
mod common;

mod fail_on_bare_repository;
mod fail_on_unsupported_option;
mod list_untracked_directories_not_their_contents;
mod list_untracked_files_in_name_order;
mod report_deleted_files_from_last_commit;
mod report_files_with_modified_contents;
mod report_staged_renames;
mod terminate_entries_with_nul;
