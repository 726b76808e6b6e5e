//! Built-in English messages for activity titles

pub const EN_US: &[(&str, &str)] = &[
    ("action.create_repo", r#"created repository <a href="%s">%s</a>"#),
    ("action.rename_repo", r#"renamed repository from <code>%[1]s</code> to <a href="%[2]s">%[3]s</a>"#),
    ("action.commit_repo", r#"pushed to <a href="%[2]s">%[3]s</a> at <a href="%[1]s">%[4]s</a>"#),
    ("action.create_branch", r#"created branch <a href="%[2]s">%[3]s</a> in <a href="%[1]s">%[4]s</a>"#),
    ("action.create_issue", r#"opened issue <a href="%[1]s">%[3]s#%[2]s</a>"#),
    ("action.close_issue", r#"closed issue <a href="%[1]s">%[3]s#%[2]s</a>"#),
    ("action.reopen_issue", r#"reopened issue <a href="%[1]s">%[3]s#%[2]s</a>"#),
    ("action.create_pull_request", r#"created pull request <a href="%[1]s">%[3]s#%[2]s</a>"#),
    ("action.close_pull_request", r#"closed pull request <a href="%[1]s">%[3]s#%[2]s</a>"#),
    ("action.reopen_pull_request", r#"reopened pull request <a href="%[1]s">%[3]s#%[2]s</a>"#),
    ("action.comment_issue", r#"commented on issue <a href="%[1]s">%[3]s#%[2]s</a>"#),
    ("action.comment_pull", r#"commented on pull request <a href="%[1]s">%[3]s#%[2]s</a>"#),
    ("action.merge_pull_request", r#"merged pull request <a href="%[1]s">%[3]s#%[2]s</a>"#),
    ("action.transfer_repo", r#"transferred repository <code>%s</code> to <a href="%s">%s</a>"#),
    ("action.push_tag", r#"pushed tag <a href="%[2]s">%[3]s</a> to <a href="%[1]s">%[4]s</a>"#),
    ("action.delete_tag", r#"deleted tag %[2]s from <a href="%[1]s">%[3]s</a>"#),
    ("action.delete_branch", r#"deleted branch %[2]s from <a href="%[1]s">%[3]s</a>"#),
    ("action.mirror_sync_push", r#"synced commits to <a href="%[2]s">%[3]s</a> at <a href="%[1]s">%[4]s</a> from mirror"#),
    ("action.mirror_sync_create", r#"synced new reference <a href="%[2]s">%[3]s</a> to <a href="%[1]s">%[4]s</a> from mirror"#),
    ("action.mirror_sync_delete", r#"synced and deleted reference <code>%[2]s</code> at <a href="%[1]s">%[3]s</a> from mirror"#),
    ("action.approve_pull_request", r#"approved <a href="%[1]s">%[3]s#%[2]s</a>"#),
    ("action.reject_pull_request", r#"suggested changes for <a href="%[1]s">%[3]s#%[2]s</a>"#),
    ("action.publish_release", r#"released <a href="%[2]s"> "%[4]s" </a> at <a href="%[1]s">%[3]s</a>"#),
    ("action.review_dismissed", r#"dismissed review from <b>%[4]s</b> for <a href="%[1]s">%[3]s#%[2]s</a>"#),
    ("action.review_dismissed_reason", "Reason:"),
    ("action.starred_repo", r#"starred <a href="%[1]s">%[2]s</a>"#),
    ("action.watched_repo", r#"started watching <a href="%[1]s">%[2]s</a>"#),
];
