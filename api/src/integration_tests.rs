//! Full integration tests for the activity feed
//!
//! These run the feed service with the real adapters (English catalog,
//! markdown renderer, JSON push payloads) instead of mocks.
//!
//! Run with: cargo test integration_tests

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::adapters::{JsonCommitExpander, LocaleCatalog, MarkdownRenderer};
    use crate::app::{FeedService, FeedSettings};
    use crate::domain::entities::action::{IssueSummary, OpType};
    use crate::feed::format::detect_feed_type;
    use crate::feed::FeedFormat;
    use crate::test_utils::test_record;

    fn feed_service() -> FeedService<LocaleCatalog, MarkdownRenderer, JsonCommitExpander> {
        FeedService::new(
            Arc::new(LocaleCatalog::english()),
            Arc::new(MarkdownRenderer::default()),
            Arc::new(JsonCommitExpander),
            FeedSettings {
                app_sub_url: "/git".to_string(),
                no_reply_domain: "noreply.example.org".to_string(),
            },
        )
    }

    #[test]
    fn push_with_two_commits_end_to_end() {
        let mut record = test_record(OpType::CommitRepo);
        record.content = r#"{
            "Commits": [
                {"Sha1": "bbb222", "Message": "Fix #4 <again>\n\nmore"},
                {"Sha1": "aaa111", "Message": "Start"}
            ],
            "CompareURL": "alice/demo/compare/aaa000...bbb222",
            "Len": 2
        }"#
        .to_string();

        let items = feed_service().actions_to_items(&[record]).unwrap();
        let item = &items[0];

        assert_eq!(
            item.title,
            r#"alice pushed to <a href="/git/alice/demo/src/branch/main">main</a> at <a href="/git/alice/demo">alice/demo</a>"#
        );
        assert_eq!(item.link, "/git/alice/demo/compare/aaa000...bbb222");
        assert_eq!(
            item.description,
            "<a href=\"/git/alice/demo/commit/bbb222\">bbb222</a>\n\
             Fix <a href=\"/git/alice/demo/issues/4\" class=\"ref-issue\">#4</a> &lt;again&gt;\n\n\
             <a href=\"/git/alice/demo/commit/aaa111\">aaa111</a>\nStart"
        );
        assert_eq!(item.content, item.description);
    }

    #[test]
    fn new_issue_end_to_end() {
        let mut record = test_record(OpType::CreateIssue);
        record.content = "12|Crash & burn".to_string();
        record.issue = Some(IssueSummary {
            title: "Crash & burn".to_string(),
            content: "It *crashes*".to_string(),
        });

        let items = feed_service().actions_to_items(&[record]).unwrap();
        let item = &items[0];

        assert_eq!(
            item.title,
            r#"alice opened issue <a href="/git/alice/demo/issues/12">alice/demo#12</a>"#
        );
        assert_eq!(item.link, "/git/alice/demo/issues/12");
        assert_eq!(item.description, "12#Crash & burn");
        assert_eq!(item.content, "<p>It <em>crashes</em></p>\n");
    }

    #[test]
    fn dismissed_review_end_to_end() {
        let mut record = test_record(OpType::PullReviewDismissed);
        record.content = "9|<bob>|stale review".to_string();

        let items = feed_service().actions_to_items(&[record]).unwrap();
        let item = &items[0];

        assert_eq!(
            item.title,
            r#"alice dismissed review from <b>&lt;bob&gt;</b> for <a href="/git/alice/demo/pulls/9">alice/demo#9</a>"#
        );
        assert_eq!(item.description, "Reason:\n\nstale review");
    }

    #[test]
    fn oversized_comment_falls_back_to_raw_text() {
        let service = FeedService::new(
            Arc::new(LocaleCatalog::english()),
            Arc::new(MarkdownRenderer::new(8)),
            Arc::new(JsonCommitExpander),
            FeedSettings::default(),
        );
        let mut record = test_record(OpType::CommentPull);
        record.content = "3|a comment that is far too long".to_string();
        record.issue = Some(IssueSummary {
            title: "Refactor".to_string(),
            content: String::new(),
        });

        let items = service.actions_to_items(&[record]).unwrap();

        assert_eq!(
            items[0].description,
            "Refactor\n\na comment that is far too long"
        );
    }

    #[test]
    fn detect_then_convert() {
        let request = detect_feed_type("alice.atom", "");
        assert_eq!(request.format, Some(FeedFormat::Atom));
        assert_eq!(request.name, "alice");

        let items = feed_service()
            .actions_to_items(&[test_record(OpType::StarRepo)])
            .unwrap();
        assert_eq!(
            items[0].title,
            r#"alice starred <a href="/git/alice/demo">alice/demo</a>"#
        );
    }
}
