//! Integration tests for the aggregation pipeline

#[cfg(test)]
mod tests {
    use crate::{
        ExtractorError, FailurePolicy, MockFetcher, ParagraphSplitter, Pipeline, PipelineConfig,
        StrictSanitizer,
    };
    use keyterms_domain::{rank, FrequencyKey, LinkSet, PosFilter, PosTag, Token};
    use keyterms_syntax::MockAnalyzer;

    fn page(body: &str) -> Vec<u8> {
        serde_json::json!({ "title": "t", "body": body })
            .to_string()
            .into_bytes()
    }

    fn pipeline(
        fetcher: MockFetcher,
        analyzer: MockAnalyzer,
        config: PipelineConfig,
    ) -> Pipeline<MockFetcher, MockAnalyzer, StrictSanitizer> {
        Pipeline::new(
            fetcher,
            analyzer,
            ParagraphSplitter::new(StrictSanitizer),
            config,
        )
        .unwrap()
    }

    fn two_document_fixture() -> (MockFetcher, MockAnalyzer) {
        let mut fetcher = MockFetcher::new();
        fetcher.add_page("http://a", page("<p>The cat runs.</p>"));
        fetcher.add_page("http://b", page("<p>Cats run fast.</p>"));

        let mut analyzer = MockAnalyzer::default();
        analyzer.add_response(
            "The cat runs.",
            vec![
                Token::new("The", PosTag::Det),
                Token::new("cat", PosTag::Noun),
                Token::new("runs", PosTag::Verb),
                Token::new(".", PosTag::Punct),
            ],
        );
        analyzer.add_response(
            "Cats run fast.",
            vec![
                Token::new("Cats", PosTag::Noun),
                Token::new("run", PosTag::Verb),
                Token::new("fast", PosTag::Adv),
                Token::new(".", PosTag::Punct),
            ],
        );

        (fetcher, analyzer)
    }

    #[tokio::test]
    async fn test_two_document_scenario() {
        let (fetcher, analyzer) = two_document_fixture();
        let pipeline = pipeline(fetcher, analyzer, PipelineConfig::default());

        // Duplicate input collapses to two distinct links
        let links: LinkSet = ["http://a", "http://a", "http://b"].into_iter().collect();
        assert_eq!(links.len(), 2);

        let outcome = pipeline.run(&links).await.unwrap();

        assert_eq!(outcome.processed.len(), 2);
        assert!(outcome.failures.is_empty());

        // Five accepted tokens, each a distinct surface form
        assert_eq!(outcome.table.total(), 5);
        assert_eq!(outcome.table.distinct(), 5);
        for (text, tag) in [
            ("cat", PosTag::Noun),
            ("runs", PosTag::Verb),
            ("Cats", PosTag::Noun),
            ("run", PosTag::Verb),
            ("fast", PosTag::Adv),
        ] {
            assert_eq!(outcome.table.count(&FrequencyKey::new(text, tag)), 1);
        }

        // Determiners and punctuation never made it in
        assert_eq!(outcome.table.count(&FrequencyKey::new("The", PosTag::Det)), 0);
        assert_eq!(outcome.table.count(&FrequencyKey::new(".", PosTag::Punct)), 0);
    }

    #[tokio::test]
    async fn test_duplicate_links_fetched_once() {
        let (fetcher, analyzer) = two_document_fixture();
        let counting_fetcher = fetcher.clone();
        let pipeline = pipeline(fetcher, analyzer, PipelineConfig::default());

        let links: LinkSet = ["http://a", "http://a", "http://b", "http://a"]
            .into_iter()
            .collect();
        pipeline.run(&links).await.unwrap();

        assert_eq!(counting_fetcher.call_count(), 2);
    }

    #[tokio::test]
    async fn test_empty_paragraphs_never_reach_analyzer() {
        let mut fetcher = MockFetcher::new();
        fetcher.add_page("http://a", page("<p>Hello world</p><p>   </p><p></p>"));

        let analyzer = MockAnalyzer::new(vec![Token::new("Hello", PosTag::Intj)]);
        let counting_analyzer = analyzer.clone();

        let pipeline = pipeline(fetcher, analyzer, PipelineConfig::default());
        let links: LinkSet = ["http://a"].into_iter().collect();
        pipeline.run(&links).await.unwrap();

        // One non-empty paragraph, one classification call
        assert_eq!(counting_analyzer.call_count(), 1);
    }

    #[tokio::test]
    async fn test_rejected_tags_never_merged() {
        let mut fetcher = MockFetcher::new();
        fetcher.add_page("http://a", page("<p>well the and</p>"));

        let analyzer = MockAnalyzer::new(vec![
            Token::new("well", PosTag::Intj),
            Token::new("the", PosTag::Det),
            Token::new("and", PosTag::Cconj),
        ]);

        let pipeline = pipeline(fetcher, analyzer, PipelineConfig::default());
        let links: LinkSet = ["http://a"].into_iter().collect();
        let outcome = pipeline.run(&links).await.unwrap();

        assert!(outcome.table.is_empty());
        assert_eq!(outcome.processed.len(), 1);
    }

    #[tokio::test]
    async fn test_same_text_different_tag_counted_separately() {
        let mut fetcher = MockFetcher::new();
        fetcher.add_page("http://a", page("<p>they run</p>"));
        fetcher.add_page("http://b", page("<p>a run</p>"));

        let mut analyzer = MockAnalyzer::default();
        analyzer.add_response("they run", vec![Token::new("run", PosTag::Verb)]);
        analyzer.add_response("a run", vec![Token::new("run", PosTag::Noun)]);

        let pipeline = pipeline(fetcher, analyzer, PipelineConfig::default());
        let links: LinkSet = ["http://a", "http://b"].into_iter().collect();
        let outcome = pipeline.run(&links).await.unwrap();

        assert_eq!(outcome.table.distinct(), 2);
        assert_eq!(outcome.table.count(&FrequencyKey::new("run", PosTag::Verb)), 1);
        assert_eq!(outcome.table.count(&FrequencyKey::new("run", PosTag::Noun)), 1);
    }

    #[tokio::test]
    async fn test_abort_policy_discards_partial_progress() {
        let mut fetcher = MockFetcher::new();
        fetcher.add_page("http://a", page("<p>Hello</p>"));
        fetcher.add_error("http://b", "connection refused");
        fetcher.add_page("http://c", page("<p>World</p>"));
        let counting_fetcher = fetcher.clone();

        let analyzer = MockAnalyzer::new(vec![Token::new("Hello", PosTag::Noun)]);

        let config = PipelineConfig {
            failure_policy: FailurePolicy::Abort,
            ..PipelineConfig::default()
        };
        let pipeline = pipeline(fetcher, analyzer, config);

        let links: LinkSet = ["http://a", "http://b", "http://c"].into_iter().collect();
        let result = pipeline.run(&links).await;

        assert!(matches!(result, Err(ExtractorError::Fetch(_))));
        // Sequential traversal stops at the failing link; http://c is never fetched
        assert_eq!(counting_fetcher.call_count(), 2);
    }

    #[tokio::test]
    async fn test_skip_policy_preserves_partial_results() {
        let mut fetcher = MockFetcher::new();
        fetcher.add_page("http://a", page("<p>Hello</p>"));
        fetcher.add_error("http://b", "connection refused");
        fetcher.add_page("http://c", page("<p>Hello</p>"));

        let analyzer = MockAnalyzer::new(vec![Token::new("Hello", PosTag::Noun)]);

        let pipeline = pipeline(fetcher, analyzer, PipelineConfig::default());
        let links: LinkSet = ["http://a", "http://b", "http://c"].into_iter().collect();
        let outcome = pipeline.run(&links).await.unwrap();

        assert_eq!(outcome.processed.len(), 2);
        assert!(!outcome.processed.contains("http://b"));
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].url, "http://b");
        assert_eq!(
            outcome.table.count(&FrequencyKey::new("Hello", PosTag::Noun)),
            2
        );
    }

    #[tokio::test]
    async fn test_missing_body_field_is_per_link_failure() {
        let mut fetcher = MockFetcher::new();
        fetcher.add_page("http://a", br#"{"title": "no body here"}"#.to_vec());

        let pipeline = pipeline(fetcher, MockAnalyzer::default(), PipelineConfig::default());
        let links: LinkSet = ["http://a"].into_iter().collect();
        let outcome = pipeline.run(&links).await.unwrap();

        assert!(outcome.processed.is_empty());
        assert_eq!(outcome.failures.len(), 1);
        assert!(outcome.failures[0].reason.contains("body"));
    }

    #[tokio::test]
    async fn test_zero_token_link_still_counts_processed() {
        let mut fetcher = MockFetcher::new();
        fetcher.add_page("http://a", page("<p>something</p>"));

        // Analyzer finds nothing salient
        let analyzer = MockAnalyzer::new(vec![]);

        let pipeline = pipeline(fetcher, analyzer, PipelineConfig::default());
        let links: LinkSet = ["http://a"].into_iter().collect();
        let outcome = pipeline.run(&links).await.unwrap();

        assert!(outcome.table.is_empty());
        assert_eq!(outcome.processed.len(), 1);
    }

    #[tokio::test]
    async fn test_parallel_run_matches_sequential_run() {
        let links: LinkSet = ["http://a", "http://b", "http://c", "http://d"]
            .into_iter()
            .collect();

        let build = |parallel: usize| {
            let mut fetcher = MockFetcher::new();
            for url in ["http://a", "http://b", "http://c", "http://d"] {
                fetcher.add_page(url, page("<p>cat runs</p>"));
            }
            let analyzer = MockAnalyzer::new(vec![
                Token::new("cat", PosTag::Noun),
                Token::new("runs", PosTag::Verb),
            ]);
            let config = PipelineConfig {
                max_parallel_links: parallel,
                ..PipelineConfig::default()
            };
            pipeline(fetcher, analyzer, config)
        };

        let sequential = build(1).run(&links).await.unwrap();
        let parallel = build(4).run(&links).await.unwrap();

        assert_eq!(sequential.table, parallel.table);
        assert_eq!(sequential.processed, parallel.processed);
        assert_eq!(
            rank(&sequential.table, 25),
            rank(&parallel.table, 25)
        );
    }

    #[tokio::test]
    async fn test_custom_filter_changes_accepted_tags() {
        let mut fetcher = MockFetcher::new();
        fetcher.add_page("http://a", page("<p>green cat</p>"));

        let analyzer = MockAnalyzer::new(vec![
            Token::new("green", PosTag::Adj),
            Token::new("cat", PosTag::Noun),
        ]);

        let pipeline = pipeline(fetcher, analyzer, PipelineConfig::default())
            .with_filter(PosFilter::new([PosTag::Adj]));

        let links: LinkSet = ["http://a"].into_iter().collect();
        let outcome = pipeline.run(&links).await.unwrap();

        assert_eq!(outcome.table.count(&FrequencyKey::new("green", PosTag::Adj)), 1);
        assert_eq!(outcome.table.count(&FrequencyKey::new("cat", PosTag::Noun)), 0);
    }
}
