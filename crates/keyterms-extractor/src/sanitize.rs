//! Markup stripping

use keyterms_domain::traits::Sanitizer;
use std::collections::HashSet;

/// Strips every tag, keeping only text content.
///
/// Backed by ammonia with an empty allow-list, so `<p>cat <b>runs</b></p>`
/// sanitizes to `cat runs`. Script and style bodies are removed entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictSanitizer;

impl Sanitizer for StrictSanitizer {
    fn sanitize(&self, markup: &str) -> String {
        ammonia::Builder::default()
            .tags(HashSet::new())
            .clean(markup)
            .to_string()
    }
}
