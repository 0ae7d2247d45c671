use crate::config::MAX_BATCH_ITEMS;
use crate::errors::PromptError;
use crate::generate;
use crate::provider::Provider;
use crate::wire::{BatchEntry, GenerateRequest, Progress};

/// Drives a submitted list through the generation client one item at a
/// time. Bound checks apply to the raw submission (blank prompts included);
/// a blank prompt fails item validation and becomes that item's error
/// entry. One item's failure never stops the rest of the list, and no two
/// requests are ever in flight at once, so results and progress always
/// arrive in submission order. There is no cancellation once started; an
/// unresponsive gateway call holds up the remainder of the batch.
pub async fn run(
    provider: &dyn Provider,
    max_output_tokens: u32,
    items: &[GenerateRequest],
    debug: bool,
    mut on_progress: impl FnMut(&Progress, &[BatchEntry]),
) -> Result<Vec<BatchEntry>, PromptError> {
    if items.is_empty() {
        return Err(PromptError::Validation(
            "At least one item is required.".into(),
        ));
    }
    if items.len() > MAX_BATCH_ITEMS {
        return Err(PromptError::Validation(
            "Maximum 20 items per batch.".into(),
        ));
    }

    let total = items.len();
    let mut results: Vec<BatchEntry> = Vec::with_capacity(total);

    for (index, item) in items.iter().enumerate() {
        let entry = match generate::generate_one(provider, max_output_tokens, item, debug).await {
            Ok(text) => BatchEntry::ok(index, text),
            Err(err) => BatchEntry::failed(index, err.to_string()),
        };
        results.push(entry);
        on_progress(&Progress { current: index + 1, total }, &results);
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::testing::MockProvider;

    fn item(prompt: &str) -> GenerateRequest {
        GenerateRequest {
            prompt: prompt.into(),
            goals: None,
            image_data: None,
        }
    }

    #[tokio::test]
    async fn empty_submission_is_rejected() {
        let provider = MockProvider::new(vec![]);
        let err = run(&provider, 4096, &[], false, |_, _| {}).await.unwrap_err();
        assert_eq!(err.status(), 400);
        assert_eq!(err.to_string(), "At least one item is required.");
    }

    #[tokio::test]
    async fn oversized_submission_is_rejected_before_any_call() {
        let provider = MockProvider::new(vec![]);
        let items: Vec<_> = (0..21).map(|i| item(&format!("p{i}"))).collect();
        let err = run(&provider, 4096, &items, false, |_, _| {}).await.unwrap_err();
        assert_eq!(err.to_string(), "Maximum 20 items per batch.");
        assert!(provider.seen_parts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn one_entry_per_item_with_unique_indices() {
        for n in [1usize, 5, 20] {
            let provider = MockProvider::always_ok("out", n);
            let items: Vec<_> = (0..n).map(|i| item(&format!("p{i}"))).collect();
            let results = run(&provider, 4096, &items, false, |_, _| {}).await.unwrap();
            assert_eq!(results.len(), n);
            for (i, entry) in results.iter().enumerate() {
                assert_eq!(entry.index, i);
                assert_eq!(entry.result.as_deref(), Some("out"));
                assert!(entry.error.is_none());
            }
        }
    }

    #[tokio::test]
    async fn failure_on_one_item_does_not_stop_its_neighbors() {
        let provider = MockProvider::new(vec![
            Ok("first".into()),
            Err("model exploded".into()),
            Ok("third".into()),
        ]);
        let items = vec![item("a"), item("b"), item("c")];
        let results = run(&provider, 4096, &items, false, |_, _| {}).await.unwrap();

        assert_eq!(results[0].result.as_deref(), Some("first"));
        assert_eq!(results[1].error.as_deref(), Some("model exploded"));
        assert!(results[1].result.is_none());
        assert_eq!(results[2].result.as_deref(), Some("third"));
    }

    #[tokio::test]
    async fn blank_prompt_in_raw_submission_becomes_an_error_entry() {
        let provider = MockProvider::new(vec![Ok("first".into()), Ok("third".into())]);
        let items = vec![item("a"), item("   "), item("c")];
        let results = run(&provider, 4096, &items, false, |_, _| {}).await.unwrap();

        assert_eq!(results.len(), 3);
        assert_eq!(results[1].error.as_deref(), Some("A video prompt is required."));
        assert_eq!(results[2].result.as_deref(), Some("third"));
        // The blank item never reached the gateway.
        assert_eq!(provider.seen_parts.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn rerun_replaces_rather_than_appends() {
        let provider = MockProvider::new(vec![
            Err("first run failure".into()),
            Ok("second run success".into()),
        ]);
        let items = vec![item("a")];

        let first = run(&provider, 4096, &items, false, |_, _| {}).await.unwrap();
        let second = run(&provider, 4096, &items, false, |_, _| {}).await.unwrap();

        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].result.as_deref(), Some("second run success"));
        assert!(second[0].error.is_none());
    }

    #[tokio::test]
    async fn progress_is_monotonic_and_follows_the_result() {
        let provider = MockProvider::always_ok("out", 5);
        let items: Vec<_> = (0..5).map(|i| item(&format!("p{i}"))).collect();

        let mut seen: Vec<(Progress, usize)> = Vec::new();
        let results = run(&provider, 4096, &items, false, |progress, partial| {
            seen.push((*progress, partial.len()));
        })
        .await
        .unwrap();

        assert_eq!(results.len(), 5);
        assert_eq!(seen.len(), 5);
        for (i, (progress, visible)) in seen.iter().enumerate() {
            assert_eq!(progress.current, i + 1);
            assert_eq!(progress.total, 5);
            // The result for the item is visible before its progress event.
            assert_eq!(*visible, i + 1);
        }
    }
}
