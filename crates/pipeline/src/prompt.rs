//! Prompt composition for the language model.

use docqa_vector_store::SearchHit;

/// Render the fixed answer prompt from retrieved hits, most relevant first.
///
/// Hit texts are joined with newlines in the ascending-distance order the
/// store returned them, then context and question are inserted verbatim:
/// no escaping and no token-budget truncation. Keeping the total prompt
/// within the model's input limit is the caller's problem (it is bounded by
/// k x chunk_size).
#[must_use]
pub fn compose(question: &str, hits: &[SearchHit]) -> String {
    let context = hits
        .iter()
        .map(|hit| hit.text.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Context: {context}\n\n\
         Question: {question}\n\n\
         Please answer the question based on the context provided above."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn hit(text: &str, distance: f32) -> SearchHit {
        SearchHit {
            text: text.to_string(),
            distance,
        }
    }

    #[test]
    fn renders_template_with_context_and_question() {
        let hits = vec![hit("first passage", 0.1), hit("second passage", 0.4)];
        let prompt = compose("What happened?", &hits);
        assert_eq!(
            prompt,
            "Context: first passage\nsecond passage\n\n\
             Question: What happened?\n\n\
             Please answer the question based on the context provided above."
        );
    }

    #[test]
    fn empty_hits_render_empty_context() {
        let prompt = compose("Anything?", &[]);
        assert!(prompt.starts_with("Context: \n\n"));
        assert!(prompt.contains("Question: Anything?"));
    }

    #[test]
    fn inserted_text_is_verbatim() {
        let hits = vec![hit("look: {question}", 0.0)];
        let prompt = compose("Why {context}?", &hits);
        assert!(prompt.contains("Context: look: {question}"));
        assert!(prompt.contains("Question: Why {context}?"));
    }
}
