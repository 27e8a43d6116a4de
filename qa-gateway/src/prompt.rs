//! Prompt builder: fixed system policy + context block per retrieved chunk.

use docs_rag::RetrievedItem;

/// System instructions for grounded company-docs answers.
///
/// The wording is part of the product behavior (citation placement, fallback
/// sentence); change it deliberately, not casually.
pub const SYSTEM_PROMPT: &str = r#"
You are a helpful, truthful, and concise company assistant.
Your role is to answer user questions about the company and its website
using ONLY the information provided in the Context. Never make up facts.

Instructions:
1. For general questions:
    - Respond with a numbered list (1, 2, 3...).
    - Each item must be a single clear idea; combine with related ideas.
    - Use short, simple, and self-contained sentences.

2. For specific questions:
    - Respond in short, precise paragraphs.
    - Include all factual fields exactly as given (email, phone number, address, contact instructions).
    - Do not omit information, even if it appears in only one chunk.

3. Rewrite all content in clear, simple, natural language.
4. Never reference or mention the Context in your answer.
5. URLs:
    - Include urls only if they directly support a fact you mention.
    - Place the URL in parentheses immediately after the fact; do not list irrelevant URLs at the end.
6. Missing Information:
    - If the necessary information is absent, reply exactly:
        "I don't have enough information in the provided context to answer that."
    - Then suggest one brief next step.
"#;

/// Build the user prompt: every retrieved item in order, then the question.
///
/// Each item becomes a `Text:` / `Section:` / `URL:` block; blocks are
/// separated by blank lines. The output is byte-identical for identical
/// inputs.
pub fn build_user_prompt(question: &str, items: &[RetrievedItem]) -> String {
    let context_block = items
        .iter()
        .map(|item| {
            format!(
                "Text: {}\nSection: {}\nURL: {}",
                item.text, item.metadata.section_title, item.metadata.url
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("Context:\n{context_block}\n\nQuestion:\n{question}\n\nAnswer:\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use docs_rag::ItemMetadata;

    fn contact_item() -> RetrievedItem {
        RetrievedItem {
            id: "1".into(),
            text: "Call us at 555-0100".into(),
            metadata: ItemMetadata {
                page_title: "Contact".into(),
                url: "https://example.com/contact".into(),
                section_title: "Phone".into(),
            },
        }
    }

    #[test]
    fn context_block_carries_text_and_url() {
        let prompt = build_user_prompt("What is your office phone number?", &[contact_item()]);
        assert!(prompt.contains(
            "Text: Call us at 555-0100\nSection: Phone\nURL: https://example.com/contact"
        ));
        assert!(prompt.contains("Question:\nWhat is your office phone number?"));
        assert!(prompt.ends_with("Answer:\n"));
    }

    #[test]
    fn items_are_separated_by_blank_lines_in_order() {
        let mut second = contact_item();
        second.text = "Open 9-5".into();
        second.metadata.section_title = "Hours".into();

        let prompt = build_user_prompt("q", &[contact_item(), second]);
        let text_positions: Vec<_> = prompt.match_indices("Text: ").map(|(i, _)| i).collect();
        assert_eq!(text_positions.len(), 2);
        assert!(prompt.contains("https://example.com/contact\n\nText: Open 9-5"));
    }

    #[test]
    fn prompt_is_deterministic() {
        let items = vec![contact_item(), contact_item()];
        let a = build_user_prompt("same question", &items);
        let b = build_user_prompt("same question", &items);
        assert_eq!(a, b);
    }
}
