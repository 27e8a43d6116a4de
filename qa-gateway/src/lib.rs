//! RAG + LLM gateway with a single public function.
//!
//! Public API: [`answer_question`]. It embeds the question, retrieves top-K
//! context chunks from the vector index, builds a grounding prompt, calls the
//! chat model, and returns the answer together with the context that was used.
//! Both front ends (HTTP server, interactive CLI) go through this one path.

mod api_types;
mod error;
pub mod prompt;

pub use api_types::{AskOptions, QaAnswer};
pub use error::GatewayError;

use docs_rag::{ContextIndex, EmbeddingsProvider};
use llm_service::ChatProvider;
use tracing::{info, warn};

/// Default top-K when the caller passes `AskOptions { top_k: 0 }`.
pub const DEFAULT_TOP_K: u64 = 30;

/// Answer returned without calling the model when retrieval finds nothing.
pub const NO_CONTEXT_ANSWER: &str =
    "I don't have enough information in the provided context to answer that.";

/// Prefix of an answer produced from an absorbed chat failure.
pub const CHAT_FAILURE_PREFIX: &str = "⚠️ Error: ";

/// Run the full retrieve → prompt → generate pipeline for one question.
///
/// Behavior:
/// - zero retrieved items short-circuit to [`NO_CONTEXT_ANSWER`] with an
///   empty context list; the chat boundary is never invoked;
/// - a chat failure is absorbed into a [`CHAT_FAILURE_PREFIX`]-prefixed
///   answer instead of propagating;
/// - retrieval failures propagate as [`GatewayError`].
///
/// The caller must reject empty questions before calling this.
pub async fn answer_question(
    embedder: &dyn EmbeddingsProvider,
    index: &dyn ContextIndex,
    chat: &dyn ChatProvider,
    question: &str,
    opts: AskOptions,
) -> Result<QaAnswer, GatewayError> {
    let top_k = if opts.top_k == 0 {
        DEFAULT_TOP_K
    } else {
        opts.top_k
    };

    let items = docs_rag::retrieve(embedder, index, question, top_k).await?;

    if items.is_empty() {
        warn!(
            target: "qa_gateway::ask",
            "answer_question: no context retrieved, returning fallback answer"
        );
        return Ok(QaAnswer {
            answer: NO_CONTEXT_ANSWER.to_string(),
            context: Vec::new(),
        });
    }

    let user_prompt = prompt::build_user_prompt(question, &items);

    let answer = match chat.chat(prompt::SYSTEM_PROMPT, &user_prompt).await {
        Ok(text) => text,
        Err(e) => {
            warn!(
                target: "qa_gateway::ask",
                error = %e,
                "answer_question: chat call failed, absorbing into answer"
            );
            format!("{CHAT_FAILURE_PREFIX}{e}")
        }
    };

    info!(
        target: "qa_gateway::ask",
        context = items.len(),
        "answer_question: finished"
    );

    Ok(QaAnswer {
        answer,
        context: items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use docs_rag::{ItemMetadata, RagError, RetrievedItem};
    use llm_service::LlmError;
    use std::{
        future::Future,
        pin::Pin,
        sync::atomic::{AtomicUsize, Ordering},
    };

    struct FixedEmbedder;

    impl EmbeddingsProvider for FixedEmbedder {
        fn embed<'a>(
            &'a self,
            _text: &'a str,
        ) -> Pin<Box<dyn Future<Output = Result<Vec<f32>, RagError>> + Send + 'a>> {
            Box::pin(async { Ok(vec![0.0; 4]) })
        }
    }

    struct FixedIndex(Vec<RetrievedItem>);

    impl ContextIndex for FixedIndex {
        fn search<'a>(
            &'a self,
            _vector: Vec<f32>,
            limit: u64,
        ) -> Pin<Box<dyn Future<Output = Result<Vec<RetrievedItem>, RagError>> + Send + 'a>>
        {
            let items: Vec<RetrievedItem> =
                self.0.iter().take(limit as usize).cloned().collect();
            Box::pin(async move { Ok(items) })
        }
    }

    /// Chat double that counts calls and replies with a canned answer.
    struct CountingChat {
        calls: AtomicUsize,
        reply: Result<String, ()>,
    }

    impl CountingChat {
        fn ok(reply: &str) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                reply: Ok(reply.to_string()),
            }
        }

        fn failing() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                reply: Err(()),
            }
        }
    }

    impl ChatProvider for CountingChat {
        fn chat<'a>(
            &'a self,
            _system: &'a str,
            _user: &'a str,
        ) -> Pin<Box<dyn Future<Output = Result<String, LlmError>> + Send + 'a>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let out = match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(()) => Err(LlmError::Decode("model unavailable".into())),
            };
            Box::pin(async move { out })
        }
    }

    fn item(id: &str, text: &str) -> RetrievedItem {
        RetrievedItem {
            id: id.into(),
            text: text.into(),
            metadata: ItemMetadata::default(),
        }
    }

    #[tokio::test]
    async fn empty_retrieval_short_circuits_without_chat() {
        let chat = CountingChat::ok("should not be used");
        let qa = answer_question(
            &FixedEmbedder,
            &FixedIndex(Vec::new()),
            &chat,
            "asdf",
            AskOptions::default(),
        )
        .await
        .unwrap();

        assert_eq!(qa.answer, NO_CONTEXT_ANSWER);
        assert!(qa.context.is_empty());
        assert_eq!(chat.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn chat_failure_is_absorbed_into_answer() {
        let chat = CountingChat::failing();
        let qa = answer_question(
            &FixedEmbedder,
            &FixedIndex(vec![item("1", "some context")]),
            &chat,
            "question",
            AskOptions::default(),
        )
        .await
        .unwrap();

        assert!(qa.answer.starts_with(CHAT_FAILURE_PREFIX));
        assert!(qa.answer.contains("model unavailable"));
        assert_eq!(qa.context.len(), 1);
    }

    #[tokio::test]
    async fn successful_answer_keeps_context_order() {
        let chat = CountingChat::ok("The number is 555-0100.");
        let qa = answer_question(
            &FixedEmbedder,
            &FixedIndex(vec![item("a", "first"), item("b", "second")]),
            &chat,
            "question",
            AskOptions { top_k: 5 },
        )
        .await
        .unwrap();

        assert_eq!(qa.answer, "The number is 555-0100.");
        assert_eq!(qa.context[0].id, "a");
        assert_eq!(qa.context[1].id, "b");
        assert_eq!(chat.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn zero_top_k_falls_back_to_default() {
        let many: Vec<RetrievedItem> = (0..100).map(|i| item(&i.to_string(), "t")).collect();
        let chat = CountingChat::ok("ok");
        let qa = answer_question(
            &FixedEmbedder,
            &FixedIndex(many),
            &chat,
            "q",
            AskOptions { top_k: 0 },
        )
        .await
        .unwrap();

        assert_eq!(qa.context.len(), DEFAULT_TOP_K as usize);
    }

    #[tokio::test]
    async fn retrieval_errors_propagate() {
        struct FailingIndex;
        impl ContextIndex for FailingIndex {
            fn search<'a>(
                &'a self,
                _vector: Vec<f32>,
                _limit: u64,
            ) -> Pin<Box<dyn Future<Output = Result<Vec<RetrievedItem>, RagError>> + Send + 'a>>
            {
                Box::pin(async { Err(RagError::Qdrant("connection refused".into())) })
            }
        }

        let chat = CountingChat::ok("unused");
        let err = answer_question(
            &FixedEmbedder,
            &FailingIndex,
            &chat,
            "q",
            AskOptions::default(),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, GatewayError::Rag(RagError::Qdrant(_))));
        assert_eq!(chat.calls.load(Ordering::SeqCst), 0);
    }
}
