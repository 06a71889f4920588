//! The fixed catalog of architecture layers.
//!
//! Six layers, always presented in pipeline order. The set is closed:
//! navigation and selection only ever refer to these identifiers.

use serde::{Deserialize, Serialize};

/// Identifier for one of the six architecture layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayerId {
    Ui,
    Embedding,
    Rag,
    Dialogue,
    Llm,
    Output,
}

impl LayerId {
    /// All layers in pipeline order (top of the stack first).
    pub fn all() -> &'static [LayerId] {
        &[
            LayerId::Ui,
            LayerId::Embedding,
            LayerId::Rag,
            LayerId::Dialogue,
            LayerId::Llm,
            LayerId::Output,
        ]
    }

    /// The stable string identifier used in navigation slugs.
    pub fn slug(&self) -> &'static str {
        match self {
            LayerId::Ui => "ui-layer",
            LayerId::Embedding => "embedding-layer",
            LayerId::Rag => "rag-layer",
            LayerId::Dialogue => "dialogue-layer",
            LayerId::Llm => "llm-layer",
            LayerId::Output => "output-layer",
        }
    }

    pub fn from_slug(slug: &str) -> Option<LayerId> {
        LayerId::all().iter().copied().find(|id| id.slug() == slug)
    }

    pub fn index(&self) -> usize {
        Self::all().iter().position(|id| id == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<LayerId> {
        Self::all().get(index).copied()
    }

    pub fn next(&self) -> LayerId {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    pub fn previous(&self) -> LayerId {
        let all = Self::all();
        let idx = self.index();
        all[if idx == 0 { all.len() - 1 } else { idx - 1 }]
    }

    /// The full catalog record for this layer.
    pub fn info(&self) -> &'static Layer {
        &LAYERS[self.index()]
    }
}

/// A static catalog entry describing one architecture layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    pub id: LayerId,
    pub title: &'static str,
    pub semantic_role: &'static str,
    pub description: &'static str,
    pub details: &'static [&'static str],
    pub context_need: &'static str,
    pub example: &'static str,
    pub integration: &'static str,
    pub sub_components: &'static [&'static str],
}

/// The six layers in pipeline order.
pub fn layers() -> &'static [Layer; 6] {
    &LAYERS
}

static LAYERS: [Layer; 6] = [
    Layer {
        id: LayerId::Ui,
        title: "1. User Interface (UI) Layer",
        semantic_role: "Interaction gateway for input and output. Routes queries but does not deeply process semantics.",
        description: "Serves as the interaction gateway, capturing user raw input and displaying generated responses.",
        details: &[
            "Input Validation: Ensures the user input meets length and character requirements.",
            "Session Management: Captures initial identifiers to track ongoing dialogues across turns.",
            "Front-end Interfaces: Chat windows, voice interfaces, and messaging app integrations.",
            "Rendering: Displays streaming text and maintains history persistence for user view.",
        ],
        context_need: "Essential for capturing session IDs. Without it, each query would be treated in isolation, breaking multi-turn conversations.",
        example: "A messaging app (Slack, WhatsApp) logging user sessions for history persistence.",
        integration: "Forwards raw input downstream to processing layers.",
        sub_components: &[],
    },
    Layer {
        id: LayerId::Embedding,
        title: "2. Input Processing & Embedding Layer",
        semantic_role: "Captures meaning beyond keywords, enabling handling of nuances like intent or sentiment.",
        description: "Converts raw text into semantically meaningful vector representations (embeddings).",
        details: &[
            "Tokenization & Entity Extraction: Breaking down sentences into sub-word units.",
            "Embedding Models: Using models like BERT or OpenAI text-embedding-3.",
            "Vectorization: Mapping text into high-dimensional space where \"meaning\" is represented by proximity.",
            "Preprocessing: Cleaning text and normalizing formats.",
        ],
        context_need: "Appends conversation history to the current query before embedding. Essential for anaphora resolution.",
        example: "Using Redis to maintain history before vectorizing to avoid model context limits.",
        integration: "Embeddings directly inform prompt construction and vector search queries.",
        sub_components: &[],
    },
    Layer {
        id: LayerId::Rag,
        title: "3. Retrieval & Knowledge Integration (RAG)",
        semantic_role: "Grounds responses in factual, contextually similar information from external knowledge bases.",
        description: "Searches knowledge bases or vector databases for relevant facts to ground the LLM response.",
        details: &[
            "Similarity Search: Calculating cosine similarity between query vectors and document chunks.",
            "Vector Databases: Using Pinecone, Weaviate, or Chroma for semantic indexing.",
            "Top-K Retrieval: Selecting the most relevant N chunks of information.",
            "Knowledge Augmentation: Injecting retrieved facts into the final prompt template.",
        ],
        context_need: "Retrieval queries must incorporate historical context to filter matches accordingly.",
        example: "Searching a corporate knowledge base with contextual embeddings.",
        integration: "Augments the prompt with factual data, significantly reducing hallucinations.",
        sub_components: &["Knowledge Base", "Vector DB", "Search Engine"],
    },
    Layer {
        id: LayerId::Dialogue,
        title: "4. Dialogue Management & Reasoning Layer",
        semantic_role: "Reasons over semantics to clarify ambiguities or determine necessary system actions.",
        description: "Manages conversation flow and logical progression using intent detection and state machines.",
        details: &[
            "Intent Classification: Determining if the user wants an answer, an action, or clarification.",
            "Slot Filling: Identifying missing pieces of information required to complete a task.",
            "State Machines: Handling multi-turn logic and complex branching.",
            "Entity Tracking: Maintaining a live record of specific names, dates, or values.",
        ],
        context_need: "Tracks entities across turns. Requires databases like MongoDB to handle long-term history.",
        example: "Recalling a user's earlier \"budget\" mention to refine a product recommendation.",
        integration: "Uses the LLM for reasoning steps while feeding it managed state.",
        sub_components: &["Context Manager", "Reasoning Engine"],
    },
    Layer {
        id: LayerId::Llm,
        title: "5. Core LLM Generation Layer",
        semantic_role: "Produces natural, semantically aligned text based on all gathered context.",
        description: "The Large Language Model generates a human-like response.",
        details: &[
            "Prompt Engineering: Crafting system instructions that set persona and constraints.",
            "Inference: Running the processed prompt through the neural network.",
            "Truncation: Summarizing old history to fit within context windows.",
            "Generation: Producing the raw text string for output processing.",
        ],
        context_need: "Prompt must include managed context. Truncation is vital as exceeding limits causes failure.",
        example: "Generating a response infused with historical context for deep personalization.",
        integration: "A direct inference call synthesizing RAG and dialogue history.",
        sub_components: &[],
    },
    Layer {
        id: LayerId::Output,
        title: "6. Output Post-Processing & Delivery",
        semantic_role: "Ensures output matches semantic intent and meets safety/quality guardrails.",
        description: "Polishes, formats, and verifies the final response before it reaches the user UI.",
        details: &[
            "Safety Guardrails: Checking for harmful or restricted content.",
            "Formatting: Converting raw output into Markdown or HTML.",
            "Fact Verification: Double-checking generated facts against RAG context.",
            "Citations: Appending source links for transparency.",
        ],
        context_need: "Final consistency checks to ensure response doesn't contradict earlier turns.",
        example: "Formatting a response with context-aware elements like citations.",
        integration: "Final polish before sending back to the UI Layer.",
        sub_components: &[],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_layers_in_pipeline_order() {
        assert_eq!(LayerId::all().len(), 6);
        assert_eq!(layers().len(), 6);
        for (idx, layer) in layers().iter().enumerate() {
            assert_eq!(layer.id.index(), idx);
        }
    }

    #[test]
    fn test_slug_round_trip() {
        for id in LayerId::all() {
            assert_eq!(LayerId::from_slug(id.slug()), Some(*id));
        }
        assert_eq!(LayerId::from_slug("not-a-layer"), None);
    }

    #[test]
    fn test_info_matches_id() {
        for id in LayerId::all() {
            assert_eq!(id.info().id, *id);
        }
    }

    #[test]
    fn test_next_previous_cycle() {
        assert_eq!(LayerId::Ui.previous(), LayerId::Output);
        assert_eq!(LayerId::Output.next(), LayerId::Ui);
        for id in LayerId::all() {
            assert_eq!(id.next().previous(), *id);
        }
    }

    #[test]
    fn test_every_layer_has_four_details() {
        for layer in layers() {
            assert_eq!(layer.details.len(), 4, "layer {:?}", layer.id);
        }
    }
}
