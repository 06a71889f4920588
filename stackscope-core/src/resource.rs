//! The fixed catalog of resource groups.

use serde::{Deserialize, Serialize};

/// Identifier for one of the four resource categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceId {
    Frameworks,
    Benchmarks,
    Safety,
    OpenSource,
}

impl ResourceId {
    pub fn all() -> &'static [ResourceId] {
        &[
            ResourceId::Frameworks,
            ResourceId::Benchmarks,
            ResourceId::Safety,
            ResourceId::OpenSource,
        ]
    }

    pub fn slug(&self) -> &'static str {
        match self {
            ResourceId::Frameworks => "frameworks",
            ResourceId::Benchmarks => "benchmarks",
            ResourceId::Safety => "safety",
            ResourceId::OpenSource => "open-source",
        }
    }

    pub fn from_slug(slug: &str) -> Option<ResourceId> {
        ResourceId::all().iter().copied().find(|id| id.slug() == slug)
    }

    pub fn index(&self) -> usize {
        Self::all().iter().position(|id| id == self).unwrap_or(0)
    }

    pub fn info(&self) -> &'static ResourceGroup {
        &RESOURCES[self.index()]
    }
}

/// An external resource entry inside a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLink {
    pub name: &'static str,
    pub desc: &'static str,
    pub url: &'static str,
}

/// A static catalog entry describing one resource category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceGroup {
    pub id: ResourceId,
    pub title: &'static str,
    pub description: &'static str,
    pub items: &'static [ResourceLink],
}

/// The four resource groups in catalog order.
pub fn resource_groups() -> &'static [ResourceGroup; 4] {
    &RESOURCES
}

static RESOURCES: [ResourceGroup; 4] = [
    ResourceGroup {
        id: ResourceId::Frameworks,
        title: "Orchestration Frameworks",
        description: "Tools for chaining layers and building complex agentic workflows.",
        items: &[
            ResourceLink {
                name: "LangChain",
                desc: "The industry standard for chaining LLM calls and managing memory.",
                url: "https://python.langchain.com/",
            },
            ResourceLink {
                name: "LlamaIndex",
                desc: "Specialized in connecting LLMs to external data and indexing.",
                url: "https://www.llamaindex.ai/",
            },
            ResourceLink {
                name: "Haystack",
                desc: "An open-source NLP framework for building RAG pipelines.",
                url: "https://haystack.deepset.ai/",
            },
            ResourceLink {
                name: "Semantic Kernel",
                desc: "Microsoft SDK for integrating LLMs with conventional languages.",
                url: "https://learn.microsoft.com/en-us/semantic-kernel/",
            },
        ],
    },
    ResourceGroup {
        id: ResourceId::Benchmarks,
        title: "Performance Benchmarks",
        description: "Standardized tests to measure reasoning, coding, and factual accuracy.",
        items: &[
            ResourceLink {
                name: "MMLU",
                desc: "Massive Multitask Language Understanding across 57 subjects.",
                url: "https://github.com/hendrycks/test",
            },
            ResourceLink {
                name: "HumanEval",
                desc: "Measures code generation capabilities in Python.",
                url: "https://github.com/openai/human-eval",
            },
            ResourceLink {
                name: "GSM8K",
                desc: "Grade school math word problems for multi-step reasoning.",
                url: "https://github.com/openai/grade-school-math",
            },
            ResourceLink {
                name: "HELM",
                desc: "Holistic Evaluation of Language Models across many metrics.",
                url: "https://crfm.stanford.edu/helm/",
            },
        ],
    },
    ResourceGroup {
        id: ResourceId::Safety,
        title: "Safety & Guardrails",
        description: "Mitigating risks, bias, and hallucinations in production systems.",
        items: &[
            ResourceLink {
                name: "Guardrails AI",
                desc: "Framework for adding structure and quality checks to outputs.",
                url: "https://www.guardrailsai.com/",
            },
            ResourceLink {
                name: "Llama Guard",
                desc: "A safety classifier model for input/output monitoring.",
                url: "https://huggingface.co/meta-llama/Llama-Guard-3-8B",
            },
            ResourceLink {
                name: "Perspective API",
                desc: "Google Jigsaw tool for detecting toxic or harmful speech.",
                url: "https://www.perspectiveapi.com/",
            },
            ResourceLink {
                name: "Red Teaming",
                desc: "Adversarial testing to find edge-case failures.",
                url: "https://www.anthropic.com/news/red-teaming-language-models",
            },
        ],
    },
    ResourceGroup {
        id: ResourceId::OpenSource,
        title: "Open Source Ecosystem",
        description: "Publicly accessible models and datasets for localized deployment.",
        items: &[
            ResourceLink {
                name: "Llama 3",
                desc: "Meta's state-of-the-art open weights foundation model.",
                url: "https://llama.meta.com/",
            },
            ResourceLink {
                name: "Mistral / Mixtral",
                desc: "High-efficiency models using Mixture-of-Experts architecture.",
                url: "https://mistral.ai/",
            },
            ResourceLink {
                name: "Hugging Face Hub",
                desc: "The central repository for weights, datasets, and demos.",
                url: "https://huggingface.co/",
            },
            ResourceLink {
                name: "Ollama",
                desc: "Local tool for running LLMs efficiently on personal hardware.",
                url: "https://ollama.com/",
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_groups_of_four_items() {
        assert_eq!(resource_groups().len(), 4);
        for group in resource_groups() {
            assert_eq!(group.items.len(), 4, "group {:?}", group.id);
        }
    }

    #[test]
    fn test_slug_round_trip() {
        for id in ResourceId::all() {
            assert_eq!(ResourceId::from_slug(id.slug()), Some(*id));
        }
        assert_eq!(ResourceId::from_slug("frameworkz"), None);
    }

    #[test]
    fn test_info_matches_id() {
        for id in ResourceId::all() {
            assert_eq!(id.info().id, *id);
        }
    }
}
