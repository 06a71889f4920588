//! Business-value cards.

use serde::{Deserialize, Serialize};

/// One value-proposition card: a title, a one-sentence pitch, and an impact
/// metric label. This is also the wire shape the generation endpoint is
/// instructed to return, so field names stay short.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueCard {
    pub title: String,
    pub desc: String,
    pub metric: String,
}

impl ValueCard {
    /// The fixed default set of four cards, shown until a generation
    /// succeeds and again whenever one fails.
    pub fn defaults() -> Vec<ValueCard> {
        vec![
            ValueCard {
                title: "Reduced Hallucinations".to_string(),
                desc: "By grounding responses in the RAG layer, businesses eliminate the risk of inaccurate or made-up claims.".to_string(),
                metric: "95%+ Fact Accuracy".to_string(),
            },
            ValueCard {
                title: "Operational Cost Efficiency".to_string(),
                desc: "Semantic chatbots handle Tier 1 and Tier 2 support queries instantly, reducing manual overhead.".to_string(),
                metric: "Up to 40% Cost Savings".to_string(),
            },
            ValueCard {
                title: "Superior User Retention".to_string(),
                desc: "Context-aware systems remember user preferences and history, creating a frictionless customer journey.".to_string(),
                metric: "+30% Engagement Rate".to_string(),
            },
            ValueCard {
                title: "Rapid Market Adaptation".to_string(),
                desc: "Updating the bot's knowledge base allows it to speak on new products instantly without retraining.".to_string(),
                metric: "Real-time Knowledge Updates".to_string(),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_has_four_cards() {
        let cards = ValueCard::defaults();
        assert_eq!(cards.len(), 4);
        for card in &cards {
            assert!(!card.title.is_empty());
            assert!(!card.desc.is_empty());
            assert!(!card.metric.is_empty());
        }
    }

    #[test]
    fn test_card_deserializes_from_endpoint_shape() {
        let json = r#"{"title":"T","desc":"D","metric":"M"}"#;
        let card: ValueCard = serde_json::from_str(json).unwrap();
        assert_eq!(card.title, "T");
        assert_eq!(card.desc, "D");
        assert_eq!(card.metric, "M");
    }
}
