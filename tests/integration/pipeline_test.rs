//! Pipeline Integration Tests
//!
//! Feed XML to topics, topics through the satire filter, and chat generation,
//! with a scripted LLM provider standing in for Groq/OpenAI.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use jumla::{BlameTarget, ChatSession, ContentGenerator, GeneratedChat, SatireParams};
use jumla_llm::{
    LlmError, LlmProvider, LlmRequestOptions, LlmResponse, LlmResult, Message, ProviderConfig,
    ProviderType, StopReason, UsageStats,
};
use jumla_news::{FetchOutcome, NewsClient};

// ============================================================================
// Scripted provider
// ============================================================================

/// Answers the filter prompt by keyword and the chat prompt with a fixed chat.
struct ScriptedProvider {
    config: ProviderConfig,
    worthy_keyword: &'static str,
    chat: &'static str,
    calls: Mutex<usize>,
}

impl ScriptedProvider {
    fn new(worthy_keyword: &'static str, chat: &'static str) -> Self {
        Self {
            config: ProviderConfig::for_provider(ProviderType::Groq),
            worthy_keyword,
            chat,
            calls: Mutex::new(0),
        }
    }

    fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn model(&self) -> &str {
        "scripted-1"
    }

    fn config(&self) -> &ProviderConfig {
        &self.config
    }

    async fn send_message(
        &self,
        messages: Vec<Message>,
        _system: Option<String>,
        _request_options: LlmRequestOptions,
    ) -> LlmResult<LlmResponse> {
        *self.calls.lock().unwrap() += 1;
        let prompt = &messages[0].content;
        let content = if prompt.contains("satire-worthy? Answer with only") {
            if prompt.contains(self.worthy_keyword) {
                "YES"
            } else {
                "NO"
            }
        } else if prompt.contains("Leaked WhatsApp Chat") {
            self.chat
        } else {
            return Err(LlmError::InvalidRequest {
                message: "unexpected prompt".to_string(),
            });
        };
        Ok(LlmResponse {
            content: Some(content.to_string()),
            stop_reason: StopReason::EndTurn,
            usage: UsageStats::default(),
            model: "scripted-1".to_string(),
        })
    }

    async fn health_check(&self) -> LlmResult<()> {
        Ok(())
    }
}

const FEED: &str = r#"<?xml version="1.0"?>
<rss version="2.0"><channel><title>Test Wire</title>
<item>
  <title>Minister defends fuel price hike</title>
  <link>https://example.com/fuel</link>
  <description>&lt;p&gt;The minister said the fuel price hike was necessary and blamed global markets for it.&lt;/p&gt;</description>
</item>
<item>
  <title>Local team wins league</title>
  <description>The local cricket team won the league in a thrilling final on Sunday evening.</description>
</item>
<item>
  <title>Short item</title>
  <description>Too short to use.</description>
</item>
<item>
  <title>Opposition walks out of parliament</title>
  <description><![CDATA[Opposition members walked out of <b>parliament</b> over the new farm bill amendments.]]></description>
</item>
</channel></rss>"#;

const CHAT: &str = "Samit Shah: Arre, fuel ka kya scene hai?\n\
Jogi Raditya: **Jogi Raditya**: Bulldozer chalao!\n\
Some narration without a speaker\n\
S. Rajshankar: Western media ki saazish hai. S. Rajshankar\n\
Samit Shah: Theek hai.";

fn news_client() -> NewsClient {
    NewsClient::new(Duration::from_secs(5)).unwrap()
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_feed_to_topics() {
    let topics = news_client().topics_from_xml(FEED).unwrap().into_topics();
    assert_eq!(
        topics.titles().collect::<Vec<_>>(),
        vec![
            "Minister defends fuel price hike",
            "Local team wins league",
            "Opposition walks out of parliament",
        ]
    );
    let fuel = topics.get("Minister defends fuel price hike").unwrap();
    assert!(fuel.summary.starts_with("The minister said"));
    assert!(!fuel.summary.contains("<p>"));
    assert_eq!(fuel.link.as_deref(), Some("https://example.com/fuel"));
}

#[test]
fn test_feed_limits_from_client() {
    let outcome = news_client().with_limits(1, 50).topics_from_xml(FEED).unwrap();
    match outcome {
        FetchOutcome::Topics(topics) => assert_eq!(topics.len(), 1),
        FetchOutcome::Empty => panic!("expected one topic"),
    }
}

#[tokio::test]
async fn test_filter_then_generate() {
    let provider = Arc::new(ScriptedProvider::new("parliament", CHAT));
    let generator = ContentGenerator::new(provider.clone());

    let topics = news_client().topics_from_xml(FEED).unwrap().into_topics();
    let worthy = generator.filter_topics(&topics).await.unwrap();
    assert_eq!(
        worthy.titles().collect::<Vec<_>>(),
        vec!["Opposition walks out of parliament"]
    );
    assert_eq!(provider.calls(), 3);

    let mut session = ChatSession::new();
    session.store_topics("Test Wire", worthy);
    let topic = session.select_topic("1").unwrap().clone();

    let params = SatireParams::new(BlameTarget::Media, 9, 7, 3).unwrap();
    let raw = generator.generate_chat(&topic.summary, &params).await.unwrap();
    let chat = GeneratedChat::new(topic.title, topic.summary, raw).with_params(params);
    session.record_chat(chat);

    let styled = session.last_chat().unwrap().styled();
    let lines: Vec<(&str, &str, u8)> = styled
        .iter()
        .map(|s| (s.speaker.as_str(), s.message.as_str(), s.style.color_class.slot()))
        .collect();
    assert_eq!(
        lines,
        vec![
            ("Samit Shah", "Arre, fuel ka kya scene hai?", 1),
            ("Jogi Raditya", "Bulldozer chalao!", 2),
            ("S. Rajshankar", "Western media ki saazish hai.", 3),
            ("Samit Shah", "Theek hai.", 1),
        ]
    );
}

#[tokio::test]
async fn test_no_worthy_topics() {
    let provider = Arc::new(ScriptedProvider::new("nothing matches this", CHAT));
    let generator = ContentGenerator::new(provider);
    let topics = news_client().topics_from_xml(FEED).unwrap().into_topics();
    assert!(generator.filter_topics(&topics).await.unwrap().is_empty());
}
