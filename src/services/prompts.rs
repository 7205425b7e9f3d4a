//! Built-in Prompts
//!
//! The two prompts the pipeline sends: a yes/no newsworthiness check and the
//! leaked-chat script request.

use std::sync::LazyLock;

use jumla_llm::PromptTemplate;

/// Variable holding the plain-text news summary in both prompts.
pub const NEWS_SUMMARY_VAR: &str = "news_summary";

const NEWS_FILTER_TEXT: &str = r#"
You are a sharp political news editor. Your job is to determine if a news summary is interesting enough for a political satire show.
A "satire-worthy" story involves politics, controversy, major policy decisions, or hypocrisy.
Stories about sports, movies, general business, celebrity news or feel-good events are "not interesting."

News Summary: "{news_summary}"

Is this summary satire-worthy? Answer with only "YES" or "NO".
"#;

const LEAKED_CHAT_TEXT: &str = r#"
You are an award-winning scriptwriter for a top-tier Indian political satire show. You are a master impersonator of political figures and an expert in the nuances of Indian Hinglish WhatsApp chats.

**Your Task:** Write a fake, "leaked" WhatsApp chat between senior members of a nationalist, right-leaning Indian political party as they react to a news event.

**Character Personas (CRITICAL):**
- **Samit Shah:** The 'Chanakya'. Ruthless, intimidating, and secretive. Obsessed with electoral math, not ideology. Views everything as a political battle to be won at any cost. Always blames the '70 years of the past' for everything.
- **Jogi Raditya:** The Firebrand. Extremely ambitious and authoritarian. Sees 'bulldozer' vigilantism as the *only* solution to every problem, from crime to bad press. Communicates purely in divisive, communal 'us vs. them' rhetoric. Rash and impulsive.
- **S. Rajshankar:** The Technocrat. Arrogant, combative, and condescending. Believes he is the smartest person in any room. Dismisses all criticism as an 'international plot' or 'Western hypocrisy.' His solution is always a 'sharp' (i.e., rude) tweet.
- **Nirmal Siyaraman:** The Defender. Extremely defensive and aggressive, especially with the media. Will attack any journalist who asks a critical question. Master of whataboutism and deflection ("What about...?!"). Can seem completely out of touch with on-the-ground reality (e.g., "I don't eat onions").
- **Mahendra Godi:** The Messianic Leader. Intolerant of any dissent. Speaks only in grand, messianic terms and slogans, viewing himself as the singular savior. Avoids all unscripted questions. His contribution to the chat is usually a vague, emotionally-charged platitude.

**Narrative Arc (Follow this structure):**
1.  **The News Breaks (Initial Reaction):** The chat starts with concern or anger.
2.  **Brainstorming the Spin:** The characters debate how to frame the issue to their advantage.
3.  **The Absurd "Action Plan":** They agree on a ridiculous, over-the-top plan to counter the "narrative."

**Formatting Rule (Follow PRECISELY):**
- Start each message on a new line.
- The format MUST be exactly `Character Name: Message Text`.
- DO NOT add the character name anywhere else in the message.
- DO NOT use markdown bolding (`**`) in the output.

**Example of Correct Output Format:**
Samit Shah: Arre, yeh news dekhi?
Jogi Raditya: Haan sir, trending hai!
S. Rajshankar: Iske peeche international saazish hai.
Nirmal Siyaraman: Let's not jump to conclusions. First, we blame the Opposition.
Mahendra Godi: Mitron, humari sarkar ko log pyar karte hai.

**News Summary to Analyze:** "{news_summary}"

**Chat Parameters to Weave In:**
- **Primary Target of Blame:** {blame}
- **Promise Tone:** {promise_tone}/10 (How wild should the final "action plan" promise be?)
- **Nationalism Level:** {nationalism_level}/10 (How much nationalistic jargon should they use?)
- **Development Focus:** {development_focus}/10 (How much should they talk about grand, unrelated projects?)

**Leaked WhatsApp Chat:**
"#;

static NEWS_FILTER: LazyLock<PromptTemplate> =
    LazyLock::new(|| PromptTemplate::new(NEWS_FILTER_TEXT));

static LEAKED_CHAT: LazyLock<PromptTemplate> =
    LazyLock::new(|| PromptTemplate::new(LEAKED_CHAT_TEXT));

/// Asks for a bare YES/NO on whether a summary is satire material.
pub fn news_filter_template() -> &'static PromptTemplate {
    &NEWS_FILTER
}

/// Asks for a `Name: message` chat reacting to a summary.
pub fn leaked_chat_template() -> &'static PromptTemplate {
    &LEAKED_CHAT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_template_variables() {
        assert_eq!(news_filter_template().variables(), &[NEWS_SUMMARY_VAR.to_string()]);
    }

    #[test]
    fn test_chat_template_variables() {
        assert_eq!(
            leaked_chat_template().variables(),
            &[
                "news_summary".to_string(),
                "blame".to_string(),
                "promise_tone".to_string(),
                "nationalism_level".to_string(),
                "development_focus".to_string(),
            ]
        );
    }

    #[test]
    fn test_chat_template_example_parses() {
        // The format example in the prompt must itself be parseable.
        let example: String = LEAKED_CHAT_TEXT
            .lines()
            .skip_while(|l| !l.starts_with("**Example"))
            .skip(1)
            .take_while(|l| !l.trim().is_empty())
            .collect::<Vec<_>>()
            .join("\n");
        let utterances = jumla_core::parse(&example);
        assert_eq!(utterances.len(), 5);
        assert_eq!(utterances[2].speaker, "S. Rajshankar");
    }
}
