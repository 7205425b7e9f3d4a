//! Transcript Integration Tests
//!
//! Parser and style table behavior as seen by callers of `jumla_core`.

use jumla_core::{
    clean_message, parse, style_transcript, Alignment, StyleTable, Utterance,
};

fn slots_and_alignments(text: &str) -> Vec<(String, u8, Alignment)> {
    let mut table = StyleTable::new();
    style_transcript(&parse(text), &mut table)
        .into_iter()
        .map(|s| (s.speaker, s.style.color_class.slot(), s.style.alignment))
        .collect()
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_end_to_end_example() {
    let text = "Samit Shah: Arre, yeh news dekhi?\nJogi Raditya: Haan sir, trending hai!";
    assert_eq!(
        slots_and_alignments(text),
        vec![
            ("Samit Shah".to_string(), 1, Alignment::Left),
            ("Jogi Raditya".to_string(), 2, Alignment::Right),
        ]
    );
    assert_eq!(
        parse(text),
        vec![
            Utterance::new("Samit Shah", "Arre, yeh news dekhi?"),
            Utterance::new("Jogi Raditya", "Haan sir, trending hai!"),
        ]
    );
}

#[test]
fn test_order_preserved_and_narration_dropped() {
    let text = "A: one\nThe chat goes quiet for a while\nB: two\n\nA: three";
    let speakers: Vec<_> = parse(text).into_iter().map(|u| u.message).collect();
    assert_eq!(speakers, vec!["one", "two", "three"]);
}

#[test]
fn test_literal_name_escaping() {
    let utterances =
        parse("S. Rajshankar: S. Rajshankar: Iske peeche saazish hai. S. Rajshankar");
    assert_eq!(utterances.len(), 1);
    assert_eq!(utterances[0].message, "Iske peeche saazish hai.");

    // The dot in the name must not act as a wildcard
    assert_eq!(
        clean_message("S. Rajshankar", "SX Rajshankar says hi"),
        "SX Rajshankar says hi"
    );
}

#[test]
fn test_emphasis_removed() {
    let utterances = parse("Mahendra Godi: **Mitron**, humari sarkar acchi hai **jai hind**");
    assert_eq!(utterances[0].message, "Mitron, humari sarkar acchi hai jai hind");
}

#[test]
fn test_cleaning_is_idempotent() {
    let samples = [
        ("Samit Shah", "**Samit Shah**: Arre! samit shah"),
        ("Nirmal Siyaraman", "What about 2004?! **Nirmal Siyaraman**"),
        ("Jogi Raditya", "Bulldozer chalega."),
    ];
    for (speaker, message) in samples {
        let once = clean_message(speaker, message);
        assert_eq!(clean_message(speaker, &once), once, "speaker {}", speaker);
    }
}

#[test]
fn test_tagged_and_crlf_lines() {
    let text = "[10:42 PM] Samit Shah: Meeting abhi.\r\n[10:43 PM] Jogi Raditya: Ji sir.\r\n";
    let utterances = parse(text);
    assert_eq!(utterances.len(), 2);
    assert_eq!(utterances[0].speaker, "Samit Shah");
    assert_eq!(utterances[1].message, "Ji sir.");
}

// ============================================================================
// Styles
// ============================================================================

#[test]
fn test_style_cycle_for_six_speakers() {
    let text = "A: 1\nB: 2\nC: 3\nD: 4\nE: 5\nF: 6\nA: 7";
    let styles = slots_and_alignments(text);
    let slots: Vec<u8> = styles.iter().map(|s| s.1).collect();
    let aligns: Vec<Alignment> = styles.iter().map(|s| s.2).collect();
    assert_eq!(slots, vec![1, 2, 3, 4, 1, 2, 1]);
    assert_eq!(
        aligns,
        vec![
            Alignment::Left,
            Alignment::Right,
            Alignment::Left,
            Alignment::Right,
            Alignment::Left,
            Alignment::Right,
            Alignment::Left,
        ]
    );
}

#[test]
fn test_similar_names_are_distinct_speakers() {
    let styles = slots_and_alignments("Shah: x\nSamit Shah: y\nshah: z");
    let slots: Vec<u8> = styles.iter().map(|s| s.1).collect();
    assert_eq!(slots, vec![1, 2, 3]);
}

#[test]
fn test_fresh_table_per_render() {
    let first = slots_and_alignments("B: x\nA: y");
    let second = slots_and_alignments("A: y");
    assert_eq!(first[1].1, 2);
    assert_eq!(second[0].1, 1);
}
