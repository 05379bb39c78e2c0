/*!
 * Tests for per-document statistics and corpus aggregation
 */

use std::collections::HashSet;
use lyricstats::analysis::document::{detect_themes, lexical_richness, repeated_words, singleton_word, top_n_words};
use lyricstats::analysis::{aggregate, DocumentAnalyzer, FrequencyTable, PerDocumentStats};
use lyricstats::app_config::AnalysisConfig;
use lyricstats::lyrics::{tokenize, StopwordSet, ThemeDictionary};

fn analyze_all(docs: &[(&str, &str)], stopwords: &StopwordSet) -> Vec<PerDocumentStats> {
    let themes = ThemeDictionary::new([("amore", vec!["amore", "cuore"])]).unwrap();
    let analyzer = DocumentAnalyzer::new(stopwords, &themes, AnalysisConfig::default());
    docs.iter().map(|(name, text)| analyzer.analyze(name, text)).collect()
}

/// Test the richness bounds on a range of documents
#[test]
fn test_lexical_richness_withVariousDocuments_shouldStayInUnitInterval() {
    let samples = ["", "uno", "uno uno", "uno due tre", "la la la la sole", "a b a b a b c"];
    for sample in samples {
        let tokens = tokenize(sample);
        let richness = lexical_richness(&tokens);
        assert!((0.0..=1.0).contains(&richness), "{} out of range for {:?}", richness, sample);

        let unique: HashSet<&String> = tokens.iter().collect();
        assert_eq!(richness == 1.0, !tokens.is_empty() && unique.len() == tokens.len());
        assert_eq!(richness == 0.0, tokens.is_empty());
    }
}

/// Test that repeated words match exactly the frequency entries above the threshold
#[test]
fn test_repeated_words_shouldMatchFrequencyTableAboveThreshold() {
    let mut text = String::new();
    for (word, count) in [("mare", 9), ("sole", 10), ("vento", 11), ("luna", 25)] {
        for _ in 0..count {
            text.push_str(word);
            text.push(' ');
        }
    }
    let tokens = tokenize(&text);
    let table = FrequencyTable::from_tokens(&tokens);

    let repeated = repeated_words(&tokens, 10);
    let expected: Vec<(String, usize)> = table
        .iter()
        .filter(|(_, count)| *count > 10)
        .map(|(word, count)| (word.to_string(), count))
        .collect();

    assert_eq!(repeated, expected);
    assert_eq!(repeated, vec![("vento".to_string(), 11), ("luna".to_string(), 25)]);
}

/// Test top-N ordering by count then first occurrence
#[test]
fn test_top_n_words_withTies_shouldKeepFirstSeenOrder() {
    let tokens = tokenize("notte giorno notte giorno alba");
    assert_eq!(
        top_n_words(&tokens, 2),
        vec![("notte".to_string(), 2), ("giorno".to_string(), 2)]
    );
}

/// Test theme example: both keywords present gives a count of two, regardless of frequency
#[test]
fn test_detect_themes_withBothKeywords_shouldCountTwo() {
    let themes = ThemeDictionary::new([("amore", vec!["amore", "cuore"])]).unwrap();
    let mut text = "amore ".repeat(50);
    text.push_str("cuore");
    let tokens = tokenize(&text);
    let unique: HashSet<&str> = tokens.iter().map(|t| t.as_str()).collect();

    let found = detect_themes(&unique, &themes);

    assert_eq!(found.get("amore"), Some(&2));
}

/// Test the singleton examples
#[test]
fn test_singleton_word_examples() {
    let stopwords = StopwordSet::from_words(["il", "di"]);
    assert_eq!(singleton_word(&stopwords.filter(&["il", "cane", "di", "cane"])), None);

    let no_stopwords = StopwordSet::empty();
    assert_eq!(
        singleton_word(&no_stopwords.filter(&["sole", "sole", "luna"])),
        Some("luna".to_string())
    );
}

/// Test that presence counts equal the number of documents containing each word
#[test]
fn test_aggregate_presenceCounts_shouldCountDocumentsNotOccurrences() {
    let stopwords = StopwordSet::from_words(["e"]);
    let docs = analyze_all(
        &[
            ("uno", "sole e sole e sole"),
            ("due", "sole luna"),
            ("tre", "luna luna luna stelle"),
        ],
        &stopwords,
    );

    let corpus = aggregate(&docs);

    for (word, presence) in corpus.presence_counts.iter() {
        let containing = docs
            .iter()
            .filter(|d| d.filtered_frequencies.contains(word))
            .count();
        assert_eq!(presence, containing, "presence of {}", word);
        assert!(presence <= docs.len());
    }
    assert_eq!(corpus.global_frequency.get("sole"), 4);
    assert_eq!(corpus.global_frequency.get("luna"), 4);
    assert_eq!(corpus.presence_counts.get("sole"), 2);
    assert_eq!(corpus.presence_counts.get("luna"), 2);
    assert!(!corpus.presence_counts.contains("e"));
    // sole 4, luna 4, stelle 1
    assert_eq!(corpus.global_frequency.total(), 9);
}

/// Test the 10/20/30 example from the design
#[test]
fn test_aggregate_withTenTwentyThirty_shouldAttributeFirstAndThird() {
    let doc = |n: usize| vec!["parola"; n].join(" ");
    let (a, b, c) = (doc(10), doc(20), doc(30));
    let docs = analyze_all(
        &[("1_prima", a.as_str()), ("2_seconda", b.as_str()), ("3_terza", c.as_str())],
        &StopwordSet::empty(),
    );

    let corpus = aggregate(&docs);

    assert_eq!(corpus.mean_word_count, 20.0);
    assert_eq!(corpus.min_word_count.value, 10);
    assert_eq!(corpus.min_word_count.document.as_deref(), Some("1_prima"));
    assert_eq!(corpus.max_word_count.value, 30);
    assert_eq!(corpus.max_word_count.document.as_deref(), Some("3_terza"));
}

/// Test that equal lengths make min, mean and max coincide
#[test]
fn test_aggregate_withEqualLengths_shouldHaveEqualMinMeanMax() {
    let docs = analyze_all(&[("a", "x y"), ("b", "z w"), ("c", "q q")], &StopwordSet::empty());
    let corpus = aggregate(&docs);

    assert_eq!(corpus.min_word_count.value, 2);
    assert_eq!(corpus.max_word_count.value, 2);
    assert_eq!(corpus.mean_word_count, 2.0);
}

/// Test that the aggregation does not depend on the input order
#[test]
fn test_aggregate_withShuffledInput_shouldBeReproducible() {
    let texts = [("b", "uno due"), ("a", "tre"), ("c", "quattro cinque")];
    let forward = aggregate(&analyze_all(&texts, &StopwordSet::empty()));

    let reversed_texts: Vec<(&str, &str)> = texts.iter().rev().copied().collect();
    let reversed = aggregate(&analyze_all(&reversed_texts, &StopwordSet::empty()));

    assert_eq!(forward.max_word_count, reversed.max_word_count);
    assert_eq!(forward.max_word_count.document.as_deref(), Some("b"));
    assert_eq!(forward.max_richness, reversed.max_richness);
    assert_eq!(forward.top_global(10), reversed.top_global(10));
}
