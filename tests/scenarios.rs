//! End-to-end summarization scenarios through the public API.

use rapid_summarizer::pipeline::LeadRanker;
use rapid_summarizer::variants::EdmundsonConfig;
use rapid_summarizer::{
    summarize, Document, Edmundson, LengthSpec, LexRank, Lsa, Ranker, SummarizerError,
    SummaryPipeline, TermNormalizer, WordTokenizer,
};

fn texts(sentences: &[&rapid_summarizer::Sentence]) -> Vec<String> {
    sentences.iter().map(|s| s.text().to_string()).collect()
}

fn numbered(count: usize) -> Document {
    let sentences: Vec<String> = (0..count).map(|i| format!("Sentence number {i}.")).collect();
    let refs: Vec<&str> = sentences.iter().map(String::as_str).collect();
    Document::from_paragraphs(&[refs.as_slice()], &WordTokenizer)
}

#[test]
fn luhn_picks_the_densest_sentences_in_document_order() {
    let doc = Document::from_paragraphs(
        &[&[
            "alpha beta gamma delta",
            "rust rust fast rust compiler",
            "ocean waves ocean tides",
            "cats dogs birds fish",
            "music music music music",
        ]],
        &WordTokenizer,
    );
    let pipeline =
        SummaryPipeline::from_json(r#"{ "v": 1, "method": "luhn", "length": 2, "stop_words": [] }"#)
            .unwrap();
    let result = pipeline.run(&doc).unwrap();

    assert_eq!(
        texts(&result.sentences()),
        vec!["rust rust fast rust compiler", "music music music music"]
    );
}

#[test]
fn percentages_round_half_up_with_at_least_one_sentence() {
    let cases = [("50%", 4, 2), ("50%", 3, 2), ("10%", 5, 1), ("30%", 5, 2), ("20%", 10, 2)];
    for (length, total, expected) in cases {
        let doc = numbered(total);
        let json = format!(r#"{{ "v": 1, "length": "{length}" }}"#);
        let pipeline = SummaryPipeline::from_json(&json).unwrap();
        let result = pipeline.run(&doc).unwrap();

        assert_eq!(result.len(), expected, "{length} of {total}");
    }
}

#[test]
fn length_beyond_document_returns_everything() {
    let doc = numbered(3);
    let summary = summarize(
        &doc,
        &LeadRanker,
        &TermNormalizer::default(),
        LengthSpec::Sentences(50),
    )
    .unwrap();

    assert_eq!(summary.len(), 3);
}

#[test]
fn lsa_single_sentence_and_empty_documents() {
    let doc = Document::from_paragraphs(&[&["I am the sentence you like"]], &WordTokenizer);
    let summary = summarize(&doc, &Lsa::new(), &TermNormalizer::default(), LengthSpec::Sentences(10))
        .unwrap();
    assert_eq!(texts(&summary), vec!["I am the sentence you like"]);

    let empty = Document::default();
    let summary = summarize(&empty, &Lsa::new(), &TermNormalizer::default(), LengthSpec::Sentences(10))
        .unwrap();
    assert!(summary.is_empty());
}

#[test]
fn lsa_document_without_content_terms_rates_zero() {
    let doc = Document::from_paragraphs(&[&["...", "!!!"]], &WordTokenizer);
    let rating = Lsa::new().rate(&doc, &TermNormalizer::default()).unwrap();
    assert_eq!(rating.scores(), &[0.0, 0.0]);
}

#[test]
fn lex_rank_identical_sentences_are_equally_central() {
    let doc = Document::from_paragraphs(
        &[&[
            "memory safety without garbage collection",
            "fearless concurrency with ownership",
            "memory safety without garbage collection",
        ]],
        &WordTokenizer,
    );
    for ranker in [LexRank::new(), LexRank::text_rank()] {
        // The copies are linked; the third sentence shares no words
        let graph = ranker.build_graph(&doc, &TermNormalizer::default());
        assert_eq!(graph.num_edges(), 1, "{}", ranker.name());
        assert_eq!(graph.isolated(), vec![1], "{}", ranker.name());

        let rating = ranker.rate(&doc, &TermNormalizer::default()).unwrap();
        assert!(
            (rating.score(0) - rating.score(2)).abs() < 1e-9,
            "{}: {:?}",
            ranker.name(),
            rating.scores()
        );
        assert!((rating.score(1) - 1.0 / 3.0).abs() < 1e-9);
    }
}

#[test]
fn edmundson_requires_cue_words() {
    let doc = numbered(3);
    let err = Edmundson::new()
        .rate(&doc, &TermNormalizer::default())
        .unwrap_err();
    assert_eq!(err, SummarizerError::MissingCueWords("bonus"));
}

#[test]
fn edmundson_uses_headings_as_title_words() {
    let tokenizer = WordTokenizer;
    let doc = Document::builder()
        .tokenized_heading("Ocean tides", &tokenizer)
        .paragraph()
        .tokenized_sentence("Cats chase mice", &tokenizer)
        .tokenized_sentence("Tides follow the moon", &tokenizer)
        .tokenized_sentence("Dogs bark", &tokenizer)
        .build();
    let config = EdmundsonConfig::default().with_weights(0.0, 1.0, 0.0, 0.0);
    let summary = summarize(
        &doc,
        &Edmundson::with_config(config),
        &TermNormalizer::default(),
        LengthSpec::Sentences(1),
    )
    .unwrap();

    assert_eq!(texts(&summary), vec!["Tides follow the moon"]);
    assert!(summary.iter().all(|s| !s.is_heading()));
}

#[test]
fn invalid_lengths_are_rejected() {
    let doc = numbered(3);
    for length in [LengthSpec::Sentences(0), LengthSpec::Percent(0.0), LengthSpec::Percent(-10.0)] {
        let err = summarize(&doc, &LeadRanker, &TermNormalizer::default(), length).unwrap_err();
        assert!(err.is_config_error(), "{length}");
    }
}
