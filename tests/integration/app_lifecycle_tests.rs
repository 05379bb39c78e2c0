/*!
 * Tests for controller construction, failure isolation and cleaning modes
 */

use std::fs;
use anyhow::Result;
use lyricstats::app_controller::Controller;
use lyricstats::errors::CorpusError;
use lyricstats::report::export::SUMMARY_FILE;
use crate::common;

fn is_corpus_error(error: &anyhow::Error) -> bool {
    error.chain().any(|cause| cause.downcast_ref::<CorpusError>().is_some())
}

/// Test that an invalid configuration is rejected before any work is done
#[test]
fn test_with_config_withInvalidConfig_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let stopwords = common::create_stopwords(temp_dir.path())?;
    let mut config = common::test_config(temp_dir.path(), temp_dir.path(), &stopwords);
    config.analysis.top_n = 0;

    assert!(Controller::with_config(config).is_err());

    Ok(())
}

/// Test that a missing input directory is a configuration error
#[test]
fn test_run_withMissingInputDir_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let stopwords = common::create_stopwords(temp_dir.path())?;
    let config = common::test_config(
        &temp_dir.path().join("does_not_exist"),
        &temp_dir.path().join("outputs"),
        &stopwords,
    );

    let controller = Controller::with_config(config)?;
    let error = controller.run(&mut Vec::new()).unwrap_err();

    assert!(is_corpus_error(&error));

    Ok(())
}

/// Test that a missing stopword list aborts the run without writing exports
#[test]
fn test_run_withMissingStopwords_shouldFailWithoutOutputs() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input_dir = temp_dir.path().join("lyrics");
    let output_dir = temp_dir.path().join("outputs");
    common::create_test_lyrics(&input_dir, "canzone.lrc")?;
    let config = common::test_config(&input_dir, &output_dir, &temp_dir.path().join("missing.txt"));

    let controller = Controller::with_config(config)?;
    let error = controller.run(&mut Vec::new()).unwrap_err();

    assert!(is_corpus_error(&error));
    assert!(!output_dir.join(SUMMARY_FILE).exists());

    Ok(())
}

/// Test that an undecodable document is skipped and recorded while the rest is analyzed
#[test]
fn test_run_withInvalidUtf8Document_shouldSkipAndRecord() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input_dir = temp_dir.path().join("lyrics");
    let output_dir = temp_dir.path().join("outputs");
    common::create_test_lyrics(&input_dir, "buona.lrc")?;
    fs::write(input_dir.join("rotta.lrc"), [b'[', b'0', 0xFF, 0xFE, b'\n'])?;
    let stopwords = common::create_stopwords(temp_dir.path())?;

    let controller = Controller::with_config(common::test_config(&input_dir, &output_dir, &stopwords))?;
    let mut console = Vec::new();
    let summary = controller.run(&mut console)?;

    assert_eq!(summary.documents.len(), 1);
    assert_eq!(summary.documents[0].name, "buona");
    assert_eq!(summary.failures.len(), 1);
    assert!(summary.failures[0].path.ends_with("rotta.lrc"));
    assert!(summary.failures[0].error.contains("UTF-8"));
    assert_eq!(summary.corpus.document_count, 1);

    let report = String::from_utf8(console)?;
    assert!(report.contains("Skipped 1 document(s):"));

    Ok(())
}

/// Test that fail-fast mode aborts on the first undecodable document
#[test]
fn test_run_withInvalidUtf8AndFailFast_shouldAbort() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input_dir = temp_dir.path().join("lyrics");
    let output_dir = temp_dir.path().join("outputs");
    common::create_test_lyrics(&input_dir, "buona.lrc")?;
    fs::write(input_dir.join("rotta.lrc"), [0xC3, 0x28])?;
    let stopwords = common::create_stopwords(temp_dir.path())?;

    let mut config = common::test_config(&input_dir, &output_dir, &stopwords);
    config.fail_fast = true;

    let controller = Controller::with_config(config)?;
    let error = controller.run(&mut Vec::new()).unwrap_err();

    assert!(is_corpus_error(&error));
    assert!(!output_dir.join(SUMMARY_FILE).exists());

    Ok(())
}

/// Test that an empty corpus produces zero statistics rather than an error
#[test]
fn test_run_withEmptyCorpus_shouldReportZeroStats() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input_dir = temp_dir.path().join("lyrics");
    let output_dir = temp_dir.path().join("outputs");
    common::create_test_file(&input_dir, "readme.txt", "nothing here")?;
    let stopwords = common::create_stopwords(temp_dir.path())?;

    let controller = Controller::with_config(common::test_config(&input_dir, &output_dir, &stopwords))?;
    let mut console = Vec::new();
    let summary = controller.run(&mut console)?;

    assert!(summary.documents.is_empty());
    assert_eq!(summary.corpus.document_count, 0);
    assert_eq!(summary.corpus.mean_word_count, 0.0);
    assert_eq!(summary.corpus.min_word_count.document, None);
    assert_eq!(summary.corpus.max_richness.document, None);

    let report = String::from_utf8(console)?;
    assert!(report.contains("No documents were analyzed."));

    Ok(())
}

/// Test that in-place cleaning rewrites the sources and creates no cleaned directory
#[test]
fn test_run_clean_withInPlace_shouldRewriteSources() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input_dir = temp_dir.path().join("lyrics");
    let output_dir = temp_dir.path().join("outputs");
    let source = common::create_test_lyrics(&input_dir, "canzone.lrc")?;
    let stopwords = common::create_stopwords(temp_dir.path())?;

    let mut config = common::test_config(&input_dir, &output_dir, &stopwords);
    config.clean_in_place = true;

    let controller = Controller::with_config(config)?;
    let outcome = controller.run_clean()?;

    assert_eq!(outcome.documents.len(), 1);
    assert_eq!(
        fs::read_to_string(&source)?,
        "Il cuore batte forte\nil cuore batte ancora\namore amore mio\n"
    );
    assert!(!controller.cleaned_dir().exists());

    // A second pass leaves the file unchanged
    controller.run_clean()?;
    assert_eq!(
        fs::read_to_string(&source)?,
        "Il cuore batte forte\nil cuore batte ancora\namore amore mio\n"
    );

    Ok(())
}

/// Test that the clean-only command reports failures as an error after cleaning the rest
#[test]
fn test_run_clean_withUndecodableDocument_shouldFailAfterCleaningOthers() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input_dir = temp_dir.path().join("lyrics");
    let output_dir = temp_dir.path().join("outputs");
    common::create_test_lyrics(&input_dir, "buona.lrc")?;
    fs::write(input_dir.join("rotta.lrc"), [0xFF])?;
    let stopwords = common::create_stopwords(temp_dir.path())?;

    let controller = Controller::with_config(common::test_config(&input_dir, &output_dir, &stopwords))?;

    assert!(controller.run_clean().is_err());
    assert!(controller.cleaned_dir().join("buona.lrc").exists());

    Ok(())
}
