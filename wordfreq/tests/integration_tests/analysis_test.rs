// tests/integration_tests/analysis_test.rs
use super::common::{SAMPLE_TEXT, create_ignore_file, setup_sample_file};
use anyhow::Result;
use std::fs;
use wordfreq::{IgnoredWords, analyze, load_ignored_words};

#[test]
fn test_sample_text_tallies() -> Result<()> {
    let analysis = analyze(SAMPLE_TEXT, &IgnoredWords::new());

    // 19 tokens in total; "42" is not a word, so 18 countable words
    // across 11 distinct spellings.
    assert_eq!(analysis.stats.total_words, 19);
    assert_eq!(analysis.stats.unique_words, 11);
    assert_eq!(
        analysis.counter.find(&"the".to_owned()).map(|e| e.count),
        Some(4)
    );
    assert_eq!(
        analysis.counter.find(&"quick".to_owned()).map(|e| e.count),
        Some(3)
    );
    assert!(!analysis.counter.contains(&"42".to_owned()));
    Ok(())
}

#[test]
fn test_ignore_list_excludes_words_from_counting() -> Result<()> {
    let (dir, _path) = setup_sample_file()?;
    let ignore_path = create_ignore_file(dir.path(), &["# stopwords", "the", "a"])?;

    let ignored = load_ignored_words(&ignore_path)?;
    let analysis = analyze(SAMPLE_TEXT, &ignored);

    assert_eq!(analysis.stats.total_words, 19);
    assert_eq!(analysis.stats.unique_words, 10);
    assert!(!analysis.counter.contains(&"the".to_owned()));
    Ok(())
}

#[test]
fn test_analysis_over_file_on_disk() -> Result<()> {
    let (_dir, path) = setup_sample_file()?;
    let content = fs::read_to_string(&path)?;

    let analysis = analyze(&content, &IgnoredWords::new());
    assert_eq!(analysis.stats.unique_words, 11);
    Ok(())
}
