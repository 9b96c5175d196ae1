use std::fs;

use crate::extractor::Extractor;
use crate::normalize::normalize;
use crate::transcript::Transcript;

#[test]
fn full_page_becomes_typing_material() {
    let _ = env_logger::builder().is_test(true).try_init();

    let html = concat!(
        "<html><head><title>Scraping for Craft Beers</title></head><body>",
        "<div role=\"main\">",
        "<h1>Craft Beers</h1>",
        "<p>A dataset <em>creation</em> tutorial.</p>",
        "<ul><li>collect the pages </li><li>and parse them</li></ul>",
        "<p>Use the <code class=\"highlighter-rouge\">find_all</code> helper.</p>",
        "<div class=\"syntaxhighlighter\"><pre>soup.find_all(\"div\")</pre></div>",
        "<table><tr><td>abv</td></tr></table>",
        "<a class=\"meta-comments\" href=\"#comments\">42 Comments</a>",
        "<p>Happy typing!</p>",
        "</div></body></html>",
    );

    let (title, text) = Extractor::extract(html).unwrap();
    let content = normalize(&text);

    assert_eq!(title, "Scraping for Craft Beers");
    assert_eq!(
        content,
        "\nCraft Beers\n\nA dataset creation tutorial.\ncollect the pages and parse them\nUse the find_all helper.\n\nHappy typing!"
    );
    assert!(!content.contains("soup.find_all"));
    assert!(!content.contains("abv"));
    assert!(!content.contains("42 Comments"));
}

#[test]
fn saved_transcript_has_the_expected_layout() {
    let transcript = Transcript {
        title: "T".to_owned(),
        content: "\nHello\n\nWorld".to_owned(),
    };

    let path = std::env::temp_dir().join("typing_scraper_result.txt");
    transcript.save(&path).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, "Title:\nT\n\n\nHello\n\nWorld");

    let _ = fs::remove_file(&path);
}
