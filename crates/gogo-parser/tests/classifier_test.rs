use gogo_common::{Category, Command};
use gogo_parser::patterns::PatternDefinition;
use gogo_parser::{
    classify, extract, process, process_text, CaptureSelection, Classifier, Extractor,
    PatternLibrary,
};

#[test]
fn test_classify_is_deterministic() {
    let commands = [
        "open the bus tab",
        "navigate to the airport",
        "find coffee shops",
        "asdkjhasdkjh",
    ];
    for cmd in commands {
        let first = classify(cmd);
        for _ in 0..5 {
            assert_eq!(classify(cmd), first, "classify({:?}) changed", cmd);
        }
    }
}

#[test]
fn test_tab_control_beats_navigation() {
    assert_eq!(classify("open the bus tab"), Category::TabControl);

    // Also matches the generic "go to X" navigation shape.
    let both = "go to the bus tab";
    let library = PatternLibrary::builtin();
    let navigation = library.get(Category::Navigation).unwrap();
    assert!(navigation.first_match(both).is_some());
    assert_eq!(classify(both), Category::TabControl);
}

#[test]
fn test_unmatched_text_is_unknown() {
    assert_eq!(classify("asdkjhasdkjh"), Category::Unknown);
    assert_eq!(classify(""), Category::Unknown);
    assert_eq!(classify("   \n\t"), Category::Unknown);
}

#[test]
fn test_untrimmed_input() {
    assert_eq!(classify("   find coffee shops   "), Category::Search);
    assert_eq!(extract("   find coffee shops   ", Category::Search), "coffee shops");
}

#[test]
fn test_case_insensitive() {
    assert_eq!(classify("NAVIGATE TO THE AIRPORT"), Category::Navigation);
    assert_eq!(classify("Open The Bus Tab"), Category::TabControl);
}

#[test]
fn test_extraction_examples() {
    assert_eq!(
        extract("navigate to the airport", Category::Navigation),
        "the airport"
    );
    assert_eq!(extract("find coffee shops", Category::Search), "coffee shops");
    assert_eq!(extract("switch to bus tab", Category::TabControl), "bus");
}

#[test]
fn test_extract_falls_back_to_command() {
    // Category whose patterns do not match the text.
    assert_eq!(
        extract("asdkjhasdkjh", Category::Navigation),
        "asdkjhasdkjh"
    );
    assert_eq!(extract("whatever", Category::Unknown), "whatever");
}

#[test]
fn test_navigation_takes_last_group() {
    // The first group is the verb, the destination trails it.
    assert_eq!(
        extract("drive me to the harbour", Category::Navigation),
        "the harbour"
    );
    assert_eq!(
        extract("open a new tab with train tickets", Category::WebNavigation),
        "train tickets"
    );
}

#[test]
fn test_process_text() {
    let classified = process_text("take me to the cargo page");
    assert_eq!(classified.category, Category::AppNavigation);
    assert_eq!(classified.detail, "cargo");
    assert!(!classified.detail_is_fallback());

    let unknown = process_text("asdkjhasdkjh");
    assert_eq!(unknown.category, Category::Unknown);
    assert!(unknown.detail_is_fallback());
}

#[test]
fn test_custom_priority_is_respected() {
    const NAV: &[&str] = &[r"\b(go)\s+to\s+(.+)$"];
    const TAB: &[&str] = &[r"\bgo\s+to\s+(?:the\s+)?(\w+)\s+tab\b"];
    let nav_first: &[PatternDefinition] = &[
        (Category::Navigation, CaptureSelection::Last, NAV),
        (Category::TabControl, CaptureSelection::First, TAB),
    ];
    let library = PatternLibrary::from_definitions(nav_first).unwrap();
    let classifier = Classifier::new(&library);
    let extractor = Extractor::new(&library);

    assert_eq!(classifier.classify("go to the bus tab"), Category::Navigation);
    assert_eq!(
        extractor.extract("go to the bus tab", Category::Navigation),
        "the bus tab"
    );
    assert_eq!(classifier.classify("find coffee"), Category::Unknown);

    let classified = process(&library, Command::new("go to the bus tab"));
    assert_eq!(classified.category, Category::Navigation);
}

#[test]
fn test_page_nouns_must_end_the_command() {
    // "View" inside a street name is not a page request.
    assert_eq!(classify("take me to Ocean View Drive"), Category::Navigation);
    assert_eq!(
        extract("take me to Ocean View Drive", Category::Navigation),
        "Ocean View Drive"
    );
    assert_eq!(classify("go to the Grand View Hotel"), Category::Navigation);
    assert_eq!(classify("go to the page street museum"), Category::Navigation);

    assert_eq!(classify("go to the cargo page."), Category::AppNavigation);
    assert_eq!(extract("go to the cargo page.", Category::AppNavigation), "cargo");
}

#[test]
fn test_bare_settings_stays_settings() {
    assert_eq!(classify("open settings"), Category::Settings);
    assert_eq!(classify("open the settings page"), Category::AppNavigation);
    assert_eq!(classify("open chat"), Category::AppNavigation);
}
