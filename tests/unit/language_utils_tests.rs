/*!
 * Tests for language code resolution and display names
 */

use pdf_translator::language_utils::{
    describe_language, get_language_name, is_known_alias, known_aliases, normalize_language_code,
};

/// Test that resolving a resolved code gives the same code back
#[test]
fn test_normalize_language_code_withEveryKnownAlias_shouldBeIdempotent() {
    for alias in known_aliases() {
        let once = normalize_language_code(alias);
        let twice = normalize_language_code(&once);
        assert_eq!(once, twice, "alias '{}' is not idempotent", alias);
    }
}

#[test]
fn test_normalize_language_code_withCaseAndWhitespace_shouldIgnoreBoth() {
    assert_eq!(normalize_language_code(" FR "), "fr");
    assert_eq!(normalize_language_code("fr"), "fr");
    assert_eq!(normalize_language_code("FR"), "fr");
    assert_eq!(normalize_language_code("French"), "fr");
    assert_eq!(normalize_language_code("\tGerman\n"), "de");
}

#[test]
fn test_normalize_language_code_withRegionalVariants_shouldCollapseToDefault() {
    assert_eq!(normalize_language_code("zh"), "zh-CN");
    assert_eq!(normalize_language_code("zh-hk"), "zh-TW");
    assert_eq!(normalize_language_code("no"), "nb");
    assert_eq!(normalize_language_code("norwegian"), "nb");
    assert_eq!(normalize_language_code("sr-latn"), "sr");
}

#[test]
fn test_normalize_language_code_withChineseAliases_shouldMapToSimplified() {
    assert_eq!(normalize_language_code("chinese"), "zh-CN");
    assert_eq!(normalize_language_code("zh-cn"), "zh-CN");
    assert_eq!(normalize_language_code("Mandarin"), "zh-CN");
    assert_eq!(normalize_language_code("zh-TW"), "zh-TW");
}

#[test]
fn test_normalize_language_code_withMultiWordAliases_shouldResolve() {
    assert_eq!(normalize_language_code("scots gaelic"), "gd");
    assert_eq!(normalize_language_code("Scottish Gaelic"), "gd");
    assert_eq!(normalize_language_code("southern sotho"), "st");
}

#[test]
fn test_normalize_language_code_withUnknownInput_shouldPassThrough() {
    assert_eq!(normalize_language_code("xx-yy"), "xx-yy");
    assert_eq!(normalize_language_code("  XX-YY "), "xx-yy");
    assert!(!is_known_alias("xx-yy"));
}

#[test]
fn test_is_known_alias_withMixedCase_shouldMatch() {
    assert!(is_known_alias("Farsi"));
    assert!(is_known_alias(" ENGLISH "));
}

#[test]
fn test_get_language_name_withKnownCode_shouldReturnName() {
    assert_eq!(get_language_name("ja"), "Japanese");
    assert_eq!(get_language_name("fr"), "French");
}

#[test]
fn test_get_language_name_withMissingEntry_shouldFallBackToCode() {
    assert_eq!(get_language_name("xx-yy"), "xx-yy");
}

#[test]
fn test_describe_language_shouldIncludeNameWhenKnown() {
    assert_eq!(describe_language("fr"), "fr (French)");
    assert_eq!(describe_language("xx-yy"), "xx-yy");
}
