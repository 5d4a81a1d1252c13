/*!
 * Language code utilities.
 *
 * Resolves free-form language names and codes typed by the user ("Chinese",
 * "zh-tw", "Farsi") to the canonical codes understood by the translation
 * backends, and maps canonical codes back to display names.
 *
 * Resolution is lenient: anything not in the alias table is passed through
 * trimmed and lower-cased, and the backend decides whether it is usable.
 */

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Alias (lower-case) to canonical code
const LANGUAGE_ALIASES: &[(&str, &str)] = &[
    // Chinese
    ("zh-cn", "zh-CN"),
    ("zh-tw", "zh-TW"),
    ("zh-hk", "zh-TW"),
    ("zh", "zh-CN"),
    ("zhong", "zh-CN"),
    ("chinese", "zh-CN"),
    ("mandarin", "zh-CN"),
    // Hebrew
    ("iw", "he"),
    ("hebrew", "he"),
    // Javanese
    ("jw", "jv"),
    ("javanese", "jv"),
    // Filipino/Tagalog
    ("tl", "fil"),
    ("tagalog", "fil"),
    ("filipino", "fil"),
    // Norwegian defaults to Bokmål
    ("no", "nb"),
    ("nor", "nb"),
    ("norwegian", "nb"),
    ("el", "el"),
    ("greek", "el"),
    ("eu", "eu"),
    ("basque", "eu"),
    // Serbian Latin collapses to the general code
    ("sr-latn", "sr"),
    ("serbian", "sr"),
    ("az", "az"),
    ("azerbaijani", "az"),
    ("be", "be"),
    ("belarusian", "be"),
    ("bn", "bn"),
    ("bengali", "bn"),
    ("bangla", "bn"),
    ("bs", "bs"),
    ("bosnian", "bs"),
    ("cs", "cs"),
    ("czech", "cs"),
    ("cy", "cy"),
    ("welsh", "cy"),
    ("da", "da"),
    ("danish", "da"),
    ("de", "de"),
    ("german", "de"),
    ("et", "et"),
    ("estonian", "et"),
    ("fa", "fa"),
    ("persian", "fa"),
    ("farsi", "fa"),
    ("fi", "fi"),
    ("finnish", "fi"),
    ("fr", "fr"),
    ("french", "fr"),
    ("ga", "ga"),
    ("irish", "ga"),
    ("hr", "hr"),
    ("croatian", "hr"),
    ("hu", "hu"),
    ("hungarian", "hu"),
    ("hy", "hy"),
    ("armenian", "hy"),
    ("id", "id"),
    ("indonesian", "id"),
    ("is", "is"),
    ("icelandic", "is"),
    ("ka", "ka"),
    ("georgian", "ka"),
    ("kk", "kk"),
    ("kazakh", "kk"),
    ("km", "km"),
    ("khmer", "km"),
    ("ko", "ko"),
    ("korean", "ko"),
    ("ky", "ky"),
    ("kyrgyz", "ky"),
    ("lt", "lt"),
    ("lithuanian", "lt"),
    ("lv", "lv"),
    ("latvian", "lv"),
    ("mk", "mk"),
    ("macedonian", "mk"),
    ("mn", "mn"),
    ("mongolian", "mn"),
    ("ms", "ms"),
    ("malay", "ms"),
    ("my", "my"),
    ("burmese", "my"),
    ("nl", "nl"),
    ("dutch", "nl"),
    ("pl", "pl"),
    ("polish", "pl"),
    ("pt", "pt"),
    ("portuguese", "pt"),
    ("ro", "ro"),
    ("romanian", "ro"),
    ("ru", "ru"),
    ("russian", "ru"),
    ("sk", "sk"),
    ("slovak", "sk"),
    ("sl", "sl"),
    ("slovenian", "sl"),
    ("sq", "sq"),
    ("albanian", "sq"),
    ("sv", "sv"),
    ("swedish", "sv"),
    ("th", "th"),
    ("thai", "th"),
    ("tr", "tr"),
    ("turkish", "tr"),
    ("uk", "uk"),
    ("ukrainian", "uk"),
    ("ur", "ur"),
    ("urdu", "ur"),
    ("uz", "uz"),
    ("uzbek", "uz"),
    ("vi", "vi"),
    ("vietnamese", "vi"),
    ("yi", "yi"),
    ("yiddish", "yi"),
    ("en", "en"),
    ("english", "en"),
    ("eng", "en"),
    ("es", "es"),
    ("spanish", "es"),
    ("it", "it"),
    ("italian", "it"),
    ("ja", "ja"),
    ("japanese", "ja"),
    ("ar", "ar"),
    ("arabic", "ar"),
    ("hi", "hi"),
    ("hindi", "hi"),
    ("sw", "sw"),
    ("swahili", "sw"),
    ("ta", "ta"),
    ("tamil", "ta"),
    ("te", "te"),
    ("telugu", "te"),
    ("am", "am"),
    ("amharic", "am"),
    ("mi", "mi"),
    ("maori", "mi"),
    ("ne", "ne"),
    ("nepali", "ne"),
    ("si", "si"),
    ("sinhala", "si"),
    ("lo", "lo"),
    ("laotian", "lo"),
    ("ht", "ht"),
    ("haitian", "ht"),
    ("haitian creole", "ht"),
    ("ku", "ku"),
    ("kurdish", "ku"),
    ("mt", "mt"),
    ("maltese", "mt"),
    ("hmn", "hmn"),
    ("hmong", "hmn"),
    ("xh", "xh"),
    ("xhosa", "xh"),
    ("zu", "zu"),
    ("zulu", "zu"),
    ("af", "af"),
    ("afrikaans", "af"),
    ("lb", "lb"),
    ("luxembourgish", "lb"),
    ("fy", "fy"),
    ("frisian", "fy"),
    ("ha", "ha"),
    ("hausa", "ha"),
    ("ig", "ig"),
    ("igbo", "ig"),
    ("yo", "yo"),
    ("yoruba", "yo"),
    ("ceb", "ceb"),
    ("cebuano", "ceb"),
    ("su", "su"),
    ("sundanese", "su"),
    ("so", "so"),
    ("somali", "so"),
    ("ps", "ps"),
    ("pashto", "ps"),
    ("ny", "ny"),
    ("chichewa", "ny"),
    ("nyanja", "ny"),
    ("gl", "gl"),
    ("galician", "gl"),
    ("ca", "ca"),
    ("catalan", "ca"),
    ("co", "co"),
    ("corsican", "co"),
    ("eo", "eo"),
    ("esperanto", "eo"),
    ("haw", "haw"),
    ("hawaiian", "haw"),
    ("sm", "sm"),
    ("samoan", "sm"),
    ("gd", "gd"),
    ("scots gaelic", "gd"),
    ("scottish gaelic", "gd"),
    ("st", "st"),
    ("sesotho", "st"),
    ("southern sotho", "st"),
    ("sn", "sn"),
    ("shona", "sn"),
    ("sd", "sd"),
    ("sindhi", "sd"),
    ("tg", "tg"),
    ("tajik", "tg"),
    ("tk", "tk"),
    ("turkmen", "tk"),
    ("ug", "ug"),
    ("uyghur", "ug"),
];

/// Canonical code to human readable name, for presentation only
const LANGUAGE_NAMES: &[(&str, &str)] = &[
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("zh-CN", "Chinese (Simplified)"),
    ("zh-TW", "Chinese (Traditional)"),
    ("ar", "Arabic"),
    ("hi", "Hindi"),
    ("tr", "Turkish"),
    ("nl", "Dutch"),
    ("pl", "Polish"),
    ("sv", "Swedish"),
    ("da", "Danish"),
    ("fi", "Finnish"),
    ("no", "Norwegian"),
    ("uk", "Ukrainian"),
    ("el", "Greek"),
    ("he", "Hebrew"),
    ("th", "Thai"),
    ("vi", "Vietnamese"),
    ("id", "Indonesian"),
    ("ms", "Malay"),
    ("fa", "Persian"),
    ("bn", "Bengali"),
    ("fil", "Filipino"),
    ("sw", "Swahili"),
    ("am", "Amharic"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("ur", "Urdu"),
];

static ALIAS_TABLE: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| LANGUAGE_ALIASES.iter().copied().collect());

static NAME_TABLE: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| LANGUAGE_NAMES.iter().copied().collect());

/// Normalize user input to a canonical language code.
///
/// The input is trimmed and lower-cased before the lookup. Unknown input is
/// returned in that trimmed, lower-cased form rather than rejected.
pub fn normalize_language_code(user_input: &str) -> String {
    let key = user_input.trim().to_lowercase();
    match ALIAS_TABLE.get(key.as_str()) {
        Some(canonical) => (*canonical).to_string(),
        None => key,
    }
}

/// Check whether an alias is present in the table
pub fn is_known_alias(user_input: &str) -> bool {
    ALIAS_TABLE.contains_key(user_input.trim().to_lowercase().as_str())
}

/// Every alias in the table, in declaration order
pub fn known_aliases() -> impl Iterator<Item = &'static str> {
    LANGUAGE_ALIASES.iter().map(|(alias, _)| *alias)
}

/// Get a display name for a canonical code, falling back to the code itself
pub fn get_language_name(code: &str) -> String {
    NAME_TABLE
        .get(code)
        .map(|name| (*name).to_string())
        .unwrap_or_else(|| code.to_string())
}

/// Display form used in log lines, e.g. `fr (French)` or just `gd`
pub fn describe_language(code: &str) -> String {
    let name = get_language_name(code);
    if name == code {
        code.to_string()
    } else {
        format!("{} ({})", code, name)
    }
}
