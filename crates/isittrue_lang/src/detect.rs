//! Best-effort language detection over user text.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use whatlang::Lang;

/// Default language when text is absent, too short or unclassifiable.
pub const DEFAULT_LANGUAGE: &str = "fr";

/// Text shorter than this after trimming skips detection entirely.
const MIN_DETECTABLE_CHARS: usize = 3;

/// Display names keyed by language code, as shown to the model.
static LANGUAGE_NAMES: &[(&str, &str)] = &[
    ("fr", "Français"),
    ("en", "Anglais"),
    ("es", "Espagnol"),
    ("de", "Allemand"),
    ("it", "Italien"),
    ("pt", "Portugais"),
    ("nl", "Néerlandais"),
    ("ru", "Russe"),
    ("ja", "Japonais"),
    ("zh-cn", "Chinois (Simplifié)"),
    ("zh-tw", "Chinois (Traditionnel)"),
    ("ar", "Arabe"),
    ("hi", "Hindi"),
    ("tr", "Turc"),
    ("pl", "Polonais"),
    ("uk", "Ukrainien"),
    ("ko", "Coréen"),
    ("vi", "Vietnamien"),
    ("th", "Thaï"),
    ("sv", "Suédois"),
    ("no", "Norvégien"),
    ("da", "Danois"),
    ("fi", "Finnois"),
    ("cs", "Tchèque"),
    ("ro", "Roumain"),
    ("hu", "Hongrois"),
    ("el", "Grec"),
];

/// Reply directives keyed by language code.
static LANGUAGE_INSTRUCTIONS: &[(&str, &str)] = &[
    (
        "fr",
        "Réponds TOUJOURS en Français. Tu es en France, parle comme un français!",
    ),
    (
        "en",
        "Always respond in English. You are addressing English speakers!",
    ),
    (
        "es",
        "Responde SIEMPRE en Español. ¡Estás hablando con hispanohablantes!",
    ),
    (
        "de",
        "Antworte IMMER auf Deutsch. Du sprichst mit Deutschen!",
    ),
    (
        "it",
        "Rispondi SEMPRE in Italiano. Stai parlando con italiani!",
    ),
    (
        "pt",
        "Responda SEMPRE em Português. Você está falando com falantes de português!",
    ),
    ("ar", "رد دائماً بالعربية. أنت تتحدث مع الناطقين بالعربية!"),
    ("ja", "常に日本語で返答してください。日本語を話す人々と話しています!"),
    ("zh-cn", "始终用中文回复。您正在与中文使用者交谈!"),
    (
        "ru",
        "Всегда отвечайте на русском языке. Вы говорите с русскоговорящими!",
    ),
    (
        "ko",
        "항상 한국어로 답변하세요. 한국어를 사용하는 사람들과 대화하고 있습니다!",
    ),
];

/// Language derived from user text at prompt-assembly time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedLanguage {
    /// Short ISO-style language code
    pub code: String,
    /// Human-readable language name
    pub display_name: String,
    /// Directive telling the model to answer in this language
    pub instruction: String,
}

impl DetectedLanguage {
    fn from_code(code: &str) -> Self {
        let display_name = LANGUAGE_NAMES
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, name)| (*name).to_string())
            .unwrap_or_else(|| code.to_uppercase());
        let instruction = LANGUAGE_INSTRUCTIONS
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, instruction)| (*instruction).to_string())
            .unwrap_or_else(|| format!("Respond in {display_name}."));
        Self {
            code: code.to_string(),
            display_name,
            instruction,
        }
    }

    /// The fixed default language record.
    pub fn default_language() -> Self {
        Self::from_code(DEFAULT_LANGUAGE)
    }
}

impl Default for DetectedLanguage {
    fn default() -> Self {
        Self::default_language()
    }
}

/// Detects the language the user writes in.
#[derive(Debug, Clone, Copy, Default)]
pub struct LanguageDetector;

impl LanguageDetector {
    /// Create a new detector.
    pub fn new() -> Self {
        Self
    }

    /// Detect the language of `text`.
    ///
    /// Absent text, text shorter than three characters after trimming,
    /// or an unclassifiable sample all yield the default language
    /// deterministically.
    pub fn detect(&self, text: Option<&str>) -> DetectedLanguage {
        let Some(trimmed) = text.map(str::trim).filter(|t| !t.is_empty()) else {
            return DetectedLanguage::default_language();
        };
        if trimmed.chars().count() < MIN_DETECTABLE_CHARS {
            return DetectedLanguage::default_language();
        }

        match whatlang::detect(trimmed) {
            Some(info) => {
                let code = iso_code(info.lang());
                let detected = DetectedLanguage::from_code(code);
                debug!(
                    language = %detected.display_name,
                    code = %detected.code,
                    "🌐 Langue détectée"
                );
                detected
            }
            None => {
                warn!("Impossible de détecter la langue, repli sur le français");
                DetectedLanguage::default_language()
            }
        }
    }
}

/// Map a whatlang language to the short ISO-style code used by the
/// locale tables. Languages without a two-letter mapping keep their
/// three-letter whatlang code.
fn iso_code(lang: Lang) -> &'static str {
    match lang {
        Lang::Fra => "fr",
        Lang::Eng => "en",
        Lang::Spa => "es",
        Lang::Deu => "de",
        Lang::Ita => "it",
        Lang::Por => "pt",
        Lang::Nld => "nl",
        Lang::Rus => "ru",
        Lang::Jpn => "ja",
        Lang::Cmn => "zh-cn",
        Lang::Ara => "ar",
        Lang::Hin => "hi",
        Lang::Tur => "tr",
        Lang::Pol => "pl",
        Lang::Ukr => "uk",
        Lang::Kor => "ko",
        Lang::Vie => "vi",
        Lang::Tha => "th",
        Lang::Swe => "sv",
        Lang::Nob => "no",
        Lang::Dan => "da",
        Lang::Fin => "fi",
        Lang::Ces => "cs",
        Lang::Ron => "ro",
        Lang::Hun => "hu",
        Lang::Ell => "el",
        other => other.code(),
    }
}
