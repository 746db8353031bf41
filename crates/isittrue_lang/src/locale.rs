//! Data-driven locale table for fixed user-facing strings.

use isittrue_core::truncate_chars;

/// How much of a provider error message survives into a user-facing
/// failure string.
const MAX_ERROR_EXCERPT: usize = 60;

/// Localized fixed strings for one language.
///
/// One record per supported language, looked up by ISO-style code.
/// Unknown codes fall back to the French record, matching the
/// assistant's default language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    /// ISO-style language code
    pub code: &'static str,
    /// Greeting sent for /start and /help
    pub greeting: &'static str,
    /// Message shown when a request carries no usable input
    pub input_error: &'static str,
    /// Message shown after generation retries exhaust a quota
    pub quota_message: &'static str,
    /// Template for non-quota final failures, `{}` carries the excerpt
    failure_template: &'static str,
}

impl Locale {
    /// Render the final-failure message embedding a truncated error
    /// excerpt.
    pub fn failure_message(&self, error: &str) -> String {
        self.failure_template
            .replace("{}", truncate_chars(error, MAX_ERROR_EXCERPT))
    }
}

/// The French fallback record.
pub const FALLBACK: Locale = Locale {
    code: "fr",
    greeting: "👋 Salut! Je suis **IsItTrue**.\n\nEnvoyez-moi:\n📰 Un lien ou un texte à vérifier\n📸 Une image (pour détecter l'IA ou vérifier le texte)\n🎤 Un audio (transcription + vérification)\n\nPropulsé par Gemini 2.5 Flash ⚡",
    input_error: "⚠️ Veuillez envoyer du texte, une image ou un audio",
    quota_message: "Quota API atteint. Veuillez réessayer dans quelques minutes.",
    failure_template: "⚠️ ERREUR TECHNIQUE : {}",
};

/// The English record, the ASCII fallback for generation-failure
/// strings.
const ENGLISH: Locale = Locale {
    code: "en",
    greeting: "👋 Hi! I'm **IsItTrue**.\n\nSend me:\n📰 A link or text to verify\n📸 An image (to detect AI or verify text)\n🎤 Audio (transcription + verification)\n\nPowered by Gemini 2.5 Flash ⚡",
    input_error: "⚠️ Please send text, an image or audio",
    quota_message: "API quota reached. Please try again in a few minutes.",
    failure_template: "⚠️ TECHNICAL ERROR: {}",
};

static LOCALES: &[Locale] = &[
    FALLBACK,
    ENGLISH,
    Locale {
        code: "es",
        greeting: "👋 ¡Hola! Soy **IsItTrue**.\n\nEnvíame:\n📰 Un enlace o texto para verificar\n📸 Una imagen (para detectar IA o verificar texto)\n🎤 Audio (transcripción + verificación)\n\nPotenciado por Gemini 2.5 Flash ⚡",
        input_error: "⚠️ Por favor, envíe texto, una imagen o audio",
        quota_message: "Cuota de API alcanzada. Vuelva a intentarlo en unos minutos.",
        failure_template: "⚠️ ERROR TÉCNICO: {}",
    },
    Locale {
        code: "de",
        greeting: "👋 Hallo! Ich bin **IsItTrue**.\n\nSend mir:\n📰 Einen Link oder Text zum Überprüfen\n📸 Ein Bild (um KI zu erkennen oder Text zu überprüfen)\n🎤 Audio (Transkription + Überprüfung)\n\nBetrieben von Gemini 2.5 Flash ⚡",
        input_error: "⚠️ Bitte senden Sie Text, ein Bild oder Audio",
        quota_message: "API-Kontingent erreicht. Bitte versuchen Sie es in einigen Minuten erneut.",
        failure_template: "⚠️ TECHNISCHER FEHLER: {}",
    },
    Locale {
        code: "it",
        greeting: "👋 Ciao! Sono **IsItTrue**.\n\nInviami:\n📰 Un link o testo da verificare\n📸 Un'immagine (per rilevare IA o verificare il testo)\n🎤 Audio (trascrizione + verifica)\n\nAlimentato da Gemini 2.5 Flash ⚡",
        input_error: "⚠️ Per favore invia testo, un'immagine o audio",
        quota_message: "Quota API raggiunta. Riprova tra qualche minuto.",
        failure_template: "⚠️ ERRORE TECNICO: {}",
    },
    Locale {
        code: "pt",
        greeting: "👋 Oi! Sou **IsItTrue**.\n\nEnvie-me:\n📰 Um link ou texto para verificar\n📸 Uma imagem (para detectar IA ou verificar texto)\n🎤 Áudio (transcrição + verificação)\n\nPotenciado por Gemini 2.5 Flash ⚡",
        input_error: "⚠️ Por favor, envie texto, imagem ou áudio",
        quota_message: "Cota de API atingida. Tente novamente em alguns minutos.",
        failure_template: "⚠️ ERRO TÉCNICO: {}",
    },
];

/// Look up the locale record for a language code.
///
/// Unrecognized codes yield the French fallback record.
///
/// # Examples
///
/// ```
/// use isittrue_lang::locale_for;
///
/// assert_eq!(locale_for("en").code, "en");
/// assert_eq!(locale_for("tlh").code, "fr");
/// ```
pub fn locale_for(code: &str) -> &'static Locale {
    LOCALES.iter().find(|l| l.code == code).unwrap_or(&FALLBACK)
}

/// Look up the locale used for quota and failure messages.
///
/// Unlike [`locale_for`], an unrecognized code falls back to the ASCII
/// English record rather than French.
///
/// ```
/// use isittrue_lang::message_locale_for;
///
/// assert_eq!(message_locale_for("fr").code, "fr");
/// assert_eq!(message_locale_for("tlh").code, "en");
/// ```
pub fn message_locale_for(code: &str) -> &'static Locale {
    LOCALES.iter().find(|l| l.code == code).unwrap_or(&ENGLISH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn french_quota_message_is_exact() {
        assert_eq!(
            locale_for("fr").quota_message,
            "Quota API atteint. Veuillez réessayer dans quelques minutes."
        );
    }

    #[test]
    fn unknown_code_falls_back_to_french() {
        assert_eq!(locale_for("xx").code, "fr");
        assert_eq!(locale_for("").code, "fr");
    }

    #[test]
    fn unknown_code_message_locale_is_english() {
        let locale = message_locale_for("xx");
        assert_eq!(locale.code, "en");
        assert_eq!(
            locale.quota_message,
            "API quota reached. Please try again in a few minutes."
        );
        assert!(locale.quota_message.is_ascii());
    }

    #[test]
    fn greetings_all_carry_legacy_bold_markup() {
        // Transports send greetings with Telegram's legacy Markdown
        // parse mode, which renders `**bold**`.
        for locale in LOCALES {
            assert!(
                locale.greeting.contains("**IsItTrue**"),
                "greeting for {} lost its bold markup",
                locale.code
            );
        }
    }

    #[test]
    fn failure_message_truncates_the_excerpt() {
        let long = "x".repeat(200);
        let rendered = locale_for("en").failure_message(&long);
        assert!(rendered.starts_with("⚠️ TECHNICAL ERROR: "));
        assert!(rendered.ends_with(&"x".repeat(60)));
        assert!(!rendered.contains(&"x".repeat(61)));
    }
}
