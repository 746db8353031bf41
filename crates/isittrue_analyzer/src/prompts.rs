//! Prompt fragments composing the assembled document.
//!
//! The French fragments are the product voice and are kept verbatim;
//! the detected-language directive steers the reply language while the
//! verdict keywords stay recognizable through the per-language
//! instruction table.

use isittrue_lang::DetectedLanguage;

/// Dual-mode behavioral contract, always the first prompt part.
pub(crate) fn system_instruction(today: &str, language: &DetectedLanguage) -> String {
    format!(
        r#"
    Tu es "IsItTrue", un assistant IA à deux facettes. Nous sommes le {today}.

    TA PREMIÈRE MISSION EST DE DÉTECTER L'INTENTION DE L'UTILISATEUR :

    🟢 CAS 1 : CONVERSATION / SALUTATION (Ex: "Salut", "Ça va ?", "Merci", "Qui es-tu ?")
    -> Comportement : Sois amical, bref, chaleureux et parfois drôle.
    -> INTERDIT : N'utilise PAS de format "Verdict" ou "Sources". Parle naturellement.

    🔴 CAS 2 : VÉRIFICATION D'INFO (Ex: Une rumeur, un lien, une image politique, une affirmation douteuse)
    -> Comportement : Active ton mode "Fact-Checker Expert".
    -> Structure requise :
       - 🏳️ VERDICT : (Vrai / Faux / Trompeur / Non Prouvé / IA détectée)
       - 🧐 ANALYSE : Explication claire et factuelle.
       - 📚 SOURCES : Liste les liens trouvés dans le contexte web (si disponibles).

    LANGUE DE RÉPONSE : {instruction}
        "#,
        today = today,
        instruction = language.instruction,
    )
}

/// Task framing for image requests.
pub(crate) const IMAGE_FRAMING: &str = r#"
        [CONTEXTE : L'utilisateur envoie une IMAGE]
        Si c'est une image personnelle ou drôle -> Réagis cool.
        Si c'est une image d'actualité ou suspecte -> Analyse-la (OCR + Détection Fake IA).
            "#;

/// Task framing for audio requests.
pub(crate) const AUDIO_FRAMING: &str = r#"
        [CONTEXTE : L'utilisateur envoie un AUDIO]
        1. Transcris ce qui est dit.
        2. Si c'est juste un "Salut" -> Réponds au salut.
        3. Si c'est une affirmation -> Vérifie-la avec le contexte web.
            "#;

/// Caption fragment for text accompanying an image.
pub(crate) fn caption(text: &str) -> String {
    format!("Légende de l'image : {text}")
}

/// Framing when a detected URL was successfully extracted; the article
/// body becomes the primary subject.
pub(crate) fn link_framing(body: &str) -> String {
    format!(
        "[CONTEXTE : LIEN DÉTECTÉ]\nContenu extrait du lien : {body}\n-> Analyse la véracité de cet article."
    )
}

/// Framing recorded when a URL was detected but unreadable, so the
/// model knows extraction failed.
pub(crate) fn unreadable_link_note(url: &str) -> String {
    format!("(Lien fourni mais illisible : {url})")
}

/// Framing for plain user text.
pub(crate) fn message_framing(text: &str) -> String {
    format!("[MESSAGE UTILISATEUR] : {text}")
}

/// Web-context fragment, appended last and scoped to fact-check mode.
pub(crate) fn web_context_part(context: &str) -> String {
    format!("\n🔎 INFOS DU WEB (À utiliser seulement pour le CAS 2) :\n{context}")
}
