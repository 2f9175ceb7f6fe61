//! Human-readable labels for questionnaire enum codes.
//!
//! Label resolution is a presentation concern, not a correctness gate: an
//! unknown code falls back to the code itself verbatim instead of erroring.
//! Strict rejection of unknown codes happens at deserialization (closed
//! enums) and in the validator, not here.

/// Which lookup table to resolve against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Jurisdiction,
    OutputLanguage,
    License,
    Monetization,
}

const JURISDICTION_LABELS: &[(&str, &str)] = &[
    ("Brazil", "Brasil (LGPD)"),
    ("EU", "União Europeia (GDPR)"),
    ("USA", "Estados Unidos (CCPA/Regulamentos Estaduais)"),
    ("Japan", "Japão (APPI)"),
    ("Canada", "Canadá (PIPEDA)"),
    ("Global", "Global (Melhores Práticas Multi-jurisdição)"),
];

const LANGUAGE_LABELS: &[(&str, &str)] = &[
    ("pt-BR", "Português (Brasil)"),
    ("en-US", "Inglês (EUA)"),
    ("es-ES", "Espanhol"),
];

const LICENSE_LABELS: &[(&str, &str)] = &[
    ("MIT", "MIT (Permissiva)"),
    ("GPLv3", "GPL v3 (Copyleft Forte)"),
    ("Apache2", "Apache 2.0 (Permissiva, com cláusula de patentes)"),
    ("Proprietary", "Proprietária (Código Fechado)"),
];

const MONETIZATION_LABELS: &[(&str, &str)] = &[
    ("Free", "Gratuito"),
    ("Freemium", "Freemium (Gratuito + Recursos Pagos)"),
    ("Subscription", "Assinatura Recorrente"),
    ("PaidOnce", "Compra Única"),
    ("AdSupported", "Sustentado por Publicidade"),
];

fn table(category: Category) -> &'static [(&'static str, &'static str)] {
    match category {
        Category::Jurisdiction => JURISDICTION_LABELS,
        Category::OutputLanguage => LANGUAGE_LABELS,
        Category::License => LICENSE_LABELS,
        Category::Monetization => MONETIZATION_LABELS,
    }
}

/// Resolves a code to its display label, returning the code itself when the
/// table has no entry for it.
pub fn label_for(category: Category, code: &str) -> String {
    table(category)
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| (*label).to_string())
        .unwrap_or_else(|| code.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_jurisdiction_label() {
        assert_eq!(
            label_for(Category::Jurisdiction, "Brazil"),
            "Brasil (LGPD)"
        );
        assert_eq!(
            label_for(Category::Jurisdiction, "EU"),
            "União Europeia (GDPR)"
        );
    }

    #[test]
    fn test_known_language_label() {
        assert_eq!(
            label_for(Category::OutputLanguage, "pt-BR"),
            "Português (Brasil)"
        );
    }

    #[test]
    fn test_known_license_label() {
        assert_eq!(label_for(Category::License, "MIT"), "MIT (Permissiva)");
    }

    #[test]
    fn test_known_monetization_label() {
        assert_eq!(label_for(Category::Monetization, "Free"), "Gratuito");
    }

    #[test]
    fn test_unknown_code_falls_back_verbatim() {
        assert_eq!(
            label_for(Category::Jurisdiction, "xx-unknown"),
            "xx-unknown"
        );
        assert_eq!(label_for(Category::License, "BSD"), "BSD");
        assert_eq!(label_for(Category::Monetization, ""), "");
    }
}
