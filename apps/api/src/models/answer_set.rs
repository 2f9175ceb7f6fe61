//! The typed questionnaire answer set driving policy generation.
//!
//! Every enum here is closed: unknown codes fail deserialization at the
//! boundary, so the assembler never needs defensive unknown-value branches
//! beyond the one documented default per field.

use serde::{Deserialize, Serialize};

/// Legal regime shaping the governing-law language of the document.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Jurisdiction {
    Brazil,
    #[serde(rename = "EU")]
    Eu,
    #[serde(rename = "USA")]
    Usa,
    Japan,
    Canada,
    Global,
}

impl Jurisdiction {
    pub fn code(&self) -> &'static str {
        match self {
            Jurisdiction::Brazil => "Brazil",
            Jurisdiction::Eu => "EU",
            Jurisdiction::Usa => "USA",
            Jurisdiction::Japan => "Japan",
            Jurisdiction::Canada => "Canada",
            Jurisdiction::Global => "Global",
        }
    }
}

/// Language the final document must be written in.
///
/// The deterministic assembler always writes the document body in pt-BR (the
/// platform's primary language) and records the requested language in the
/// header; the generative variant hands the code to the prompt builder.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum OutputLanguage {
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "es-ES")]
    EsEs,
}

impl OutputLanguage {
    pub fn code(&self) -> &'static str {
        match self {
            OutputLanguage::PtBr => "pt-BR",
            OutputLanguage::EnUs => "en-US",
            OutputLanguage::EsEs => "es-ES",
        }
    }
}

/// Source-code license. `Unspecified` is the empty wizard selection; it emits
/// no license clause rather than erroring.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum CodeLicense {
    #[serde(rename = "MIT")]
    Mit,
    #[serde(rename = "GPLv3")]
    Gplv3,
    Apache2,
    Proprietary,
    #[default]
    #[serde(rename = "")]
    Unspecified,
}

impl CodeLicense {
    pub fn code(&self) -> &'static str {
        match self {
            CodeLicense::Mit => "MIT",
            CodeLicense::Gplv3 => "GPLv3",
            CodeLicense::Apache2 => "Apache2",
            CodeLicense::Proprietary => "Proprietary",
            CodeLicense::Unspecified => "",
        }
    }

    pub fn is_selected(&self) -> bool {
        !matches!(self, CodeLicense::Unspecified)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SoftwareModel {
    #[serde(rename = "SaaS")]
    Saas,
    OpenSource,
    #[serde(rename = "ECommerce")]
    ECommerce,
    MobileApp,
}

impl SoftwareModel {
    pub fn code(&self) -> &'static str {
        match self {
            SoftwareModel::Saas => "SaaS",
            SoftwareModel::OpenSource => "OpenSource",
            SoftwareModel::ECommerce => "ECommerce",
            SoftwareModel::MobileApp => "MobileApp",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MonetizationType {
    Free,
    Freemium,
    Subscription,
    PaidOnce,
    AdSupported,
}

impl MonetizationType {
    pub fn code(&self) -> &'static str {
        match self {
            MonetizationType::Free => "Free",
            MonetizationType::Freemium => "Freemium",
            MonetizationType::Subscription => "Subscription",
            MonetizationType::PaidOnce => "PaidOnce",
            MonetizationType::AdSupported => "AdSupported",
        }
    }
}

/// All questionnaire answers for one wizard session.
///
/// Created empty at session start (`Default`), mutated field-by-field by the
/// wizard, consumed without mutation by the assembler / prompt builder.
/// Optional selections stay `None` / empty until their step completes.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AnswerSet {
    pub project_name: String,
    pub responsible_party: String,
    pub jurisdiction: Option<Jurisdiction>,
    pub output_language: OutputLanguage,
    pub primary_technology: String,
    pub code_license: CodeLicense,
    pub software_model: Option<SoftwareModel>,
    pub monetization_type: Option<MonetizationType>,
    pub collection_purpose: String,
    pub collects_personal_data: bool,
    pub collects_sensitive_data: bool,
    pub uses_third_party_monetization: bool,
    pub targets_children: bool,
    pub include_no_warranty_clause: bool,
    pub dpo_contact: String,
    pub transfer_countries: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_object_deserializes_to_defaults() {
        let answers: AnswerSet = serde_json::from_value(json!({})).unwrap();
        assert_eq!(answers, AnswerSet::default());
        assert_eq!(answers.output_language, OutputLanguage::PtBr);
        assert_eq!(answers.code_license, CodeLicense::Unspecified);
        assert!(answers.jurisdiction.is_none());
    }

    #[test]
    fn test_camel_case_wire_names() {
        let answers: AnswerSet = serde_json::from_value(json!({
            "projectName": "Acme",
            "responsibleParty": "Jane Doe",
            "jurisdiction": "Brazil",
            "outputLanguage": "en-US",
            "codeLicense": "MIT",
            "softwareModel": "SaaS",
            "monetizationType": "Freemium",
            "collectsPersonalData": true
        }))
        .unwrap();
        assert_eq!(answers.project_name, "Acme");
        assert_eq!(answers.jurisdiction, Some(Jurisdiction::Brazil));
        assert_eq!(answers.output_language, OutputLanguage::EnUs);
        assert_eq!(answers.code_license, CodeLicense::Mit);
        assert_eq!(answers.software_model, Some(SoftwareModel::Saas));
        assert_eq!(answers.monetization_type, Some(MonetizationType::Freemium));
        assert!(answers.collects_personal_data);
    }

    #[test]
    fn test_software_model_codes_match_wire_names() {
        assert_eq!(SoftwareModel::Saas.code(), "SaaS");
        assert_eq!(SoftwareModel::OpenSource.code(), "OpenSource");
        assert_eq!(SoftwareModel::ECommerce.code(), "ECommerce");
        assert_eq!(SoftwareModel::MobileApp.code(), "MobileApp");
    }

    #[test]
    fn test_unknown_jurisdiction_fails_closed() {
        let result: Result<AnswerSet, _> =
            serde_json::from_value(json!({ "jurisdiction": "Atlantis" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_output_language_fails_closed() {
        let result: Result<AnswerSet, _> =
            serde_json::from_value(json!({ "outputLanguage": "fr-FR" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_license_code_is_unspecified() {
        let answers: AnswerSet = serde_json::from_value(json!({ "codeLicense": "" })).unwrap();
        assert!(!answers.code_license.is_selected());
    }

    #[test]
    fn test_roundtrip_preserves_codes() {
        let mut answers = AnswerSet::default();
        answers.jurisdiction = Some(Jurisdiction::Eu);
        answers.code_license = CodeLicense::Gplv3;
        let value = serde_json::to_value(&answers).unwrap();
        assert_eq!(value["jurisdiction"], "EU");
        assert_eq!(value["codeLicense"], "GPLv3");
    }
}
