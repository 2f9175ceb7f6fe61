//! Prompt construction for the generative variant.
//!
//! `build_prompt` is pure and never fails on a well-formed AnswerSet: every
//! optional field has a documented fallback string. It only prepares the two
//! strings the boundary caller hands to the text-generation collaborator.

use crate::models::answer_set::{AnswerSet, Jurisdiction};
use crate::policy::labels::{label_for, Category};

/// Fixed persona/ruleset for the bilingual legal-document generation call.
pub const SYSTEM_INSTRUCTION: &str = "You are a bilingual (Portuguese and English) \
    legal-document specialist for software Terms of Use and Privacy Policies. \
    Your task is to produce one cohesive, professional document containing BOTH \
    the Terms of Use and the Privacy Policy.\n\
    \n\
    FORMAT RULES:\n\
    1. The ONLY output MUST be the full document body in strict Markdown.\n\
    2. The document title MUST be a single H1 heading: '# <Document Name>'.\n\
    3. Use '##' headings for major sections and '###' for clauses and subsections.\n\
    4. Do NOT add any preamble, side note, explanation or closing text outside \
    the legal document body.\n\
    \n\
    BILINGUAL STRUCTURE — the output MUST contain two parts in this EXACT order:\n\
    1. The full document in PORTUGUESE (BR).\n\
    2. A horizontal rule (---), then the full document in ENGLISH (US), \
    beginning with the heading '## Terms of Use and Privacy Policy (English Version)'.\n\
    \n\
    CONTENT AND COMPLIANCE:\n\
    * DATE: use the date given in the user prompt as the 'last updated' date, ALWAYS.\n\
    * COMPLIANCE: adapt the legal-compliance clauses (LGPD, GDPR, CCPA, APPI, \
    PIPEDA) to the main jurisdiction given in the user prompt.";

/// The two strings handed to the text-generation collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptParts {
    pub system_instruction: String,
    pub user_prompt: String,
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "YES"
    } else {
        "NO"
    }
}

fn or_fallback(value: &str, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Builds the system instruction and the labeled field brief for one
/// generation request. `generated_at` is included verbatim as the mandated
/// last-updated date.
pub fn build_prompt(answers: &AnswerSet, generated_at: &str) -> PromptParts {
    let jurisdiction = answers.jurisdiction.unwrap_or(Jurisdiction::Global);
    let jurisdiction_label = label_for(Category::Jurisdiction, jurisdiction.code());
    let language_label = label_for(Category::OutputLanguage, answers.output_language.code());

    let license = match answers.code_license.is_selected() {
        true => label_for(Category::License, answers.code_license.code()),
        false => "Not specified, omit license-specific clauses.".to_string(),
    };

    let model = answers
        .software_model
        .map(|m| m.code().to_string())
        .unwrap_or_else(|| "Not specified".to_string());

    let monetization = answers
        .monetization_type
        .map(|m| label_for(Category::Monetization, m.code()))
        .unwrap_or_else(|| "Not specified.".to_string());

    let children = if answers.targets_children {
        "YES, requires specific clauses for minors and parental consent."
    } else {
        "NO, focused on adults."
    };

    let user_prompt = format!(
        "Generate the Terms of Use and Privacy Policy for the following project.\n\
         \n\
         - **Mandatory last-updated date (use verbatim):** {generated_at}\n\
         - **Project name:** {project}\n\
         - **Responsible party / company:** {responsible}\n\
         - **Main compliance jurisdiction:** {jurisdiction_label}\n\
         - **Primary document language:** {language_label}\n\
         - **Collects personal data:** {personal}\n\
         - **Collects sensitive data:** {sensitive}\n\
         - **Collection purpose:** {purpose}\n\
         - **Audience includes children:** {children}\n\
         - **Third-party advertising/analytics:** {third_party}\n\
         - **International transfer destinations:** {transfers}\n\
         - **DPO contact:** {dpo}\n\
         - **Include \"AS IS\" no-warranty clause:** {warranty}\n\
         - **Code license:** {license}\n\
         - **Software model:** {model}, built with {technology}.\n\
         - **Monetization:** {monetization}\n",
        project = answers.project_name,
        responsible = answers.responsible_party,
        personal = yes_no(answers.collects_personal_data),
        sensitive = yes_no(answers.collects_sensitive_data),
        purpose = or_fallback(
            &answers.collection_purpose,
            "Not specified, use a generic service-provision purpose."
        ),
        third_party = yes_no(answers.uses_third_party_monetization),
        transfers = or_fallback(&answers.transfer_countries, "Not applicable."),
        dpo = or_fallback(
            &answers.dpo_contact,
            "Not specified, use a generic contact placeholder."
        ),
        warranty = yes_no(answers.include_no_warranty_clause),
        technology = or_fallback(&answers.primary_technology, "unspecified technology"),
    );

    PromptParts {
        system_instruction: SYSTEM_INSTRUCTION.to_string(),
        user_prompt,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::answer_set::{CodeLicense, MonetizationType, SoftwareModel};

    fn answers() -> AnswerSet {
        AnswerSet {
            project_name: "Acme".to_string(),
            responsible_party: "Jane Doe".to_string(),
            jurisdiction: Some(Jurisdiction::Brazil),
            primary_technology: "Rust".to_string(),
            code_license: CodeLicense::Mit,
            software_model: Some(SoftwareModel::Saas),
            monetization_type: Some(MonetizationType::Subscription),
            collection_purpose: "billing".to_string(),
            collects_personal_data: true,
            dpo_contact: "dpo@acme.example".to_string(),
            transfer_countries: "Portugal".to_string(),
            ..AnswerSet::default()
        }
    }

    #[test]
    fn test_generated_at_included_verbatim() {
        let parts = build_prompt(&answers(), "26 de agosto de 2026");
        assert!(parts.user_prompt.contains("26 de agosto de 2026"));
    }

    #[test]
    fn test_every_field_appears_labeled() {
        let parts = build_prompt(&answers(), "today");
        for label in [
            "**Project name:** Acme",
            "**Responsible party / company:** Jane Doe",
            "**Main compliance jurisdiction:** Brasil (LGPD)",
            "**Primary document language:** Português (Brasil)",
            "**Collects personal data:** YES",
            "**Collects sensitive data:** NO",
            "**Collection purpose:** billing",
            "**Third-party advertising/analytics:** NO",
            "**International transfer destinations:** Portugal",
            "**DPO contact:** dpo@acme.example",
            "**Code license:** MIT (Permissiva)",
            "**Software model:** SaaS, built with Rust.",
            "**Monetization:** Assinatura Recorrente",
        ] {
            assert!(
                parts.user_prompt.contains(label),
                "missing {label:?} in prompt:\n{}",
                parts.user_prompt
            );
        }
    }

    #[test]
    fn test_blank_optionals_get_documented_fallbacks() {
        let minimal = AnswerSet {
            project_name: "Acme".to_string(),
            responsible_party: "Jane Doe".to_string(),
            jurisdiction: Some(Jurisdiction::Global),
            ..AnswerSet::default()
        };
        let parts = build_prompt(&minimal, "today");
        assert!(parts
            .user_prompt
            .contains("Not specified, use a generic service-provision purpose."));
        assert!(parts.user_prompt.contains("Not applicable."));
        assert!(parts
            .user_prompt
            .contains("Not specified, use a generic contact placeholder."));
        assert!(parts.user_prompt.contains("unspecified technology"));
        assert!(parts
            .user_prompt
            .contains("Not specified, omit license-specific clauses."));
    }

    #[test]
    fn test_system_instruction_is_fixed_bilingual_ruleset() {
        let parts = build_prompt(&answers(), "today");
        assert_eq!(parts.system_instruction, SYSTEM_INSTRUCTION);
        assert!(SYSTEM_INSTRUCTION.contains("strict Markdown"));
        assert!(SYSTEM_INSTRUCTION.contains("single H1"));
        assert!(SYSTEM_INSTRUCTION.contains("PORTUGUESE (BR)"));
        assert!(SYSTEM_INSTRUCTION
            .contains("'## Terms of Use and Privacy Policy (English Version)'"));
    }

    #[test]
    fn test_children_flag_changes_audience_line() {
        let with = build_prompt(
            &AnswerSet {
                targets_children: true,
                ..answers()
            },
            "today",
        );
        assert!(with
            .user_prompt
            .contains("YES, requires specific clauses for minors"));

        let without = build_prompt(&answers(), "today");
        assert!(without.user_prompt.contains("NO, focused on adults."));
    }
}
