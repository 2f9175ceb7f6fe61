//! Per-step and cross-field validation of an [`AnswerSet`].
//!
//! Pure over its inputs: same answers always yield the same errors in the
//! same order. The wizard calls `validate` after each step; both generation
//! endpoints call `validate_for_generation` before producing a document.

use serde::Serialize;

use crate::models::answer_set::AnswerSet;

/// Which step's required fields to check. `Final` checks every step plus the
/// cross-field coherence rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepId {
    Identity,
    LegalScope,
    Licensing,
    Final,
}

/// One violated rule, with the offending field and a user-facing message.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

/// Validates the fields belonging to `step`, returning all violations in a
/// fixed order. The caller must not advance past a step with violations.
pub fn validate(answers: &AnswerSet, step: StepId) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match step {
        StepId::Identity => check_identity(answers, &mut errors),
        StepId::LegalScope => check_legal_scope(answers, &mut errors),
        StepId::Licensing => check_licensing(answers, &mut errors),
        StepId::Final => {
            check_identity(answers, &mut errors);
            check_legal_scope(answers, &mut errors);
            check_licensing(answers, &mut errors);
            check_coherence(answers, &mut errors);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// The gate applied by the generation endpoints: identity and legal scope
/// must be complete and the data flags coherent. Licensing selections are
/// not required — an absent selection simply emits no clause.
pub fn validate_for_generation(answers: &AnswerSet) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    check_identity(answers, &mut errors);
    check_legal_scope(answers, &mut errors);
    check_coherence(answers, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_identity(answers: &AnswerSet, errors: &mut Vec<ValidationError>) {
    if answers.project_name.trim().is_empty() {
        errors.push(ValidationError::new(
            "projectName",
            "Informe o nome do projeto.",
        ));
    }
    if answers.responsible_party.trim().is_empty() {
        errors.push(ValidationError::new(
            "responsibleParty",
            "Informe o nome do responsável ou da empresa.",
        ));
    }
}

fn check_legal_scope(answers: &AnswerSet, errors: &mut Vec<ValidationError>) {
    if answers.jurisdiction.is_none() {
        errors.push(ValidationError::new(
            "jurisdiction",
            "Selecione a jurisdição principal de conformidade.",
        ));
    }
}

fn check_licensing(answers: &AnswerSet, errors: &mut Vec<ValidationError>) {
    if !answers.code_license.is_selected() {
        errors.push(ValidationError::new(
            "codeLicense",
            "Selecione a licença do código-fonte.",
        ));
    }
    if answers.software_model.is_none() {
        errors.push(ValidationError::new(
            "softwareModel",
            "Selecione o modelo de distribuição do software.",
        ));
    }
    if answers.monetization_type.is_none() {
        errors.push(ValidationError::new(
            "monetizationType",
            "Selecione o tipo de monetização.",
        ));
    }
}

// Collecting sensitive data implies collecting personal data; emitting a
// document that denies personal-data collection while describing
// sensitive-data handling would be legally incoherent.
fn check_coherence(answers: &AnswerSet, errors: &mut Vec<ValidationError>) {
    if answers.collects_sensitive_data && !answers.collects_personal_data {
        errors.push(ValidationError::new(
            "collectsSensitiveData",
            "Coleta de dados sensíveis pressupõe coleta de dados pessoais. \
             Marque a coleta de dados pessoais ou desmarque a de dados sensíveis.",
        ));
    }
}
