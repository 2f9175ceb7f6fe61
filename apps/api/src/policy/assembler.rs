//! Deterministic policy assembly — AnswerSet in, Markdown out.
//!
//! The document is an ordered list of named section builders, each a pure
//! function from the answers to a text fragment. The assembler concatenates
//! the fragments in a fixed order, so section inclusion/exclusion is
//! independently testable. No clock access: the effective date is supplied
//! by the caller.
//!
//! The body is written in pt-BR, the platform's primary language; the
//! requested output language is recorded in the document header.

use chrono::{Datelike, NaiveDate};

use crate::models::answer_set::{
    AnswerSet, CodeLicense, Jurisdiction, MonetizationType, SoftwareModel,
};
use crate::policy::labels::{label_for, Category};

// ────────────────────────────────────────────────────────────────────────────
// Clause constants — referenced by builders and by section-presence tests
// ────────────────────────────────────────────────────────────────────────────

pub const MINORS_CLAUSE: &str = "**Público Infantil e Adolescente:** \
    O serviço destina-se também a crianças e adolescentes. O tratamento de \
    dados de menores exige o consentimento específico de pais ou responsáveis \
    legais, e as informações coletadas limitam-se ao mínimo necessário para a \
    prestação do serviço.";

pub const MIT_CLAUSE: &str = "O código-fonte é licenciado sob a **licença MIT**: \
    uso, cópia e modificação são permitidos, desde que o aviso de copyright e \
    a licença sejam preservados.";

pub const GPLV3_CLAUSE: &str = "O código-fonte é licenciado sob a **GPL v3**: \
    obras derivadas distribuídas devem permanecer sob a mesma licença, com o \
    respectivo código-fonte disponível.";

pub const PROPRIETARY_CLAUSE: &str = "O código-fonte é **proprietário**: é vedada \
    a cópia, a engenharia reversa e a redistribuição sem autorização expressa \
    do responsável.";

pub const SAAS_CLAUSE: &str = "O software é disponibilizado como serviço (SaaS): \
    o acesso ocorre via web/API e nenhuma cópia do software é transferida ao \
    usuário.";

pub const NO_WARRANTY_CLAUSE_TITLE: &str = "## 6. Cláusula de Não Garantia (AS IS)";

pub const DISCLAIMER: &str = "Este documento foi gerado automaticamente a partir \
    das respostas do formulário e **não constitui aconselhamento jurídico**. \
    Revise-o com um advogado qualificado antes da publicação.";

pub const DPO_PLACEHOLDER: &str = "Não informado";
pub const TRANSFER_PLACEHOLDER: &str = "Não aplicável";

const GENERIC_PURPOSE: &str =
    "com a finalidade genérica de prover o serviço e cumprir obrigações legais";

const MONTHS_PT: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Long-form pt-BR date, e.g. `26 de agosto de 2026`.
pub fn formatted_date(date: NaiveDate) -> String {
    format!(
        "{:02} de {} de {}",
        date.day(),
        MONTHS_PT[date.month0() as usize],
        date.year()
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Assembly
// ────────────────────────────────────────────────────────────────────────────

/// Assembles the full Terms of Use + Privacy Policy document.
///
/// Pure: same answers and same date always produce byte-identical output.
pub fn assemble(answers: &AnswerSet, generated_at: NaiveDate) -> String {
    let sections: Vec<Option<String>> = vec![
        Some(header(answers, generated_at)),
        Some(personal_data(answers)),
        minors(answers),
        Some(third_parties(answers)),
        Some(licensing(answers)),
        Some(governing_law(answers)),
        no_warranty(answers),
        Some(contacts(answers)),
        Some(format!("## 8. Aviso Legal\n\n{DISCLAIMER}")),
    ];

    sections
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn jurisdiction_label(answers: &AnswerSet) -> String {
    let code = answers
        .jurisdiction
        .unwrap_or(Jurisdiction::Global)
        .code();
    label_for(Category::Jurisdiction, code)
}

fn header(answers: &AnswerSet, generated_at: NaiveDate) -> String {
    let project = &answers.project_name;
    let language_label = label_for(Category::OutputLanguage, answers.output_language.code());

    let tech_sentence = if answers.primary_technology.trim().is_empty() {
        String::from(".")
    } else {
        format!(
            ", desenvolvido principalmente em {}.",
            answers.primary_technology.trim()
        )
    };

    format!(
        "# Termos de Uso e Política de Privacidade de {project}\n\n\
         > **Documento Gerado para Jurisdição Principal:** {jurisdiction}\n\
         > **Idioma Solicitado:** {language_label}\n\n\
         **Responsável:** {responsible}\n\
         **Data de Vigência:** {date}\n\n\
         ## 1. Introdução\n\n\
         O **{project}** é um software operado por **{responsible}**{tech_sentence} \
         Estes Termos e a Política de Privacidade descrevem como o serviço é \
         oferecido e utilizado, regidos pela legislação de **{jurisdiction}**.",
        jurisdiction = jurisdiction_label(answers),
        responsible = answers.responsible_party,
        date = formatted_date(generated_at),
    )
}

fn personal_data(answers: &AnswerSet) -> String {
    let project = &answers.project_name;

    if !answers.collects_personal_data {
        return format!(
            "## 2. Proteção de Dados Pessoais\n\n\
             O {project} **não coleta dados pessoais diretamente**. Nenhum dado \
             de identificação é armazenado ou processado pelo serviço."
        );
    }

    let purpose = if answers.collection_purpose.trim().is_empty() {
        GENERIC_PURPOSE.to_string()
    } else {
        format!(
            "estritamente para os seguintes fins: **{}**",
            answers.collection_purpose.trim()
        )
    };

    let sensitive = if answers.collects_sensitive_data {
        "O tratamento inclui *dados sensíveis* (saúde, biometria ou categorias \
         equivalentes), sujeito a salvaguardas reforçadas e ao consentimento \
         específico do titular."
    } else {
        "Nenhum dado sensível é tratado pelo serviço."
    };

    format!(
        "## 2. Proteção de Dados Pessoais\n\n\
         O {project} coleta e processa dados pessoais de seus usuários {purpose}. \
         {sensitive}\n\n\
         As disposições sobre direitos do titular (acesso, correção, exclusão) \
         seguem as regras de {jurisdiction}.",
        jurisdiction = jurisdiction_label(answers),
    )
}

// Silent omission when the audience excludes children — no placeholder text.
fn minors(answers: &AnswerSet) -> Option<String> {
    answers.targets_children.then(|| MINORS_CLAUSE.to_string())
}

fn third_parties(answers: &AnswerSet) -> String {
    let sharing = if answers.uses_third_party_monetization {
        "O serviço utiliza provedores terceiros de publicidade e análise de \
         dados, com os quais dados de navegação podem ser compartilhados \
         conforme esta política."
    } else {
        "Nenhum dado é compartilhado com terceiros para fins de publicidade ou \
         análise de dados."
    };

    let billing = match answers.monetization_type {
        Some(MonetizationType::Free) => Some(
            "O serviço é oferecido **gratuitamente**, sem qualquer cobrança ao \
             usuário."
                .to_string(),
        ),
        Some(MonetizationType::AdSupported) => Some(
            "O acesso ao serviço é gratuito e **sustentado por publicidade** \
             exibida dentro do próprio serviço."
                .to_string(),
        ),
        Some(paid) => Some(format!(
            "O serviço adota o modelo **{}**. Valores, ciclos de cobrança e \
             condições de cancelamento são informados antes da contratação, e o \
             usuário pode cancelar a renovação a qualquer momento.",
            label_for(Category::Monetization, paid.code()),
        )),
        None => None,
    };

    let mut section = format!("## 3. Terceiros e Monetização\n\n{sharing}");
    if let Some(billing) = billing {
        section.push_str("\n\n");
        section.push_str(&billing);
    }
    section
}

fn licensing(answers: &AnswerSet) -> String {
    let mut section = String::from("## 4. Licença e Modelo de Software");

    // Three mutually exclusive license clauses; Apache2 and an empty
    // selection emit no clause.
    let license_clause = match answers.code_license {
        CodeLicense::Mit => Some(MIT_CLAUSE),
        CodeLicense::Gplv3 => Some(GPLV3_CLAUSE),
        CodeLicense::Proprietary => Some(PROPRIETARY_CLAUSE),
        CodeLicense::Apache2 | CodeLicense::Unspecified => None,
    };

    if let Some(clause) = license_clause {
        section.push_str("\n\n");
        section.push_str(clause);
    }

    if answers.software_model == Some(SoftwareModel::Saas) {
        section.push_str("\n\n");
        section.push_str(SAAS_CLAUSE);
    }

    section
}

fn governing_law(answers: &AnswerSet) -> String {
    // Global (or an unselected jurisdiction) falls to the multi-framework
    // clause — the designated default, not an error path.
    let clause = match answers.jurisdiction.unwrap_or(Jurisdiction::Global) {
        Jurisdiction::Brazil => {
            "Estes Termos são regidos pelas leis da República Federativa do \
             Brasil, em especial a Lei Geral de Proteção de Dados (LGPD, Lei \
             nº 13.709/2018)."
        }
        Jurisdiction::Eu => {
            "Estes Termos são regidos pelo direito da União Europeia, em \
             especial o Regulamento Geral de Proteção de Dados (GDPR, \
             Regulamento (UE) 2016/679)."
        }
        Jurisdiction::Usa => {
            "Estes Termos são regidos pelos regulamentos estaduais aplicáveis \
             dos Estados Unidos, incluindo a CCPA/CPRA (Califórnia) onde \
             incidente."
        }
        Jurisdiction::Japan => {
            "Estes Termos são regidos pelas leis do Japão, em especial o Act \
             on the Protection of Personal Information (APPI)."
        }
        Jurisdiction::Canada => {
            "Estes Termos são regidos pelas leis do Canadá, em especial o \
             Personal Information Protection and Electronic Documents Act \
             (PIPEDA)."
        }
        Jurisdiction::Global => {
            "Na ausência de uma jurisdição única, o serviço adota as melhores \
             práticas internacionais de proteção de dados, observando os \
             princípios comuns à LGPD, ao GDPR e a marcos equivalentes."
        }
    };

    format!("## 5. Lei Aplicável\n\n{clause}")
}

// Section numbering stays fixed even when this section is omitted.
fn no_warranty(answers: &AnswerSet) -> Option<String> {
    answers.include_no_warranty_clause.then(|| {
        format!(
            "{NO_WARRANTY_CLAUSE_TITLE}\n\n\
             O Serviço é fornecido \"no estado em que se encontra\" (AS IS). O \
             {project} não oferece garantias de desempenho, adequação ou \
             ausência de erros.",
            project = answers.project_name,
        )
    })
}

fn contacts(answers: &AnswerSet) -> String {
    let dpo = if answers.dpo_contact.trim().is_empty() {
        DPO_PLACEHOLDER.to_string()
    } else {
        answers.dpo_contact.trim().to_string()
    };

    let destinations = if answers.transfer_countries.trim().is_empty() {
        TRANSFER_PLACEHOLDER.to_string()
    } else {
        answers.transfer_countries.trim().to_string()
    };

    format!(
        "## 7. Contato e Transferência Internacional\n\n\
         **Contato do Encarregado (DPO):** {dpo}\n\
         **Países de Destino de Transferência Internacional:** {destinations}\n\n\
         Quando houver transferência internacional, o nível de proteção dos \
         dados permanece compatível com o exigido pela jurisdição \
         {jurisdiction}.",
        jurisdiction = jurisdiction_label(answers),
    )
}
