//! Export naming for downloaded policy documents.

use chrono::NaiveDate;

/// Builds the download filename: a sanitized project-name slug plus a date
/// stamp, e.g. `acme-saas-2026-08-26.md`. Falls back to `policy` when the
/// name has no usable characters.
pub fn export_filename(project_name: &str, date: NaiveDate) -> String {
    let slug = slugify(project_name);
    let slug = if slug.is_empty() { "policy" } else { &slug };
    format!("{slug}-{}.md", date.format("%Y-%m-%d"))
}

fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_dash = true;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    slug.trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 26).unwrap()
    }

    #[test]
    fn test_simple_name() {
        assert_eq!(export_filename("Acme", date()), "acme-2026-08-26.md");
    }

    #[test]
    fn test_spaces_and_punctuation_collapse() {
        assert_eq!(
            export_filename("PolicyGen  SaaS!", date()),
            "policygen-saas-2026-08-26.md"
        );
    }

    #[test]
    fn test_non_ascii_stripped() {
        assert_eq!(
            export_filename("Coração § App", date()),
            "cora-o-app-2026-08-26.md"
        );
    }

    #[test]
    fn test_empty_name_falls_back() {
        assert_eq!(export_filename("  §§  ", date()), "policy-2026-08-26.md");
    }
}
