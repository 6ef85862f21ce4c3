//! Goal classification
//!
//! Two classifiers share a lowercased goal+context blob but nothing
//! else: [`classify_primary`] walks an ordered, specific-first rule
//! list and returns the first hit; [`classify_all`] scans an
//! independent keyword table and returns every hit. The tables are
//! maintained separately and can legitimately disagree: the primary
//! pick is precise, the multi-detection casts a wider net for
//! collaboration.

pub mod category;
pub mod multi;
pub mod primary;

pub use category::Category;
pub use multi::classify_all;
pub use primary::classify_primary;

/// Lowercased "goal context" blob both classifiers match against.
///
/// Matching is substring containment, not tokenized; a keyword hits
/// even inside another word.
pub(crate) fn combined_text(goal: &str, context: &str) -> String {
    format!("{} {}", goal.to_lowercase(), context.to_lowercase())
}

pub(crate) fn any_keyword(blob: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| blob.contains(kw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combined_text_lowercases_both_parts() {
        let blob = combined_text("Análise de VENDAS", "Pipeline CRM");
        assert_eq!(blob, "análise de vendas pipeline crm");
    }

    #[test]
    fn test_keyword_matches_inside_words() {
        // substring containment: "ti" hits inside "gestão" is false,
        // but "venda" hits inside "vendas"
        assert!(any_keyword("relatório de vendas", &["venda"]));
        assert!(!any_keyword("relatório de compras", &["venda"]));
    }

    /// The two tables are independent: a phrase can be classified into
    /// a primary category the multi-detector does not know about.
    #[test]
    fn test_classifiers_may_disagree() {
        // "resumir" maps to Summary in the primary table, but the
        // multi-detection table only covers business categories, so it
        // falls back to the primary pick.
        let primary = classify_primary("Resumir o relatório anual", "");
        assert_eq!(primary, Category::Summary);
        let all = classify_all("Resumir o relatório anual", "");
        assert_eq!(all, vec![Category::Summary]);

        // Conversely the bare word "estratégia" triggers the
        // multi-detector's strategic_planning row, while the primary
        // table needs more specific phrases and falls through to General.
        let primary = classify_primary("Definir a estratégia", "");
        let all = classify_all("Definir a estratégia", "");
        assert_eq!(primary, Category::General);
        assert!(all.contains(&Category::StrategicPlanning));
        assert!(!all.contains(&Category::General));
    }
}
