//! Quality evaluation
//!
//! Scores a synthesized document along four axes, each in [0, 1], and
//! derives improvement recommendations from per-axis thresholds. The
//! scorers are cheap heuristics (keyword presence and length proxies),
//! not semantic judgments.

use crate::classify::Category;
use serde::{Deserialize, Serialize};

/// Per-axis and overall quality scores for a generated document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityReport {
    /// Unweighted mean of the four axis scores
    pub overall_score: f64,
    /// Category-required sections found
    pub completeness: f64,
    /// Goal tokens present in the content
    pub accuracy: f64,
    /// Length-based proxy
    pub relevance: f64,
    /// Actionable-keyword density
    pub actionability: f64,
    /// Static improvement messages for axes below threshold
    pub recommendations: Vec<String>,
}

impl QualityReport {
    /// Render the report as the text block appended to the document.
    pub fn to_text_block(&self) -> String {
        let mut block = format!(
            "\n\n--- RELATÓRIO DE QUALIDADE ---\nScore Geral: {:.2}/1.0\n",
            self.overall_score
        );
        block.push_str(&format!("Completude: {:.2}\n", self.completeness));
        block.push_str(&format!("Precisão: {:.2}\n", self.accuracy));
        block.push_str(&format!("Relevância: {:.2}\n", self.relevance));
        block.push_str(&format!("Acionabilidade: {:.2}\n", self.actionability));

        if !self.recommendations.is_empty() {
            block.push_str("\nRecomendações de Melhoria:\n");
            for (i, rec) in self.recommendations.iter().enumerate() {
                block.push_str(&format!("{}. {}\n", i + 1, rec));
            }
        }

        block
    }
}

/// Sections a document must mention to count as complete, per category.
fn required_sections(category: Category) -> &'static [&'static str] {
    match category {
        Category::StrategicPlanning => &["análise", "objetivos", "estratégias", "implementação"],
        Category::SalesAnalysis => &["métricas", "tendências", "recomendações"],
        Category::ProductManagement => &["roadmap", "features", "personas"],
        Category::UserManagement => &["jornada", "experiência", "melhorias"],
        Category::TaskManagement => &["backlog", "sprint", "cronograma"],
        _ => &["introdução", "desenvolvimento", "conclusão"],
    }
}

const ACTIONABLE_KEYWORDS: &[&str] = &[
    "recomendação",
    "ação",
    "implementar",
    "executar",
    "plano",
    "estratégia",
    "próximos passos",
];

/// Characters of content at which relevance saturates.
const RELEVANCE_SATURATION: f64 = 1000.0;

/// Actionable-keyword count at which actionability saturates.
const ACTIONABILITY_SATURATION: f64 = 3.0;

fn score_completeness(content_lower: &str, category: Category) -> f64 {
    let sections = required_sections(category);
    let found = sections
        .iter()
        .filter(|section| content_lower.contains(*section))
        .count();
    found as f64 / sections.len() as f64
}

fn score_accuracy(content_lower: &str, goal: &str) -> f64 {
    let tokens: Vec<String> = goal
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect();
    if tokens.is_empty() {
        return 0.0;
    }
    let matched = tokens
        .iter()
        .filter(|token| content_lower.contains(token.as_str()))
        .count();
    (matched as f64 / tokens.len() as f64).min(1.0)
}

fn score_relevance(content: &str) -> f64 {
    (content.chars().count() as f64 / RELEVANCE_SATURATION).min(1.0)
}

fn score_actionability(content_lower: &str) -> f64 {
    let found = ACTIONABLE_KEYWORDS
        .iter()
        .filter(|keyword| content_lower.contains(*keyword))
        .count();
    (found as f64 / ACTIONABILITY_SATURATION).min(1.0)
}

/// Evaluate a synthesized document against its goal and category.
pub fn evaluate(content: &str, goal: &str, category: Category) -> QualityReport {
    let content_lower = content.to_lowercase();

    let completeness = score_completeness(&content_lower, category);
    let accuracy = score_accuracy(&content_lower, goal);
    let relevance = score_relevance(content);
    let actionability = score_actionability(&content_lower);

    let overall_score = (completeness + accuracy + relevance + actionability) / 4.0;

    let mut recommendations = Vec::new();
    if completeness < 0.7 {
        recommendations.push("Adicionar seções faltantes para maior completude".to_string());
    }
    if accuracy < 0.6 {
        recommendations.push("Revisar alinhamento com o objetivo principal".to_string());
    }
    if relevance < 0.5 {
        recommendations.push("Expandir conteúdo com mais detalhes relevantes".to_string());
    }
    if actionability < 0.6 {
        recommendations.push("Incluir mais recomendações práticas e acionáveis".to_string());
    }

    QualityReport {
        overall_score,
        completeness,
        accuracy,
        relevance,
        actionability,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A keyword-rich strategic-planning document must saturate the
    /// completeness, relevance and actionability axes.
    #[test]
    fn test_keyword_rich_strategic_document_saturates_axes() {
        let goal = "plano de crescimento";
        let mut content = String::from(
            "Esta análise apresenta os objetivos e as estratégias para a \
             implementação do plano de crescimento. Recomendação: implementar \
             e executar as ações definidas na estratégia, com próximos passos claros. ",
        );
        while content.chars().count() < 2000 {
            content.push_str("Desenvolvimento adicional da análise em detalhe. ");
        }

        let report = evaluate(&content, goal, Category::StrategicPlanning);
        assert_eq!(report.completeness, 1.0);
        assert_eq!(report.relevance, 1.0);
        assert_eq!(report.actionability, 1.0);
        assert_eq!(report.accuracy, 1.0);
        assert_eq!(report.overall_score, 1.0);
        assert!(report.recommendations.is_empty());
    }

    #[test]
    fn test_unmapped_category_uses_generic_sections() {
        let content = "Introdução breve. Desenvolvimento do tema. Conclusão final.";
        let report = evaluate(content, "tema", Category::Creative);
        assert_eq!(report.completeness, 1.0);
    }

    #[test]
    fn test_short_content_scores_low_relevance() {
        let report = evaluate("curto", "meta", Category::General);
        assert!(report.relevance < 0.5);
        assert!(
            report
                .recommendations
                .iter()
                .any(|r| r.contains("Expandir conteúdo"))
        );
    }

    #[test]
    fn test_accuracy_counts_goal_tokens() {
        let report = evaluate(
            "o documento fala de vendas mas não de mais nada",
            "vendas trimestrais",
            Category::General,
        );
        assert_eq!(report.accuracy, 0.5);
    }

    #[test]
    fn test_missing_actionability_triggers_recommendation() {
        let content = "Texto descritivo sem verbos de comando.".repeat(50);
        let report = evaluate(&content, "meta", Category::General);
        assert!(report.actionability < 0.6);
        assert!(
            report
                .recommendations
                .iter()
                .any(|r| r.contains("acionáveis"))
        );
    }

    #[test]
    fn test_text_block_lists_recommendations_numbered() {
        let report = evaluate("curto", "uma meta qualquer", Category::General);
        let block = report.to_text_block();
        assert!(block.contains("--- RELATÓRIO DE QUALIDADE ---"));
        assert!(block.contains("Score Geral:"));
        assert!(block.contains("1. "));
    }

    #[test]
    fn test_overall_is_unweighted_mean() {
        let report = evaluate("qualquer texto", "meta", Category::General);
        let mean = (report.completeness + report.accuracy + report.relevance
            + report.actionability)
            / 4.0;
        assert!((report.overall_score - mean).abs() < f64::EPSILON);
    }
}
