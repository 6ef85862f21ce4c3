//! Multi-category detection
//!
//! Independent of the primary table: smaller keyword sets, no
//! ordering, business categories only. Collects every category whose
//! keywords intersect the blob so all relevant collaborators get
//! activated, and falls back to the primary pick when nothing matches.

use super::{Category, any_keyword, classify_primary, combined_text};

/// Unordered detection table. Row order only fixes the iteration order
/// of the returned list; it carries no priority semantics.
const DETECTION_RULES: &[(Category, &[&str])] = &[
    (
        Category::CompetitiveAnalysis,
        &[
            "concorrência",
            "concorrentes",
            "benchmarking",
            "competitivo",
            "market share",
            "inteligência competitiva",
        ],
    ),
    (
        Category::StrategicPlanning,
        &[
            "estratégia",
            "planejamento estratégico",
            "visão",
            "missão",
            "okr",
            "swot",
        ],
    ),
    (
        Category::SalesAnalysis,
        &[
            "vendas", "receita", "conversão", "pipeline", "crm", "leads", "clientes",
        ],
    ),
    (
        Category::ProductManagement,
        &[
            "produto",
            "roadmap",
            "features",
            "mvp",
            "backlog",
            "product owner",
        ],
    ),
    (
        Category::UserManagement,
        &["usuários", "ux", "ui", "experiência", "jornada", "personas"],
    ),
    (
        Category::TaskManagement,
        &["tarefas", "sprint", "scrum", "kanban", "projeto", "cronograma"],
    ),
    (
        Category::FinancialAnalysis,
        &["financeiro", "orçamento", "roi", "custo", "margem", "lucro"],
    ),
    (
        Category::HrManagement,
        &[
            "recursos humanos",
            "rh",
            "colaboradores",
            "recrutamento",
            "treinamento",
        ],
    ),
    (
        Category::MarketingAnalysis,
        &["marketing", "campanha", "branding", "publicidade", "seo"],
    ),
    (
        Category::OperationsManagement,
        &["operações", "processos", "eficiência", "automação", "lean"],
    ),
    (
        Category::TechnologyAnalysis,
        &["tecnologia", "inovação", "digital", "ti", "sistemas"],
    ),
    (
        Category::DataAnalysis,
        &["dados", "estatística", "analytics", "dashboard", "métricas"],
    ),
];

/// Detect every category related to the goal.
///
/// Falls back to `vec![classify_primary(goal, context)]` when no
/// detection rule matches, so the result is never empty.
pub fn classify_all(goal: &str, context: &str) -> Vec<Category> {
    let blob = combined_text(goal, context);

    let detected: Vec<Category> = DETECTION_RULES
        .iter()
        .filter(|(_, keywords)| any_keyword(&blob, keywords))
        .map(|(category, _)| *category)
        .collect();

    if detected.is_empty() {
        vec![classify_primary(goal, context)]
    } else {
        detected
    }
}
