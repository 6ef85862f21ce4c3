//! Ordered primary classification
//!
//! The rule list is ORDERED: more specific categories sit above the
//! generic ones, so "campanha de marketing criativa" lands on
//! `creative` before `marketing_analysis` gets a chance, and bare
//! "plano"/"projeto" only reach `planning` after every specialized
//! rule declined. Reordering the list changes behavior.

use super::{Category, any_keyword, combined_text};

/// The ordered rule table. First matching row wins.
const PRIMARY_RULES: &[(Category, &[&str])] = &[
    (
        Category::Creative,
        &[
            "criativo",
            "conteúdo",
            "post",
            "artigo blog",
            "campanha de marketing",
            "publicidade",
            "branding",
            "design",
            "copywriting",
            "social media content",
            "peça criativa",
            "material gráfico",
            "criação de campanha",
            "marketing de conteúdo",
            "campanha publicitária",
        ],
    ),
    (
        Category::Academic,
        &[
            "artigo",
            "paper",
            "pesquisa",
            "estudo",
            "análise científica",
            "metodologia",
            "revisão bibliográfica",
            "tese",
            "dissertação",
            "monografia",
            "científico",
            "publicação",
            "pesquisa acadêmica",
            "trabalho científico",
            "artigo científico",
        ],
    ),
    (
        Category::TechnicalReport,
        &[
            "relatório técnico",
            "report técnico",
            "análise técnica",
            "diagnóstico",
            "avaliação técnica",
            "auditoria",
            "compliance",
            "especificação técnica",
            "documento técnico",
            "laudo",
            "parecer técnico",
            "relatório de conformidade",
        ],
    ),
    (
        Category::Summary,
        &[
            "resumo",
            "resumir",
            "sintetizar",
            "síntese",
            "sumarizar",
            "executive summary",
            "sumário executivo",
            "abstract",
            "condensar",
            "apresentação resumida",
        ],
    ),
    (
        Category::StrategicPlanning,
        &[
            "planejamento estratégico",
            "estratégia empresarial",
            "plano estratégico",
            "visão estratégica",
            "missão",
            "valores",
            "objetivos estratégicos",
            "metas organizacionais",
            "okr",
            "okrs",
            "objectives and key results",
            "swot",
            "balanced scorecard",
            "kpi estratégico",
            "planejamento de longo prazo",
            "diretrizes estratégicas",
            "plano de negócios",
            "estratégia de crescimento",
        ],
    ),
    (
        Category::CompetitiveAnalysis,
        &[
            "análise de concorrência",
            "concorrência",
            "concorrentes",
            "benchmarking",
            "análise competitiva",
            "mercado competitivo",
            "posicionamento mercado",
            "competitivo",
            "competitor",
            "market share",
            "participação mercado",
            "inteligência competitiva",
            "rival",
            "panorama competitivo",
            "estudo de mercado competitivo",
        ],
    ),
    (
        Category::SalesAnalysis,
        &[
            "vendas",
            "receita",
            "faturamento",
            "conversão",
            "pipeline",
            "crm",
            "leads",
            "prospects",
            "clientes",
            "ticket médio",
            "ltv",
            "churn",
            "funil vendas",
            "performance comercial",
            "roi vendas",
            "forecast",
            "comercial",
            "desempenho de vendas",
            "análise de vendas",
        ],
    ),
    (
        Category::ProductManagement,
        &[
            "produto",
            "produtos",
            "roadmap",
            "features",
            "backlog",
            "mvp",
            "user story",
            "product owner",
            "desenvolvimento produto",
            "lançamento",
            "product market fit",
            "ciclo vida produto",
            "gestão de produto",
            "portfólio de produtos",
            "inovação de produto",
            "estratégia de produto",
        ],
    ),
    (
        Category::UserManagement,
        &[
            "usuários",
            "users",
            "ux",
            "ui",
            "experiência usuário",
            "jornada usuário",
            "personas",
            "segmentação",
            "comportamento usuário",
            "usabilidade",
            "customer journey",
            "user research",
            "gestão de usuários",
            "engajamento de usuários",
            "satisfação do cliente",
            "pesquisa de usuário",
        ],
    ),
    (
        Category::TaskManagement,
        &[
            "tarefas",
            "tasks",
            "sprint",
            "scrum",
            "kanban",
            "agile",
            "projeto",
            "cronograma",
            "milestone",
            "deliverables",
            "gestão projetos",
            "pmo",
            "waterfall",
            "gestão de tarefas",
            "planejamento de projeto",
            "gerenciamento de projeto",
            "metodologia ágil",
        ],
    ),
    (
        Category::FinancialAnalysis,
        &[
            "financeiro",
            "orçamento",
            "budget",
            "fluxo caixa",
            "dre",
            "balanço",
            "roi",
            "investimento",
            "custo",
            "margem",
            "lucro",
            "ebitda",
            "valuation",
            "análise financeira",
            "contabilidade",
            "saúde financeira",
            "planejamento financeiro",
        ],
    ),
    (
        Category::HrManagement,
        &[
            "recursos humanos",
            "rh",
            "colaboradores",
            "funcionários",
            "recrutamento",
            "seleção",
            "treinamento",
            "desenvolvimento",
            "performance",
            "avaliação desempenho",
            "cultura organizacional",
            "gestão de pessoas",
            "capital humano",
            "engajamento de funcionários",
            "políticas de rh",
        ],
    ),
    (
        Category::MarketingAnalysis,
        &[
            "marketing",
            "campanha",
            "comunicação",
            "branding",
            "marca",
            "publicidade",
            "digital marketing",
            "seo",
            "sem",
            "social media",
            "content marketing",
            "inbound",
            "estratégia de marketing",
            "plano de marketing",
            "relações públicas",
        ],
    ),
    (
        Category::OperationsManagement,
        &[
            "operações",
            "processos",
            "workflow",
            "automação",
            "eficiência",
            "produtividade",
            "lean",
            "six sigma",
            "melhoria contínua",
            "otimização",
            "gestão de operações",
            "cadeia de suprimentos",
            "logística",
            "gestão da qualidade",
        ],
    ),
    (
        Category::TechnologyAnalysis,
        &[
            "tecnologia",
            "inovação",
            "digital",
            "transformação digital",
            "ti",
            "sistemas",
            "software",
            "infraestrutura",
            "arquitetura",
            "desenvolvimento",
            "análise tecnológica",
            "cibersegurança",
            "segurança da informação",
            "tendências tecnológicas",
        ],
    ),
    (
        Category::DataAnalysis,
        &[
            "dados",
            "estatística",
            "gráfico",
            "dashboard",
            "métricas",
            "kpi",
            "analytics",
            "business intelligence",
            "big data",
            "data science",
            "análise de dados",
            "relatório de dados",
            "interpretação de dados",
            "modelagem de dados",
        ],
    ),
    (
        Category::Documentation,
        &[
            "documentação",
            "manual",
            "guia",
            "tutorial",
            "procedimento",
            "política",
            "norma",
            "regulamento",
            "documentar",
            "instruções",
            "especificação",
            "criação de documentos",
        ],
    ),
    (
        Category::Planning,
        &[
            "plano",
            "planejamento",
            "cronograma",
            "projeto",
            "agenda",
            "organização",
            "programação",
            "planejar",
        ],
    ),
];

/// Classify a goal into its single primary category.
///
/// Returns [`Category::General`] when no rule matches.
pub fn classify_primary(goal: &str, context: &str) -> Category {
    let blob = combined_text(goal, context);
    for (category, keywords) in PRIMARY_RULES {
        if any_keyword(&blob, keywords) {
            return *category;
        }
    }
    Category::General
}
