//! Prompt pair registry
//!
//! One pair per category: the outline prompt drives the first
//! (structural) generation pass, the synthesis prompt the second
//! (final prose) pass. Unmapped categories fall back to the `general`
//! pair. All prompts are in Portuguese and carry the ABNT block via
//! `{abnt_rules}`.

use super::template::{abnt_rules, render};
use crate::classify::Category;

/// A category's (outline, synthesis) template pair.
#[derive(Debug, Clone, Copy)]
pub struct PromptPair {
    /// First pass: produce the document skeleton from goal + context.
    pub outline: &'static str,
    /// Second pass: produce final prose from outline + context.
    pub synthesis: &'static str,
}

impl PromptPair {
    /// Render the outline prompt.
    pub fn render_outline(&self, goal: &str, context: &str) -> String {
        render(
            self.outline,
            &[
                ("goal", goal),
                ("context", context),
                ("abnt_rules", abnt_rules()),
            ],
        )
    }

    /// Render the synthesis prompt.
    pub fn render_synthesis(&self, outline: &str, context: &str) -> String {
        render(
            self.synthesis,
            &[
                ("outline", outline),
                ("context", context),
                ("abnt_rules", abnt_rules()),
            ],
        )
    }
}

/// Look up the template pair for a category, falling back to the
/// general pair for unmapped categories.
pub fn templates_for(category: Category) -> &'static PromptPair {
    match category {
        Category::Academic => &ACADEMIC,
        Category::TechnicalReport => &TECHNICAL_REPORT,
        Category::Summary => &SUMMARY,
        Category::DataAnalysis => &DATA_ANALYSIS,
        Category::StrategicPlanning => &STRATEGIC_PLANNING,
        Category::CompetitiveAnalysis => &COMPETITIVE_ANALYSIS,
        Category::SalesAnalysis => &SALES_ANALYSIS,
        Category::FinancialAnalysis => &FINANCIAL_ANALYSIS,
        Category::HrManagement => &HR_MANAGEMENT,
        Category::MarketingAnalysis => &MARKETING_ANALYSIS,
        Category::OperationsManagement => &OPERATIONS_MANAGEMENT,
        Category::TechnologyAnalysis => &TECHNOLOGY_ANALYSIS,
        Category::ProductManagement => &PRODUCT_MANAGEMENT,
        Category::UserManagement => &USER_MANAGEMENT,
        Category::TaskManagement => &TASK_MANAGEMENT,
        Category::Documentation | Category::Planning | Category::Creative | Category::General => {
            &GENERAL
        }
    }
}

static ACADEMIC: PromptPair = PromptPair {
    outline: r#"Você é um pesquisador acadêmico especializado. Analise o objetivo: "{goal}" e crie uma estrutura detalhada para um trabalho acadêmico seguindo metodologia científica.

Contexto fornecido:
'''{context}'''

Sua estrutura deve incluir:
1. Introdução e justificativa
2. Objetivos (geral e específicos)
3. Revisão bibliográfica
4. Metodologia
5. Resultados esperados
6. Conclusões
7. Referências

{abnt_rules}"#,
    synthesis: r#"Você é um escritor acadêmico especializado em produção científica. Desenvolva um texto acadêmico completo baseado na estrutura:

{outline}

Contexto de referência:
'''{context}'''

REQUISITOS OBRIGATÓRIOS:
- Linguagem formal e técnica
- Citações e referências adequadas
- Argumentação lógica e fundamentada
- Metodologia clara e replicável
{abnt_rules}

Produza um texto de qualidade acadêmica, pronto para submissão."#,
};

static TECHNICAL_REPORT: PromptPair = PromptPair {
    outline: r#"Você é um analista técnico especializado. Analise o objetivo: "{goal}" e estruture um relatório técnico profissional.

Dados técnicos:
'''{context}'''

Estruture o relatório com:
1. Sumário executivo
2. Introdução e objetivos
3. Metodologia aplicada
4. Resultados e análises
5. Discussão técnica
6. Conclusões e recomendações
7. Anexos (quando necessário)

{abnt_rules}"#,
    synthesis: r#"Você é um redator técnico especializado. Desenvolva um relatório técnico completo baseado na estrutura:

{outline}

Dados de referência:
'''{context}'''

CARACTERÍSTICAS OBRIGATÓRIAS:
- Linguagem técnica precisa
- Dados quantitativos quando possível
- Gráficos e tabelas (descreva quando necessário)
- Recomendações práticas e implementáveis
{abnt_rules}

Produza um relatório profissional e acionável."#,
};

static SUMMARY: PromptPair = PromptPair {
    outline: r#"Você é um especialista em síntese de informações. Analise o objetivo: "{goal}" e estruture um resumo eficiente.

Conteúdo para resumir:
'''{context}'''

Estruture o resumo com:
1. Pontos principais identificados
2. Informações essenciais
3. Conclusões-chave
4. Insights relevantes

{abnt_rules}"#,
    synthesis: r#"Você é um redator especializado em sínteses. Crie um resumo claro e conciso baseado na estrutura:

{outline}

Conteúdo original:
'''{context}'''

CARACTERÍSTICAS DO RESUMO:
- Máximo 500 palavras para resumo executivo
- Linguagem clara e objetiva
- Preservação das informações essenciais
- Estrutura lógica e fluida
{abnt_rules}

Produza um resumo profissional e informativo."#,
};

static DATA_ANALYSIS: PromptPair = PromptPair {
    outline: r#"Você é um analista de dados especializado. Analise o objetivo: "{goal}" e estruture uma análise de dados completa.

Dados fornecidos:
'''{context}'''

Estruture a análise com:
1. Visão geral dos dados
2. Metodologia de análise
3. Estatísticas descritivas
4. Padrões e tendências identificados
5. Insights e correlações
6. Recomendações baseadas em dados

{abnt_rules}"#,
    synthesis: r#"Você é um especialista em relatórios de dados. Desenvolva uma análise completa baseada na estrutura:

{outline}

Dataset:
'''{context}'''

ELEMENTOS OBRIGATÓRIOS:
- Interpretação clara dos dados
- Visualizações descritas (quando aplicável)
- Insights acionáveis
- Conclusões baseadas em evidências
{abnt_rules}

Produza uma análise de dados profissional e compreensível."#,
};

static STRATEGIC_PLANNING: PromptPair = PromptPair {
    outline: r#"Você é um consultor estratégico sênior especializado em planejamento empresarial. Analise o objetivo: "{goal}" e estruture um plano estratégico abrangente.

Contexto organizacional:
'''{context}'''

Estruture o planejamento estratégico com:
1. Análise do ambiente interno e externo (SWOT)
2. Definição de missão, visão e valores
3. Objetivos estratégicos de longo prazo
4. OKRs (Objectives and Key Results) trimestrais e anuais
5. Estratégias e iniciativas prioritárias
6. Plano de implementação e cronograma
7. Indicadores de performance (KPIs)
8. Gestão de riscos e contingências
9. Orçamento e recursos necessários

{abnt_rules}"#,
    synthesis: r#"Você é um especialista em documentação estratégica empresarial. Desenvolva um plano estratégico completo baseado na estrutura:

{outline}

Dados organizacionais:
'''{context}'''

ELEMENTOS OBRIGATÓRIOS:
- Análise situacional detalhada
- Objetivos SMART (específicos, mensuráveis, atingíveis, relevantes, temporais)
- OKRs estruturados com objetivos qualitativos e key results quantitativos
- Estratégias claras e acionáveis
- Cronograma de implementação realista
- Métricas de acompanhamento e revisão trimestral de OKRs
- Análise de viabilidade financeira
- Planos de contingência
{abnt_rules}

Produza um plano estratégico executável e profissional."#,
};

static COMPETITIVE_ANALYSIS: PromptPair = PromptPair {
    outline: r#"Você é um analista de mercado especializado em inteligência competitiva. Analise o objetivo: "{goal}" e estruture uma análise de concorrência completa.

Dados de mercado e concorrentes:
'''{context}'''

Estruture a análise competitiva com:
1. Mapeamento do cenário competitivo
2. Identificação dos principais concorrentes
3. Análise de produtos/serviços concorrentes
4. Estratégias de preços e posicionamento
5. Forças e fraquezas dos concorrentes
6. Participação de mercado e tendências
7. Oportunidades e ameaças identificadas
8. Recomendações estratégicas

{abnt_rules}"#,
    synthesis: r#"Você é um especialista em relatórios de inteligência competitiva. Desenvolva uma análise de concorrência detalhada baseada na estrutura:

{outline}

Informações de mercado:
'''{context}'''

COMPONENTES ESSENCIAIS:
- Perfil detalhado dos concorrentes principais
- Análise comparativa de produtos/serviços
- Benchmarking de preços e estratégias
- Matriz de posicionamento competitivo
- Análise de market share e tendências
- Identificação de gaps de mercado
- Recomendações táticas e estratégicas
{abnt_rules}

Produza uma análise competitiva acionável e estratégica."#,
};

static SALES_ANALYSIS: PromptPair = PromptPair {
    outline: r#"Você é um analista de vendas sênior especializado em performance comercial. Analise o objetivo: "{goal}" e estruture uma análise completa de vendas.

Dados de vendas:
'''{context}'''

Estruture a análise com:
1. Visão geral do desempenho de vendas
2. Análise de métricas-chave (receita, conversão, ticket médio, LTV, churn)
3. Segmentação de clientes e produtos
4. Análise de tendências e sazonalidade
5. Identificação de oportunidades e gargalos
6. Benchmarking e comparações históricas
7. Previsões e projeções
8. Recomendações estratégicas para crescimento

{abnt_rules}"#,
    synthesis: r#"Você é um especialista em relatórios comerciais. Desenvolva uma análise de vendas detalhada baseada na estrutura:

{outline}

Dados comerciais:
'''{context}'''

ELEMENTOS OBRIGATÓRIOS:
- Dashboard executivo com KPIs principais
- Análise quantitativa com gráficos e tabelas
- Insights acionáveis para equipe comercial
- Plano de ação com metas específicas
- ROI e análise de investimento em vendas
- Estratégias de retenção e upselling
{abnt_rules}

Produza um relatório comercial estratégico e acionável."#,
};

static FINANCIAL_ANALYSIS: PromptPair = PromptPair {
    outline: r#"Você é um analista financeiro sênior especializado em análise empresarial. Analise o objetivo: "{goal}" e estruture uma análise financeira completa.

Dados financeiros:
'''{context}'''

Estruture a análise com:
1. Análise de demonstrações financeiras (DRE, Balanço, Fluxo de Caixa)
2. Indicadores de rentabilidade e liquidez
3. Análise de custos e margem
4. ROI e análise de investimentos
5. Projeções financeiras e cenários
6. Análise de riscos financeiros
7. Benchmarking setorial
8. Recomendações para otimização financeira

{abnt_rules}"#,
    synthesis: r#"Você é um especialista em relatórios financeiros. Desenvolva uma análise financeira detalhada baseada na estrutura:

{outline}

Dados financeiros:
'''{context}'''

ELEMENTOS OBRIGATÓRIOS:
- Resumo executivo financeiro
- Análise de indicadores-chave (ROI, EBITDA, Margem)
- Gráficos e tabelas financeiras
- Análise de tendências e variações
- Recomendações de investimento e corte de custos
- Projeções e cenários futuros
{abnt_rules}

Produza um relatório financeiro profissional e acionável."#,
};

static HR_MANAGEMENT: PromptPair = PromptPair {
    outline: r#"Você é um especialista em gestão de recursos humanos. Analise o objetivo: "{goal}" e estruture uma análise completa de RH.

Dados de RH:
'''{context}'''

Estruture a análise com:
1. Análise do capital humano atual
2. Indicadores de performance e engajamento
3. Análise de turnover e retenção
4. Mapeamento de competências e gaps
5. Planos de desenvolvimento e treinamento
6. Cultura organizacional e clima
7. Estratégias de recrutamento e seleção
8. Recomendações para gestão de pessoas

{abnt_rules}"#,
    synthesis: r#"Você é um especialista em relatórios de RH. Desenvolva uma análise de recursos humanos baseada na estrutura:

{outline}

Dados de RH:
'''{context}'''

ELEMENTOS OBRIGATÓRIOS:
- Dashboard de indicadores de RH
- Análise de performance e produtividade
- Planos de desenvolvimento individuais
- Estratégias de retenção de talentos
- Programas de treinamento e capacitação
- Métricas de satisfação e engajamento
{abnt_rules}

Produza um relatório de RH estratégico e implementável."#,
};

static MARKETING_ANALYSIS: PromptPair = PromptPair {
    outline: r#"Você é um analista de marketing digital especializado. Analise o objetivo: "{goal}" e estruture uma análise completa de marketing.

Dados de marketing:
'''{context}'''

Estruture a análise com:
1. Análise do mix de marketing atual
2. Performance de campanhas e canais
3. Análise de audiência e segmentação
4. ROI de investimentos em marketing
5. Análise de concorrência em marketing
6. Tendências e oportunidades de mercado
7. Estratégias de branding e posicionamento
8. Recomendações para otimização de marketing

{abnt_rules}"#,
    synthesis: r#"Você é um especialista em relatórios de marketing. Desenvolva uma análise de marketing baseada na estrutura:

{outline}

Dados de marketing:
'''{context}'''

ELEMENTOS OBRIGATÓRIOS:
- Dashboard de métricas de marketing
- Análise de ROI por canal
- Estratégias de conteúdo e engajamento
- Planos de campanhas futuras
- Análise de brand awareness
- Recomendações de otimização de budget
{abnt_rules}

Produza um relatório de marketing estratégico e acionável."#,
};

static OPERATIONS_MANAGEMENT: PromptPair = PromptPair {
    outline: r#"Você é um especialista em gestão de operações. Analise o objetivo: "{goal}" e estruture uma análise completa de operações.

Dados operacionais:
'''{context}'''

Estruture a análise com:
1. Mapeamento de processos atuais
2. Análise de eficiência e produtividade
3. Identificação de gargalos e desperdícios
4. Análise de qualidade e conformidade
5. Oportunidades de automação
6. Benchmarking operacional
7. Estratégias de melhoria contínua
8. Recomendações para otimização operacional

{abnt_rules}"#,
    synthesis: r#"Você é um especialista em relatórios operacionais. Desenvolva uma análise de operações baseada na estrutura:

{outline}

Dados operacionais:
'''{context}'''

ELEMENTOS OBRIGATÓRIOS:
- Mapa de processos otimizado
- Indicadores de performance operacional
- Planos de melhoria e automação
- Análise de custos operacionais
- Estratégias lean e six sigma
- Cronograma de implementação
{abnt_rules}

Produza um relatório operacional prático e implementável."#,
};

static TECHNOLOGY_ANALYSIS: PromptPair = PromptPair {
    outline: r#"Você é um analista de tecnologia especializado. Analise o objetivo: "{goal}" e estruture uma análise completa de tecnologia.

Dados tecnológicos:
'''{context}'''

Estruture a análise com:
1. Avaliação da infraestrutura tecnológica atual
2. Análise de sistemas e arquitetura
3. Identificação de gaps tecnológicos
4. Oportunidades de inovação e digitalização
5. Análise de segurança e compliance
6. Roadmap de transformação digital
7. Análise de ROI tecnológico
8. Recomendações para modernização

{abnt_rules}"#,
    synthesis: r#"Você é um especialista em relatórios de tecnologia. Desenvolva uma análise tecnológica baseada na estrutura:

{outline}

Dados tecnológicos:
'''{context}'''

ELEMENTOS OBRIGATÓRIOS:
- Arquitetura tecnológica recomendada
- Plano de modernização e migração
- Análise de custos e benefícios
- Estratégias de segurança cibernética
- Roadmap de implementação tecnológica
- Métricas de performance de TI
{abnt_rules}

Produza um relatório tecnológico estratégico e implementável."#,
};

static PRODUCT_MANAGEMENT: PromptPair = PromptPair {
    outline: r#"Você é um Product Manager sênior especializado em estratégia de produtos. Analise o objetivo: "{goal}" e estruture um plano de gestão de produtos.

Dados de produtos:
'''{context}'''

Estruture o plano com:
1. Análise do portfólio atual de produtos
2. Pesquisa de mercado e análise competitiva
3. Definição de personas e necessidades dos usuários
4. Roadmap de desenvolvimento e priorização
5. Especificações funcionais e técnicas
6. Estratégia de lançamento e go-to-market
7. Métricas de sucesso e KPIs de produto
8. Análise de viabilidade e ROI

{abnt_rules}"#,
    synthesis: r#"Você é um especialista em documentação de produtos. Desenvolva um plano de produto completo baseado na estrutura:

{outline}

Informações de produto:
'''{context}'''

COMPONENTES ESSENCIAIS:
- Product Vision e estratégia clara
- User Stories e casos de uso detalhados
- Roadmap visual com timelines realistas
- Análise de features e priorização (MoSCoW)
- Plano de testes e validação
- Estratégia de pricing e monetização
- Métricas de adoção e engajamento
{abnt_rules}

Produza um documento de produto profissional e executável."#,
};

static USER_MANAGEMENT: PromptPair = PromptPair {
    outline: r#"Você é um especialista em experiência do usuário e análise comportamental. Analise o objetivo: "{goal}" e estruture uma análise de usuários.

Dados de usuários:
'''{context}'''

Estruture a análise com:
1. Perfil demográfico e comportamental dos usuários
2. Jornada do usuário e pontos de contato
3. Análise de engajamento e retenção
4. Segmentação de usuários e personas
5. Identificação de pain points e oportunidades
6. Análise de usabilidade e UX
7. Métricas de satisfação e NPS
8. Estratégias de melhoria da experiência

{abnt_rules}"#,
    synthesis: r#"Você é um especialista em relatórios de UX e análise de usuários. Desenvolva uma análise completa baseada na estrutura:

{outline}

Dados comportamentais:
'''{context}'''

ELEMENTOS FUNDAMENTAIS:
- Personas detalhadas com dados reais
- Mapa da jornada do usuário com touchpoints
- Análise de funil de conversão
- Heatmaps e análise de comportamento
- Recomendações de UX/UI prioritizadas
- Plano de testes A/B e validação
- Estratégias de onboarding e retenção
{abnt_rules}

Produza um relatório de UX acionável e centrado no usuário."#,
};

static TASK_MANAGEMENT: PromptPair = PromptPair {
    outline: r#"Você é um especialista em gestão de projetos e metodologias ágeis. Analise o objetivo: "{goal}" e estruture um plano de gestão de tarefas.

Dados de tarefas e projetos:
'''{context}'''

Estruture o plano com:
1. Análise do backlog atual e priorização
2. Estruturação de sprints e metodologia ágil
3. Definição de épicos, user stories e tasks
4. Estimativas de esforço e capacity planning
5. Identificação de dependências e riscos
6. Cronograma e milestones principais
7. Métricas de produtividade e velocity
8. Estratégias de otimização de processos

{abnt_rules}"#,
    synthesis: r#"Você é um especialista em documentação de projetos ágeis. Desenvolva um plano de gestão completo baseado na estrutura:

{outline}

Dados de projeto:
'''{context}'''

COMPONENTES OBRIGATÓRIOS:
- Backlog priorizado com critérios claros
- Sprint planning com estimativas realistas
- Definition of Done e critérios de aceitação
- Burndown charts e métricas de progresso
- Risk management e planos de contingência
- Retrospectivas e melhorias contínuas
- Comunicação e stakeholder management
{abnt_rules}

Produza um plano de projeto ágil e executável."#,
};

static GENERAL: PromptPair = PromptPair {
    outline: r#"Você é um pesquisador versátil. Analise o objetivo: "{goal}" e crie uma estrutura lógica e abrangente.

Contexto fornecido:
'''{context}'''

Desenvolva uma estrutura adequada ao objetivo, incluindo:
1. Introdução ao tema
2. Desenvolvimento dos pontos principais
3. Análise e discussão
4. Conclusões

{abnt_rules}"#,
    synthesis: r#"Você é um redator profissional versátil. Desenvolva um conteúdo completo baseado na estrutura:

{outline}

Contexto de referência:
'''{context}'''

PADRÕES DE QUALIDADE:
- Linguagem adequada ao público-alvo
- Estrutura lógica e coerente
- Conteúdo informativo e relevante
{abnt_rules}

Produza um texto de alta qualidade e bem estruturado."#,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_resolves_to_a_pair() {
        for category in Category::all() {
            let pair = templates_for(*category);
            assert!(pair.outline.contains("{goal}"));
            assert!(pair.outline.contains("{abnt_rules}"));
            assert!(pair.synthesis.contains("{outline}"));
            assert!(pair.synthesis.contains("{abnt_rules}"));
        }
    }

    #[test]
    fn test_unmapped_categories_share_the_general_pair() {
        let general = templates_for(Category::General);
        for category in [Category::Creative, Category::Planning, Category::Documentation] {
            assert_eq!(templates_for(category).outline, general.outline);
        }
    }

    #[test]
    fn test_render_outline_substitutes_everything() {
        let pair = templates_for(Category::StrategicPlanning);
        let prompt = pair.render_outline("Crescer 20% em 2026", "Empresa de SaaS B2B");
        assert!(prompt.contains("Crescer 20% em 2026"));
        assert!(prompt.contains("Empresa de SaaS B2B"));
        assert!(prompt.contains("FORMATAÇÃO ABNT OBRIGATÓRIA"));
        assert!(!prompt.contains("{goal}"));
        assert!(!prompt.contains("{abnt_rules}"));
    }

    #[test]
    fn test_render_synthesis_takes_outline_not_goal() {
        let pair = templates_for(Category::General);
        let prompt = pair.render_synthesis("1. Introdução\n2. Conclusão", "sem contexto");
        assert!(prompt.contains("1. Introdução"));
        assert!(prompt.contains("sem contexto"));
        assert!(!prompt.contains("{outline}"));
    }

    #[test]
    fn test_rendered_prompts_are_deterministic() {
        let pair = templates_for(Category::SalesAnalysis);
        let a = pair.render_outline("meta", "ctx");
        let b = pair.render_outline("meta", "ctx");
        assert_eq!(a, b);
    }

    #[test]
    fn test_json_context_with_braces_renders_cleanly() {
        let pair = templates_for(Category::DataAnalysis);
        let context = r#"{"q1": {"receita": 1200}, "q2": {"receita": 1350}}"#;
        let prompt = pair.render_outline("Analisar receita", context);
        assert_eq!(prompt.matches(context).count(), 1);
    }
}
