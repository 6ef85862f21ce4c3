//! Deterministic fallback text
//!
//! When the generation backend is unavailable the pipeline still must
//! terminate with usable output. These builders produce static,
//! deterministic documents: an outline skeleton for the first pass and
//! a full emergency document for the final pass. Same inputs, same
//! bytes: no clocks, no randomness.

use crate::classify::Category;

/// Build the fallback outline for a category.
///
/// Dedicated skeletons exist for the categories that fail most often
/// in practice; everything else gets the generic skeleton titled with
/// the goal.
pub fn fallback_outline(goal: &str, category: Category) -> String {
    match category {
        Category::StrategicPlanning => STRATEGIC_PLANNING_OUTLINE.to_string(),
        Category::CompetitiveAnalysis => COMPETITIVE_ANALYSIS_OUTLINE.to_string(),
        _ => format!(
            r#"# ANÁLISE: {}

## 1. INTRODUÇÃO
- Objetivo da análise
- Metodologia aplicada
- Escopo do trabalho

## 2. CONTEXTO E FUNDAMENTAÇÃO
- Base teórica
- Dados e informações relevantes
- Premissas adotadas

## 3. DESENVOLVIMENTO
- Análise detalhada
- Interpretação dos dados
- Discussão dos resultados

## 4. RESULTADOS E DESCOBERTAS
- Principais achados
- Insights relevantes
- Implicações práticas

## 5. RECOMENDAÇÕES
- Ações sugeridas
- Próximos passos
- Considerações importantes

## 6. CONCLUSÃO
- Síntese dos resultados
- Limitações do estudo
- Considerações finais
"#,
            goal.to_uppercase()
        ),
    }
}

const STRATEGIC_PLANNING_OUTLINE: &str = r#"# ANÁLISE DE PLANEJAMENTO ESTRATÉGICO

## 1. RESUMO EXECUTIVO
- Visão geral do planejamento estratégico
- Principais objetivos identificados
- Metodologia de análise aplicada

## 2. ANÁLISE DA SITUAÇÃO ATUAL
- Contexto organizacional
- Recursos disponíveis
- Posicionamento no mercado

## 3. ANÁLISE SWOT
### 3.1 Forças (Strengths)
### 3.2 Fraquezas (Weaknesses)
### 3.3 Oportunidades (Opportunities)
### 3.4 Ameaças (Threats)

## 4. OBJETIVOS ESTRATÉGICOS
- Objetivos de curto prazo
- Objetivos de médio prazo
- Objetivos de longo prazo

## 5. ESTRATÉGIAS E AÇÕES
- Planos de ação propostos
- Recursos necessários
- Cronograma de implementação

## 6. INDICADORES E MÉTRICAS
- KPIs principais
- Métodos de acompanhamento
- Critérios de sucesso

## 7. CONSIDERAÇÕES FINAIS
- Recomendações
- Próximos passos
- Conclusões
"#;

const COMPETITIVE_ANALYSIS_OUTLINE: &str = r#"# ANÁLISE DE CONCORRÊNCIA

## 1. RESUMO EXECUTIVO
- Objetivo da análise
- Metodologia aplicada
- Principais descobertas

## 2. VISÃO GERAL DO MERCADO
- Tamanho e características do mercado
- Tendências identificadas
- Segmentação

## 3. MAPEAMENTO DE CONCORRENTES
### 3.1 Concorrentes Diretos
### 3.2 Concorrentes Indiretos
### 3.3 Novos Entrantes

## 4. ANÁLISE COMPARATIVA
- Produtos e serviços
- Estratégias de preços
- Canais de distribuição
- Estratégias de marketing

## 5. POSICIONAMENTO COMPETITIVO
- Matriz de posicionamento
- Vantagens competitivas
- Gaps de mercado

## 6. OPORTUNIDADES E AMEAÇAS
- Oportunidades identificadas
- Ameaças competitivas
- Recomendações estratégicas

## 7. CONCLUSÕES
- Síntese da análise
- Próximos passos
- Recomendações finais
"#;

/// Maximum context characters echoed into the emergency document.
const CONTEXT_SUMMARY_LIMIT: usize = 500;

/// Build the full emergency document for the final pass.
///
/// Used when synthesis itself fails; wraps the goal, a truncated view
/// of the context and whatever outline exists into a standard
/// structure that flags itself as requiring manual completion.
pub fn fallback_content(goal: &str, context: &str, outline: &str) -> String {
    let context_summary = if context.len() > 50 {
        let truncated: String = context.chars().take(CONTEXT_SUMMARY_LIMIT).collect();
        format!("Baseado nos dados fornecidos: {}...", truncated)
    } else {
        "Dados não disponíveis devido à indisponibilidade da API ou erro no processamento."
            .to_string()
    };

    format!(
        r#"# RELATÓRIO GERADO EM MODO DE EMERGÊNCIA

> **Nota Importante**: Este relatório foi gerado em modo de fallback devido à indisponibilidade temporária da API de IA ou a um erro no processamento. O conteúdo apresenta uma estrutura padrão que deve ser complementada com análises específicas.

## OBJETIVO DA ANÁLISE
{goal}

## METODOLOGIA
Este relatório segue as normas ABNT para documentos técnicos e apresenta uma estrutura organizada para análise do objetivo proposto.

## CONTEXTO
{context_summary}

## ESTRUTURA PROPOSTA
{outline}

## RECOMENDAÇÕES PARA COMPLEMENTAÇÃO

### 1. Análise Detalhada
- Realizar análise aprofundada dos dados disponíveis
- Aplicar metodologias específicas para o tipo de objetivo
- Considerar fatores externos relevantes

### 2. Validação de Informações
- Verificar a precisão dos dados utilizados
- Consultar fontes adicionais quando necessário
- Aplicar critérios de qualidade na análise

### 3. Desenvolvimento de Insights
- Identificar padrões e tendências relevantes
- Desenvolver conclusões baseadas em evidências
- Propor ações práticas e viáveis

## CONSIDERAÇÕES FINAIS

Este documento serve como base estrutural para o desenvolvimento de uma análise completa. Recomenda-se:

1. **Revisão e Complementação**: Adicionar análises específicas baseadas nos dados disponíveis
2. **Validação Técnica**: Verificar a adequação das metodologias propostas
3. **Atualização Contínua**: Incorporar novas informações conforme disponibilidade

---

**Status**: Modo de Emergência - Requer Complementação Manual
"#
    )
}
