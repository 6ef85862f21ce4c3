//! Run Document use case
//!
//! The orchestration core: classify the goal, resolve collaborators,
//! run the outline passes (primary sequentially, collaborators
//! concurrently), synthesize the final document from the enriched
//! context, score it, and stream progress the whole way.
//!
//! Every stage below the configuration check degrades instead of
//! failing: agent passes substitute fallback outlines, a failed
//! collaborator becomes a gap in the enriched context, a failed
//! synthesis becomes the deterministic emergency document. The only
//! error this use case ever returns is a missing backend credential.

use crate::config::GenerationParams;
use crate::generation::GenerationClient;
use crate::ports::event_sink::{ChannelSink, EventSink};
use crate::ports::generation_backend::GenerationBackend;
use crate::use_cases::outline_agent::{AgentResult, run_outline_agent};
use escriba_domain::{
    Category, Context, Goal, QualityReport, RunEvent, classify_all, classify_primary, evaluate,
    fallback_content, resolve_collaborators, templates_for,
};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{info, warn};

/// Errors that terminate a run. Everything else degrades in place.
#[derive(Error, Debug)]
pub enum RunDocumentError {
    #[error("A API de geração não está configurada: {0}")]
    Configuration(String),
}

/// Input for the RunDocument use case.
#[derive(Debug, Clone)]
pub struct RunDocumentInput {
    pub goal: Goal,
    pub context: Context,
    pub params: GenerationParams,
    /// Allow the collaborative path (on by default).
    pub use_collaboration: bool,
    /// Append the quality report (on by default).
    pub use_quality: bool,
}

impl RunDocumentInput {
    pub fn new(goal: impl Into<Goal>, context: Context) -> Self {
        Self {
            goal: goal.into(),
            context,
            params: GenerationParams::default(),
            use_collaboration: true,
            use_quality: true,
        }
    }

    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    pub fn without_collaboration(mut self) -> Self {
        self.use_collaboration = false;
        self
    }

    pub fn without_quality(mut self) -> Self {
        self.use_quality = false;
        self
    }
}

/// Final artifact of a run.
#[derive(Debug, Clone)]
pub struct DocumentResult {
    /// The synthesized document, with the quality block appended when
    /// evaluation ran. Never empty.
    pub content: String,
    /// Primary category that owned the run.
    pub primary: Category,
    /// Collaborators that contributed outline passes.
    pub collaborators: Vec<Category>,
    /// The quality report, when evaluation ran.
    pub quality: Option<QualityReport>,
}

/// Outline passes gathered before synthesis. Owned by one run.
struct AnalysisBundle {
    primary: AgentResult,
    /// One entry per collaborator; `None` records a failed pass.
    collaborative: Vec<(Category, Option<AgentResult>)>,
}

/// Use case for running the full document pipeline.
pub struct RunDocumentUseCase {
    backend: Arc<dyn GenerationBackend>,
}

impl RunDocumentUseCase {
    pub fn new(backend: Arc<dyn GenerationBackend>) -> Self {
        Self { backend }
    }

    /// Run the pipeline, streaming progress into `sink`.
    ///
    /// Emits `Log` and `PartialResult` events only; the terminal
    /// `FinalResult`/`Error`/`End` framing belongs to
    /// [`handle_request`](Self::handle_request).
    pub async fn execute(
        &self,
        input: RunDocumentInput,
        sink: &dyn EventSink,
    ) -> Result<DocumentResult, RunDocumentError> {
        self.backend
            .ensure_configured()
            .map_err(|e| RunDocumentError::Configuration(e.to_string()))?;

        let goal = input.goal.content();
        let context = input.context.content();

        sink.log("[MCP] Iniciando sistema multi-agente".to_string());

        let primary = classify_primary(goal, context);
        let detected = classify_all(goal, context);
        let collaborators = resolve_collaborators(primary, &detected);

        info!("objetivo classificado como {}", primary);
        sink.log(format!("[MCP] Objetivo principal: {}", primary));
        sink.log(format!(
            "[MCP] Tipos detectados: {}",
            join_categories(&detected)
        ));

        let client = GenerationClient::new(Arc::clone(&self.backend), input.params.clone());

        let collaborate =
            input.use_collaboration && (primary.is_collaborative() || !collaborators.is_empty());

        let (content, collaborators) = if collaborate {
            sink.log(format!(
                "[MCP] Modo colaborativo ativado - Agentes: {}",
                join_categories(&collaborators)
            ));
            let bundle = self
                .run_collaborative_analysis(&client, primary, &collaborators, goal, context, sink)
                .await;
            let content = self.synthesize(&client, goal, context, &bundle, sink).await;
            (content, collaborators)
        } else {
            sink.log(format!("[MCP] Modo tradicional para {}", primary));
            let content = self
                .run_traditional(&client, primary, goal, context, sink)
                .await;
            (content, Vec::new())
        };

        // Evaluation is best-effort annotation; it never blocks the result.
        let quality = if input.use_quality && !content.is_empty() {
            let report = evaluate(&content, goal, primary);
            sink.log(format!(
                "[QA] Score de qualidade: {:.2}/1.0",
                report.overall_score
            ));
            if !report.recommendations.is_empty() {
                sink.log(format!(
                    "[QA] Recomendações: {}",
                    report.recommendations.join("; ")
                ));
            }
            Some(report)
        } else {
            None
        };

        let content = match &quality {
            Some(report) => format!("{}{}", content, report.to_text_block()),
            None => content,
        };

        sink.log("[MCP] Processo completo finalizado".to_string());

        Ok(DocumentResult {
            content,
            primary,
            collaborators,
            quality,
        })
    }

    /// Run the pipeline as an event stream.
    ///
    /// This is the inbound boundary for transports: the returned
    /// receiver yields the full run (logs, the final document or an
    /// error, and always a terminal [`RunEvent::End`]).
    pub fn handle_request(
        self: Arc<Self>,
        input: RunDocumentInput,
    ) -> mpsc::UnboundedReceiver<RunEvent> {
        let (sink, rx) = ChannelSink::new();

        tokio::spawn(async move {
            match self.execute(input, &sink).await {
                Ok(result) => {
                    sink.emit(RunEvent::FinalResult(result.content));
                    sink.log("[SUCCESS] Sistema multi-agente concluído com sucesso".to_string());
                }
                Err(error) => {
                    sink.log(format!("[ERROR] {}", error));
                    sink.emit(RunEvent::Error(error.to_string()));
                }
            }
            sink.emit(RunEvent::End);
        });

        rx
    }

    /// Primary pass plus concurrent collaborative passes.
    async fn run_collaborative_analysis(
        &self,
        client: &GenerationClient,
        primary: Category,
        collaborators: &[Category],
        goal: &str,
        context: &str,
        sink: &dyn EventSink,
    ) -> AnalysisBundle {
        sink.log(format!(
            "[ORCHESTRATOR] Iniciando análise colaborativa: {} + {}",
            primary,
            join_categories(collaborators)
        ));

        let primary_result = run_outline_agent(client, primary, goal, context).await;
        if primary_result.from_fallback {
            sink.log("[FALLBACK] Estrutura principal gerada em modo de fallback".to_string());
        }
        sink.log(format!(
            "[ORCHESTRATOR] Análise principal ({}) concluída",
            primary
        ));

        let mut join_set = JoinSet::new();
        for category in collaborators {
            sink.log(format!(
                "[ORCHESTRATOR] Executando análise colaborativa: {}",
                category
            ));
            let client = client.clone();
            let category = *category;
            let goal = goal.to_string();
            let context = context.to_string();
            join_set.spawn(async move {
                let result = run_outline_agent(&client, category, &goal, &context).await;
                (category, result)
            });
        }

        let mut collaborative: Vec<(Category, Option<AgentResult>)> = Vec::new();
        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((category, result)) => {
                    sink.log(format!(
                        "[ORCHESTRATOR] Análise colaborativa ({}) concluída",
                        category
                    ));
                    collaborative.push((category, Some(result)));
                }
                Err(error) => {
                    warn!("falha em tarefa colaborativa: {}", error);
                    sink.log(format!(
                        "[ORCHESTRATOR] Erro na análise colaborativa: {}",
                        error
                    ));
                }
            }
        }

        // A pass that died (task panic) leaves no entry above; record
        // the gap explicitly so synthesis can skip it.
        for category in collaborators {
            if !collaborative.iter().any(|(c, _)| c == category) {
                collaborative.push((*category, None));
            }
        }

        // Join order is nondeterministic; restore the resolver's order
        // so the enriched context is stable run to run.
        collaborative.sort_by_key(|(category, _)| {
            collaborators.iter().position(|c| c == category)
        });

        AnalysisBundle {
            primary: primary_result,
            collaborative,
        }
    }

    /// Synthesis pass over the primary outline and enriched context.
    async fn synthesize(
        &self,
        client: &GenerationClient,
        goal: &str,
        context: &str,
        bundle: &AnalysisBundle,
        sink: &dyn EventSink,
    ) -> String {
        sink.log("[ORCHESTRATOR] Iniciando síntese colaborativa".to_string());

        let mut insights = String::new();
        for (category, result) in &bundle.collaborative {
            if let Some(result) = result {
                insights.push_str(&format!(
                    "\n--- Perspectiva {} ---\n{}\n",
                    category.label(),
                    result.outline
                ));
            }
        }

        let enriched_context = if insights.is_empty() {
            context.to_string()
        } else {
            format!("{}\n\n=== INSIGHTS COLABORATIVOS ===\n{}", context, insights)
        };

        // Consumer already gone: skip the expensive generation pass and
        // settle for the deterministic document.
        if !sink.is_connected() {
            warn!("consumidor desconectado, abandonando a síntese");
            return fallback_content(goal, &enriched_context, &bundle.primary.outline);
        }

        let pair = templates_for(bundle.primary.category);
        let prompt = pair.render_synthesis(&bundle.primary.outline, &enriched_context);

        match client.generate(&prompt).await {
            Ok(content) => {
                sink.log("[ORCHESTRATOR] Síntese colaborativa concluída".to_string());
                content
            }
            Err(error) => {
                warn!("síntese indisponível, usando conteúdo de fallback: {}", error);
                sink.log(format!("[FALLBACK] Gerando conteúdo de fallback: {}", error));
                fallback_content(goal, &enriched_context, &bundle.primary.outline)
            }
        }
    }

    /// Traditional single-agent path: outline, partial result, write.
    async fn run_traditional(
        &self,
        client: &GenerationClient,
        category: Category,
        goal: &str,
        context: &str,
        sink: &dyn EventSink,
    ) -> String {
        let outline = run_outline_agent(client, category, goal, context).await;
        sink.log("[Agente Pesquisador] Estrutura criada".to_string());
        sink.emit(RunEvent::PartialResult(outline.outline.clone()));
        sink.log("[MCP] Acionando Agente Escritor...".to_string());

        if !sink.is_connected() {
            warn!("consumidor desconectado, abandonando a escrita");
            return fallback_content(goal, context, &outline.outline);
        }

        let pair = templates_for(category);
        let prompt = pair.render_synthesis(&outline.outline, context);

        match client.generate(&prompt).await {
            Ok(content) => {
                sink.log("[Agente Escritor] Conteúdo final gerado".to_string());
                content
            }
            Err(error) => {
                warn!("escrita indisponível, usando conteúdo de fallback: {}", error);
                sink.log(format!("[FALLBACK] Gerando conteúdo de fallback: {}", error));
                fallback_content(goal, context, &outline.outline)
            }
        }
    }
}

fn join_categories(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "nenhum".to_string();
    }
    categories
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
