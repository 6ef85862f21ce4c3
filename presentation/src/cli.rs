//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for escriba
#[derive(Parser, Debug)]
#[command(name = "escriba")]
#[command(author, version, about = "Gerador de documentos multi-agente")]
#[command(long_about = r#"
Escriba transforma um objetivo em texto livre em um documento completo:

1. Classificação: o objetivo é mapeado para uma categoria principal
2. Colaboração: categorias relacionadas contribuem análises de apoio
3. Estrutura: cada agente gera um esqueleto do documento
4. Síntese: o agente principal escreve o documento final
5. Qualidade: o resultado recebe um relatório de avaliação

Arquivos de configuração são carregados de (em ordem de prioridade):
1. --config <path>     Arquivo explícito
2. ./escriba.toml      Configuração do projeto
3. ~/.config/escriba/config.toml   Configuração global

Exemplos:
  escriba "Planejamento estratégico para o próximo ano fiscal"
  escriba --context-file vendas.json "Análise de vendas do trimestre"
  escriba --json '{"receita": 1200}' "Avaliar a saúde financeira"
"#)]
pub struct Cli {
    /// The goal to turn into a document
    pub goal: Option<String>,

    /// Plain-text context inline
    #[arg(short = 't', long, value_name = "TEXT")]
    pub text_context: Option<String>,

    /// JSON context inline (validated and pretty-printed)
    #[arg(short = 'j', long, value_name = "JSON")]
    pub json: Option<String>,

    /// Read context from a file (.json files are validated)
    #[arg(short = 'f', long, value_name = "PATH")]
    pub context_file: Option<PathBuf>,

    /// Backend models in priority order (can be repeated)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Vec<String>,

    /// Disable the collaborative multi-agent path
    #[arg(long)]
    pub no_collaboration: bool,

    /// Skip the quality report
    #[arg(long)]
    pub no_quality: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress log lines
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Check backend configuration and exit
    #[arg(long)]
    pub check: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_is_positional() {
        let cli = Cli::parse_from(["escriba", "Resumir o relatório"]);
        assert_eq!(cli.goal.as_deref(), Some("Resumir o relatório"));
        assert!(!cli.no_collaboration);
    }

    #[test]
    fn test_models_can_be_repeated() {
        let cli = Cli::parse_from([
            "escriba",
            "-m",
            "gemini-2.0-flash",
            "-m",
            "gemini-1.5-pro",
            "meta",
        ]);
        assert_eq!(cli.model.len(), 2);
    }

    #[test]
    fn test_check_does_not_require_goal() {
        let cli = Cli::parse_from(["escriba", "--check"]);
        assert!(cli.check);
        assert!(cli.goal.is_none());
    }
}
