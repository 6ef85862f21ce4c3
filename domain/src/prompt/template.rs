//! Template rendering
//!
//! Templates carry named placeholders (`{goal}`, `{context}`,
//! `{outline}`, `{abnt_rules}`). Rendering is a single left-to-right
//! pass: a recognized placeholder is replaced by its value inserted
//! verbatim, and anything else, including braces inside substituted
//! values, is copied through untouched. Substituted text is never
//! rescanned, so user content containing `{` or `}` cannot corrupt
//! placeholder resolution, and rendering never fails.

/// Domain formatting rules injected into every prompt via the
/// `{abnt_rules}` placeholder.
pub fn abnt_rules() -> &'static str {
    r#"
FORMATAÇÃO ABNT OBRIGATÓRIA:
- Use fonte Times New Roman ou Arial, tamanho 12
- Espaçamento entre linhas: 1,5
- Margens: superior e esquerda 3cm, inferior e direita 2cm
- Títulos principais em MAIÚSCULAS, centralizados
- Títulos secundários em Primeira Letra Maiúscula, alinhados à esquerda
- Citações diretas com mais de 3 linhas: recuo de 4cm, espaçamento simples, fonte 10
- Citações indiretas: (AUTOR, ano, p. XX)
- Referências bibliográficas em ordem alfabética
- Numeração de páginas no canto superior direito
- Resumo: máximo 500 palavras, parágrafo único
- Palavras-chave: 3 a 5 palavras, separadas por ponto
"#
}

/// Render a template, substituting named placeholders.
///
/// Unknown `{...}` sequences and stray braces are copied through as
/// literal text. Deterministic: the same inputs always produce a
/// byte-identical prompt.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];

        match after_open.find('}') {
            Some(close) => {
                let name = &after_open[..close];
                match vars.iter().find(|(key, _)| *key == name) {
                    Some((_, value)) => {
                        out.push_str(value);
                        rest = &after_open[close + 1..];
                    }
                    None => {
                        // Not a placeholder we know; keep the brace literal
                        // and continue scanning after it.
                        out.push('{');
                        rest = after_open;
                    }
                }
            }
            None => {
                out.push('{');
                rest = after_open;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_substitution() {
        let rendered = render("Objetivo: {goal}", &[("goal", "aumentar vendas")]);
        assert_eq!(rendered, "Objetivo: aumentar vendas");
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let vars = [
            ("goal", "crescer 20%"),
            ("context", "dados de 2025"),
        ];
        let a = render("{goal} com base em {context}", &vars);
        let b = render("{goal} com base em {context}", &vars);
        assert_eq!(a, b);
    }

    #[test]
    fn test_braces_in_values_pass_through_once() {
        let rendered = render(
            "Contexto:\n{context}\nFim.",
            &[("context", r#"{"receita": 100, "meta": "{alta}"}"#)],
        );
        assert_eq!(
            rendered,
            "Contexto:\n{\"receita\": 100, \"meta\": \"{alta}\"}\nFim."
        );
        // Exactly once: the substituted value is not rescanned.
        assert_eq!(rendered.matches("{\"receita\"").count(), 1);
    }

    #[test]
    fn test_value_containing_placeholder_syntax_is_not_expanded() {
        let rendered = render(
            "{goal} / {context}",
            &[("goal", "use {context} literally"), ("context", "CTX")],
        );
        assert_eq!(rendered, "use {context} literally / CTX");
    }

    #[test]
    fn test_unknown_placeholders_stay_literal() {
        let rendered = render("keep {this} and {goal}", &[("goal", "G")]);
        assert_eq!(rendered, "keep {this} and G");
    }

    #[test]
    fn test_unbalanced_braces_never_error() {
        assert_eq!(render("a { b", &[]), "a { b");
        assert_eq!(render("a } b {", &[("x", "y")]), "a } b {");
        assert_eq!(render("{goal", &[("goal", "G")]), "{goal");
    }

    #[test]
    fn test_abnt_rules_block_is_stable() {
        assert!(abnt_rules().contains("FORMATAÇÃO ABNT OBRIGATÓRIA"));
        assert!(abnt_rules().contains("Espaçamento entre linhas: 1,5"));
    }
}
