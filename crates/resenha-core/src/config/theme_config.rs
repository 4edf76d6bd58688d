use serde::{Deserialize, Serialize};

use super::defaults;

/// One thematic axis of the fixed taxonomy: configuration data, not a
/// derived result. Keywords are lowercase stems or multi-word phrases;
/// a stem matches any token that starts with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThematicAxis {
    pub axis_id: String,
    pub display_name: String,
    pub keywords: Vec<String>,
}

impl ThematicAxis {
    pub fn new(
        axis_id: impl Into<String>,
        display_name: impl Into<String>,
        keywords: &[&str],
    ) -> Self {
        Self {
            axis_id: axis_id.into(),
            display_name: display_name.into(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// The full axis taxonomy, loaded once and shared read-only by all
/// workers. Never mutated after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Taxonomy {
    pub axes: Vec<ThematicAxis>,
}

impl Taxonomy {
    pub fn new(axes: Vec<ThematicAxis>) -> Self {
        Self { axes }
    }

    pub fn axis_ids(&self) -> impl Iterator<Item = &str> {
        self.axes.iter().map(|a| a.axis_id.as_str())
    }

    pub fn display_name(&self, axis_id: &str) -> Option<&str> {
        self.axes
            .iter()
            .find(|a| a.axis_id == axis_id)
            .map(|a| a.display_name.as_str())
    }

    /// The five fixed axes of the study, with their Portuguese keyword
    /// stems and phrases.
    pub fn default_ptbr() -> Self {
        Self::new(vec![
            ThematicAxis::new(
                "interoperability",
                "Interoperabilidade",
                &[
                    "sincroniz",
                    "sincronia",
                    "integra",
                    "conectar",
                    "conexão",
                    "conexao",
                    "importar",
                    "exportar",
                    "transferir",
                    "transferência",
                    "api",
                    "servidor",
                    "offline",
                    "online",
                    "não carrega",
                    "nao carrega",
                    "não sincroniz",
                    "nao sincroniz",
                    "perdi dados",
                    "não atualiza",
                    "nao atualiza",
                    "desconect",
                    "compatível",
                    "compativel",
                    "incompatível",
                    "incompativel",
                    "vincular",
                    "cadastro",
                    "login",
                    "autenticação",
                ],
            ),
            ThematicAxis::new(
                "security_privacy",
                "Segurança e Privacidade",
                &[
                    "segurança",
                    "seguranca",
                    "privacidade",
                    "dados pessoais",
                    "lgpd",
                    "proteção",
                    "protecao",
                    "vazamento",
                    "vazar",
                    "senha",
                    "criptograf",
                    "hack",
                    "roubar",
                    "roubaram",
                    "permissão",
                    "permissao",
                    "acesso indevido",
                    "informação pessoal",
                    "confiável",
                    "confiavel",
                    "desconfi",
                    "expor",
                    "exposição",
                    "dados sensíveis",
                    "dados sensiveis",
                ],
            ),
            ThematicAxis::new(
                "usability",
                "Usabilidade (UX)",
                &[
                    "difícil",
                    "dificil",
                    "complicad",
                    "confus",
                    "interface",
                    "tela",
                    "botão",
                    "botao",
                    "menu",
                    "intuitiv",
                    "layout",
                    "design",
                    "visual",
                    "não encontr",
                    "nao encontr",
                    "cadê",
                    "cade",
                    "onde fica",
                    "como faz",
                    "como faço",
                    "navegação",
                    "navegacao",
                    "acessibilidad",
                    "letra pequena",
                    "não consigo",
                    "nao consigo",
                    "ux",
                    "experiência",
                    "experiencia",
                    "usabilidad",
                ],
            ),
            ThematicAxis::new(
                "functionality_stability",
                "Funcionalidade e Bugs",
                &[
                    "bug",
                    "erro",
                    "crash",
                    "trava",
                    "travando",
                    "fecha sozinho",
                    "fechou",
                    "parou",
                    "não funciona",
                    "nao funciona",
                    "não abre",
                    "nao abre",
                    "problema",
                    "falha",
                    "defeito",
                    "quebr",
                    "não responde",
                    "nao responde",
                    "congelou",
                    "congela",
                    "lixo",
                    "péssimo",
                    "pessimo",
                    "horrível",
                    "horrivel",
                    "inútil",
                    "inutil",
                    "porcaria",
                ],
            ),
            ThematicAxis::new(
                "performance",
                "Desempenho",
                &[
                    "lento",
                    "lenta",
                    "lentidão",
                    "lentidao",
                    "demora",
                    "pesado",
                    "memória",
                    "memoria",
                    "bateria",
                    "consumo",
                    "espaço",
                    "espaco",
                    "armazenamento",
                    "carregando",
                    "loading",
                    "lag",
                    "otimiz",
                    "internet",
                    "banda",
                    "wifi",
                    "3g",
                    "4g",
                    "5g",
                ],
            ),
        ])
    }
}

/// Thematic classifier configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub taxonomy: Taxonomy,
    /// Minimum keyword hits for an axis to count as matched.
    pub min_matches: usize,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            taxonomy: Taxonomy::default_ptbr(),
            min_matches: defaults::DEFAULT_MIN_AXIS_MATCHES,
        }
    }
}
