//! Machine-readable catalog of the widgets in this crate.
//!
//! Editor hosts use the catalog to build property panels: every widget is
//! listed with its configurable props and their defaults.

use serde::{Deserialize, Serialize};

/// Default value of a configurable prop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PropValue {
    Text(String),
    Flag(bool),
    Number(i64),
    /// One of a fixed set of variants; the first entry is the default.
    Choice(Vec<String>),
}

impl PropValue {
    fn text(value: &str) -> Self {
        Self::Text(value.to_string())
    }

    fn choice(variants: &[&str]) -> Self {
        Self::Choice(variants.iter().map(|v| v.to_string()).collect())
    }
}

/// A single configurable prop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropSpec {
    pub name: String,
    pub doc: String,
    pub default: PropValue,
}

impl PropSpec {
    fn new(name: &str, doc: &str, default: PropValue) -> Self {
        Self {
            name: name.to_string(),
            doc: doc.to_string(),
            default,
        }
    }
}

/// A widget entry in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentSpec {
    /// Stable identifier used by hosts, e.g. `"folder-browser"`.
    pub id: String,
    /// Human-readable name shown in component palettes.
    pub name: String,
    pub doc: String,
    pub props: Vec<PropSpec>,
}

impl ComponentSpec {
    fn new(id: &str, name: &str, doc: &str, props: Vec<PropSpec>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            doc: doc.to_string(),
            props,
        }
    }

    /// Default for a named prop, if the widget has it.
    pub fn prop(&self, name: &str) -> Option<&PropSpec> {
        self.props.iter().find(|p| p.name == name)
    }
}

/// Every widget this crate exports, with documented defaults.
pub fn catalog() -> Vec<ComponentSpec> {
    vec![
        ComponentSpec::new(
            "org-structure",
            "Estrutura Organizacional",
            "Árvore de áreas da empresa com painel de detalhes por abas.",
            vec![
                PropSpec::new("title", "Título do bloco.", PropValue::text("Estrutura Organizacional")),
                PropSpec::new(
                    "description",
                    "Linha descritiva acima da árvore.",
                    PropValue::text("Visualize e gerencie a estrutura organizacional da empresa"),
                ),
                PropSpec::new("show_people", "Exibe a aba Pessoas.", PropValue::Flag(true)),
                PropSpec::new("show_documents", "Exibe a aba Documentos.", PropValue::Flag(true)),
            ],
        ),
        ComponentSpec::new(
            "folder-browser",
            "Documentos",
            "Pastas expansíveis com navegação por trilha e busca de documentos.",
            vec![
                PropSpec::new("title", "Título do bloco.", PropValue::text("Documentos")),
                PropSpec::new(
                    "view_mode",
                    "Disposição dos documentos.",
                    PropValue::choice(&["list", "grid"]),
                ),
            ],
        ),
        ComponentSpec::new(
            "hero-banner",
            "Banner de Destaque",
            "Faixa de destaque com título, chamada e botão de ação.",
            vec![
                PropSpec::new("title", "Título principal.", PropValue::text("Bem-vindo à Nossa Intranet")),
                PropSpec::new(
                    "subtitle",
                    "Linha de apoio abaixo do título.",
                    PropValue::text("Conectando pessoas, compartilhando conhecimento"),
                ),
                PropSpec::new(
                    "description",
                    "Texto descritivo do banner.",
                    PropValue::text(
                        "Acesse todas as informações e ferramentas que você precisa para ser mais produtivo no seu dia a dia.",
                    ),
                ),
                PropSpec::new("cta_text", "Rótulo do botão de ação.", PropValue::text("Explorar Agora")),
                PropSpec::new("show_badge", "Exibe o selo de novidade.", PropValue::Flag(true)),
                PropSpec::new("badge_text", "Texto do selo.", PropValue::text("Novo")),
                PropSpec::new(
                    "variant",
                    "Esquema de cores.",
                    PropValue::choice(&["primary", "secondary", "accent"]),
                ),
            ],
        ),
        ComponentSpec::new(
            "news-feed",
            "Notícias",
            "Lista das últimas notícias com autor, data e estatísticas.",
            vec![
                PropSpec::new("title", "Título do bloco.", PropValue::text("Notícias Recentes")),
                PropSpec::new("max_items", "Quantidade máxima de notícias.", PropValue::Number(5)),
                PropSpec::new("show_stats", "Exibe curtidas e comentários.", PropValue::Flag(true)),
                PropSpec::new(
                    "variant",
                    "Densidade da lista.",
                    PropValue::choice(&["default", "compact", "detailed"]),
                ),
            ],
        ),
        ComponentSpec::new(
            "announcement-card",
            "Comunicado",
            "Cartão de comunicado com destaque para avisos urgentes.",
            vec![
                PropSpec::new("show_author", "Exibe o autor.", PropValue::Flag(true)),
                PropSpec::new("show_date", "Exibe a data.", PropValue::Flag(true)),
                PropSpec::new("show_category", "Exibe a categoria.", PropValue::Flag(true)),
                PropSpec::new(
                    "variant",
                    "Estilo do cartão.",
                    PropValue::choice(&["default", "urgent", "info"]),
                ),
            ],
        ),
        ComponentSpec::new(
            "birthday-card",
            "Aniversariantes",
            "Lista de celebrações da semana.",
            vec![
                PropSpec::new(
                    "variant",
                    "Tipo de celebração.",
                    PropValue::choice(&["birthday", "anniversary", "new_hire"]),
                ),
                PropSpec::new("show_department", "Exibe o departamento.", PropValue::Flag(true)),
                PropSpec::new("max_items", "Quantidade máxima de entradas.", PropValue::Number(5)),
            ],
        ),
        ComponentSpec::new(
            "quick-access-card",
            "Acesso Rápido",
            "Atalhos para as ferramentas mais usadas.",
            vec![
                PropSpec::new("title", "Título do bloco.", PropValue::text("Acesso Rápido")),
                PropSpec::new(
                    "layout",
                    "Disposição dos atalhos.",
                    PropValue::choice(&["grid", "list"]),
                ),
                PropSpec::new("max_items", "Quantidade máxima de atalhos.", PropValue::Number(8)),
                PropSpec::new("show_descriptions", "Exibe as descrições.", PropValue::Flag(true)),
                PropSpec::new("show_categories", "Exibe as categorias.", PropValue::Flag(false)),
            ],
        ),
        ComponentSpec::new(
            "department-selector",
            "Departamento",
            "Exibe o departamento selecionado com estatísticas e gestor.",
            vec![
                PropSpec::new(
                    "layout",
                    "Apresentação do seletor.",
                    PropValue::choice(&["card", "compact", "banner"]),
                ),
                PropSpec::new("show_stats", "Exibe o número de membros.", PropValue::Flag(true)),
                PropSpec::new("show_manager", "Exibe o gestor.", PropValue::Flag(true)),
                PropSpec::new("show_access_button", "Exibe o botão de acesso.", PropValue::Flag(true)),
            ],
        ),
    ]
}

/// Looks up a component by its stable id.
pub fn component(id: &str) -> Option<ComponentSpec> {
    catalog().into_iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let specs = catalog();
        for (i, a) in specs.iter().enumerate() {
            for b in &specs[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn lookup_by_id() {
        let spec = component("folder-browser").unwrap();
        assert_eq!(spec.name, "Documentos");
        assert!(component("missing").is_none());
    }

    #[test]
    fn hero_banner_defaults_match_widget() {
        let spec = component("hero-banner").unwrap();
        assert_eq!(
            spec.prop("title").unwrap().default,
            PropValue::Text("Bem-vindo à Nossa Intranet".into())
        );
        assert_eq!(spec.prop("show_badge").unwrap().default, PropValue::Flag(true));
    }

    #[test]
    fn catalog_round_trips_through_json() {
        let specs = catalog();
        let json = serde_json::to_string(&specs).unwrap();
        let back: Vec<ComponentSpec> = serde_json::from_str(&json).unwrap();
        assert_eq!(specs, back);
    }
}
