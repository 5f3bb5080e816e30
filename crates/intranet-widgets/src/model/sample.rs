//! Seeded sample data used when no host supplies component data.
//!
//! Mirrors the defaults every component ships with: a small Brazilian company
//! directory, a document tree and a dashboard's worth of feed content.

use super::{
    Announcement, BirthdayEntry, Department, Document, Folder, NewsItem, OrgUnit, Person,
    QuickLink, SharingType,
};
use chrono::NaiveDate;
use ratatui::style::Color;

/// Everything the components need, seeded in one pass.
#[derive(Debug, Clone)]
pub struct IntranetData {
    pub people: Vec<Person>,
    pub org_tree: Vec<OrgUnit>,
    pub folders: Vec<Folder>,
    pub departments: Vec<Department>,
    pub news: Vec<NewsItem>,
    pub announcement: Announcement,
    pub birthdays: Vec<BirthdayEntry>,
    pub quick_links: Vec<QuickLink>,
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // Seeded literals are always valid.
    NaiveDate::from_ymd_opt(y, m, d).expect("valid sample date")
}

fn person(id: &str, name: &str, role: &str, email: &str, img: u8, is_manager: bool) -> Person {
    Person {
        id: id.into(),
        name: name.into(),
        role: role.into(),
        email: email.into(),
        avatar_url: format!("https://i.pravatar.cc/150?img={img}"),
        is_manager,
    }
}

fn people() -> Vec<Person> {
    vec![
        person(
            "1",
            "Maria Silva",
            "Gerente de Vendas",
            "maria.silva@empresa.com",
            1,
            true,
        ),
        person(
            "2",
            "João Santos",
            "Representante de Vendas",
            "joao.santos@empresa.com",
            2,
            false,
        ),
        person(
            "3",
            "Ana Oliveira",
            "Analista de Vendas",
            "ana.oliveira@empresa.com",
            3,
            false,
        ),
        person(
            "4",
            "Carlos Lima",
            "Coordenador de TI",
            "carlos.lima@empresa.com",
            4,
            false,
        ),
        person(
            "5",
            "Fernanda Costa",
            "Gerente Financeiro",
            "fernanda.costa@empresa.com",
            5,
            true,
        ),
    ]
}

fn documents() -> Vec<Document> {
    vec![
        Document {
            id: "1".into(),
            name: "Relatório de Vendas Q4 2024.pdf".into(),
            doc_type: "PDF".into(),
            size: "2.4 MB".into(),
            last_modified: date(2024, 1, 15),
            owner_id: "1".into(),
            sharing: SharingType::Organization,
            shared_with: Vec::new(),
            starred: true,
        },
        Document {
            id: "2".into(),
            name: "Estratégia de Vendas 2024.pptx".into(),
            doc_type: "PPTX".into(),
            size: "5.1 MB".into(),
            last_modified: date(2024, 1, 10),
            owner_id: "1".into(),
            sharing: SharingType::Specific,
            shared_with: vec!["1".into(), "2".into()],
            starred: false,
        },
        Document {
            id: "3".into(),
            name: "Lista de Clientes Ativos.xlsx".into(),
            doc_type: "XLSX".into(),
            size: "1.8 MB".into(),
            last_modified: date(2024, 1, 12),
            owner_id: "2".into(),
            sharing: SharingType::Organization,
            shared_with: Vec::new(),
            starred: true,
        },
        Document {
            id: "4".into(),
            name: "Organograma.png".into(),
            doc_type: "PNG".into(),
            size: "640 KB".into(),
            last_modified: date(2024, 1, 8),
            owner_id: "1".into(),
            sharing: SharingType::General,
            shared_with: Vec::new(),
            starred: false,
        },
        Document {
            id: "5".into(),
            name: "Relatório Mensal.pdf".into(),
            doc_type: "PDF".into(),
            size: "1.1 MB".into(),
            last_modified: date(2024, 1, 5),
            owner_id: "3".into(),
            sharing: SharingType::General,
            shared_with: Vec::new(),
            starred: false,
        },
    ]
}

fn folders() -> Vec<Folder> {
    let docs = documents();
    vec![
        Folder {
            id: "1".into(),
            name: "Relatórios".into(),
            documents: vec![docs[0].clone(), docs[1].clone()],
            sub_folders: vec![Folder {
                id: "3".into(),
                name: "Institucional".into(),
                documents: vec![docs[3].clone(), docs[4].clone()],
                sub_folders: Vec::new(),
                owner_id: "1".into(),
                sharing: SharingType::General,
                shared_with: Vec::new(),
                expanded: false,
            }],
            owner_id: "1".into(),
            sharing: SharingType::Organization,
            shared_with: Vec::new(),
            expanded: true,
        },
        Folder {
            id: "2".into(),
            name: "Treinamentos".into(),
            documents: vec![docs[2].clone()],
            sub_folders: Vec::new(),
            owner_id: "1".into(),
            sharing: SharingType::General,
            shared_with: Vec::new(),
            expanded: false,
        },
    ]
}

fn org_tree() -> Vec<OrgUnit> {
    vec![OrgUnit {
        id: "1".into(),
        title: "Diretoria".into(),
        description: "Alta administração da empresa".into(),
        active: true,
        parent_id: None,
        expanded: true,
        member_ids: vec!["1".into()],
        cover: None,
        children: vec![
            OrgUnit {
                id: "2".into(),
                title: "Vendas".into(),
                description: "Departamento responsável pelas vendas e relacionamento com clientes"
                    .into(),
                active: true,
                parent_id: Some("1".into()),
                expanded: false,
                member_ids: vec!["1".into(), "2".into(), "3".into()],
                cover: None,
                children: vec![
                    OrgUnit {
                        id: "3".into(),
                        title: "Vendas Nacionais".into(),
                        description: "Equipe de vendas para mercado nacional".into(),
                        active: true,
                        parent_id: Some("2".into()),
                        expanded: false,
                        member_ids: vec!["2".into(), "3".into()],
                        cover: None,
                        children: Vec::new(),
                    },
                    OrgUnit {
                        id: "4".into(),
                        title: "Vendas Internacionais".into(),
                        description: "Equipe de vendas para mercado internacional".into(),
                        active: true,
                        parent_id: Some("2".into()),
                        expanded: false,
                        member_ids: vec!["1".into()],
                        cover: None,
                        children: Vec::new(),
                    },
                ],
            },
            OrgUnit {
                id: "5".into(),
                title: "Tecnologia".into(),
                description: "Departamento de TI e desenvolvimento".into(),
                active: true,
                parent_id: Some("1".into()),
                expanded: false,
                member_ids: vec!["4".into()],
                cover: None,
                children: Vec::new(),
            },
        ],
    }]
}

fn departments() -> Vec<Department> {
    vec![
        Department {
            id: "1".into(),
            name: "Vendas".into(),
            description: "Responsável pela geração de receita e relacionamento com clientes".into(),
            color: Color::Blue,
            member_count: 12,
            manager_id: "1".into(),
        },
        Department {
            id: "2".into(),
            name: "Marketing".into(),
            description: "Responsável pela comunicação e promoção da marca".into(),
            color: Color::Magenta,
            member_count: 8,
            manager_id: "2".into(),
        },
        Department {
            id: "3".into(),
            name: "Recursos Humanos".into(),
            description: "Gestão de pessoas e desenvolvimento organizacional".into(),
            color: Color::Green,
            member_count: 6,
            manager_id: "3".into(),
        },
        Department {
            id: "4".into(),
            name: "TI".into(),
            description: "Tecnologia da informação e infraestrutura".into(),
            color: Color::Cyan,
            member_count: 15,
            manager_id: "4".into(),
        },
        Department {
            id: "5".into(),
            name: "Financeiro".into(),
            description: "Controle financeiro e contabilidade".into(),
            color: Color::Yellow,
            member_count: 9,
            manager_id: "5".into(),
        },
    ]
}

fn news() -> Vec<NewsItem> {
    vec![
        NewsItem {
            id: "1".into(),
            title: "Nova política de trabalho remoto aprovada".into(),
            summary: "A empresa aprovou novas diretrizes para trabalho remoto, oferecendo mais flexibilidade aos colaboradores.".into(),
            author: "Maria Santos".into(),
            date: date(2024, 1, 15),
            category: "RH".into(),
            department_id: None,
            likes: 24,
            comments: 8,
        },
        NewsItem {
            id: "2".into(),
            title: "Resultados do Q4 2023".into(),
            summary: "Confira os principais resultados da empresa no último trimestre de 2023.".into(),
            author: "Carlos Oliveira".into(),
            date: date(2024, 1, 14),
            category: "Financeiro".into(),
            department_id: Some("5".into()),
            likes: 18,
            comments: 5,
        },
        NewsItem {
            id: "3".into(),
            title: "Novo sistema de gestão de projetos".into(),
            summary: "Implementação do novo sistema para melhor organização e acompanhamento de projetos.".into(),
            author: "Ana Costa".into(),
            date: date(2024, 1, 13),
            category: "Tecnologia".into(),
            department_id: Some("4".into()),
            likes: 31,
            comments: 12,
        },
    ]
}

fn announcement() -> Announcement {
    Announcement {
        title: "Comunicado Importante".into(),
        content: "A manutenção programada dos sistemas internos ocorrerá no próximo sábado, das 8h às 12h.".into(),
        author: "João Silva".into(),
        date: date(2024, 1, 15),
        category: "Geral".into(),
        urgent: false,
    }
}

fn birthdays() -> Vec<BirthdayEntry> {
    vec![
        BirthdayEntry {
            id: "1".into(),
            name: "Ana Silva".into(),
            department: "Marketing".into(),
            date: date(2024, 1, 16),
            age: Some(28),
        },
        BirthdayEntry {
            id: "2".into(),
            name: "Carlos Santos".into(),
            department: "Desenvolvimento".into(),
            date: date(2024, 1, 17),
            age: Some(32),
        },
        BirthdayEntry {
            id: "3".into(),
            name: "Marina Costa".into(),
            department: "RH".into(),
            date: date(2024, 1, 18),
            age: Some(29),
        },
    ]
}

fn quick_links() -> Vec<QuickLink> {
    vec![
        QuickLink {
            id: "1".into(),
            title: "Portal RH".into(),
            description: "Acesse informações sobre benefícios, folha de pagamento e documentos"
                .into(),
            url: "#".into(),
            icon: Some("👥".into()),
            category: Some("RH".into()),
            featured: true,
        },
        QuickLink {
            id: "2".into(),
            title: "Sistema de Projetos".into(),
            description: "Gerencie seus projetos e acompanhe o progresso das tarefas".into(),
            url: "#".into(),
            icon: Some("📊".into()),
            category: Some("Produtividade".into()),
            featured: false,
        },
        QuickLink {
            id: "3".into(),
            title: "Central de Suporte".into(),
            description: "Abra tickets de suporte e acompanhe o status dos chamados".into(),
            url: "#".into(),
            icon: Some("🎧".into()),
            category: Some("Suporte".into()),
            featured: false,
        },
        QuickLink {
            id: "4".into(),
            title: "Biblioteca Digital".into(),
            description: "Acesse documentos, manuais e recursos da empresa".into(),
            url: "#".into(),
            icon: Some("📚".into()),
            category: Some("Recursos".into()),
            featured: true,
        },
    ]
}

/// Seed the full sample dataset.
pub fn intranet() -> IntranetData {
    IntranetData {
        people: people(),
        org_tree: org_tree(),
        folders: folders(),
        departments: departments(),
        news: news(),
        announcement: announcement(),
        birthdays: birthdays(),
        quick_links: quick_links(),
    }
}
