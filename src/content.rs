//! Fixed marketing copy for the landing page sections.
//!
//! Kept as static tables so the section components stay pure layout.

use ouvidoria_ui::IconKind;

/// Name of the institution shown in the header, footer and legal lines.
pub const INSTITUTION: &str = "Banco Aurora S.A.";

/// In-page anchors. The hero and form sections carry these ids.
pub mod anchor {
    pub const HOME: &str = "inicio";
    pub const FORM: &str = "formulario";
    pub const TRACK: &str = "acompanhar";
    pub const HELP: &str = "ajuda";
}

/// A navigation entry: label plus `href`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Header navigation, shared by desktop and mobile menus.
pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { label: "Início", href: "#inicio" },
    NavLink { label: "Nova Reclamação", href: "#formulario" },
    NavLink { label: "Acompanhar", href: "#acompanhar" },
    NavLink { label: "Ajuda", href: "#ajuda" },
];

/// Icon, headline value and caption.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Stat {
    pub icon: IconKind,
    pub value: &'static str,
    pub label: &'static str,
    /// Secondary caption; empty for the hero cards
    pub sublabel: &'static str,
}

pub const HERO_STATS: [Stat; 3] = [
    Stat { icon: IconKind::Clock, value: "24h", label: "Tempo médio de resposta", sublabel: "" },
    Stat { icon: IconKind::Shield, value: "100%", label: "Segurança garantida", sublabel: "" },
    Stat { icon: IconKind::Users, value: "95%", label: "Satisfação dos clientes", sublabel: "" },
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Feature {
    pub icon: IconKind,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SECURITY_FEATURES: [Feature; 4] = [
    Feature {
        icon: IconKind::Shield,
        title: "Segurança SSL",
        description: "Criptografia de ponta a ponta para proteger seus dados",
    },
    Feature {
        icon: IconKind::Lock,
        title: "LGPD Compliant",
        description: "Seus dados são tratados conforme a Lei Geral de Proteção de Dados",
    },
    Feature {
        icon: IconKind::FileCheck,
        title: "Certificação ISO",
        description: "Processos certificados para garantir qualidade e segurança",
    },
    Feature {
        icon: IconKind::Users,
        title: "Equipe Especializada",
        description: "Profissionais treinados para resolução rápida e eficiente",
    },
];

pub const CREDIBILITY_STATS: [Stat; 4] = [
    Stat {
        icon: IconKind::Star,
        value: "4.8/5",
        label: "Avaliação média",
        sublabel: "baseada em +10.000 avaliações",
    },
    Stat {
        icon: IconKind::Clock,
        value: "24h",
        label: "Tempo médio",
        sublabel: "para primeira resposta",
    },
    Stat {
        icon: IconKind::CheckCircle,
        value: "95%",
        label: "Taxa de resolução",
        sublabel: "no primeiro contato",
    },
    Stat {
        icon: IconKind::Award,
        value: "15+",
        label: "Anos de experiência",
        sublabel: "resolvendo questões bancárias",
    },
];

/// One stage of the complaint handling timeline.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ProcessStep {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub time: &'static str,
}

pub const PROCESS_STEPS: [ProcessStep; 4] = [
    ProcessStep {
        number: "01",
        title: "Recebimento",
        description: "Sua reclamação é registrada em nosso sistema seguro",
        time: "Imediato",
    },
    ProcessStep {
        number: "02",
        title: "Análise",
        description: "Nossa equipe analisa o caso e identifica a melhor solução",
        time: "Até 24h",
    },
    ProcessStep {
        number: "03",
        title: "Resolução",
        description: "Implementamos a solução e entramos em contato",
        time: "Até 10 dias",
    },
    ProcessStep {
        number: "04",
        title: "Acompanhamento",
        description: "Verificamos sua satisfação com a resolução",
        time: "Até 15 dias",
    },
];

pub const TRUST_BADGES: [&str; 5] =
    ["ISO 27001", "SSL 256-bit", "LGPD Compliant", "Banco Central", "PROCON"];

pub const FOOTER_QUICK_LINKS: [NavLink; 6] = [
    NavLink { label: "Início", href: "#inicio" },
    NavLink { label: "Nova Reclamação", href: "#formulario" },
    NavLink { label: "Acompanhar Status", href: "#acompanhar" },
    NavLink { label: "FAQ", href: "/faq" },
    NavLink { label: "Termos de Uso", href: "/termos" },
    NavLink { label: "Política de Privacidade", href: "/privacidade" },
];

/// Complaint areas listed in the footer (a subset of the form categories).
pub const FOOTER_COMPLAINT_TYPES: [&str; 6] = [
    "Cartão de Crédito",
    "Conta Corrente",
    "Financiamentos",
    "Atendimento",
    "Internet Banking",
    "Seguros",
];

/// Contact line; multi-line entries use `\n`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Contact {
    pub icon: IconKind,
    pub text: &'static str,
}

pub const CONTACTS: [Contact; 4] = [
    Contact { icon: IconKind::Phone, text: "0800 000 0000" },
    Contact { icon: IconKind::Mail, text: "reclamacoes@bancoaurora.com.br" },
    Contact {
        icon: IconKind::MapPin,
        text: "Banco Aurora S.A.\nAvenida Central, 1000\nSão Paulo, SP - Brasil",
    },
    Contact { icon: IconKind::Clock, text: "24h por dia, 7 dias por semana" },
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Social {
    pub icon: IconKind,
    pub label: &'static str,
    pub href: &'static str,
}

pub const SOCIALS: [Social; 4] = [
    Social { icon: IconKind::Facebook, label: "Facebook", href: "#" },
    Social { icon: IconKind::Twitter, label: "Twitter", href: "#" },
    Social { icon: IconKind::Instagram, label: "Instagram", href: "#" },
    Social { icon: IconKind::Linkedin, label: "LinkedIn", href: "#" },
];

pub const LEGAL_LINKS: [NavLink; 4] = [
    NavLink { label: "Termos de Uso", href: "/termos" },
    NavLink { label: "Privacidade", href: "/privacidade" },
    NavLink { label: "Cookies", href: "/cookies" },
    NavLink { label: "Acessibilidade", href: "/acessibilidade" },
];

pub const LEGAL_LINES: [&str; 2] = [
    "Banco Aurora S.A. - Banco Múltiplo - Carteira Comercial, de Investimento, \
     Crédito Imobiliário, Crédito Financiamento e Investimento, Arrendamento Mercantil e Câmbio.",
    "SAC: 0800 000 0000 (ligação gratuita) | Deficiente Auditivo: 0800 000 0099 | \
     Ouvidoria: 0800 000 0011 (ligação gratuita)",
];

/// Copyright line for the given year.
pub fn copyright(year: i32) -> String {
    format!("© {year} {INSTITUTION} - Todos os direitos reservados.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_links_target_page_anchors() {
        let anchors = [anchor::HOME, anchor::FORM, anchor::TRACK, anchor::HELP];
        for (link, anchor) in NAV_LINKS.iter().zip(anchors) {
            assert_eq!(link.href, format!("#{anchor}"));
        }
    }

    #[test]
    fn process_steps_are_numbered_in_order() {
        for (i, step) in PROCESS_STEPS.iter().enumerate() {
            assert_eq!(step.number, format!("{:02}", i + 1));
        }
    }

    #[test]
    fn footer_lists_are_unique() {
        let mut types = FOOTER_COMPLAINT_TYPES.to_vec();
        types.sort_unstable();
        types.dedup();
        assert_eq!(types.len(), FOOTER_COMPLAINT_TYPES.len());

        // Footer labels are short forms; only "Seguros" matches a form category verbatim
        assert!("Seguros".parse::<ouvidoria_core::ComplaintCategory>().is_ok());
    }

    #[test]
    fn copyright_mentions_year_and_institution() {
        let line = copyright(2026);
        assert!(line.contains("2026"));
        assert!(line.contains(INSTITUTION));
    }
}
