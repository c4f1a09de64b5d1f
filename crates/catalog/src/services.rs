use crate::types::{Service, ServiceCategory};

const fn service(
    id: &'static str,
    name: &'static str,
    price_usd: u32,
) -> Service {
    Service {
        id,
        name,
        price_usd,
        price_fc: price_usd as u64 * crate::FC_PER_USD,
    }
}

static WEB: &[Service] = &[
    service("site-vitrine", "Site Vitrine", 400),
    service("site-ecommerce", "Site E-commerce", 900),
    service("app-mobile", "Application Mobile", 1500),
    service("maintenance-web", "Maintenance Web (mensuel)", 80),
];

static AI: &[Service] = &[
    service("chatbot", "Chatbot / Agent IA", 600),
    service("automatisation", "Automatisation de Processus", 450),
    service("analyse-donnees", "Analyse de Données", 500),
];

static SECURITY: &[Service] = &[
    service("audit-securite", "Audit de Sécurité", 700),
    service("pentest", "Test d'Intrusion", 900),
    service("formation-securite", "Formation Cybersécurité", 250),
];

static DESIGN: &[Service] = &[
    service("logo", "Création de Logo", 50),
    service("charte-graphique", "Charte Graphique", 150),
    service("montage-video", "Montage Vidéo", 120),
    service("flyers", "Flyers & Affiches", 40),
];

static CONSULTING: &[Service] = &[
    service("coaching", "Coaching Entrepreneurial", 200),
    service("strategie-digitale", "Stratégie Digitale", 300),
    service("etude-projet", "Étude de Projet", 250),
];

static IOT: &[Service] = &[
    service("installation-domotique", "Installation Domotique", 350),
    service("cameras", "Caméras de Surveillance", 400),
    service("gadgets", "Gadgets Tech", 100),
];

static CATEGORIES: &[ServiceCategory] = &[
    ServiceCategory {
        id: "web",
        name: "Développement Web & Mobile",
        services: WEB,
    },
    ServiceCategory {
        id: "ai",
        name: "Intelligence Artificielle",
        services: AI,
    },
    ServiceCategory {
        id: "security",
        name: "Cybersécurité",
        services: SECURITY,
    },
    ServiceCategory {
        id: "design",
        name: "Design & Branding",
        services: DESIGN,
    },
    ServiceCategory {
        id: "consulting",
        name: "Consulting Tech",
        services: CONSULTING,
    },
    ServiceCategory {
        id: "iot",
        name: "Objets Connectés",
        services: IOT,
    },
];

/// Returns every service category, in display order.
#[inline]
pub fn categories() -> &'static [ServiceCategory] {
    CATEGORIES
}

/// Looks up a service by its identifier.
pub fn find_service(id: &str) -> Option<&'static Service> {
    CATEGORIES
        .iter()
        .flat_map(|category| category.services)
        .find(|service| service.id == id)
}
