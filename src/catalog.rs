use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub price_range: &'static str,
    pub duration: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub is_professional: bool,
}

pub const SERVICES: &[Service] = &[
    Service {
        id: "1",
        name: "Lavagem Detalhada Externa",
        description: "Foco total na remoção de contaminantes e brilho externo.",
        price_range: "R$ 80-120",
        duration: "2h",
        icon: "Droplets",
    },
    Service {
        id: "2",
        name: "Lavagem Completa",
        description: "Limpeza minuciosa externa e higienização interna básica.",
        price_range: "R$ 150-200",
        duration: "4h",
        icon: "Car",
    },
    Service {
        id: "3",
        name: "Higienização Interna Profunda",
        description: "Remoção de ácaros, bactérias e manchas em estofados.",
        price_range: "R$ 180-250",
        duration: "5h",
        icon: "Sparkle",
    },
    Service {
        id: "4",
        name: "Polimento Técnico",
        description: "Correção de verniz e eliminação de micro-riscos.",
        price_range: "R$ 300-500",
        duration: "6-8h",
        icon: "Zap",
    },
    Service {
        id: "5",
        name: "Polimento + Cristalização",
        description: "Proteção extra com selante de alto brilho.",
        price_range: "R$ 450-700",
        duration: "1 dia",
        icon: "ShieldCheck",
    },
    Service {
        id: "6",
        name: "Vitrificação de Pintura",
        description: "O ápice da proteção cerâmica com dureza 9H.",
        price_range: "R$ 800-1.500",
        duration: "1-2 dias",
        icon: "Gem",
    },
    Service {
        id: "7",
        name: "Vitrificação de Faróis",
        description: "Restauração da transparência e proteção UV duradoura.",
        price_range: "R$ 250-400",
        duration: "3h",
        icon: "Sun",
    },
    Service {
        id: "8",
        name: "Revitalização de Plásticos",
        description: "Devolve a cor original e protege plásticos ressecados.",
        price_range: "R$ 150-250",
        duration: "2h",
        icon: "Layers",
    },
    Service {
        id: "9",
        name: "Enceramento Premium",
        description: "Aplicação de ceras de carnaúba pura para efeito show car.",
        price_range: "R$ 200-350",
        duration: "3h",
        icon: "Star",
    },
    Service {
        id: "10",
        name: "Restauração de Couro",
        description: "Limpeza técnica e hidratação profunda de assentos.",
        price_range: "R$ 300-600",
        duration: "4h",
        icon: "UserCheck",
    },
    Service {
        id: "11",
        name: "Blindagem de Pintura (PPF)",
        description: "Película de proteção ultra resistente contra impactos.",
        price_range: "Sob consulta",
        duration: "Consultar",
        icon: "Shield",
    },
    Service {
        id: "12",
        name: "Tratamento Cerâmico",
        description: "Proteção integral com nanotecnologia de ponta.",
        price_range: "R$ 1.200-2.000",
        duration: "2 dias",
        icon: "Cpu",
    },
];

pub const PRODUCTS: &[Product] = &[
    Product {
        id: "p1",
        name: "Vönix Ceramic Pro",
        description: "Vitrificador de alta performance para proteção de longo prazo.",
        image: "https://images.unsplash.com/photo-1618843479313-40f8afb4b4d8?auto=format&fit=crop&q=80&w=600",
        is_professional: true,
    },
    Product {
        id: "p2",
        name: "Vönix V-Floc",
        description: "Shampoo de alta performance com lubrificação premium para lavagem segura.",
        image: "https://images.unsplash.com/photo-1607860108855-64acf2078ed9?auto=format&fit=crop&q=80&w=600",
        is_professional: true,
    },
    Product {
        id: "p3",
        name: "Vönix Cera Carnaúba Premium",
        description: "Brilho quente e profundo com a lendária proteção da carnaúba brasileira.",
        image: "https://images.unsplash.com/photo-1599256621730-535171e28e50?auto=format&fit=crop&q=80&w=600",
        is_professional: false,
    },
    Product {
        id: "p4",
        name: "Vönix V-Polish",
        description: "Compostos polidores de corte, refino e lustro para acabamento espelhado.",
        image: "https://images.unsplash.com/photo-1520340356584-f9917d1eea6f?auto=format&fit=crop&q=80&w=600",
        is_professional: true,
    },
];

pub fn find_service(id: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|s| s.id == id)
}
