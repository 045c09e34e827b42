//! Built-in default dataset
//!
//! Loaded into an empty collection at startup and restored by `/api/reset`.
//! Identifiers are fixed literals (`p1`..`p12`, `lot1`..`lot8`).

use crate::models::{Agent, LotDevelopment, Property};

/// Number of default properties.
///
/// An older acceptance checklist expected 13; the dataset below has 12.
/// Confirm with the catalog owner before changing either side.
pub const DEFAULT_PROPERTY_COUNT: usize = PROPERTY_SEEDS.len();

/// Number of default lot developments
pub const DEFAULT_LOT_COUNT: usize = LOT_SEEDS.len();

struct PropertySeed {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    property_type: &'static str,
    transaction: &'static str,
    price: i64,
    neighborhood: &'static str,
    surface: i64,
    rooms: i64,
    bedrooms: i64,
    bathrooms: i64,
    features: &'static [&'static str],
    images: &'static [&'static str],
    featured: bool,
    views: i64,
}

struct LotSeed {
    id: &'static str,
    location: &'static str,
    zone: &'static str,
    total: i64,
    available: i64,
    surface: i64,
    price: i64,
    status: &'static str,
    features: &'static [&'static str],
}

const PROPERTY_SEEDS: [PropertySeed; 12] = [
    PropertySeed {
        id: "p1",
        title: "Luxueux Appartement Vue Mer Almadies",
        description: "Superbe appartement de standing avec vue imprenable sur l'océan. Résidence sécurisée, finitions haut de gamme. 3 chambres, terrasse 25m².",
        property_type: "Appartement",
        transaction: "Vente",
        price: 185_000_000,
        neighborhood: "Almadies",
        surface: 180,
        rooms: 5,
        bedrooms: 3,
        bathrooms: 2,
        features: &["Piscine", "Parking", "Sécurité 24h", "Vue mer"],
        images: &[
            "https://images.unsplash.com/photo-1600596542815-ffad4c1539a9?w=800",
            "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?w=800",
        ],
        featured: true,
        views: 342,
    },
    PropertySeed {
        id: "p2",
        title: "Appartement Moderne 4P Mermoz",
        description: "Magnifique appartement contemporain entièrement rénové. Salon double avec balcon, cuisine équipée, chambres climatisées.",
        property_type: "Appartement",
        transaction: "Vente",
        price: 125_000_000,
        neighborhood: "Mermoz",
        surface: 140,
        rooms: 4,
        bedrooms: 3,
        bathrooms: 2,
        features: &["Parking", "Climatisation", "Balcon"],
        images: &[
            "https://images.unsplash.com/photo-1560448204-e02f11c3d0e2?w=800",
            "https://images.unsplash.com/photo-1502672260266-1c1ef2d93688?w=800",
        ],
        featured: true,
        views: 256,
    },
    PropertySeed {
        id: "p3",
        title: "Studio Meublé Plateau",
        description: "Studio meublé et équipé au cœur du Plateau. Emplacement premium près ministères et banques.",
        property_type: "Appartement",
        transaction: "Vente",
        price: 45_000_000,
        neighborhood: "Plateau",
        surface: 35,
        rooms: 1,
        bedrooms: 0,
        bathrooms: 1,
        features: &["Climatisation", "Meublé"],
        images: &["https://images.unsplash.com/photo-1522708323590-d24dbb6b0267?w=800"],
        featured: false,
        views: 189,
    },
    PropertySeed {
        id: "p4",
        title: "F3 à Louer Ngor",
        description: "Charmant F3 dans le village de Ngor, près de la plage. Séjour lumineux, cuisine équipée, 2 chambres, terrasse.",
        property_type: "Appartement",
        transaction: "Location",
        price: 450_000,
        neighborhood: "Ngor",
        surface: 85,
        rooms: 3,
        bedrooms: 2,
        bathrooms: 1,
        features: &["Terrasse", "Climatisation"],
        images: &["https://images.unsplash.com/photo-1545324418-cc1a3fa10c00?w=800"],
        featured: false,
        views: 178,
    },
    PropertySeed {
        id: "p5",
        title: "Penthouse avec Piscine Privée",
        description: "Penthouse d'exception de 280m² avec piscine privée sur toit-terrasse. 4 chambres en suite. Vue panoramique 360°.",
        property_type: "Appartement",
        transaction: "Vente",
        price: 450_000_000,
        neighborhood: "Almadies",
        surface: 280,
        rooms: 7,
        bedrooms: 4,
        bathrooms: 4,
        features: &["Piscine", "Terrasse", "Vue mer", "Parking"],
        images: &["https://images.unsplash.com/photo-1600607687644-c7171b42498f?w=800"],
        featured: true,
        views: 567,
    },
    PropertySeed {
        id: "p6",
        title: "Villa Contemporaine Point E",
        description: "Splendide villa de 6 chambres. Piscine chauffée, jardin paysager, finitions luxe. Bureau, salle de sport.",
        property_type: "Villa",
        transaction: "Vente",
        price: 380_000_000,
        neighborhood: "Point E",
        surface: 450,
        rooms: 10,
        bedrooms: 6,
        bathrooms: 7,
        features: &["Piscine", "Jardin", "Parking", "Sécurité 24h"],
        images: &["https://images.unsplash.com/photo-1613977257363-707ba9348227?w=800"],
        featured: true,
        views: 478,
    },
    PropertySeed {
        id: "p7",
        title: "Villa Coloniale Rénovée Fann",
        description: "Charmante villa coloniale entièrement rénovée. Hauts plafonds, parquet, vérandas, jardin tropical.",
        property_type: "Villa",
        transaction: "Vente",
        price: 295_000_000,
        neighborhood: "Fann",
        surface: 350,
        rooms: 8,
        bedrooms: 4,
        bathrooms: 3,
        features: &["Jardin", "Parking", "Terrasse"],
        images: &["https://images.unsplash.com/photo-1564013799919-ab600027ffc6?w=800"],
        featured: false,
        views: 267,
    },
    PropertySeed {
        id: "p8",
        title: "Villa Moderne Sacré-Cœur",
        description: "Belle villa moderne de 5 chambres. Construction récente, panneaux solaires. Double salon, garage 2 voitures.",
        property_type: "Villa",
        transaction: "Vente",
        price: 220_000_000,
        neighborhood: "Sacré-Cœur",
        surface: 280,
        rooms: 8,
        bedrooms: 5,
        bathrooms: 4,
        features: &["Jardin", "Parking", "Sécurité 24h"],
        images: &["https://images.unsplash.com/photo-1600585154526-990dced4db0d?w=800"],
        featured: true,
        views: 356,
    },
    PropertySeed {
        id: "p9",
        title: "Villa à Louer Ouakam",
        description: "Grande villa sur 2 niveaux, idéale pour résidentiel ou professionnel. Jardin 400m², parking 5 véhicules.",
        property_type: "Villa",
        transaction: "Location",
        price: 2_500_000,
        neighborhood: "Ouakam",
        surface: 380,
        rooms: 10,
        bedrooms: 6,
        bathrooms: 4,
        features: &["Jardin", "Parking", "Sécurité 24h"],
        images: &["https://images.unsplash.com/photo-1600047509807-ba8f99d2cdde?w=800"],
        featured: false,
        views: 198,
    },
    PropertySeed {
        id: "p10",
        title: "Villa Pieds dans l'Eau Ngor",
        description: "Exceptionnelle villa front de mer. Accès direct plage privée. 5 chambres, piscine à débordement. Propriété rare.",
        property_type: "Villa",
        transaction: "Vente",
        price: 850_000_000,
        neighborhood: "Ngor",
        surface: 520,
        rooms: 12,
        bedrooms: 5,
        bathrooms: 5,
        features: &["Piscine", "Jardin", "Vue mer", "Terrasse"],
        images: &["https://images.unsplash.com/photo-1613977257592-4871e5fcd7c4?w=800"],
        featured: true,
        views: 723,
    },
    PropertySeed {
        id: "p11",
        title: "Terrain Viabilisé 500m² Saly",
        description: "Excellent terrain viabilisé à Saly, 500m de la plage. Eau, électricité, assainissement. Idéal villa de vacances.",
        property_type: "Terrain",
        transaction: "Vente",
        price: 35_000_000,
        neighborhood: "Saly",
        surface: 500,
        rooms: 0,
        bedrooms: 0,
        bathrooms: 0,
        features: &[],
        images: &["https://images.unsplash.com/photo-1500382017468-9049fed747ef?w=800"],
        featured: true,
        views: 234,
    },
    PropertySeed {
        id: "p12",
        title: "Grand Terrain 1200m² Mbour",
        description: "Terrain de 1200m² avec titre foncier, accès bitumé. Parfait pour immeuble locatif ou complexe résidentiel.",
        property_type: "Terrain",
        transaction: "Vente",
        price: 55_000_000,
        neighborhood: "Mbour",
        surface: 1200,
        rooms: 0,
        bedrooms: 0,
        bathrooms: 0,
        features: &[],
        images: &["https://images.unsplash.com/photo-1628624747186-a941c476b7ef?w=800"],
        featured: false,
        views: 156,
    },
];

const LOT_SEEDS: [LotSeed; 8] = [
    LotSeed {
        id: "lot1",
        location: "Bambilor",
        zone: "Zone A",
        total: 50,
        available: 35,
        surface: 200,
        price: 5_000_000,
        status: "Disponible",
        features: &["Titre foncier", "Eau", "Électricité", "Voirie"],
    },
    LotSeed {
        id: "lot2",
        location: "Thiès",
        zone: "Cité Dialibatou",
        total: 100,
        available: 72,
        surface: 150,
        price: 3_500_000,
        status: "Disponible",
        features: &["Titre foncier", "Eau", "Électricité"],
    },
    LotSeed {
        id: "lot3",
        location: "Diass",
        zone: "Proche AIBD",
        total: 80,
        available: 45,
        surface: 250,
        price: 7_000_000,
        status: "Disponible",
        features: &["Titre foncier", "Eau", "Électricité", "Proximité aéroport"],
    },
    LotSeed {
        id: "lot4",
        location: "Bayakh",
        zone: "Lac Rose",
        total: 60,
        available: 28,
        surface: 300,
        price: 6_000_000,
        status: "Disponible",
        features: &["Titre foncier", "Eau", "Vue lac"],
    },
    LotSeed {
        id: "lot5",
        location: "Sébikotane",
        zone: "Zone industrielle",
        total: 40,
        available: 15,
        surface: 200,
        price: 5_500_000,
        status: "Limité",
        features: &["Titre foncier", "Eau", "Électricité", "Voirie"],
    },
    LotSeed {
        id: "lot6",
        location: "Keur Massar",
        zone: "Extension",
        total: 120,
        available: 89,
        surface: 150,
        price: 6_500_000,
        status: "Disponible",
        features: &["Titre foncier", "Eau", "Électricité", "Transport"],
    },
    LotSeed {
        id: "lot7",
        location: "Kounoune",
        zone: "Résidentielle",
        total: 45,
        available: 20,
        surface: 200,
        price: 4_500_000,
        status: "Limité",
        features: &["Titre foncier", "Eau", "Électricité"],
    },
    LotSeed {
        id: "lot8",
        location: "Sindia",
        zone: "Village",
        total: 70,
        available: 55,
        surface: 350,
        price: 4_000_000,
        status: "Disponible",
        features: &["Délibération", "Eau"],
    },
];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Default properties, in display order
pub fn default_properties() -> Vec<Property> {
    PROPERTY_SEEDS
        .iter()
        .map(|s| Property {
            id: s.id.to_string(),
            title: s.title.to_string(),
            description: Some(s.description.to_string()),
            property_type: s.property_type.to_string(),
            transaction: s.transaction.to_string(),
            price: s.price,
            neighborhood: s.neighborhood.to_string(),
            surface: s.surface,
            rooms: s.rooms,
            bedrooms: s.bedrooms,
            bathrooms: s.bathrooms,
            features: strings(s.features),
            images: strings(s.images),
            videos: Vec::new(),
            featured: s.featured,
            views: s.views,
            agent: Agent::default(),
        })
        .collect()
}

/// Default lot developments, in display order
pub fn default_lots() -> Vec<LotDevelopment> {
    LOT_SEEDS
        .iter()
        .map(|s| LotDevelopment {
            id: s.id.to_string(),
            location: s.location.to_string(),
            zone: s.zone.to_string(),
            total: s.total,
            available: s.available,
            surface: s.surface,
            price: s.price,
            status: s.status.to_string(),
            features: strings(s.features),
        })
        .collect()
}
