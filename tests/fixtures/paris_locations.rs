//! Real Paris landmarks for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap. Hours are typical summer hours
//! and only need to be plausible.

use route_sequencer::location::Location;

/// A named landmark with coordinates, hours and a typical visit length.
#[derive(Debug, Clone)]
pub struct Landmark {
    pub id: &'static str,
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub hours: Option<(&'static str, &'static str)>,
    pub visit_minutes: u32,
}

impl Landmark {
    pub const fn new(id: &'static str, name: &'static str, lat: f64, lng: f64) -> Self {
        Self {
            id,
            name,
            lat,
            lng,
            hours: None,
            visit_minutes: 60,
        }
    }

    pub const fn open(mut self, opening: &'static str, closing: &'static str) -> Self {
        self.hours = Some((opening, closing));
        self
    }

    pub const fn visit(mut self, minutes: u32) -> Self {
        self.visit_minutes = minutes;
        self
    }

    pub fn to_location(&self) -> Location {
        let location = Location::new(self.name, self.lat, self.lng)
            .with_id(self.id)
            .with_duration(self.visit_minutes);
        match self.hours {
            Some((opening, closing)) => location.with_window(opening, closing),
            None => location,
        }
    }
}

// ============================================================================
// Start Locations
// ============================================================================

pub const HOTEL: Landmark = Landmark::new("hotel", "Hôtel de Ville", 48.8566, 2.3522);

// ============================================================================
// Sights
// ============================================================================

pub const NOTRE_DAME: Landmark = Landmark::new("notre-dame", "Notre-Dame", 48.8530, 2.3499)
    .open("07:45", "19:00")
    .visit(45);

pub const SAINTE_CHAPELLE: Landmark = Landmark::new("sainte-chapelle", "Sainte-Chapelle", 48.8554, 2.3450)
    .open("09:00", "19:00")
    .visit(45);

pub const LOUVRE: Landmark = Landmark::new("louvre", "Musée du Louvre", 48.8606, 2.3376)
    .open("09:00", "18:00")
    .visit(180);

pub const ORSAY: Landmark = Landmark::new("orsay", "Musée d'Orsay", 48.8600, 2.3266)
    .open("09:30", "18:00")
    .visit(120);

pub const POMPIDOU: Landmark = Landmark::new("pompidou", "Centre Pompidou", 48.8607, 2.3522)
    .open("11:00", "21:00")
    .visit(120);

pub const LUXEMBOURG: Landmark = Landmark::new("luxembourg", "Jardin du Luxembourg", 48.8462, 2.3372);

pub const RODIN: Landmark = Landmark::new("rodin", "Musée Rodin", 48.8553, 2.3159)
    .open("10:00", "18:30")
    .visit(90);

pub const EIFFEL_TOWER: Landmark = Landmark::new("eiffel", "Tour Eiffel", 48.8584, 2.2945)
    .open("09:30", "23:00")
    .visit(90);

pub const ARC_DE_TRIOMPHE: Landmark = Landmark::new("arc", "Arc de Triomphe", 48.8738, 2.2950)
    .open("10:00", "23:00")
    .visit(45);

pub const SACRE_COEUR: Landmark = Landmark::new("sacre-coeur", "Sacré-Cœur", 48.8867, 2.3431)
    .open("06:00", "22:30")
    .visit(60);

pub const SIGHTS: &[Landmark] = &[
    NOTRE_DAME,
    SAINTE_CHAPELLE,
    LOUVRE,
    ORSAY,
    POMPIDOU,
    LUXEMBOURG,
    RODIN,
    EIFFEL_TOWER,
    ARC_DE_TRIOMPHE,
    SACRE_COEUR,
];

/// Hotel first, then every sight.
pub fn day_in_paris() -> Vec<Location> {
    std::iter::once(&HOTEL)
        .chain(SIGHTS)
        .map(Landmark::to_location)
        .collect()
}

// ============================================================================
// Neighbourhoods (places owning sights)
// ============================================================================

pub const CITE: Landmark = Landmark::new("cite", "Île de la Cité", 48.8540, 2.3470);
pub const TUILERIES: Landmark = Landmark::new("tuileries", "Louvre & Tuileries", 48.8625, 2.3300);
pub const TROCADERO: Landmark = Landmark::new("trocadero", "Trocadéro & Étoile", 48.8640, 2.2900);

/// Neighbourhood places followed by their sights as points of interest.
pub fn neighbourhoods() -> Vec<Location> {
    let members: &[(&Landmark, &[Landmark])] = &[
        (&CITE, &[NOTRE_DAME, SAINTE_CHAPELLE]),
        (&TUILERIES, &[LOUVRE, ORSAY]),
        (&TROCADERO, &[EIFFEL_TOWER, ARC_DE_TRIOMPHE]),
    ];

    let places = members.iter().map(|(place, _)| place.to_location());
    let pois = members.iter().flat_map(|(place, sights)| {
        sights.iter().map(move |sight| sight.to_location().with_parent(place.id))
    });
    places.chain(pois).collect()
}
