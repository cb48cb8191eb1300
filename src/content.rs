#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sport {
    Cricket,
    Football,
    Tennis,
    Archery,
    Badminton,
}

impl Sport {
    pub const ALL: [Sport; 5] = [
        Sport::Cricket,
        Sport::Football,
        Sport::Tennis,
        Sport::Archery,
        Sport::Badminton,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Sport::Cricket => "cricket",
            Sport::Football => "football",
            Sport::Tennis => "tennis",
            Sport::Archery => "archery",
            Sport::Badminton => "badminton",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Sport> {
        Sport::ALL.into_iter().find(|sport| sport.slug() == slug)
    }

    pub fn name(self) -> &'static str {
        match self {
            Sport::Cricket => "Cricket",
            Sport::Football => "Football",
            Sport::Tennis => "Tennis",
            Sport::Archery => "Archery",
            Sport::Badminton => "Badminton",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Sport::Cricket => "🏏",
            Sport::Football => "⚽",
            Sport::Tennis => "🎾",
            Sport::Archery => "🏹",
            Sport::Badminton => "🏸",
        }
    }

    pub fn tagline(self) -> &'static str {
        match self {
            Sport::Cricket => "Turf nets with bowling machines and floodlit practice pitches.",
            Sport::Football => "FIFA-grade artificial turf for 5-a-side and 7-a-side matches.",
            Sport::Tennis => "Cushioned hard courts with coaching for every level.",
            Sport::Archery => "Indoor 18 m and outdoor 30 m ranges with certified coaches.",
            Sport::Badminton => "Wooden-floor courts with BWF-standard lighting.",
        }
    }

    /// Showcase figures: (label, target value).
    pub fn stats(self) -> &'static [(&'static str, u32)] {
        match self {
            Sport::Cricket => &[("Practice nets", 6), ("Players trained", 2400), ("Matches hosted", 850)],
            Sport::Football => &[("Turf pitches", 3), ("Weekly games", 120), ("League teams", 48)],
            Sport::Tennis => &[("Courts", 4), ("Students coached", 900), ("Tournaments", 35)],
            Sport::Archery => &[("Lanes", 12), ("Archers trained", 650), ("Medals won", 74)],
            Sport::Badminton => &[("Courts", 8), ("Members", 1500), ("Hours played", 12500)],
        }
    }

    /// Hourly rate in rupees.
    pub fn hourly_rate(self) -> u32 {
        match self {
            Sport::Cricket => 1200,
            Sport::Football => 2500,
            Sport::Tennis => 800,
            Sport::Archery => 600,
            Sport::Badminton => 500,
        }
    }

    pub fn max_players(self) -> u8 {
        match self {
            Sport::Cricket => 22,
            Sport::Football => 14,
            Sport::Tennis => 4,
            Sport::Archery => 6,
            Sport::Badminton => 4,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Review {
    pub author: &'static str,
    pub role: &'static str,
    pub rating: u8,
    pub text: &'static str,
    pub sport: Sport,
}

pub const REVIEWS: &[Review] = &[
    Review {
        author: "Rohan Mehta",
        role: "Weekend cricketer",
        rating: 5,
        text: "The bowling machines and floodlit nets are the best in Andheri. Booking over WhatsApp took a minute.",
        sport: Sport::Cricket,
    },
    Review {
        author: "Priya Nair",
        role: "Corporate league captain",
        rating: 5,
        text: "Our office league plays every Thursday. The turf is always clean and the staff keep things on time.",
        sport: Sport::Football,
    },
    Review {
        author: "Arjun Desai",
        role: "Parent",
        rating: 4,
        text: "My daughter started tennis coaching here last year. Patient coaches and great courts.",
        sport: Sport::Tennis,
    },
    Review {
        author: "Sneha Kulkarni",
        role: "State-level archer",
        rating: 5,
        text: "Finally a proper archery range in Mumbai. The outdoor lane is perfect for competition prep.",
        sport: Sport::Archery,
    },
    Review {
        author: "Vikram Iyer",
        role: "Early-morning regular",
        rating: 4,
        text: "Courts open at six, lighting is excellent and there is always a partner to play with.",
        sport: Sport::Badminton,
    },
];

pub struct Facility {
    pub icon: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
}

pub const FACILITIES: &[Facility] = &[
    Facility { icon: "💡", title: "Floodlit Arenas", detail: "Play until 11 pm under LED floodlights." },
    Facility { icon: "🚿", title: "Changing Rooms", detail: "Showers and lockers for every booking." },
    Facility { icon: "🅿️", title: "Free Parking", detail: "120 bays on site, two-wheelers welcome." },
    Facility { icon: "🥤", title: "Sports Café", detail: "Protein shakes, snacks and cold drinks." },
    Facility { icon: "🎓", title: "Certified Coaching", detail: "Batches for kids, adults and pros." },
    Facility { icon: "🩹", title: "First Aid", detail: "Trained staff and a physio on weekends." },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip() {
        for sport in Sport::ALL {
            assert_eq!(Sport::from_slug(sport.slug()), Some(sport));
        }
        assert_eq!(Sport::from_slug("curling"), None);
    }

    #[test]
    fn reviews_have_valid_ratings() {
        assert!(!REVIEWS.is_empty());
        assert!(REVIEWS.iter().all(|r| (1..=5).contains(&r.rating)));
    }
}
