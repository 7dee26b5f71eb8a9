//! Built-in catalog data used when no catalog file is configured.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::model::{Category, DestinationEntry, ItineraryDay, SummaryContent};

/// Generic three-day plan for destinations without their own itinerary.
pub fn default_itinerary() -> Vec<ItineraryDay> {
    vec![
        ItineraryDay::new(
            1,
            "Arrival & City Tour",
            &[
                "Airport pickup and hotel check-in",
                "Local market exploration",
                "Traditional dinner at riverside restaurant",
            ],
        ),
        ItineraryDay::new(
            2,
            "Adventure & Culture",
            &[
                "Morning trek to viewpoint",
                "Cultural workshop with locals",
                "Evening folk performance",
            ],
        ),
        ItineraryDay::new(
            3,
            "Relaxation & Departure",
            &[
                "Spa and wellness session",
                "Shopping for souvenirs",
                "Airport transfer",
            ],
        ),
    ]
}

pub fn default_summary() -> SummaryContent {
    let list = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    SummaryContent {
        inclusions: list(&[
            "Stay (2 nights)",
            "Breakfast & Dinner",
            "Guided trek",
            "Cultural activities",
        ]),
        exclusions: list(&[
            "Flights",
            "Personal expenses",
            "Extra activities",
            "Travel insurance",
        ]),
        things_to_carry: list(&["Warm jacket", "Trek shoes", "ID proof", "Sunscreen"]),
    }
}

const STAY_HIGHLIGHTS: [&str; 4] = ["4-star stay", "FREE Meals", "Bonfire", "Camping"];

fn national(name: &str, description: &str, price: Decimal, rating: f32) -> DestinationEntry {
    DestinationEntry {
        description: description.to_string(),
        price_inr: Some(price),
        rating: Some(rating),
        highlights: STAY_HIGHLIGHTS.iter().map(|s| s.to_string()).collect(),
        ..DestinationEntry::new(name, Category::National)
    }
}

fn international(
    name: &str,
    country: &str,
    description: &str,
    price: Decimal,
    rating: f32,
    experiences: &[&str],
) -> DestinationEntry {
    DestinationEntry {
        country: Some(country.to_string()),
        description: description.to_string(),
        price_inr: Some(price),
        rating: Some(rating),
        highlights: experiences.iter().map(|s| s.to_string()).collect(),
        ..DestinationEntry::new(name, Category::International)
    }
}

fn trek(name: &str, description: &str, price: Decimal, rating: f32) -> DestinationEntry {
    DestinationEntry {
        description: description.to_string(),
        duration_days: 4,
        price_inr: Some(price),
        rating: Some(rating),
        ..DestinationEntry::new(name, Category::Trek)
    }
}

pub fn destinations() -> Vec<DestinationEntry> {
    vec![
        national(
            "Munsiyari",
            "Winding roads, hot chai, and sunsets that stay with you.",
            dec!(15000),
            4.8,
        ),
        national(
            "Nainital to Mukteshwar",
            "Calm lakes and quiet hills to slow down in.",
            dec!(12000),
            4.7,
        ),
        national(
            "Tirthan Jibhi - Manali",
            "Waterfalls, pine trails, and cozy mountain vibes.",
            dec!(18000),
            4.9,
        ),
        national(
            "Tawang Arunachal Pradesh",
            "Monasteries, mountain passes, and endless views.",
            dec!(14000),
            4.6,
        ),
        national(
            "Mussoorie - Landour - Rishikesh",
            "Colonial charm, lazy walks, and a dash of adventure.",
            dec!(14000),
            4.6,
        ),
        national(
            "Shillong",
            "Music, mist, and a hill town that feels alive.",
            dec!(14000),
            4.6,
        ),
        DestinationEntry::new("Dzukou Valley", Category::National),
        DestinationEntry::new("Nepal", Category::International),
        DestinationEntry::new("Thailand", Category::International),
        DestinationEntry::new("Malaysia", Category::International),
        DestinationEntry::new("Maldives", Category::International),
        DestinationEntry::new("Srilanka", Category::International),
        international(
            "Phuket",
            "Thailand",
            "Crystal beaches, floating markets, and temple sunsets.",
            dec!(45000),
            4.9,
            &["Beach Clubs", "Island Hopping", "Night Markets", "Temple Tours"],
        ),
        international(
            "Kuala Lumpur",
            "Malaysia",
            "Street food adventures, twin tower views, and rooftop infinity pools.",
            dec!(38000),
            4.8,
            &["Petronas Towers", "Street Food", "Batu Caves", "Shopping"],
        ),
        international(
            "Colombo",
            "Sri Lanka",
            "Ancient temples, spice gardens, and train rides through tea plantations.",
            dec!(35000),
            4.7,
            &["Tea Plantations", "Ancient Temples", "Coastal Drives", "Wildlife Safari"],
        ),
        international(
            "Malé",
            "Maldives",
            "Overwater bungalows and coral gardens.",
            dec!(85000),
            5.0,
            &["Overwater Villas", "Snorkeling", "Sunset Cruises", "Spa Retreats"],
        ),
        trek(
            "Nagaland Tribal Trails",
            "The Dzukou Valley trek through Nagaland hills.",
            dec!(20000),
            4.9,
        ),
        trek(
            "Munsiyari Glacier Trek",
            "Khaliya Top trek with 360° views of the Himalayas.",
            dec!(18000),
            4.8,
        ),
    ]
}

/// Itineraries for destinations that have their own plan.
pub fn itineraries() -> Vec<(String, Vec<ItineraryDay>)> {
    vec![
        (
            "Nagaland Tribal Trails".to_string(),
            vec![
                ItineraryDay::new(
                    1,
                    "Dimapur Arrival",
                    &[
                        "Pickup from Guwahati to Dimapur",
                        "Dinner & overnight stay in Dimapur",
                    ],
                ),
                ItineraryDay::new(
                    2,
                    "Dimapur → Kigwama",
                    &[
                        "Morning breakfast",
                        "Drive to Kigwama (3 hrs)",
                        "Room allotment, evening snacks & dinner",
                    ],
                ),
                ItineraryDay::new(
                    3,
                    "Trek to Base Camp",
                    &[
                        "Breakfast",
                        "Start trek to base camp (10–11AM)",
                        "Lunch on trail, reach camp by 4–5PM",
                        "Evening bonfire, music & dinner",
                    ],
                ),
                ItineraryDay::new(
                    4,
                    "Valley Visit & Return",
                    &[
                        "Breakfast at 7AM",
                        "Enjoy Dzukou Valley nature",
                        "Return to basecamp & homestay",
                        "Evening departure for railway station",
                    ],
                ),
            ],
        ),
        (
            "Munsiyari Glacier Trek".to_string(),
            vec![
                ItineraryDay::new(
                    1,
                    "Kathgodam → Munsiyari",
                    &[
                        "Scenic drive via Almora & Bageshwar",
                        "Evening arrival at Munsiyari, check-in",
                        "Dinner & rest with Panchachuli peaks view",
                    ],
                ),
                ItineraryDay::new(
                    2,
                    "Munsiyari → Khaliya Top Camp",
                    &[
                        "Short drive to trek start (Balanti Farm)",
                        "Trek through oak, pine & rhododendron forests",
                        "Reach campsite below Khaliya Top",
                        "Dinner & overnight in tents",
                    ],
                ),
                ItineraryDay::new(
                    3,
                    "Khaliya Top Summit & Return",
                    &[
                        "Early start to Khaliya Top summit (360° Himalayan views)",
                        "Descend to Balanti Farm",
                        "Drive back to Munsiyari, rest & dinner",
                    ],
                ),
                ItineraryDay::new(
                    4,
                    "Munsiyari → Kathgodam",
                    &[
                        "Breakfast & return drive to Kathgodam",
                        "Trip ends with Himalayan memories",
                    ],
                ),
            ],
        ),
    ]
}
