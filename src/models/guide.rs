use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TourGuide {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    #[serde(default)]
    pub bio: String,
    pub years_of_experience: u32,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub personality_traits: Vec<String>,
    /// Price per hour in IDR.
    pub hourly_rate: f64,
    /// Price per day in IDR.
    pub daily_rate: f64,
    /// Average review rating, 0.0 - 5.0.
    pub average_rating: f64,
    #[serde(default)]
    pub total_reviews: u32,
    #[serde(default)]
    pub cities: Vec<String>,
    #[serde(default = "default_flag")]
    pub is_available: bool,
    #[serde(default)]
    pub is_verified: bool,
}

fn default_flag() -> bool {
    true
}

/// The query side of guide matching: what the itinerary asks for.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GuidePreferences {
    pub interests: Vec<String>,
    pub budget_range: String,
    pub duration_days: u32,
}

/// A guide paired with its compatibility assessment, ordered best-first.
#[derive(Debug, Serialize, Clone)]
pub struct GuideMatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub compatibility_score: f64,
    pub match_reasons: Vec<String>,
    pub recommended_for: String,
    pub estimated_cost_per_day: f64,
    pub guide: TourGuide,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MatchGuidesRequest {
    pub city: String,
    #[serde(default)]
    pub interests: Vec<String>,
    pub budget_range: String,
    pub duration_days: u32,
}
