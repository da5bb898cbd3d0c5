use bson::oid::ObjectId;
use bson::DateTime;
use serde::{Deserialize, Serialize};

use crate::models::destination::RankedDestination;

pub mod base;
pub mod populated;
pub mod transforms;

pub use base::{FeaturedVacation, ItinerarySubmission};

/// A complete day-by-day plan. This is the JSON schema both generation paths
/// produce; the external generator is prompted to emit it directly.
///
/// Cost fields are free-text IDR strings ("IDR 1,250,000") on both paths;
/// `PricingService::extract_cost_value` converts them to numbers downstream.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ItineraryPlan {
    pub title: String,
    pub total_estimated_cost: String,
    #[serde(default)]
    pub overview: String,
    pub days: Vec<DayPlan>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DayPlan {
    // An earlier revision of the generator schema used day_number/title;
    // both spellings are accepted and normalized here at the parse boundary.
    #[serde(alias = "day_number")]
    pub day: u32,
    #[serde(alias = "title")]
    pub theme: String,
    #[serde(default)]
    pub activities: Vec<PlannedActivity>,
    #[serde(default)]
    pub meals: Vec<Meal>,
    #[serde(default, alias = "transport")]
    pub transportation: Vec<TransportLeg>,
    #[serde(default)]
    pub daily_total: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PlannedActivity {
    /// Either a 24-hour window ("09:00 - 11:00") or an AM/PM range
    /// ("9:00 AM - 11:00 AM"), depending on the generation path.
    pub time: String,
    pub activity: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cost: String,
    #[serde(default)]
    pub tips: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Meal {
    pub time: String,
    #[serde(rename = "type")]
    pub meal_type: String,
    pub restaurant: String,
    #[serde(default)]
    pub recommended_dishes: Vec<String>,
    #[serde(default)]
    pub cost: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TransportLeg {
    pub from: String,
    pub to: String,
    pub method: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub cost: String,
}

/// Inbound generation request.
#[derive(Debug, Deserialize, Clone)]
pub struct ItineraryRequest {
    pub city: String,
    #[serde(default)]
    pub interests: Vec<String>,
    pub budget_range: String,
    pub duration_days: u32,
    #[serde(default = "default_travel_style")]
    pub travel_style: String,
    #[serde(default)]
    pub additional_preferences: String,
}

fn default_travel_style() -> String {
    "relaxed".to_string()
}

/// Caller-facing generation result. Generation never hard-fails: any external
/// failure degrades to the deterministic composer, so `success` stays true.
#[derive(Debug, Serialize, Clone)]
pub struct GenerationOutcome {
    pub success: bool,
    pub itinerary: ItineraryPlan,
    pub rag_enabled: bool,
    pub destinations_used: Vec<RankedDestination>,
}

/// Persisted shape for a generated itinerary.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GenerationRecord {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub city: String,
    pub interests: Vec<String>,
    pub budget_range: String,
    pub duration_days: u32,
    pub travel_style: String,
    pub rag_enabled: bool,
    pub itinerary: ItineraryPlan,
    pub created_at: DateTime,
}
