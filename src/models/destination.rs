use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Destination {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub description: String,
    pub category: String,
    pub city: String,
    /// Typical entry cost per person, in IDR.
    pub price: f64,
    /// Average visitor rating, 0.0 - 5.0.
    pub rating: f64,
    pub duration_minutes: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Destination {
    /// Text fields joined for similarity indexing.
    pub fn combined_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.name, self.description, self.category, self.city
        )
    }
}

/// A destination annotated with retrieval scores.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RankedDestination {
    #[serde(flatten)]
    pub destination: Destination,
    /// Cosine similarity between the interest query and the destination text, 0.0 - 1.0.
    pub similarity_score: f64,
    /// Blend of similarity and rating used for final ordering, 0.0 - 1.0.
    pub combined_score: f64,
}

#[derive(Debug, Clone)]
pub struct RetrievalQuery {
    pub city: String,
    pub interests: Vec<String>,
    pub budget_tier: String,
    pub max_results: usize,
}
