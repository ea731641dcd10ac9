//! Presentation records for ranked recommendations
//!
//! Converts ranker output into flat, serializable records: one card per
//! recommendation plus map markers for the origin and every result. A UI
//! layer can render these without further computation.

use crate::ranker::RecommendationResult;
use bogortravel_core::GeoPoint;
use serde::Serialize;
use std::fmt;

/// One recommendation as shown to the user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationCard {
    /// 1-based position in the result list
    pub rank: usize,
    pub name: String,
    pub category: String,
    pub rating: f64,
    pub rating_count: u64,
    pub distance_km: f64,
    pub similarity: f64,
    /// `similarity` scaled to 0-100
    pub similarity_percent: f64,
    pub link: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl RecommendationCard {
    pub fn from_result(rank: usize, result: &RecommendationResult) -> Self {
        Self {
            rank,
            name: result.place.name.clone(),
            category: result.place.category.clone(),
            rating: result.place.rating,
            rating_count: result.place.rating_count,
            distance_km: result.distance_km,
            similarity: result.similarity,
            similarity_percent: result.similarity * 100.0,
            link: result.place.external_link.clone(),
            latitude: result.place.latitude,
            longitude: result.place.longitude,
        }
    }
}

impl fmt::Display for RecommendationCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}. {}", self.rank, self.name)?;
        writeln!(f, "   Category:   {}", self.category)?;
        writeln!(f, "   Rating:     {} ({} reviews)", self.rating, self.rating_count)?;
        writeln!(f, "   Distance:   {:.2} km", self.distance_km)?;
        writeln!(f, "   Similarity: {:.1}%", self.similarity_percent)?;
        write!(f, "   Map:        {}", self.link)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    Origin,
    Recommendation,
}

/// A point a map layer should draw
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub kind: MarkerKind,
    pub label: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Full answer to a recommendation request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendResponse {
    pub reference: String,
    pub origin: GeoPoint,
    pub radius_km: f64,
    pub recommendations: Vec<RecommendationCard>,
    pub markers: Vec<MapMarker>,
}

impl RecommendResponse {
    pub fn new(
        reference: impl Into<String>,
        origin: GeoPoint,
        radius_km: f64,
        results: &[RecommendationResult],
    ) -> Self {
        let reference = reference.into();
        let recommendations: Vec<RecommendationCard> = results
            .iter()
            .enumerate()
            .map(|(i, result)| RecommendationCard::from_result(i + 1, result))
            .collect();

        let mut markers = Vec::with_capacity(recommendations.len() + 1);
        markers.push(MapMarker {
            kind: MarkerKind::Origin,
            label: reference.clone(),
            latitude: origin.latitude,
            longitude: origin.longitude,
        });
        markers.extend(recommendations.iter().map(|card| MapMarker {
            kind: MarkerKind::Recommendation,
            label: format!("{} (Rating: {})", card.name, card.rating),
            latitude: card.latitude,
            longitude: card.longitude,
        }));

        Self {
            reference,
            origin,
            radius_km,
            recommendations,
            markers,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.recommendations.len()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for RecommendResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(
                f,
                "No recommendations similar to {} within {} km. Try a larger radius.",
                self.reference, self.radius_km
            );
        }
        writeln!(
            f,
            "Top {} places similar to {} within {} km:",
            self.len(),
            self.reference,
            self.radius_km
        )?;
        for card in &self.recommendations {
            writeln!(f)?;
            writeln!(f, "{}", card)?;
        }
        Ok(())
    }
}
