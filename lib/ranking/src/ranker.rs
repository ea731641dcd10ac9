//! Hybrid ranker
//!
//! Combines the precomputed similarity signal with a radius filter and
//! quality signals (rating, rating count) into one ordered result list.

use bogortravel_core::{Catalog, Error, GeoPoint, Place, Result};
use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::sync::Arc;
use tracing::debug;

/// Default search radius in kilometers
pub const DEFAULT_RADIUS_KM: f64 = 10.0;
/// Default number of recommendations
pub const DEFAULT_LIMIT: usize = 5;

/// A recommendation request
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendQuery {
    /// Name of the place the user likes
    pub reference: String,
    /// Assumed user location
    pub origin: GeoPoint,
    pub radius_km: f64,
    pub limit: usize,
}

impl RecommendQuery {
    pub fn new(reference: impl Into<String>, origin: GeoPoint) -> Self {
        Self {
            reference: reference.into(),
            origin,
            radius_km: DEFAULT_RADIUS_KM,
            limit: DEFAULT_LIMIT,
        }
    }

    pub fn radius_km(mut self, radius_km: f64) -> Self {
        self.radius_km = radius_km;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    fn validate(&self) -> Result<()> {
        if !(self.radius_km.is_finite() && self.radius_km > 0.0) {
            return Err(Error::InvalidQuery(format!(
                "radius must be a positive number of kilometers, got {}",
                self.radius_km
            )));
        }
        if self.limit == 0 {
            return Err(Error::InvalidQuery("limit must be at least 1".to_string()));
        }
        if !self.origin.is_finite() {
            return Err(Error::InvalidQuery(format!(
                "origin ({}, {}) is not a finite coordinate",
                self.origin.latitude, self.origin.longitude
            )));
        }
        Ok(())
    }
}

/// One ranked candidate
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationResult {
    /// Catalog row of the place
    pub index: usize,
    pub place: Place,
    /// Similarity to the reference place
    pub similarity: f64,
    /// Distance from the query origin
    pub distance_km: f64,
}

/// Ranks catalog places against a reference place
///
/// The ranker holds no state besides the shared catalog, so a single
/// instance can serve concurrent queries.
#[derive(Debug, Clone)]
pub struct HybridRanker {
    catalog: Arc<Catalog>,
}

impl HybridRanker {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Recommend places similar to `reference_name` within `radius_km` of
    /// `(origin_lat, origin_lon)`
    ///
    /// # Returns
    /// At most `limit` results ordered by similarity, then rating, then
    /// rating count, all descending. An empty list means nothing passed the
    /// radius filter; an unknown reference fails with [`Error::PlaceNotFound`].
    pub fn recommend(
        &self,
        reference_name: &str,
        origin_lat: f64,
        origin_lon: f64,
        radius_km: f64,
        limit: usize,
    ) -> Result<Vec<RecommendationResult>> {
        let query = RecommendQuery::new(reference_name, GeoPoint::new(origin_lat, origin_lon))
            .radius_km(radius_km)
            .limit(limit);
        self.query(&query)
    }

    /// Recommend using the reference place's own coordinate as the origin
    pub fn recommend_from_place(
        &self,
        reference_name: &str,
        radius_km: f64,
        limit: usize,
    ) -> Result<Vec<RecommendationResult>> {
        let origin = self.catalog.location_of(reference_name)?;
        let query = RecommendQuery::new(reference_name, origin)
            .radius_km(radius_km)
            .limit(limit);
        self.query(&query)
    }

    pub fn query(&self, query: &RecommendQuery) -> Result<Vec<RecommendationResult>> {
        query.validate()?;

        // Similarity layer: every row of the reference's similarity vector
        let index = self.catalog.find_index_by_name(&query.reference)?;
        let scores = self.catalog.similarity_row(index)?;
        let universe = scores.len();

        // Identity exclusion happens before the radius filter
        let candidates = self
            .catalog
            .places()
            .iter()
            .zip(scores)
            .enumerate()
            .filter(|(_, (place, _))| place.name != query.reference);

        let mut survivors: Vec<(usize, &Place, f64, f64)> = candidates
            .filter_map(|(i, (place, &similarity))| {
                let distance_km = query.origin.distance_km(&place.location());
                (distance_km <= query.radius_km).then_some((i, place, similarity, distance_km))
            })
            .collect();
        let within_radius = survivors.len();

        // Stable: equal keys keep catalog row order
        survivors.sort_by_key(|&(_, place, similarity, _)| {
            Reverse((
                OrderedFloat(similarity),
                OrderedFloat(place.rating),
                place.rating_count,
            ))
        });
        survivors.truncate(query.limit);

        debug!(
            reference = %query.reference,
            universe,
            within_radius,
            returned = survivors.len(),
            "Ranked recommendations"
        );

        Ok(survivors
            .into_iter()
            .map(|(index, place, similarity, distance_km)| RecommendationResult {
                index,
                place: place.clone(),
                similarity,
                distance_km,
            })
            .collect())
    }
}
