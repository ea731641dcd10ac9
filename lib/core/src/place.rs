use crate::geo::GeoPoint;
use serde::{Deserialize, Deserializer, Serialize};

/// One catalog entry
///
/// Field names on the wire follow the lookup table exported by the
/// modeling step (`nama_tempat_wisata`, `kategori`, ...). The row index is
/// not stored here: it is the position of the place in its [`Catalog`].
///
/// [`Catalog`]: crate::Catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    #[serde(rename = "nama_tempat_wisata")]
    pub name: String,
    #[serde(rename = "kategori")]
    pub category: String,
    pub latitude: f64,
    pub longitude: f64,
    pub rating: f64,
    #[serde(rename = "jumlah_rating", deserialize_with = "deserialize_count")]
    pub rating_count: u64,
    #[serde(rename = "link")]
    pub external_link: String,
}

impl Place {
    pub fn new(name: impl Into<String>, category: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            latitude,
            longitude,
            rating: 0.0,
            rating_count: 0,
            external_link: String::new(),
        }
    }

    pub fn with_rating(mut self, rating: f64, rating_count: u64) -> Self {
        self.rating = rating;
        self.rating_count = rating_count;
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.external_link = link.into();
        self
    }

    #[inline]
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }

    /// Check that coordinates and rating are usable for ranking
    pub fn validate(&self) -> std::result::Result<(), String> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(format!("place {:?} has invalid latitude {}", self.name, self.latitude));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(format!("place {:?} has invalid longitude {}", self.name, self.longitude));
        }
        if !self.rating.is_finite() {
            return Err(format!("place {:?} has invalid rating {}", self.name, self.rating));
        }
        Ok(())
    }
}

/// Rating counts are exported as floats by some tools ("120.0")
fn deserialize_count<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u64::MAX as f64 {
        Ok(value as u64)
    } else {
        Err(serde::de::Error::custom(format!(
            "invalid rating count {}: expected a non-negative integer",
            value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder() {
        let place = Place::new("Kebun Raya Bogor", "Taman", -6.5976, 106.7996)
            .with_rating(4.7, 85000)
            .with_link("https://maps.google.com/?cid=1");

        assert_eq!(place.rating_count, 85000);
        assert_eq!(place.location(), GeoPoint::new(-6.5976, 106.7996));
        assert!(place.validate().is_ok());
    }

    #[test]
    fn test_deserialize_wire_names() {
        let place: Place = serde_json::from_value(json!({
            "nama_tempat_wisata": "Curug Leuwi Hejo",
            "kategori": "Curug",
            "latitude": -6.58,
            "longitude": 106.95,
            "rating": 4.5,
            "jumlah_rating": 120.0,
            "link": "https://maps.google.com/?cid=2"
        }))
        .unwrap();

        assert_eq!(place.name, "Curug Leuwi Hejo");
        assert_eq!(place.category, "Curug");
        assert_eq!(place.rating_count, 120);
        assert_eq!(place.external_link, "https://maps.google.com/?cid=2");
    }

    #[test]
    fn test_fractional_count_rejected() {
        let result: Result<Place, _> = serde_json::from_value(json!({
            "nama_tempat_wisata": "X",
            "kategori": "Y",
            "latitude": 0.0,
            "longitude": 0.0,
            "rating": 4.0,
            "jumlah_rating": 12.5,
            "link": ""
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_bad_coordinates() {
        assert!(Place::new("A", "c", f64::NAN, 0.0).validate().is_err());
        assert!(Place::new("A", "c", 0.0, 200.0).validate().is_err());
        assert!(Place::new("A", "c", 0.0, 0.0).with_rating(f64::NAN, 1).validate().is_err());
    }
}
