use std::fmt;

use thiserror::Error;

/// Fixed-point scale for geographic coordinates.
///
/// Coordinates are stored as integral microdegrees. That keeps them
/// `Eq`/`Ord`/`Hash` and makes boundary checks exact, which matters for
/// the inclusive region test: a point on the border is inside, a point
/// one microdegree beyond it is not.
const DEG_SCALE: f64 = 1_000_000.0;

pub type CoordMicroDeg = i64;

#[derive(Debug, Error)]
#[error("Invalid latitude: {0}")]
pub struct InvalidLatitude(f64);

#[derive(Debug, Error)]
#[error("Invalid longitude: {0}")]
pub struct InvalidLongitude(f64);

/// Geographic latitude in the closed interval [-90 deg, +90 deg].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LatCoord(CoordMicroDeg);

impl LatCoord {
    pub const fn min() -> Self {
        Self(-90_000_000)
    }

    pub const fn max() -> Self {
        Self(90_000_000)
    }

    pub const fn from_micro_deg(micro_deg: CoordMicroDeg) -> Self {
        Self(micro_deg)
    }

    pub const fn to_micro_deg(self) -> CoordMicroDeg {
        self.0
    }

    pub fn try_from_deg(deg: f64) -> Result<Self, InvalidLatitude> {
        let unchecked = Self::from_deg(deg);
        if unchecked.is_valid() {
            Ok(unchecked)
        } else {
            Err(InvalidLatitude(deg))
        }
    }

    pub fn from_deg(deg: f64) -> Self {
        Self((deg * DEG_SCALE).round() as CoordMicroDeg)
    }

    pub fn to_deg(self) -> f64 {
        self.0 as f64 / DEG_SCALE
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }

    pub fn clamp(self) -> Self {
        Self(self.0.clamp(Self::min().0, Self::max().0))
    }
}

impl fmt::Display for LatCoord {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.to_deg())
    }
}

/// Geographic longitude in the closed interval [-180 deg, +180 deg].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LngCoord(CoordMicroDeg);

impl LngCoord {
    pub const fn min() -> Self {
        Self(-180_000_000)
    }

    pub const fn max() -> Self {
        Self(180_000_000)
    }

    pub const fn from_micro_deg(micro_deg: CoordMicroDeg) -> Self {
        Self(micro_deg)
    }

    pub const fn to_micro_deg(self) -> CoordMicroDeg {
        self.0
    }

    pub fn try_from_deg(deg: f64) -> Result<Self, InvalidLongitude> {
        let unchecked = Self::from_deg(deg);
        if unchecked.is_valid() {
            Ok(unchecked)
        } else {
            Err(InvalidLongitude(deg))
        }
    }

    pub fn from_deg(deg: f64) -> Self {
        Self((deg * DEG_SCALE).round() as CoordMicroDeg)
    }

    pub fn to_deg(self) -> f64 {
        self.0 as f64 / DEG_SCALE
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }

    pub fn clamp(self) -> Self {
        Self(self.0.clamp(Self::min().0, Self::max().0))
    }
}

impl fmt::Display for LngCoord {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.to_deg())
    }
}

/// A geographic position.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MapPoint {
    lat: LatCoord,
    lng: LngCoord,
}

impl MapPoint {
    pub const fn new(lat: LatCoord, lng: LngCoord) -> Self {
        Self { lat, lng }
    }

    pub const fn lat(self) -> LatCoord {
        self.lat
    }

    pub const fn lng(self) -> LngCoord {
        self.lng
    }

    pub fn from_lat_lng_deg(lat_deg: f64, lng_deg: f64) -> Self {
        Self::new(LatCoord::from_deg(lat_deg), LngCoord::from_deg(lng_deg))
    }

    pub fn try_from_lat_lng_deg(lat_deg: f64, lng_deg: f64) -> Option<Self> {
        let lat = LatCoord::try_from_deg(lat_deg).ok()?;
        let lng = LngCoord::try_from_deg(lng_deg).ok()?;
        Some(Self::new(lat, lng))
    }

    pub fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat.to_deg(), self.lng.to_deg())
    }

    pub fn is_valid(self) -> bool {
        self.lat.is_valid() && self.lng.is_valid()
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// A geographic bounding box spanned by its southwest and northeast
/// corners. All four edges belong to the box.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MapBbox {
    sw: MapPoint,
    ne: MapPoint,
}

impl MapBbox {
    pub const fn new(sw: MapPoint, ne: MapPoint) -> Self {
        Self { sw, ne }
    }

    pub const fn southwest(self) -> MapPoint {
        self.sw
    }

    pub const fn northeast(self) -> MapPoint {
        self.ne
    }

    pub fn is_valid(self) -> bool {
        self.sw.is_valid()
            && self.ne.is_valid()
            && self.sw.lat() <= self.ne.lat()
            && self.sw.lng() <= self.ne.lng()
    }

    pub fn is_empty(self) -> bool {
        self.sw.lat() == self.ne.lat() || self.sw.lng() == self.ne.lng()
    }

    pub fn contains_point(self, pt: MapPoint) -> bool {
        pt.lat() >= self.sw.lat()
            && pt.lat() <= self.ne.lat()
            && pt.lng() >= self.sw.lng()
            && pt.lng() <= self.ne.lng()
    }

    pub fn center(self) -> MapPoint {
        let lat = LatCoord::from_micro_deg(
            (self.sw.lat().to_micro_deg() + self.ne.lat().to_micro_deg()) / 2,
        );
        let lng = LngCoord::from_micro_deg(
            (self.sw.lng().to_micro_deg() + self.ne.lng().to_micro_deg()) / 2,
        );
        MapPoint::new(lat, lng)
    }
}

impl fmt::Display for MapBbox {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{},{}", self.sw, self.ne)
    }
}
