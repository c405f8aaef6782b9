//! Real Moscow route coordinates for realistic test fixtures.

use route_polyline::traits::Located;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

impl Located for Location {
    fn location(&self) -> (f64, f64) {
        self.coords()
    }
}

// ============================================================================
// Walking tour, Garden Ring (visiting order)
// ============================================================================

pub const ATTRACTIONS: &[Location] = &[
    Location::new("New Tretyakov Gallery", 55.732557, 37.604571),
    Location::new("Peter the Great Statue", 55.734102, 37.599051),
    Location::new("Ministry of Foreign Affairs", 55.746119, 37.583316),
    Location::new("Chaliapin House", 55.755729, 37.582960),
    Location::new("Kudrinskaya Square Building", 55.759238, 37.580256),
    Location::new("Moscow Planetarium", 55.759927, 37.585432),
    Location::new("Bulgakov Museum", 55.766862, 37.592374),
    Location::new("Satire Theatre", 55.768639, 37.595068),
    Location::new("Oruzheyny Business Center", 55.772545, 37.605475),
    Location::new("Museum of Decorative Art", 55.773127, 37.610253),
    Location::new("Obraztsov Puppet Theatre", 55.773295, 37.613249),
    Location::new("Obraztsov Monument", 55.773515, 37.619266),
    Location::new("Sklifosovsky Institute", 55.772581, 37.632677),
    Location::new("Red Gates Building", 55.769100, 37.647387),
    Location::new("Usachev Estate", 55.753951, 37.656385),
    Location::new("Kotelnicheskaya Embankment Building", 55.750482, 37.655740),
    Location::new("Bunker-42", 55.740974, 37.652649),
    Location::new("Paveletsky Station", 55.731392, 37.637234),
];

// ============================================================================
// Bus B, clockwise (stop order)
// ============================================================================

pub const BUS_B_STOPS: &[(f64, f64)] = &[
    (55.732433, 37.604147),
    (55.736000, 37.593292),
    (55.737558, 37.588918),
    (55.739299, 37.585948),
    (55.739681, 37.585719),
    (55.742225, 37.584614),
    (55.748863, 37.582905),
    (55.748822, 37.582942),
    (55.756055, 37.584268),
    (55.758010, 37.584645),
    (55.759931, 37.585449),
    (55.762794, 37.587616),
    (55.765386, 37.590267),
    (55.766863, 37.592351),
    (55.771555, 37.602069),
    (55.772510, 37.605435),
    (55.773074, 37.609845),
    (55.773311, 37.613219),
    (55.773462, 37.619195),
    (55.773307, 37.627411),
    (55.772501, 37.633175),
    (55.771737, 37.638331),
    (55.769702, 37.644988),
    (55.768665, 37.648885),
    (55.766275, 37.652770),
    (55.763624, 37.656170),
    (55.760596, 37.657232),
    (55.758076, 37.657364),
    (55.754167, 37.656417),
    (55.751072, 37.655585),
    (55.748760, 37.655348),
    (55.746711, 37.655051),
    (55.741068, 37.652698),
    (55.738799, 37.649651),
    (55.732804, 37.640227),
    (55.731279, 37.637030),
    (55.730499, 37.630525),
    (55.729921, 37.624549),
    (55.730124, 37.619145),
    (55.730332, 37.613166),
    (55.732287, 37.604444),
];

/// Attraction coordinates in visiting order.
pub fn attraction_coords() -> Vec<(f64, f64)> {
    ATTRACTIONS.iter().map(Location::coords).collect()
}
