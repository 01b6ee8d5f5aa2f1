/// Amenity categories that get fetched and rendered, in pipeline order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Amenity {
    Restaurant,
    Cafe,
    Hotel,
}

impl Amenity {
    /// Fetch and render order is fixed; layers appear in this order
    /// in the output's layer control.
    pub const ALL: [Amenity; 3] = [Amenity::Restaurant, Amenity::Cafe, Amenity::Hotel];

    /// Overpass tag value, matched verbatim against `amenity=*`
    pub fn tag(self) -> &'static str {
        match self {
            Amenity::Restaurant => "restaurant",
            Amenity::Cafe => "cafe",
            Amenity::Hotel => "hotel",
        }
    }

    /// Layer label shown in the layer control
    pub fn label(self) -> &'static str {
        match self {
            Amenity::Restaurant => "Restaurants",
            Amenity::Cafe => "Cafes",
            Amenity::Hotel => "Hotels",
        }
    }

    /// Singular label used in marker popups
    pub fn singular(self) -> &'static str {
        match self {
            Amenity::Restaurant => "Restaurant",
            Amenity::Cafe => "Cafe",
            Amenity::Hotel => "Hotel",
        }
    }

    /// Font Awesome glyph for the marker icon
    pub fn icon(self) -> &'static str {
        match self {
            Amenity::Restaurant => "cutlery",
            Amenity::Cafe => "coffee",
            Amenity::Hotel => "bed",
        }
    }

    /// Marker pin color
    pub fn color(self) -> &'static str {
        match self {
            Amenity::Restaurant => "#38aadd",
            Amenity::Cafe => "#72b026",
            Amenity::Hotel => "#d252b9",
        }
    }
}
