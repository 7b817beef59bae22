/// Largest value a latitude can have.
const MAX_LATITUDE: f64 = 90.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Decides which of two raw coordinates is the latitude. A value above 90
    /// can only be a longitude, so when exactly one of them exceeds 90 the
    /// other is taken as the latitude. Otherwise `first` is the latitude.
    pub fn disambiguate(first: f64, second: f64) -> Self {
        if first > MAX_LATITUDE && second <= MAX_LATITUDE {
            LatLng {
                lat: second,
                lng: first,
            }
        } else {
            LatLng {
                lat: first,
                lng: second,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longitude_first() {
        assert_eq!(
            LatLng::disambiguate(130.0, 36.5),
            LatLng {
                lat: 36.5,
                lng: 130.0
            }
        );
    }

    #[test]
    fn latitude_first() {
        assert_eq!(
            LatLng::disambiguate(36.5, 130.0),
            LatLng {
                lat: 36.5,
                lng: 130.0
            }
        );
    }

    #[test]
    fn ambiguous_defaults_to_first_as_latitude() {
        assert_eq!(
            LatLng::disambiguate(36.5, 37.0),
            LatLng {
                lat: 36.5,
                lng: 37.0
            }
        );
        assert_eq!(
            LatLng::disambiguate(120.0, 130.0),
            LatLng {
                lat: 120.0,
                lng: 130.0
            }
        );
    }

    #[test]
    fn boundary_and_negative_values() {
        assert_eq!(
            LatLng::disambiguate(90.0, 36.5),
            LatLng {
                lat: 90.0,
                lng: 36.5
            }
        );
        assert_eq!(
            LatLng::disambiguate(95.0, -95.0),
            LatLng {
                lat: -95.0,
                lng: 95.0
            }
        );
        assert_eq!(
            LatLng::disambiguate(-100.0, 30.0),
            LatLng {
                lat: -100.0,
                lng: 30.0
            }
        );
    }
}
