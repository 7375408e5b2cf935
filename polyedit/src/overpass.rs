use crate::model::LatLng;

/// Formats `points` as an Overpass QL area filter: `(poly:"lat lng lat lng ...")`.
/// Returns `None` for an empty polygon.
pub fn poly_filter(points: &[LatLng]) -> Option<String> {
    if points.is_empty() {
        return None;
    }
    let coords: Vec<String> = points
        .iter()
        .flat_map(|p| [format!("{:?}", p.lat), format!("{:?}", p.lng)])
        .collect();
    Some(format!("(poly:\"{}\")", coords.join(" ")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_polygon_has_no_filter() {
        assert_eq!(poly_filter(&[]), None);
    }

    #[test]
    fn coordinates_are_flattened_in_order() {
        let pts = [LatLng::new(48.0, 11.5), LatLng::new(48.25, -0.125), LatLng::new(47.0, 11.0)];
        assert_eq!(
            poly_filter(&pts).unwrap(),
            "(poly:\"48.0 11.5 48.25 -0.125 47.0 11.0\")"
        );
    }
}
