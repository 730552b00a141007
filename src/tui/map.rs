//! Map projection between terminal cells and coordinates.
//!
//! The canvas uses an equirectangular projection: longitude on x, latitude
//! on y, over a fixed box around Colombia (San Andrés included).

use ratatui::layout::Rect;

use crate::data::Record;
use crate::geo::GeoPoint;

pub const LON_BOUNDS: [f64; 2] = [-82.5, -66.0];
pub const LAT_BOUNDS: [f64; 2] = [-4.8, 13.5];

/// Degrees moved per arrow key press.
pub const CURSOR_STEP_DEG: f64 = 0.1;

/// Center of the map box, where the cursor starts.
pub fn map_center() -> GeoPoint {
    GeoPoint::new(
        (LAT_BOUNDS[0] + LAT_BOUNDS[1]) / 2.0,
        (LON_BOUNDS[0] + LON_BOUNDS[1]) / 2.0,
    )
}

pub fn clamp_to_bounds(point: GeoPoint) -> GeoPoint {
    GeoPoint::new(
        point.lat.clamp(LAT_BOUNDS[0], LAT_BOUNDS[1]),
        point.lon.clamp(LON_BOUNDS[0], LON_BOUNDS[1]),
    )
}

/// Coordinate at the center of terminal cell (`column`, `row`), if the cell
/// lies inside the map `area`.
pub fn cell_to_point(area: Rect, column: u16, row: u16) -> Option<GeoPoint> {
    if area.width == 0 || area.height == 0 {
        return None;
    }
    if column < area.x || column >= area.x + area.width || row < area.y || row >= area.y + area.height {
        return None;
    }

    let fx = ((column - area.x) as f64 + 0.5) / area.width as f64;
    let fy = ((row - area.y) as f64 + 0.5) / area.height as f64;
    let lon = LON_BOUNDS[0] + fx * (LON_BOUNDS[1] - LON_BOUNDS[0]);
    let lat = LAT_BOUNDS[1] - fy * (LAT_BOUNDS[1] - LAT_BOUNDS[0]);
    Some(GeoPoint::new(lat, lon))
}

/// Terminal cell that `point` falls in, if it is inside the map box.
pub fn point_to_cell(area: Rect, point: &GeoPoint) -> Option<(u16, u16)> {
    if area.width == 0 || area.height == 0 {
        return None;
    }
    let fx = (point.lon - LON_BOUNDS[0]) / (LON_BOUNDS[1] - LON_BOUNDS[0]);
    let fy = (LAT_BOUNDS[1] - point.lat) / (LAT_BOUNDS[1] - LAT_BOUNDS[0]);
    if !(0.0..=1.0).contains(&fx) || !(0.0..=1.0).contains(&fy) {
        return None;
    }

    let col = ((fx * area.width as f64) as u16).min(area.width - 1);
    let row = ((fy * area.height as f64) as u16).min(area.height - 1);
    Some((area.x + col, area.y + row))
}

/// Resolve a click: the location of an airport drawn in that cell if there
/// is one, otherwise the cell's own coordinate.
pub fn click_target(area: Rect, column: u16, row: u16, records: &[Record]) -> Option<GeoPoint> {
    let cell_point = cell_to_point(area, column, row)?;
    let on_marker = records
        .iter()
        .map(Record::location)
        .filter(|p| point_to_cell(area, p) == Some((column, row)))
        .min_by(|a, b| {
            a.distance_km(&cell_point)
                .partial_cmp(&b.distance_km(&cell_point))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    Some(on_marker.unwrap_or(cell_point))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::question::tests::sample_record;

    fn area() -> Rect {
        Rect::new(10, 5, 66, 40)
    }

    #[test]
    fn test_outside_area_is_none() {
        assert!(cell_to_point(area(), 9, 10).is_none());
        assert!(cell_to_point(area(), 20, 45).is_none());
        assert!(cell_to_point(Rect::new(0, 0, 0, 0), 0, 0).is_none());
    }

    #[test]
    fn test_corners_map_inside_bounds() {
        let top_left = cell_to_point(area(), 10, 5).unwrap();
        assert!(top_left.lon > LON_BOUNDS[0] && top_left.lon < LON_BOUNDS[0] + 0.5);
        assert!(top_left.lat < LAT_BOUNDS[1] && top_left.lat > LAT_BOUNDS[1] - 0.5);

        let bottom_right = cell_to_point(area(), 75, 44).unwrap();
        assert!(bottom_right.lon < LON_BOUNDS[1]);
        assert!(bottom_right.lat > LAT_BOUNDS[0]);
    }

    #[test]
    fn test_cell_round_trip() {
        let a = area();
        for (col, row) in [(10, 5), (40, 20), (75, 44)] {
            let p = cell_to_point(a, col, row).unwrap();
            assert_eq!(point_to_cell(a, &p), Some((col, row)));
        }
    }

    #[test]
    fn test_point_outside_bounds_has_no_cell() {
        assert!(point_to_cell(area(), &GeoPoint::new(40.0, -74.0)).is_none());
    }

    #[test]
    fn test_click_snaps_to_marker() {
        let record = sample_record();
        let (col, row) = point_to_cell(area(), &record.location()).unwrap();
        let target = click_target(area(), col, row, &[record.clone()]).unwrap();
        assert_eq!(target, record.location());
    }

    #[test]
    fn test_click_away_from_marker_uses_cell() {
        let record = sample_record();
        let target = click_target(area(), 10, 5, &[record.clone()]).unwrap();
        assert_ne!(target, record.location());
        assert_eq!(Some(target), cell_to_point(area(), 10, 5));
    }

    #[test]
    fn test_clamp() {
        let p = clamp_to_bounds(GeoPoint::new(50.0, -100.0));
        assert_eq!(p, GeoPoint::new(LAT_BOUNDS[1], LON_BOUNDS[0]));
    }
}
