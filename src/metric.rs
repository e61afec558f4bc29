//! Mouth-opening metric extraction.
//!
//! Computes a scalar opening ratio from one landmark set: the vertical
//! inner-lip gap normalized by the mouth-corner width, which cancels
//! face-to-camera distance. Pure function of its input.

use crate::{
    constants::{GEOMETRY_EPSILON, LEFT_MOUTH_CORNER, LOWER_INNER_LIP, RIGHT_MOUTH_CORNER, UPPER_INNER_LIP},
    landmarks::LandmarkSet,
    Error, Result,
};

/// Extract the mouth-opening ratio from a landmark set.
///
/// Always `>= 0` on success. Monotone in mouth opening and approximately
/// scale-invariant because the lip gap is divided by the mouth width.
///
/// # Errors
///
/// Returns an error if:
/// - Any of the read indices is missing or non-finite (`MalformedLandmarks`);
///   the caller should treat the frame as "no detection" for that subject
/// - The mouth-corner reference distance is below epsilon
///   (`DegenerateGeometry`); likewise a skipped frame
pub fn extract(landmarks: &LandmarkSet) -> Result<f64> {
    let upper = fetch(landmarks, UPPER_INNER_LIP)?;
    let lower = fetch(landmarks, LOWER_INNER_LIP)?;
    let left = fetch(landmarks, LEFT_MOUTH_CORNER)?;
    let right = fetch(landmarks, RIGHT_MOUTH_CORNER)?;

    let gap = (lower.y - upper.y).abs();
    let width = left.distance_to(&right);

    if width < GEOMETRY_EPSILON {
        return Err(Error::DegenerateGeometry(format!(
            "mouth width {width:.2e} below epsilon"
        )));
    }

    Ok(gap / width)
}

fn fetch(landmarks: &LandmarkSet, index: usize) -> Result<crate::landmarks::Point2> {
    let point = landmarks.get(index).ok_or_else(|| {
        Error::MalformedLandmarks(format!(
            "index {index} out of range (set has {} points)",
            landmarks.len()
        ))
    })?;
    if !point.x.is_finite() || !point.y.is_finite() {
        return Err(Error::MalformedLandmarks(format!(
            "non-finite coordinates at index {index}"
        )));
    }
    Ok(point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmarks::Point2;

    /// Landmark set with just the four read indices populated
    fn mouth_set(upper_y: f64, lower_y: f64, width: f64) -> LandmarkSet {
        let mut points = vec![Point2::new(0.0, 0.0); 309];
        points[UPPER_INNER_LIP] = Point2::new(0.5, upper_y);
        points[LOWER_INNER_LIP] = Point2::new(0.5, lower_y);
        points[LEFT_MOUTH_CORNER] = Point2::new(0.5 - width / 2.0, (upper_y + lower_y) / 2.0);
        points[RIGHT_MOUTH_CORNER] = Point2::new(0.5 + width / 2.0, (upper_y + lower_y) / 2.0);
        LandmarkSet::new(points)
    }

    #[test]
    fn test_extract_is_pure_and_nonnegative() {
        let set = mouth_set(0.40, 0.44, 0.10);
        let a = extract(&set).unwrap();
        let b = extract(&set).unwrap();
        assert_eq!(a, b);
        assert!(a >= 0.0);
        assert!((a - 0.4).abs() < 1e-12); // 0.04 gap / 0.10 width
    }

    #[test]
    fn test_scale_invariance() {
        // Same face twice as close to the camera: gap and width both double
        let near = mouth_set(0.40, 0.48, 0.20);
        let far = mouth_set(0.40, 0.44, 0.10);
        let a = extract(&near).unwrap();
        let b = extract(&far).unwrap();
        assert!((a - b).abs() < 1e-12);
    }

    #[test]
    fn test_closed_mouth_is_zero() {
        let set = mouth_set(0.42, 0.42, 0.10);
        assert_eq!(extract(&set).unwrap(), 0.0);
    }

    #[test]
    fn test_short_set_is_malformed() {
        let set = LandmarkSet::new(vec![Point2::new(0.5, 0.5); 10]);
        assert!(matches!(extract(&set), Err(Error::MalformedLandmarks(_))));
    }

    #[test]
    fn test_nan_coordinates_are_malformed() {
        let mut points = vec![Point2::new(0.0, 0.0); 309];
        points[UPPER_INNER_LIP] = Point2::new(0.5, f64::NAN);
        let set = LandmarkSet::new(points);
        assert!(matches!(extract(&set), Err(Error::MalformedLandmarks(_))));
    }

    #[test]
    fn test_zero_width_is_degenerate() {
        let set = mouth_set(0.40, 0.44, 0.0);
        assert!(matches!(extract(&set), Err(Error::DegenerateGeometry(_))));
    }
}
