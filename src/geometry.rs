//! Geometric operations on polygons.

/// An (X, Y) point in any unit system.
pub type Point = [f64; 2];

/// A polygon ring as an ordered list of points.
pub type Ring = Vec<Point>;

/// Returns the lower left corner of the bounding rectangle for a polygon.
///
/// # Panics
///
/// Panics when `polygon` is empty.
pub fn lower_left_point(polygon: &[Point]) -> Point {
    let mut min_pt = polygon[0];
    for point in &polygon[1..] {
        min_pt[0] = min_pt[0].min(point[0]);
        min_pt[1] = min_pt[1].min(point[1]);
    }
    min_pt
}

/// Returns the upper right corner of the bounding rectangle for a polygon.
///
/// # Panics
///
/// Panics when `polygon` is empty.
pub fn upper_right_point(polygon: &[Point]) -> Point {
    let mut max_pt = polygon[0];
    for point in &polygon[1..] {
        max_pt[0] = max_pt[0].max(point[0]);
        max_pt[1] = max_pt[1].max(point[1]);
    }
    max_pt
}

/// Signed area of a polygon via the shoelace formula.
///
/// Positive for counterclockwise winding, negative for clockwise.
pub fn polygon_area(polygon: &[Point]) -> f64 {
    let mut area = 0.0;
    for (i, pt) in polygon.iter().enumerate() {
        let prev = polygon[(i + polygon.len() - 1) % polygon.len()];
        area += prev[0] * pt[1] - prev[1] * pt[0];
    }
    area / 2.0
}

fn magnitude(vec: Point) -> f64 {
    (vec[0] * vec[0] + vec[1] * vec[1]).sqrt()
}

fn dot(v1: Point, v2: Point) -> f64 {
    v1[0] * v2[0] + v1[1] * v2[1]
}

fn determinant(v1: Point, v2: Point) -> f64 {
    v1[0] * v2[1] - v1[1] * v2[0]
}

/// Smallest angle between two vectors, in degrees.
pub fn vector_angle(vector_1: Point, vector_2: Point) -> f64 {
    let mags = magnitude(vector_1) * magnitude(vector_2);
    if mags == 0.0 {
        // zero-length vector
        return 0.0;
    }
    // float tolerance can push the ratio outside [-1, 1]
    let ratio = (dot(vector_1, vector_2) / mags).clamp(-1.0, 1.0);
    ratio.acos().to_degrees()
}

/// Counterclockwise angle from `vector_2` to `vector_1`, in degrees.
pub fn vector_angle_counterclockwise(vector_1: Point, vector_2: Point) -> f64 {
    let inner = vector_angle(vector_1, vector_2);
    let det = determinant(vector_1, vector_2);
    if det >= 0.0 {
        inner
    } else {
        360.0 - inner
    }
}

/// Rotates a point counterclockwise by `angle` degrees around `origin`.
pub fn rotate(point: Point, angle: f64, origin: Point) -> Point {
    let trans = [point[0] - origin[0], point[1] - origin[1]];
    let angle_rad = angle.to_radians();
    let (sin_a, cos_a) = angle_rad.sin_cos();
    let qx = cos_a * trans[0] - sin_a * trans[1];
    let qy = sin_a * trans[0] + cos_a * trans[1];
    [qx + origin[0], qy + origin[1]]
}

fn distance_to_point(pt1: Point, pt2: Point) -> f64 {
    magnitude([pt1[0] - pt2[0], pt1[1] - pt2[1]])
}

/// Rotates a polygon to align with the XY axes when the vertices nearest the
/// lower left corner form a right angle.
///
/// The input is a list of rings where the first ring is the outer boundary
/// with a repeated closing vertex. Returns the input unchanged when no
/// rotation applies. All output coordinates are shifted to be non-negative.
pub fn rotate_polygon_to_axes(polygon: &[Ring]) -> Vec<Ring> {
    if polygon.is_empty() || polygon[0].len() < 4 {
        return polygon.to_vec();
    }

    // drop the repeated closing vertex and orient counterclockwise
    let mut bound_poly: Ring = polygon[0][..polygon[0].len() - 1].to_vec();
    if polygon_area(&bound_poly) < 0.0 {
        bound_poly.reverse();
    }

    // vertex of the boundary nearest the bounding-box lower left corner
    let min_pt = lower_left_point(&bound_poly);
    let mut origin_i = 0;
    let mut best_dist = f64::INFINITY;
    for (i, point) in bound_poly.iter().enumerate() {
        let dist = distance_to_point(min_pt, *point);
        if dist < best_dist {
            best_dist = dist;
            origin_i = i;
        }
    }
    let origin = bound_poly[origin_i];
    let prev_pt = bound_poly[(origin_i + bound_poly.len() - 1) % bound_poly.len()];
    let next_pt = bound_poly[(origin_i + 1) % bound_poly.len()];

    if origin[0] == min_pt[0] && origin[1] == min_pt[1] {
        return polygon.to_vec(); // already oriented to the XY axes
    }
    let vec_1 = [next_pt[0] - origin[0], next_pt[1] - origin[1]];
    let vec_2 = [prev_pt[0] - origin[0], prev_pt[1] - origin[1]];
    let corner = vector_angle(vec_1, vec_2);
    if !(89.0..91.0).contains(&corner) {
        return polygon.to_vec(); // no right angle to align against
    }

    let y_axis = [0.0, 1.0];
    let mut rot_ang = vector_angle_counterclockwise(vec_2, y_axis);
    if rot_ang > 180.0 {
        rot_ang -= 360.0;
    }

    let mut rotated: Vec<Ring> = polygon
        .iter()
        .map(|ring| ring.iter().map(|pt| rotate(*pt, rot_ang, origin)).collect())
        .collect();

    // shift so every coordinate is non-negative
    let mut x_shift = 0.0_f64;
    let mut y_shift = 0.0_f64;
    for ring in &rotated {
        for pt in ring {
            if pt[0] < 0.0 {
                x_shift = x_shift.max(-pt[0]);
            }
            if pt[1] < 0.0 {
                y_shift = y_shift.max(-pt[1]);
            }
        }
    }
    for ring in &mut rotated {
        for pt in ring.iter_mut() {
            pt[0] += x_shift;
            pt[1] += y_shift;
        }
    }

    rotated
}

/// Sorts vertices by angle around their geometric mean.
pub fn sort_vertices(vertices: &[Point], counterclockwise: bool) -> Vec<Point> {
    if vertices.is_empty() {
        return Vec::new();
    }
    let n = vertices.len() as f64;
    let mean_x = vertices.iter().map(|p| p[0]).sum::<f64>() / n;
    let mean_y = vertices.iter().map(|p| p[1]).sum::<f64>() / n;

    let mut keyed: Vec<(f64, Point)> = vertices
        .iter()
        .map(|p| ((p[1] - mean_y).atan2(p[0] - mean_x), *p))
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut sorted: Vec<Point> = keyed.into_iter().map(|(_, p)| p).collect();
    if !counterclockwise {
        sorted.reverse();
    }
    sorted
}
