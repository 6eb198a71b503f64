use crate::outline::{signed_area, triangulate, ContourCollector};
use glam::Vec2;
use mimic_core::MeshData;
use ttf_parser::Face;

/// Errors from the text mesh pipeline.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("font parse error: {0}")]
    Face(#[from] ttf_parser::FaceParsingError),
    #[error("label {0:?} produced no outline")]
    EmptyOutline(String),
}

/// Build an extruded prism mesh for `label`.
///
/// The font's em square maps to `size` world units; the glyphs are extruded
/// `depth` units along -Z. The result is centered on x/y with the front
/// face at z = 0 and the back face at z = -depth.
pub fn build_text_mesh(
    font_data: &[u8],
    label: &str,
    size: f32,
    depth: f32,
) -> Result<MeshData, TextError> {
    let face = Face::parse(font_data, 0)?;
    let scale = size / face.units_per_em() as f32;

    // Lay the label out along one baseline, collecting flattened contours
    // in font units shifted by the running pen position.
    let mut contours: Vec<Vec<Vec2>> = Vec::new();
    let mut pen = 0.0_f32;
    for ch in label.chars() {
        let Some(glyph) = face.glyph_index(ch) else {
            tracing::warn!("font has no glyph for {ch:?}, skipping");
            continue;
        };
        let mut collector = ContourCollector::new();
        if face.outline_glyph(glyph, &mut collector).is_some() {
            for mut contour in collector.finish() {
                for p in &mut contour {
                    p.x += pen;
                }
                contours.push(contour);
            }
        }
        pen += f32::from(face.glyph_hor_advance(glyph).unwrap_or(0));
    }

    if contours.is_empty() {
        return Err(TextError::EmptyOutline(label.to_string()));
    }

    let (min, max) = bounds(&contours);
    let center = (min + max) / 2.0;

    let mut mesh = MeshData::default();
    for contour in &contours {
        let mut points: Vec<Vec2> = contour.iter().map(|p| (*p - center) * scale).collect();
        // TrueType outer contours run clockwise; the extruder wants
        // counter-clockwise so the side normals face outward.
        if signed_area(&points) < 0.0 {
            points.reverse();
        }
        extrude_contour(&mut mesh, &points, depth);
    }
    Ok(mesh)
}

fn bounds(contours: &[Vec<Vec2>]) -> (Vec2, Vec2) {
    let mut min = Vec2::splat(f32::INFINITY);
    let mut max = Vec2::splat(f32::NEG_INFINITY);
    for p in contours.iter().flatten() {
        min = min.min(*p);
        max = max.max(*p);
    }
    (min, max)
}

/// Append front face, back face, and side walls for one closed contour.
fn extrude_contour(mesh: &mut MeshData, points: &[Vec2], depth: f32) {
    let tris = triangulate(points);
    if tris.is_empty() {
        return;
    }

    let base = mesh.positions.len() as u32;
    let ring = points.len() as u32;

    // Front ring at z = 0, back ring at z = -depth.
    for p in points {
        mesh.positions.push([p.x, p.y, 0.0]);
        mesh.normals.push([0.0, 0.0, 1.0]);
    }
    for p in points {
        mesh.positions.push([p.x, p.y, -depth]);
        mesh.normals.push([0.0, 0.0, -1.0]);
    }

    // Back face reverses the front winding.
    for t in tris.chunks(3) {
        mesh.indices
            .extend_from_slice(&[base + t[0], base + t[1], base + t[2]]);
        mesh.indices.extend_from_slice(&[
            base + ring + t[2],
            base + ring + t[1],
            base + ring + t[0],
        ]);
    }

    // Side walls get their own vertices so the normals stay flat.
    for i in 0..points.len() {
        let j = (i + 1) % points.len();
        let (a, b) = (points[i], points[j]);
        let edge = b - a;
        let len = edge.length();
        if len < f32::EPSILON {
            continue;
        }
        let normal = [edge.y / len, -edge.x / len, 0.0];
        let s = mesh.positions.len() as u32;
        mesh.positions.extend_from_slice(&[
            [a.x, a.y, 0.0],
            [b.x, b.y, 0.0],
            [b.x, b.y, -depth],
            [a.x, a.y, -depth],
        ]);
        mesh.normals.extend_from_slice(&[normal; 4]);
        mesh.indices
            .extend_from_slice(&[s, s + 1, s + 2, s + 2, s + 3, s]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn extruded_square_has_all_faces() {
        let mut mesh = MeshData::default();
        extrude_contour(&mut mesh, &unit_square(), 0.2);
        // 2 front + 2 back + 2 per side wall.
        assert_eq!(mesh.triangle_count(), 2 + 2 + 4 * 2);
        // 2 rings of 4 plus 4 wall quads of 4.
        assert_eq!(mesh.vertex_count(), 8 + 16);
    }

    #[test]
    fn extrusion_spans_exactly_the_depth() {
        let mut mesh = MeshData::default();
        extrude_contour(&mut mesh, &unit_square(), 0.2);
        let min_z = mesh.positions.iter().map(|p| p[2]).fold(f32::INFINITY, f32::min);
        let max_z = mesh
            .positions
            .iter()
            .map(|p| p[2])
            .fold(f32::NEG_INFINITY, f32::max);
        assert_eq!(max_z, 0.0);
        assert!((min_z + 0.2).abs() < 1e-6);
    }

    #[test]
    fn all_normals_are_unit_length() {
        let mut mesh = MeshData::default();
        extrude_contour(&mut mesh, &unit_square(), 0.5);
        for n in &mesh.normals {
            let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            assert!((len - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn side_normals_point_outward() {
        let mut mesh = MeshData::default();
        extrude_contour(&mut mesh, &unit_square(), 0.2);
        // Wall vertices start after the two rings; each wall's normal must
        // point away from the square's center (0.5, 0.5).
        for (p, n) in mesh.positions.iter().zip(&mesh.normals).skip(8) {
            let outward = (p[0] - 0.5) * n[0] + (p[1] - 0.5) * n[1];
            assert!(outward > 0.0);
        }
    }

    #[test]
    fn degenerate_contour_adds_nothing() {
        let mut mesh = MeshData::default();
        extrude_contour(&mut mesh, &[Vec2::ZERO, Vec2::ONE], 0.2);
        assert!(mesh.is_empty());
    }

    #[test]
    fn garbage_font_data_is_an_error() {
        let err = build_text_mesh(b"not a font", "mimic", 1.0, 0.2);
        assert!(matches!(err, Err(TextError::Face(_))));
    }
}
