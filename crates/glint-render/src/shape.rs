//! Built-in unit-space geometry.
//!
//! Every shape spans `-0.5..=0.5` on both axes and is positioned with a model
//! matrix. Vertices are `[x, y, u, v]`.

/// Angle between consecutive rim vertices of [`Shape::Circle`], in degrees.
pub const CIRCLE_ANGLE_STEP: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Unit square, drawn as two indexed triangles
    Quad,
    Triangle,
    /// Horizontal segment, drawn as a line primitive
    Line,
    /// Tick mark, drawn as two line segments
    Checkmark,
    /// Disc, drawn as a triangle fan around the centre
    Circle,
}

/// How a backend should assemble [`Shape::vertices`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    Triangles,
    TriangleFan,
    Lines,
}

const QUAD: [[f32; 4]; 4] = [
    [-0.5, -0.5, 0.0, 0.0],
    [0.5, -0.5, 1.0, 0.0],
    [0.5, 0.5, 1.0, 1.0],
    [-0.5, 0.5, 0.0, 1.0],
];
const QUAD_INDICES: [u32; 6] = [0, 1, 2, 0, 3, 2];

const TRIANGLE: [[f32; 4]; 3] = [[-0.5, -0.5, 0.0, 0.0], [0.5, -0.5, 1.0, 0.0], [0.0, 0.5, 0.5, 1.0]];

const LINE: [[f32; 4]; 2] = [[-0.5, 0.0, 0.0, 0.5], [0.5, 0.0, 1.0, 0.5]];

const CHECKMARK: [[f32; 4]; 4] = [
    [-0.5, 0.0, 0.0, 0.5],
    [0.0, 0.5, 0.5, 0.0],
    [0.0, 0.56, 0.5, 0.0],
    [0.5, -0.5, 1.0, 1.0],
];

impl Shape {
    pub const ALL: [Shape; 5] = [Shape::Quad, Shape::Triangle, Shape::Line, Shape::Checkmark, Shape::Circle];

    /// Resource id the shape is registered under.
    pub fn name(self) -> &'static str {
        match self {
            Shape::Quad => "Square",
            Shape::Triangle => "Triangle",
            Shape::Line => "Line",
            Shape::Checkmark => "Checkmark",
            Shape::Circle => "Circle",
        }
    }

    pub fn topology(self) -> Topology {
        match self {
            Shape::Quad | Shape::Triangle => Topology::Triangles,
            Shape::Line | Shape::Checkmark => Topology::Lines,
            Shape::Circle => Topology::TriangleFan,
        }
    }

    pub fn vertices(self) -> Vec<[f32; 4]> {
        match self {
            Shape::Quad => QUAD.to_vec(),
            Shape::Triangle => TRIANGLE.to_vec(),
            Shape::Line => LINE.to_vec(),
            Shape::Checkmark => CHECKMARK.to_vec(),
            Shape::Circle => circle_vertices(CIRCLE_ANGLE_STEP),
        }
    }

    /// Index buffer, for shapes drawn indexed.
    pub fn indices(self) -> Option<&'static [u32]> {
        match self {
            Shape::Quad => Some(&QUAD_INDICES),
            _ => None,
        }
    }
}

fn circle_vertices(step_degrees: f32) -> Vec<[f32; 4]> {
    let steps = (360.0 / step_degrees) as usize;
    let mut vertices = Vec::with_capacity(steps + 2);
    vertices.push([0.0, 0.0, 0.5, 0.5]);
    for i in 0..=steps {
        let angle = (i as f32 * step_degrees).to_radians();
        let (x, y) = (angle.cos() / 2.0, angle.sin() / 2.0);
        vertices.push([x, y, x + 0.5, y + 0.5]);
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_fan_is_closed() {
        let verts = Shape::Circle.vertices();
        assert_eq!(verts.len(), 182);
        let first_rim = verts[1];
        let last_rim = verts[verts.len() - 1];
        assert!((first_rim[0] - last_rim[0]).abs() < 1e-5);
        assert!((first_rim[1] - last_rim[1]).abs() < 1e-5);
    }

    #[test]
    fn test_only_quad_is_indexed() {
        for shape in Shape::ALL {
            assert_eq!(shape.indices().is_some(), shape == Shape::Quad);
        }
    }
}
