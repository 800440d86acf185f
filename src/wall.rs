use crate::color::Rgb;
use crate::error::SceneError;
use crate::geometry::{LineSegment, Point};

/// A static obstacle.
///
/// Edges come from consecutive pairs of the index list: edge `j` runs from
/// `positions[edges[j]]` to `positions[edges[j + 1]]`. The list is an open
/// polyline; to close a polygon the last index must repeat the first.
/// Vertices are 3D for the renderer, the z coordinate is ignored here.
#[derive(Debug, Clone)]
pub struct Wall {
    positions: Vec<[f32; 3]>,
    colors: Vec<Rgb>,
    edges: Vec<u32>,
}

impl Wall {
    /// Create a wall, checking that every edge index names an existing vertex
    /// and that colors run parallel to positions.
    /// `id` only labels the error.
    pub fn new(
        id: usize,
        positions: Vec<[f32; 3]>,
        colors: Vec<Rgb>,
        edges: Vec<u32>,
    ) -> Result<Self, SceneError> {
        if colors.len() != positions.len() {
            return Err(SceneError::ColorCountMismatch {
                wall: id,
                positions: positions.len(),
                colors: colors.len(),
            });
        }

        if let Some(&index) = edges.iter().find(|&&i| i as usize >= positions.len()) {
            return Err(SceneError::EdgeIndexOutOfRange {
                wall: id,
                index,
                vertex_count: positions.len(),
            });
        }

        Ok(Wall {
            positions,
            colors,
            edges,
        })
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    pub fn edges(&self) -> &[u32] {
        &self.edges
    }

    /// 2D projection of vertex `index`
    fn vertex(&self, index: u32) -> Point {
        let [x, y, _] = self.positions[index as usize];
        Point::new(x, y)
    }

    /// Wall edges as 2D segments. Fewer than two indices yields nothing.
    pub fn segments(&self) -> impl Iterator<Item = LineSegment> + '_ {
        self.edges
            .windows(2)
            .map(move |pair| LineSegment::new(self.vertex(pair[0]), self.vertex(pair[1])))
    }
}

/// All obstacles of the scene. Iteration order has no effect on visibility results.
#[derive(Debug, Clone, Default)]
pub struct WallSet {
    walls: Vec<Wall>,
}

impl WallSet {
    pub fn new() -> Self {
        WallSet { walls: Vec::new() }
    }

    pub fn push(&mut self, wall: Wall) {
        self.walls.push(wall);
    }

    pub fn len(&self) -> usize {
        self.walls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Wall> {
        self.walls.iter()
    }

    /// Every edge of every wall, in wall order
    pub fn segments(&self) -> impl Iterator<Item = LineSegment> + '_ {
        self.walls.iter().flat_map(Wall::segments)
    }
}

impl FromIterator<Wall> for WallSet {
    fn from_iter<I: IntoIterator<Item = Wall>>(iter: I) -> Self {
        WallSet {
            walls: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a WallSet {
    type Item = &'a Wall;
    type IntoIter = std::slice::Iter<'a, Wall>;

    fn into_iter(self) -> Self::IntoIter {
        self.walls.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle(edges: Vec<u32>) -> Result<Wall, SceneError> {
        Wall::new(
            0,
            vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            vec![Rgb::WHITE; 3],
            edges,
        )
    }

    #[test]
    fn test_edges_form_open_polyline() {
        let wall = triangle(vec![0, 1, 2]).unwrap();
        let segments: Vec<_> = wall.segments().collect();

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0], LineSegment::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0)));
        assert_eq!(segments[1], LineSegment::new(Point::new(1.0, 0.0), Point::new(0.0, 1.0)));
    }

    #[test]
    fn test_repeated_first_index_closes_polygon() {
        let wall = triangle(vec![0, 1, 2, 0]).unwrap();
        let last = wall.segments().last().unwrap();
        assert_eq!(last, LineSegment::new(Point::new(0.0, 1.0), Point::new(0.0, 0.0)));
    }

    #[test]
    fn test_single_index_has_no_edges() {
        let wall = triangle(vec![1]).unwrap();
        assert_eq!(wall.segments().count(), 0);
        let wall = triangle(vec![]).unwrap();
        assert_eq!(wall.segments().count(), 0);
    }

    #[test]
    fn test_z_is_dropped() {
        let wall = Wall::new(
            0,
            vec![[0.0, 0.0, 5.0], [1.0, 1.0, -3.0]],
            vec![Rgb::WHITE; 2],
            vec![0, 1],
        )
        .unwrap();
        let segment = wall.segments().next().unwrap();
        assert_eq!(segment.end, Point::new(1.0, 1.0));
    }

    #[test]
    fn test_rejects_out_of_range_index() {
        match triangle(vec![0, 1, 3]) {
            Err(SceneError::EdgeIndexOutOfRange { index, vertex_count, .. }) => {
                assert_eq!(index, 3);
                assert_eq!(vertex_count, 3);
            }
            other => panic!("expected out-of-range error, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_color_mismatch() {
        let result = Wall::new(7, vec![[0.0, 0.0, 0.0]], vec![], vec![0]);
        assert!(matches!(result, Err(SceneError::ColorCountMismatch { wall: 7, .. })));
    }

    #[test]
    fn test_wall_set_collects_segments_in_order() {
        let walls: WallSet = vec![triangle(vec![0, 1]).unwrap(), triangle(vec![1, 2, 0]).unwrap()]
            .into_iter()
            .collect();
        assert_eq!(walls.len(), 2);
        assert_eq!(walls.segments().count(), 3);
    }
}
