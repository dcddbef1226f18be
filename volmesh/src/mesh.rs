//! Extracted triangle soup, statistics and OBJ export.

use std::fmt::Write as _;
use std::io::Write;

use volmesh_core::Point3;

use crate::error::Result;

/// A triangle represented by three vertices.
pub type Triangle = [Point3; 3];

/// Unindexed triangle list in physical coordinates.
///
/// Every consecutive triple of vertices is one triangle; no vertex is shared or deduplicated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleSoup {
    vertices: Vec<Point3>,
}

impl TriangleSoup {
    /// Wrap a vertex list. A trailing partial triangle is dropped.
    pub fn from_vertices(mut vertices: Vec<Point3>) -> Self {
        let whole = vertices.len() - vertices.len() % 3;
        vertices.truncate(whole);
        Self { vertices }
    }

    /// The flat vertex list, three per triangle.
    #[inline]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// Take ownership of the flat vertex list.
    pub fn into_vertices(self) -> Vec<Point3> {
        self.vertices
    }

    /// Number of triangles.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Whether there are no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterate the triangles in emission order.
    pub fn triangles(&self) -> impl ExactSizeIterator<Item = Triangle> + '_ {
        self.vertices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Count, area and bounds of the mesh.
    pub fn stats(&self) -> MeshStats {
        MeshStats::from_triangles(self.triangles())
    }

    /// Render as a Wavefront OBJ document.
    pub fn to_obj(&self) -> String {
        let mut obj = String::with_capacity(self.vertices.len() * 32);
        // Writing to a String cannot fail.
        let _ = self.write_obj_fmt(&mut obj);
        obj
    }

    /// Write a Wavefront OBJ document to `writer`.
    pub fn write_obj<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(self.to_obj().as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    fn write_obj_fmt(&self, out: &mut String) -> std::fmt::Result {
        writeln!(out, "# volmesh isosurface")?;
        writeln!(out, "# {} triangles, {} vertices", self.len(), self.vertices.len())?;
        writeln!(out)?;
        for v in &self.vertices {
            writeln!(out, "v {} {} {}", v.x, v.y, v.z)?;
        }
        writeln!(out)?;
        // OBJ indices are 1-based.
        for i in 0..self.len() {
            let base = i * 3 + 1;
            writeln!(out, "f {} {} {}", base, base + 1, base + 2)?;
        }
        Ok(())
    }
}

impl From<TriangleSoup> for Vec<Point3> {
    fn from(soup: TriangleSoup) -> Self {
        soup.into_vertices()
    }
}

/// Mesh statistics after extraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshStats {
    /// Total number of triangles.
    pub triangle_count: usize,
    /// Number of vertices (triangle_count * 3).
    pub vertex_count: usize,
    /// Sum of triangle areas.
    pub surface_area: f32,
    /// Bounding box minimum; `f32::MAX` on every axis for an empty mesh.
    pub bbox_min: Point3,
    /// Bounding box maximum; `f32::MIN` on every axis for an empty mesh.
    pub bbox_max: Point3,
}

impl MeshStats {
    /// Compute statistics from a set of triangles.
    pub fn from_triangles<I>(triangles: I) -> Self
    where
        I: IntoIterator<Item = Triangle>,
    {
        let mut triangle_count = 0;
        let mut surface_area = 0.0;
        let mut bbox_min = Point3::splat(f32::MAX);
        let mut bbox_max = Point3::splat(f32::MIN);

        for tri in triangles {
            triangle_count += 1;
            for &v in &tri {
                bbox_min = bbox_min.min(v);
                bbox_max = bbox_max.max(v);
            }
            let e1 = tri[1] - tri[0];
            let e2 = tri[2] - tri[0];
            surface_area += e1.cross(e2).length() * 0.5;
        }

        Self {
            triangle_count,
            vertex_count: triangle_count * 3,
            surface_area,
            bbox_min,
            bbox_max,
        }
    }
}
