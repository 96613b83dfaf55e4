//! JSON scene documents.
//!
//! A scene document stores a wireframe as a flat list of segments, each
//! carrying both endpoint coordinates and a textual key. Point keys are the
//! coordinates rounded to five decimals and joined by `|`; a segment key is
//! its two point keys sorted and joined by `->`. Points are recovered on
//! import by deduplicating point keys.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use form_symmetry::SymmetrySettings;
use form_types::{Form, FormTopology, Point3, Wireframe, WireframeBuilder};
use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{IoError, IoResult};

/// Document format version written by this crate.
pub const DOCUMENT_VERSION: &str = "1.0.0";

/// Source tag written into document metadata.
pub const DOCUMENT_SOURCE: &str = "form-io";

/// Document provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMeta {
    /// Format version.
    pub version: String,
    /// Creation timestamp as supplied by the writer.
    pub created_at: String,
    /// Producer of the document.
    pub source: String,
}

/// Display and symmetry settings stored with a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SceneSettings {
    /// Grid subdivisions shown by the editor.
    pub grid_divisions: u32,
    /// Draw points.
    pub show_points: bool,
    /// Draw lines.
    pub show_lines: bool,
    /// Draw curved lines.
    pub use_curved_lines: bool,
    /// Draw curved surfaces.
    pub use_curved_surfaces: bool,
    /// Shade closed forms.
    pub show_closed_forms: bool,
    /// Close faces automatically while editing.
    pub auto_close_faces: bool,
    /// Highlight regular polygons.
    pub use_regular_highlight: bool,
    /// Symmetry applied by the editor.
    pub symmetry: SymmetrySettings,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            grid_divisions: 1,
            show_points: true,
            show_lines: true,
            use_curved_lines: false,
            use_curved_surfaces: false,
            show_closed_forms: true,
            auto_close_faces: false,
            use_regular_highlight: false,
            symmetry: SymmetrySettings::default(),
        }
    }
}

/// Where a segment came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentOrigin {
    /// Converted from an external mesh.
    #[default]
    Import,
    /// Produced by the generation pipeline.
    Generated,
    /// Drawn by hand.
    Manual,
}

/// One line segment of a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// First endpoint.
    pub start: [f64; 3],
    /// Second endpoint.
    pub end: [f64; 3],
    /// Canonical segment key.
    pub key: String,
    /// Provenance.
    #[serde(default)]
    pub origin: SegmentOrigin,
}

impl Segment {
    /// Create a segment, computing its key.
    #[must_use]
    pub fn new(start: &Point3<f64>, end: &Point3<f64>, origin: SegmentOrigin) -> Self {
        Self {
            start: [start.x, start.y, start.z],
            end: [end.x, end.y, end.z],
            key: segment_key(start, end),
            origin,
        }
    }

    /// First endpoint as a point.
    #[must_use]
    pub fn start_point(&self) -> Point3<f64> {
        Point3::from(self.start)
    }

    /// Second endpoint as a point.
    #[must_use]
    pub fn end_point(&self) -> Point3<f64> {
        Point3::from(self.end)
    }
}

/// A saved scene.
///
/// Manual and hidden face/volume lists belong to the interactive editor;
/// they are carried through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneDocument {
    /// Provenance.
    pub meta: DocumentMeta,
    /// Scene settings.
    #[serde(default)]
    pub settings: SceneSettings,
    /// Line segments.
    pub segments: Vec<Segment>,
    /// Faces added by hand.
    #[serde(default)]
    pub manual_faces: Vec<serde_json::Value>,
    /// Volumes added by hand.
    #[serde(default)]
    pub manual_volumes: Vec<serde_json::Value>,
    /// Faces hidden by the user.
    #[serde(default)]
    pub hidden_faces: Vec<serde_json::Value>,
    /// Volumes hidden by the user.
    #[serde(default)]
    pub hidden_volumes: Vec<serde_json::Value>,
}

impl SceneDocument {
    /// Create an empty document.
    #[must_use]
    pub fn new(settings: SceneSettings, created_at: impl Into<String>) -> Self {
        Self {
            meta: DocumentMeta {
                version: DOCUMENT_VERSION.to_string(),
                created_at: created_at.into(),
                source: DOCUMENT_SOURCE.to_string(),
            },
            settings,
            segments: Vec::new(),
            manual_faces: Vec::new(),
            manual_volumes: Vec::new(),
            hidden_faces: Vec::new(),
            hidden_volumes: Vec::new(),
        }
    }

    /// Serialize as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Json`] if serialization fails.
    pub fn to_json(&self) -> IoResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a document from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Json`] for malformed JSON and
    /// [`IoError::UnsupportedVersion`] for documents of another major
    /// version.
    pub fn from_json(json: &str) -> IoResult<Self> {
        let document: Self = serde_json::from_str(json)?;
        document.check_version()?;
        Ok(document)
    }

    fn check_version(&self) -> IoResult<()> {
        let major = DOCUMENT_VERSION.split('.').next().unwrap_or_default();
        if self.meta.version.split('.').next() == Some(major) {
            Ok(())
        } else {
            Err(IoError::UnsupportedVersion {
                version: self.meta.version.clone(),
            })
        }
    }
}

/// Format one coordinate with the sign of rounded zeros dropped.
fn unsigned_coord(v: f64) -> String {
    let s = format!("{v:.5}");
    if s.trim_start_matches('-').bytes().all(|b| b == b'0' || b == b'.') {
        s.trim_start_matches('-').to_string()
    } else {
        s
    }
}

/// Textual point key, `"x|y|z"` with five decimals.
///
/// Negative values that round to zero keep their sign (`"-0.00000"`), the
/// same text the scene editor writes.
///
/// # Example
///
/// ```
/// use form_io::point_key;
/// use form_types::Point3;
///
/// assert_eq!(point_key(&Point3::new(0.5, -1.0, 0.0)), "0.50000|-1.00000|0.00000");
/// assert_eq!(point_key(&Point3::new(-0.0, -0.000001, 0.0)), "-0.00000|-0.00000|0.00000");
/// ```
#[must_use]
pub fn point_key(p: &Point3<f64>) -> String {
    format!("{:.5}|{:.5}|{:.5}", p.x, p.y, p.z)
}

/// Key used to merge imported endpoints; `-0.00000` and `0.00000` match.
fn merge_key(p: &Point3<f64>) -> String {
    format!("{}|{}|{}", unsigned_coord(p.x), unsigned_coord(p.y), unsigned_coord(p.z))
}

/// Textual segment key: both point keys sorted and joined by `->`.
#[must_use]
pub fn segment_key(a: &Point3<f64>, b: &Point3<f64>) -> String {
    let (ka, kb) = (point_key(a), point_key(b));
    if ka <= kb { format!("{ka}->{kb}") } else { format!("{kb}->{ka}") }
}

/// Convert triangles of an external mesh into unique segments.
///
/// Each triangle edge becomes one segment, deduplicated by its unordered
/// vertex index pair, in first-seen order. Triangles referencing missing
/// vertices are skipped.
///
/// # Example
///
/// ```
/// use form_io::{SegmentOrigin, segments_from_triangles};
/// use form_types::Point3;
///
/// let vertices = [
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(1.0, 1.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ];
/// // A square as two triangles shares the diagonal
/// let segments = segments_from_triangles(&vertices, &[[0, 1, 2], [0, 2, 3]]);
/// assert_eq!(segments.len(), 5);
/// assert!(segments.iter().all(|s| s.origin == SegmentOrigin::Import));
/// ```
#[must_use]
pub fn segments_from_triangles(vertices: &[Point3<f64>], triangles: &[[u32; 3]]) -> Vec<Segment> {
    let mut seen: HashSet<(u32, u32)> = HashSet::new();
    let mut segments = Vec::new();

    for triangle in triangles {
        if triangle.iter().any(|&i| i as usize >= vertices.len()) {
            debug!("Skipping triangle {triangle:?} with missing vertices");
            continue;
        }
        for k in 0..3 {
            let (a, b) = (triangle[k], triangle[(k + 1) % 3]);
            if a == b || !seen.insert((a.min(b), a.max(b))) {
                continue;
            }
            segments.push(Segment::new(
                &vertices[a as usize],
                &vertices[b as usize],
                SegmentOrigin::Import,
            ));
        }
    }
    segments
}

/// Build a scene document holding a form's edges as generated segments.
#[must_use]
pub fn document_from_form(form: &Form, settings: SceneSettings, created_at: impl Into<String>) -> SceneDocument {
    let mut document = SceneDocument::new(settings, created_at);
    document.segments = form
        .edges()
        .iter()
        .filter_map(|edge| {
            let a = form.point(edge.a())?;
            let b = form.point(edge.b())?;
            Some(Segment::new(a, b, SegmentOrigin::Generated))
        })
        .collect();
    document
}

/// Rebuild a wireframe from a document's segments.
///
/// Endpoints whose point keys agree up to the sign of zero become one
/// point; zero-length and repeated segments are dropped.
#[must_use]
pub fn wireframe_from_document(document: &SceneDocument) -> Wireframe {
    let mut builder = WireframeBuilder::new();
    let mut indices: HashMap<String, u32> = HashMap::new();

    let mut index_of = |builder: &mut WireframeBuilder, p: Point3<f64>| -> u32 {
        *indices
            .entry(merge_key(&p))
            .or_insert_with(|| builder.add_point(p))
    };

    for segment in &document.segments {
        let a = index_of(&mut builder, segment.start_point());
        let b = index_of(&mut builder, segment.end_point());
        builder.add_edge(a, b);
    }

    let wireframe = builder.finish();
    debug!(
        "Imported {} segments as {} points, {} edges",
        document.segments.len(),
        wireframe.point_count(),
        wireframe.edge_count()
    );
    wireframe
}

/// Write a document to a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn save_document<P: AsRef<Path>>(document: &SceneDocument, path: P) -> IoResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, document)?;
    writer.flush()?;
    info!("Saved {} segments to {}", document.segments.len(), path.display());
    Ok(())
}

/// Read a document from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid JSON, or has
/// an unsupported version.
pub fn load_document<P: AsRef<Path>>(path: P) -> IoResult<SceneDocument> {
    let file = File::open(path)?;
    let document: SceneDocument = serde_json::from_reader(BufReader::new(file))?;
    document.check_version()?;
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_match_exporter_format() {
        let a = Point3::new(1.0, 0.0, 0.0);
        let b = Point3::new(0.0, 1.0, 0.0);
        assert_eq!(point_key(&a), "1.00000|0.00000|0.00000");
        assert_eq!(segment_key(&a, &b), "0.00000|1.00000|0.00000->1.00000|0.00000|0.00000");
        assert_eq!(segment_key(&a, &b), segment_key(&b, &a));
        assert_eq!(point_key(&Point3::new(-0.0, -0.000001, -0.25)), "-0.00000|-0.00000|-0.25000");
    }

    #[test]
    fn signed_zero_endpoints_merge_on_import() {
        let mut document = SceneDocument::new(SceneSettings::default(), "");
        document.segments = vec![
            Segment::new(&Point3::new(0.0, 0.0, 0.0), &Point3::new(1.0, 0.0, 0.0), SegmentOrigin::Import),
            Segment::new(&Point3::new(-0.0, 0.0, -0.000001), &Point3::new(0.0, 1.0, 0.0), SegmentOrigin::Import),
        ];
        assert_ne!(document.segments[0].key, document.segments[1].key);
        assert!(document.segments[1].key.starts_with("-0.00000|0.00000|-0.00000->"));

        let wireframe = wireframe_from_document(&document);
        assert_eq!(wireframe.point_count(), 3);
        assert_eq!(wireframe.edge_count(), 2);
        assert_eq!(unsigned_coord(-0.0), "0.00000");
        assert_eq!(unsigned_coord(-0.25), "-0.25000");
    }

    #[test]
    fn default_settings_json() {
        let document = SceneDocument::new(SceneSettings::default(), "2026-01-01T00:00:00");
        let json = document.to_json().unwrap();
        for key in [
            "\"createdAt\"",
            "\"gridDivisions\": 1",
            "\"showClosedForms\": true",
            "\"manualFaces\"",
            "\"hiddenVolumes\"",
            "\"angleDeg\"",
        ] {
            assert!(json.contains(key), "missing {key}");
        }
        assert_eq!(SceneDocument::from_json(&json).unwrap(), document);
    }

    #[test]
    fn missing_optional_sections_default() {
        let json = r#"{
            "meta": {"version": "1.2.0", "createdAt": "", "source": "editor"},
            "segments": [{"start": [0, 0, 0], "end": [1, 0, 0], "key": "k"}]
        }"#;
        let document = SceneDocument::from_json(json).unwrap();
        assert_eq!(document.settings, SceneSettings::default());
        assert_eq!(document.segments[0].origin, SegmentOrigin::Import);
        assert!(document.manual_faces.is_empty());
    }

    #[test]
    fn other_major_version_rejected() {
        let json = r#"{"meta": {"version": "2.0.0", "createdAt": "", "source": ""}, "segments": []}"#;
        assert!(matches!(
            SceneDocument::from_json(json),
            Err(IoError::UnsupportedVersion { .. })
        ));
        assert!(matches!(SceneDocument::from_json("{"), Err(IoError::Json(_))));
    }

    #[test]
    fn triangles_with_missing_vertices_skipped() {
        let vertices = [Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)];
        assert!(segments_from_triangles(&vertices, &[[0, 1, 2]]).is_empty());
    }

    #[test]
    fn import_merges_shared_endpoints() {
        let mut document = SceneDocument::new(SceneSettings::default(), "");
        let o = Point3::new(0.0, 0.0, 0.0);
        let x = Point3::new(1.0, 0.0, 0.0);
        let y = Point3::new(0.0, 1.0, 0.0);
        document.segments = vec![
            Segment::new(&o, &x, SegmentOrigin::Manual),
            Segment::new(&x, &o, SegmentOrigin::Manual),
            Segment::new(&o, &y, SegmentOrigin::Manual),
            Segment::new(&y, &y, SegmentOrigin::Manual),
        ];
        let wireframe = wireframe_from_document(&document);
        assert_eq!(wireframe.point_count(), 3);
        assert_eq!(wireframe.edge_count(), 2);
    }
}
