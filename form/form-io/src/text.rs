//! Plain-text wireframe format.
//!
//! One record per line, indices 1-based in the form's own order:
//!
//! ```text
//! # comment
//! v x y z
//! l a b
//! f i j k ...
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use form_types::{Form, FormTopology, Point3, Wireframe, WireframeBuilder};
use tracing::debug;

use crate::error::{IoError, IoResult};

/// Write a form as `v`, `l` and `f` records.
///
/// # Errors
///
/// Returns [`IoError::Io`] if writing fails.
///
/// # Example
///
/// ```
/// use form_io::write_wireframe_text;
/// use form_types::{Face, Form, FormMetadata, Point3, Wireframe};
///
/// let triangle = Wireframe::from_parts(
///     vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 1.0, 0.0)],
///     &[(0, 1), (1, 2), (2, 0)],
/// );
/// let face = Face::new(vec![0, 1, 2]).unwrap();
/// let form = Form::assemble(triangle, vec![face], Vec::new(), FormMetadata::default());
///
/// let mut out = Vec::new();
/// write_wireframe_text(&form, &mut out).unwrap();
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.contains("\nl 1 2\n"));
/// assert!(text.ends_with("f 1 2 3\n"));
/// ```
pub fn write_wireframe_text<W: Write>(form: &Form, writer: &mut W) -> IoResult<()> {
    let meta = form.metadata();
    if !meta.canonical_hash.is_empty() {
        writeln!(writer, "# form {}", meta.canonical_hash)?;
    }
    if let Some(name) = &meta.common_name {
        writeln!(writer, "# {name}")?;
    }

    for p in form.points() {
        writeln!(writer, "v {} {} {}", p.x, p.y, p.z)?;
    }
    for edge in form.edges() {
        writeln!(writer, "l {} {}", edge.a() + 1, edge.b() + 1)?;
    }
    for face in form.faces() {
        let indices: Vec<String> = face.indices().iter().map(|i| (i + 1).to_string()).collect();
        writeln!(writer, "f {}", indices.join(" "))?;
    }
    Ok(())
}

/// Write a form to a text file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn save_wireframe_text<P: AsRef<Path>>(form: &Form, path: P) -> IoResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_wireframe_text(form, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Read the `v` and `l` records of a text wireframe.
///
/// Comments, blank lines and `f` records are ignored; faces are re-detected
/// from the edges downstream. Coincident vertices merge.
///
/// # Errors
///
/// Returns [`IoError::InvalidContent`] for malformed records or out-of-range
/// indices, and parse errors for bad numbers.
pub fn read_wireframe_text<R: BufRead>(reader: R) -> IoResult<Wireframe> {
    let mut builder = WireframeBuilder::new();
    let mut vertices: Vec<u32> = Vec::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let mut fields = line.split_whitespace();
        match fields.next() {
            Some("v") => {
                let coords = fields.map(str::parse::<f64>).collect::<Result<Vec<_>, _>>()?;
                let [x, y, z] = coords[..] else {
                    return Err(IoError::invalid_content(format!(
                        "line {}: vertex needs 3 coordinates",
                        line_no + 1
                    )));
                };
                vertices.push(builder.add_point(Point3::new(x, y, z)));
            }
            Some("l") => {
                let refs = fields.map(str::parse::<usize>).collect::<Result<Vec<_>, _>>()?;
                let [a, b] = refs[..] else {
                    return Err(IoError::invalid_content(format!(
                        "line {}: line record needs 2 indices",
                        line_no + 1
                    )));
                };
                let lookup = |i: usize| {
                    i.checked_sub(1).and_then(|k| vertices.get(k).copied()).ok_or_else(|| {
                        IoError::invalid_content(format!("line {}: vertex index {i} out of range", line_no + 1))
                    })
                };
                let (ia, ib) = (lookup(a)?, lookup(b)?);
                builder.add_edge(ia, ib);
            }
            _ => {}
        }
    }

    let wireframe = builder.finish();
    debug!(
        "Read text wireframe: {} points, {} edges",
        wireframe.point_count(),
        wireframe.edge_count()
    );
    Ok(wireframe)
}

/// Read a text wireframe file.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or parsed.
pub fn load_wireframe_text<P: AsRef<Path>>(path: P) -> IoResult<Wireframe> {
    read_wireframe_text(BufReader::new(File::open(path)?))
}
