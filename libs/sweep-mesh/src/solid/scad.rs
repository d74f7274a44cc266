//! # OpenSCAD Output
//!
//! Renders a [`Solid`] tree as OpenSCAD source, one statement per line
//! with two-space indentation.

use super::Solid;

const HEADER: &str = "// Generated solid description. Edit the generator, not this file.\n";

impl Solid {
    /// Renders the tree as an OpenSCAD program.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sweep_mesh::Solid;
    ///
    /// let part = Solid::cube([2.0, 2.0, 2.0], true) - Solid::sphere(1.2).with_segments(16);
    /// let scad = part.to_scad();
    /// assert!(scad.contains("difference() {"));
    /// assert!(scad.contains("  cube([2, 2, 2], center=true);"));
    /// assert!(scad.contains("  sphere(r=1.2, $fn=16);"));
    /// ```
    pub fn to_scad(&self) -> String {
        let mut out = String::from(HEADER);
        write_node(&mut out, self, 0);
        out
    }
}

fn write_node(out: &mut String, solid: &Solid, depth: usize) {
    let pad = "  ".repeat(depth);
    match solid {
        Solid::Polyhedron { points, faces } => {
            out.push_str(&format!(
                "{pad}polyhedron(points=[{}], faces=[{}], convexity=10);\n",
                points.iter().map(|p| vec3(*p)).collect::<Vec<_>>().join(","),
                faces
                    .iter()
                    .map(|f| format!("[{}]", f.iter().map(u32::to_string).collect::<Vec<_>>().join(",")))
                    .collect::<Vec<_>>()
                    .join(",")
            ));
        }
        Solid::Cube { size, center } => {
            out.push_str(&format!("{pad}cube({}, center={center});\n", vec3(*size)));
        }
        Solid::Sphere { radius, segments } => {
            out.push_str(&format!("{pad}sphere(r={radius}, $fn={segments});\n"));
        }
        Solid::Cylinder {
            height,
            r1,
            r2,
            center,
            segments,
        } => {
            out.push_str(&format!(
                "{pad}cylinder(h={height}, r1={r1}, r2={r2}, center={center}, $fn={segments});\n"
            ));
        }
        Solid::Polygon { points } => {
            out.push_str(&format!(
                "{pad}polygon(points=[{}]);\n",
                points
                    .iter()
                    .map(|p| format!("[{}, {}]", p[0], p[1]))
                    .collect::<Vec<_>>()
                    .join(",")
            ));
        }
        Solid::LinearExtrude {
            height,
            center,
            child,
        } => write_block(out, &format!("linear_extrude(height={height}, center={center})"), [child.as_ref()], depth),
        Solid::Translate { offset, child } => {
            write_block(out, &format!("translate({})", vec3(*offset)), [child.as_ref()], depth)
        }
        Solid::Rotate { angles, child } => {
            write_block(out, &format!("rotate({})", vec3(*angles)), [child.as_ref()], depth)
        }
        Solid::Mirror { normal, child } => {
            write_block(out, &format!("mirror({})", vec3(*normal)), [child.as_ref()], depth)
        }
        Solid::Scale { factors, child } => {
            write_block(out, &format!("scale({})", vec3(*factors)), [child.as_ref()], depth)
        }
        Solid::Color { rgba, child } => write_block(
            out,
            &format!("color([{}, {}, {}, {}])", rgba[0], rgba[1], rgba[2], rgba[3]),
            [child.as_ref()],
            depth,
        ),
        Solid::Union { children } => write_block(out, "union()", children, depth),
        Solid::Difference { children } => write_block(out, "difference()", children, depth),
        Solid::Intersection { children } => write_block(out, "intersection()", children, depth),
        Solid::Hull { children } => write_block(out, "hull()", children, depth),
        Solid::Empty => {}
    }
}

fn write_block<'a>(
    out: &mut String,
    head: &str,
    children: impl IntoIterator<Item = &'a Solid>,
    depth: usize,
) {
    let pad = "  ".repeat(depth);
    out.push_str(&format!("{pad}{head} {{\n"));
    for child in children {
        write_node(out, child, depth + 1);
    }
    out.push_str(&format!("{pad}}}\n"));
}

fn vec3(v: [f64; 3]) -> String {
    format!("[{}, {}, {}]", v[0], v[1], v[2])
}
