//! Shared helpers for the boxnav demos: a sample mesh and a text renderer.

use boxnav_core::{BoxId, Mesh, MeshError, Point, Rect};

/// Width of the sample level, in cells.
pub const WIDTH: i32 = 40;
/// Height of the sample level, in cells.
pub const HEIGHT: i32 = 16;

/// A small level: two rooms on a corridor, and a vault reached through a
/// narrow hall.
///
/// ```text
///  y 0..6    [ room A 0..10 ]               [ room B 28..40 ]
///  y 6..8    [ corridor 0..40                               ]
///  y 8..16       [ hall 4..8 ]
///  y 10..16                  [ vault 8..24 ]
/// ```
pub fn sample_mesh() -> Result<Mesh, MeshError> {
    let boxes = vec![
        Rect::new(0.0, 10.0, 0.0, 6.0),   // 0 room A
        Rect::new(28.0, 40.0, 0.0, 6.0),  // 1 room B
        Rect::new(0.0, 40.0, 6.0, 8.0),   // 2 corridor
        Rect::new(4.0, 8.0, 8.0, 16.0),   // 3 hall
        Rect::new(8.0, 24.0, 10.0, 16.0), // 4 vault
    ];
    Mesh::from_pairs(boxes, &[(0, 2), (1, 2), (2, 3), (3, 4)])
}

/// Render the mesh as text: `#` outside the mesh, `.` unexplored box,
/// `,` explored box, `*` path vertex.
pub fn render(mesh: &Mesh, explored: &[BoxId], path: &[Point]) -> String {
    let mut out = String::with_capacity(((WIDTH + 1) * HEIGHT) as usize);
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            let center = Point::new(x as f64 + 0.5, y as f64 + 0.5);
            let on_path = path
                .iter()
                .any(|p| p.x.floor() as i32 == x && p.y.floor() as i32 == y);
            let ch = if on_path {
                '*'
            } else {
                match mesh.locate(center) {
                    None => '#',
                    Some(id) if explored.contains(&id) => ',',
                    Some(_) => '.',
                }
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}
