//! Text front end: draws frames as a character scatter plot.

use std::io::Write;

use crate::error::Result;
use crate::session::{Frame, Frontend};

/// Vertical distance between two rows of cell centers.
const ROW_HEIGHT: f64 = 0.866_025_403_784_438_6;

const TILE: char = '#';
const ORIGIN: char = 'o';
const PLAYER: char = '@';

/// Character cell of a point. Neighboring cells are two columns apart
/// horizontally, and one row and column apart diagonally.
fn cell((x, y): (f64, f64)) -> (i64, i64) {
    ((-y / ROW_HEIGHT).round() as i64, (x * 2.0).round() as i64)
}

/// Draws the frame as lines of text, with a one-line header.
pub fn render_ascii(frame: &Frame) -> String {
    let player = cell(frame.player);
    let tiles: Vec<_> = frame.tiles.iter().copied().map(cell).collect();

    let (mut top, mut left, mut bottom, mut right) = (player.0, player.1, player.0, player.1);
    for &(row, col) in &tiles {
        top = top.min(row);
        bottom = bottom.max(row);
        left = left.min(col);
        right = right.max(col);
    }

    let width = (right - left + 1) as usize;
    let height = (bottom - top + 1) as usize;
    let mut grid = vec![vec![' '; width]; height];
    let mut put = |(row, col): (i64, i64), c: char| {
        grid[(row - top) as usize][(col - left) as usize] = c;
    };
    for &t in &tiles {
        put(t, if t == (0, 0) { ORIGIN } else { TILE });
    }
    put(player, PLAYER);

    let mut out = match frame.progress {
        Some((done, total)) => format!("step {done}/{total}  "),
        None => String::new(),
    };
    out.push_str(&format!(
        "distance {}  tiles {}\n",
        frame.distance,
        frame.tiles.len()
    ));
    for row in grid {
        let line: String = row.into_iter().collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Writes frames to a terminal, clearing it with ANSI escapes.
pub struct TerminalFrontend<W: Write> {
    out: W,
}

impl<W: Write> TerminalFrontend<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Frontend for TerminalFrontend<W> {
    fn render(&mut self, frame: &Frame) -> Result<()> {
        self.out.write_all(render_ascii(frame).as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    fn message(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        write!(self.out, "\x1b[2J\x1b[H")?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Board, Direction};

    #[test]
    fn fresh_board() {
        let frame = Frame::capture(&Board::new());
        assert_eq!(render_ascii(&frame), "distance 0  tiles 1\n@\n");
    }

    #[test]
    fn row_of_tiles() {
        let mut board = Board::new();
        board.apply(Direction::D).apply(Direction::D);
        let frame = Frame::capture(&board);
        assert_eq!(render_ascii(&frame), "distance 2  tiles 3\no # @\n");
    }

    #[test]
    fn rows_are_offset() {
        let mut board = Board::new();
        // `e` moves up and to the right.
        board.apply(Direction::E);
        let frame = Frame::capture(&board).with_progress(1, 1);
        assert_eq!(render_ascii(&frame), "step 1/1  distance 1  tiles 2\n @\no\n");
    }

    #[test]
    fn writes_to_the_output() {
        let mut frontend = TerminalFrontend::new(Vec::new());
        frontend.render(&Frame::capture(&Board::new())).unwrap();
        frontend.message("bye").unwrap();
        frontend.clear().unwrap();
        let text = String::from_utf8(frontend.out).unwrap();
        assert!(text.starts_with("distance 0"));
        assert!(text.contains("bye\n"));
        assert!(text.ends_with("\x1b[2J\x1b[H"));
    }
}
